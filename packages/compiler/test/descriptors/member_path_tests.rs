use mapforge_compiler::descriptors::{
    build_getter_path, build_setter_path, MemberPath, TargetLeaf, TargetMemberPath,
};
use mapforge_compiler::symbols::{Member, TypeRef};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_summarize_nullability_eagerly() {
        let safe = MemberPath::new([
            Member::new("a", TypeRef::new("A")),
            Member::new("b", TypeRef::new("B")),
        ]);
        assert!(!safe.any_nullable());

        let risky = MemberPath::new([
            Member::new("a", TypeRef::nullable("A")),
            Member::new("b", TypeRef::new("B")),
        ]);
        assert!(risky.any_nullable());
    }

    #[test]
    fn should_expose_leaf_type_and_display_name() {
        let path = MemberPath::new([
            Member::new("parent", TypeRef::new("Parent")),
            Member::new("child", TypeRef::nullable("Child")),
        ]);
        assert_eq!(path.leaf_type(), &TypeRef::nullable("Child"));
        assert_eq!(path.display_name(), "parent.child");
    }

    #[test]
    fn should_render_plain_access_chain() {
        let path = MemberPath::new([
            Member::new("a", TypeRef::nullable("A")),
            Member::new("b", TypeRef::new("B")),
        ]);
        let getter = build_getter_path(&path, false);
        assert_eq!(getter.access_string("source"), "source.a.b");
    }

    #[test]
    fn should_render_null_conditional_access_after_nullable_segment() {
        let path = MemberPath::new([
            Member::new("a", TypeRef::nullable("A")),
            Member::new("b", TypeRef::new("B")),
            Member::new("c", TypeRef::new("C")),
        ]);
        let getter = build_getter_path(&path, true);
        assert_eq!(getter.access_string("source"), "source.a?.b.c");
    }

    #[test]
    fn should_classify_ctor_bound_target_leaf() {
        let target = TargetMemberPath::new(MemberPath::new([Member::ctor_param(
            "name",
            TypeRef::new("string"),
        )]));
        assert_eq!(target.leaf_kind(), TargetLeaf::CtorParam);
    }

    #[test]
    fn should_classify_settable_target_leaves() {
        let settable = TargetMemberPath::new(MemberPath::new([Member::new(
            "name",
            TypeRef::new("string"),
        )]));
        assert_eq!(settable.leaf_kind(), TargetLeaf::Settable);

        let init_only = TargetMemberPath::new(MemberPath::new([Member::init_only(
            "name",
            TypeRef::new("string"),
        )]));
        assert_eq!(init_only.leaf_kind(), TargetLeaf::Settable);
    }

    #[test]
    fn should_carry_leaf_kind_through_setter_path() {
        let target = TargetMemberPath::new(MemberPath::new([Member::ctor_param(
            "name",
            TypeRef::new("string"),
        )]));
        let setter = build_setter_path(&target);
        assert_eq!(setter.leaf_kind(), TargetLeaf::CtorParam);
    }
}

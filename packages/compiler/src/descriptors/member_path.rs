//! Member Paths
//!
//! Ordered chains of member accesses from a mapping's root to a leaf value.
//! Each segment records whether it may be null, and the path caches an
//! "any segment nullable" summary so the decision logic never re-walks the
//! chain. Target paths additionally classify their leaf as constructor-bound
//! or conventionally settable.

use smallvec::SmallVec;
use std::fmt;

use crate::symbols::{Member, MemberAccess, TypeRef};

/// One access step in a member path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub member: Member,
}

impl PathSegment {
    pub fn new(member: Member) -> Self {
        PathSegment { member }
    }

    pub fn name(&self) -> &str {
        &self.member.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.member.ty
    }

    pub fn nullable(&self) -> bool {
        self.member.ty.nullable
    }
}

/// An ordered, non-empty chain of member accesses from a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPath {
    segments: SmallVec<[PathSegment; 4]>,
    any_nullable: bool,
}

impl MemberPath {
    pub fn new(members: impl IntoIterator<Item = Member>) -> Self {
        let segments: SmallVec<[PathSegment; 4]> =
            members.into_iter().map(PathSegment::new).collect();
        debug_assert!(!segments.is_empty(), "member path requires a leaf");
        let any_nullable = segments.iter().any(PathSegment::nullable);
        MemberPath {
            segments,
            any_nullable,
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Whether any segment of the path may be null.
    pub fn any_nullable(&self) -> bool {
        self.any_nullable
    }

    pub fn leaf(&self) -> &PathSegment {
        self.segments.last().expect("member path requires a leaf")
    }

    pub fn leaf_type(&self) -> &TypeRef {
        self.leaf().ty()
    }

    /// Dotted display name used in diagnostics.
    pub fn display_name(&self) -> String {
        self.segments
            .iter()
            .map(PathSegment::name)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for MemberPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Leaf kind of a target member path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLeaf {
    /// Settable only at construction time.
    CtorParam,
    /// Settable after construction (including init-only members).
    Settable,
}

/// A member path whose leaf receives the mapped value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetMemberPath {
    path: MemberPath,
}

impl TargetMemberPath {
    pub fn new(path: MemberPath) -> Self {
        TargetMemberPath { path }
    }

    pub fn path(&self) -> &MemberPath {
        &self.path
    }

    pub fn leaf_type(&self) -> &TypeRef {
        self.path.leaf_type()
    }

    pub fn display_name(&self) -> String {
        self.path.display_name()
    }

    pub fn leaf_kind(&self) -> TargetLeaf {
        if self
            .path
            .leaf()
            .member
            .access
            .contains(MemberAccess::CTOR_PARAM)
        {
            TargetLeaf::CtorParam
        } else {
            TargetLeaf::Settable
        }
    }
}

/// A resolved, null-aware getter chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetterPath {
    pub path: MemberPath,
    pub null_conditional: bool,
}

impl GetterPath {
    /// Render the access chain from a root accessor. With null-conditional
    /// access, any nullable intermediate short-circuits the whole read.
    pub fn access_string(&self, root: &str) -> String {
        let mut access = String::from(root);
        let mut prev_nullable = false;
        for segment in self.path.segments() {
            if self.null_conditional && prev_nullable {
                access.push_str("?.");
            } else {
                access.push('.');
            }
            access.push_str(segment.name());
            prev_nullable = segment.nullable();
        }
        access
    }
}

/// A resolved setter chain targeting the path's leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetterPath {
    pub path: TargetMemberPath,
}

impl SetterPath {
    pub fn leaf_kind(&self) -> TargetLeaf {
        self.path.leaf_kind()
    }
}

/// Resolve a source path into a getter. Accessor resolution itself cannot
/// fail here; any upstream failure is reported before paths are built.
pub fn build_getter_path(path: &MemberPath, null_conditional: bool) -> GetterPath {
    GetterPath {
        path: path.clone(),
        null_conditional,
    }
}

/// Resolve a target path into a setter.
pub fn build_setter_path(path: &TargetMemberPath) -> SetterPath {
    SetterPath { path: path.clone() }
}

//! Mapping Descriptors
//!
//! The mapping data model and the member-mapping resolver built on it.

pub mod assignment;
pub mod mapping;
pub mod member_mapping;
pub mod member_path;
pub mod registry;
pub mod source_value;

pub use assignment::MemberAssignment;
pub use mapping::{DelegateMapping, MappingId, MappingKey};
pub use member_mapping::{
    try_build, try_build_assignment, try_build_container_assignment, BuildCtx, BuildStyle,
    MemberMappingInfo, ResolveError,
};
pub use member_path::{
    build_getter_path, build_setter_path, GetterPath, MemberPath, PathSegment, SetterPath,
    TargetLeaf, TargetMemberPath,
};
pub use registry::MappingRegistry;
pub use source_value::{default_literal, NullFallback, SourceValue};

//! Member Assignments
//!
//! The record a resolved member pair produces: the target setter path plus
//! the source value description, read-only input to a later emission pass.

use super::member_path::SetterPath;
use super::source_value::SourceValue;

#[derive(Debug, Clone, PartialEq)]
pub struct MemberAssignment {
    pub setter: SetterPath,
    pub value: SourceValue,
}

impl MemberAssignment {
    pub fn new(setter: SetterPath, value: SourceValue) -> Self {
        MemberAssignment { setter, value }
    }
}

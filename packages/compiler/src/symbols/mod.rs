//! Symbol Model
//!
//! Type references and member descriptions the mapping descriptors are
//! built from. A `TypeRef` is a named type plus its nullability; a `Member`
//! is a named, typed slot on an object graph together with its access
//! capabilities.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a named type, tracking whether the reference is nullable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    pub nullable: bool,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        TypeRef {
            name: name.into(),
            nullable: false,
        }
    }

    pub fn nullable(name: impl Into<String>) -> Self {
        TypeRef {
            name: name.into(),
            nullable: true,
        }
    }

    /// The same type with any nullable wrapper stripped.
    pub fn non_nullable(&self) -> TypeRef {
        TypeRef {
            name: self.name.clone(),
            nullable: false,
        }
    }

    /// Whether two references name the same type, ignoring nullability.
    pub fn same_erased(&self, other: &TypeRef) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "{}?", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

bitflags! {
    /// Access capabilities of a member on its declaring type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MemberAccess: u32 {
        const READABLE = 0b0001;
        const WRITABLE = 0b0010;
        /// Settable during object initialization only.
        const INIT_ONLY = 0b0100;
        /// Bound to a constructor parameter.
        const CTOR_PARAM = 0b1000;
    }
}

/// A named, typed member of an object graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    pub name: String,
    pub ty: TypeRef,
    pub access: MemberAccess,
}

impl Member {
    /// A conventional readable and writable member.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Member {
            name: name.into(),
            ty,
            access: MemberAccess::READABLE | MemberAccess::WRITABLE,
        }
    }

    /// A member settable only at construction time.
    pub fn ctor_param(name: impl Into<String>, ty: TypeRef) -> Self {
        Member {
            name: name.into(),
            ty,
            access: MemberAccess::READABLE | MemberAccess::CTOR_PARAM,
        }
    }

    /// A member settable only during object initialization.
    pub fn init_only(name: impl Into<String>, ty: TypeRef) -> Self {
        Member {
            name: name.into(),
            ty,
            access: MemberAccess::READABLE | MemberAccess::INIT_ONLY,
        }
    }

    pub fn with_access(mut self, access: MemberAccess) -> Self {
        self.access = access;
        self
    }
}

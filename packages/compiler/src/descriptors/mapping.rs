//! Delegate Mappings
//!
//! A delegate mapping is an already-resolved conversion between two types,
//! reused to convert one member's value. Mappings live in the registry's
//! arena and are addressed by `MappingId`; comparing ids is the identity
//! comparison the loop validation relies on.

use serde::Serialize;

use crate::symbols::TypeRef;

/// Arena-assigned handle identifying one delegate mapping. Two distinct
/// mappings between the same type pair get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MappingId(pub usize);

impl MappingId {
    pub fn new(id: usize) -> Self {
        MappingId(id)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

/// Registry key for a (source type, target type) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MappingKey {
    pub source: TypeRef,
    pub target: TypeRef,
}

impl MappingKey {
    pub fn new(source: TypeRef, target: TypeRef) -> Self {
        MappingKey { source, target }
    }

    /// The key with nullable wrappers stripped from both sides. Loose
    /// lookup treats a type and its nullable-wrapped form as the same key.
    pub fn loosened(&self) -> MappingKey {
        MappingKey {
            source: self.source.non_nullable(),
            target: self.target.non_nullable(),
        }
    }
}

/// An already-resolved mapping between two types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegateMapping {
    pub id: MappingId,
    pub source_type: TypeRef,
    pub target_type: TypeRef,
    /// Auto-generated identity pass-through rather than an authored mapping.
    pub synthetic: bool,
}

impl DelegateMapping {
    pub fn source_nullable(&self) -> bool {
        self.source_type.nullable
    }
}

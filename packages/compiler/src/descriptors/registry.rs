//! Mapping Registry
//!
//! Arena of delegate mappings plus the key index used to resolve them.
//! Lookup is nullable-tolerant: an exact key match wins, otherwise the key
//! with nullable wrappers stripped is matched against the stored keys'
//! stripped forms. When nothing is registered and the two types agree
//! modulo nullability, a synthetic identity mapping is built lazily.
//!
//! Building a mapping for a complex type can re-enter member resolution
//! for that type's own members. `start_build` registers the in-progress
//! mapping before any recursion, so a cyclic member graph resolves to the
//! in-progress id instead of recursing unboundedly; the loop validation in
//! the member resolver detects exactly that id.

use indexmap::IndexMap;

use super::mapping::{DelegateMapping, MappingId, MappingKey};
use crate::symbols::TypeRef;

#[derive(Debug, Default)]
pub struct MappingRegistry {
    arena: Vec<DelegateMapping>,
    by_key: IndexMap<MappingKey, MappingId>,
    in_flight: Vec<MappingId>,
}

impl MappingRegistry {
    pub fn new() -> Self {
        MappingRegistry::default()
    }

    /// Register an authored mapping between two types.
    pub fn register(&mut self, source: TypeRef, target: TypeRef) -> MappingId {
        self.insert(source, target, false)
    }

    /// Register an in-progress mapping before recursing into member
    /// resolution for its body. Lookups during the recursion resolve to
    /// the returned id.
    pub fn start_build(&mut self, key: MappingKey) -> MappingId {
        let id = self.insert(key.source, key.target, false);
        self.in_flight.push(id);
        id
    }

    /// Mark an in-progress mapping as completely built.
    pub fn finish_build(&mut self, id: MappingId) {
        self.in_flight.retain(|pending| *pending != id);
    }

    pub fn is_building(&self, id: MappingId) -> bool {
        self.in_flight.contains(&id)
    }

    pub fn get(&self, id: MappingId) -> &DelegateMapping {
        &self.arena[id.as_usize()]
    }

    /// Resolve a mapping for the key, exact first, then nullable-tolerant.
    pub fn find(&self, key: &MappingKey) -> Option<MappingId> {
        if let Some(id) = self.by_key.get(key) {
            return Some(*id);
        }
        let loose = key.loosened();
        self.by_key
            .iter()
            .find(|(registered, _)| registered.loosened() == loose)
            .map(|(_, id)| *id)
    }

    /// Resolve a mapping for the key, building a synthetic identity
    /// mapping when none is registered and the source and target name the
    /// same type modulo nullability.
    pub fn find_or_build_loose(&mut self, key: &MappingKey) -> Option<MappingId> {
        if let Some(id) = self.find(key) {
            return Some(id);
        }
        if key.source.same_erased(&key.target) {
            let id = self.insert(key.source.clone(), key.target.clone(), true);
            return Some(id);
        }
        None
    }

    fn insert(&mut self, source: TypeRef, target: TypeRef, synthetic: bool) -> MappingId {
        let id = MappingId::new(self.arena.len());
        let key = MappingKey::new(source.clone(), target.clone());
        self.arena.push(DelegateMapping {
            id,
            source_type: source,
            target_type: target,
            synthetic,
        });
        self.by_key.entry(key).or_insert(id);
        id
    }
}

//! Source Values
//!
//! The tagged result a member mapping resolution produces. Exactly one
//! variant is produced per successful resolution; the value is immutable
//! and owned by the assignment record that carries it into emission.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::mapping::MappingId;
use super::member_path::GetterPath;
use crate::symbols::TypeRef;

/// Policy applied when a null source value reaches a mapping whose source
/// type is not nullable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullFallback {
    /// Substitute the target type's default value.
    Default,
    /// Substitute a throw.
    ThrowOnNull,
}

/// The value description a resolved member mapping hands to the emitter.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceValue {
    /// Read the source path and convert through the delegate mapping.
    Mapped {
        mapping: MappingId,
        getter: GetterPath,
        /// Read through a null-propagating access chain.
        use_null_conditional: bool,
        /// The emitter must wrap the assignment in a source-non-null guard.
        requires_guard: bool,
    },
    /// Navigate null-safely, then on null apply the fallback instead of
    /// invoking the delegate.
    NullMapped {
        mapping: MappingId,
        getter: GetterPath,
        /// Types the fallback value.
        target_type: TypeRef,
        fallback: NullFallback,
        /// Chooses block-bodied over expression-bodied rendering.
        statement_context: bool,
    },
}

impl SourceValue {
    pub fn mapping(&self) -> MappingId {
        match self {
            SourceValue::Mapped { mapping, .. } | SourceValue::NullMapped { mapping, .. } => {
                *mapping
            }
        }
    }

    pub fn getter(&self) -> &GetterPath {
        match self {
            SourceValue::Mapped { getter, .. } | SourceValue::NullMapped { getter, .. } => getter,
        }
    }

    /// Whether the emitter must guard the assignment at runtime. Null-mapped
    /// values carry their fallback inline and never need an outer guard.
    pub fn requires_guard(&self) -> bool {
        match self {
            SourceValue::Mapped { requires_guard, .. } => *requires_guard,
            SourceValue::NullMapped { .. } => false,
        }
    }
}

static DEFAULT_LITERALS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("bool", "false"),
        ("int", "0"),
        ("long", "0"),
        ("float", "0.0"),
        ("double", "0.0"),
        ("string", "\"\""),
    ])
});

/// The default-value spelling for a target type, used by the `Default`
/// fallback arm.
pub fn default_literal(ty: &TypeRef) -> String {
    match DEFAULT_LITERALS.get(ty.name.as_str()) {
        Some(literal) => (*literal).to_string(),
        None => format!("default({})", ty.name),
    }
}

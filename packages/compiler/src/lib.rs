#![deny(clippy::all)]

//! Mapforge Compiler
//!
//! Member-mapping resolution engine: given a pair of member access paths
//! and a previously resolved type-to-type mapping, decides the concrete
//! strategy for transferring the value — null-guarded or null-conditional,
//! inlined expression or statement sequence — and rejects self-recursive
//! expression mappings.

pub mod config;
pub mod descriptors;
pub mod diagnostics;
pub mod symbols;

pub use config::MapperConfig;
pub use descriptors::{
    try_build, try_build_assignment, try_build_container_assignment, BuildCtx, BuildStyle,
    MemberMappingInfo, ResolveError, SourceValue,
};
pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};

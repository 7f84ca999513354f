//! Mapping Diagnostics
//!
//! Structured, non-fatal diagnostics recorded while resolving member
//! mappings. A diagnostic degrades the mapping it belongs to; it never
//! aborts the surrounding build.

use serde::Serialize;

use crate::symbols::TypeRef;

/// Diagnostic code for member-mapping errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticCode {
    /// No conversion exists between the member pair's types.
    UnmappableMember = 10,
    /// A constructor-bound member recurses into the mapping under construction.
    ReferenceLoopInCtorMapping = 20,
    /// A write-once member recurses into the mapping under construction.
    ReferenceLoopInInitOnlyMapping = 21,
}

impl DiagnosticCode {
    pub fn code(&self) -> String {
        format!("MF{:04}", *self as u32)
    }
}

/// Source position a diagnostic points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub file: String,
    pub start: usize,
    pub length: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, start: usize, length: usize) -> Self {
        SourceLocation {
            file: file.into(),
            start,
            length,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub code: String,
    pub location: Option<SourceLocation>,
}

/// Create a diagnostic for a member pair with no resolvable mapping.
pub fn create_unmappable_member_diagnostic(
    source_member: &str,
    source_type: &TypeRef,
    target_member: &str,
    target_type: &TypeRef,
    location: Option<SourceLocation>,
) -> Diagnostic {
    Diagnostic {
        message: format!(
            "Cannot map member '{}' of type '{}' to member '{}' of type '{}'",
            source_member, source_type, target_member, target_type
        ),
        code: DiagnosticCode::UnmappableMember.code(),
        location,
    }
}

/// Create a diagnostic for a reference loop through a constructor-bound member.
pub fn create_ctor_loop_diagnostic(
    source_member: &str,
    target_member: &str,
    owner_target_type: &TypeRef,
    location: Option<SourceLocation>,
) -> Diagnostic {
    Diagnostic {
        message: format!(
            "Mapping '{}' to constructor member '{}' creates a reference loop; '{}' cannot be constructed",
            source_member, target_member, owner_target_type
        ),
        code: DiagnosticCode::ReferenceLoopInCtorMapping.code(),
        location,
    }
}

/// Create a diagnostic for a reference loop through a write-once member.
pub fn create_init_only_loop_diagnostic(
    source_member: &str,
    target_member: &str,
    location: Option<SourceLocation>,
) -> Diagnostic {
    Diagnostic {
        message: format!(
            "Mapping '{}' to write-once member '{}' creates a reference loop",
            source_member, target_member
        ),
        code: DiagnosticCode::ReferenceLoopInInitOnlyMapping.code(),
        location,
    }
}

/// Collects diagnostics for one build pass.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        DiagnosticSink::default()
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

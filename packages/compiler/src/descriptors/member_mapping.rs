//! Member Mapping Resolution
//!
//! Resolves one member pair into a source-value description: which delegate
//! mapping converts the value, whether the access chain must be read
//! null-conditionally, whether the emitter needs a runtime null guard, and
//! whether inlining the member would recurse into the mapping currently
//! under construction.
//!
//! Statement-style output can break self-reference by constructing the
//! target shell first and filling the member in a later pass; a single
//! inlined expression has no such seam, so expression-style resolution
//! rejects self-reference outright.

use thiserror::Error;

use super::assignment::MemberAssignment;
use super::mapping::{MappingId, MappingKey};
use super::member_path::{
    build_getter_path, build_setter_path, MemberPath, TargetLeaf, TargetMemberPath,
};
use super::registry::MappingRegistry;
use super::source_value::{NullFallback, SourceValue};
use crate::config::MapperConfig;
use crate::diagnostics::{
    create_ctor_loop_diagnostic, create_init_only_loop_diagnostic,
    create_unmappable_member_diagnostic, DiagnosticSink, SourceLocation,
};
use crate::symbols::TypeRef;

/// Output shape requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStyle {
    /// The member is assigned in a statement body.
    Statement,
    /// The member is inlined into a single expression.
    Expression,
}

/// One member pair to resolve. Created once by the caller, consumed once.
#[derive(Debug, Clone)]
pub struct MemberMappingInfo {
    pub source: MemberPath,
    pub target: TargetMemberPath,
    /// Explicit (source, target) types replacing the ones inferred from the
    /// path leaves when computing the mapping key.
    pub type_override: Option<(TypeRef, TypeRef)>,
    pub location: Option<SourceLocation>,
}

impl MemberMappingInfo {
    pub fn new(source: MemberPath, target: TargetMemberPath) -> Self {
        MemberMappingInfo {
            source,
            target,
            type_override: None,
            location: None,
        }
    }

    pub fn with_type_override(mut self, source: TypeRef, target: TypeRef) -> Self {
        self.type_override = Some((source, target));
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    fn mapping_key(&self) -> MappingKey {
        match &self.type_override {
            Some((source, target)) => MappingKey::new(source.clone(), target.clone()),
            None => MappingKey::new(
                self.source.leaf_type().clone(),
                self.target.leaf_type().clone(),
            ),
        }
    }
}

/// Everything one resolution needs: configuration, the registry, the sink,
/// and the identity of the mapping whose body is being built.
pub struct BuildCtx<'a> {
    pub config: &'a MapperConfig,
    pub registry: &'a mut MappingRegistry,
    pub diagnostics: &'a mut DiagnosticSink,
    /// The enclosing mapping the member belongs to.
    pub current_mapping: MappingId,
    /// Whether the enclosing emitter produces a single inlined expression
    /// (a projection) rather than a statement body.
    pub is_expression: bool,
}

/// Resolution failure. The diagnostic has already been reported; the caller
/// skips the member and continues with the rest of the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no mapping exists for the member pair's types")]
    UnmappableMember,
    #[error("the member recurses into the mapping under construction")]
    ReferenceLoop,
}

/// Resolve one member pair into a source value.
pub fn try_build(
    ctx: &mut BuildCtx,
    info: &MemberMappingInfo,
    style: BuildStyle,
) -> Result<SourceValue, ResolveError> {
    let key = info.mapping_key();
    let Some(mapping) = ctx.registry.find_or_build_loose(&key) else {
        ctx.diagnostics.report(create_unmappable_member_diagnostic(
            &info.source.display_name(),
            &key.source,
            &info.target.display_name(),
            &key.target,
            info.location.clone(),
        ));
        return Err(ResolveError::UnmappableMember);
    };

    match style {
        BuildStyle::Statement => Ok(statement_source_value(ctx, info, mapping)),
        BuildStyle::Expression => {
            validate_no_expression_loop(ctx, info, mapping)?;
            Ok(expression_source_value(ctx, info, mapping))
        }
    }
}

/// Resolve a member pair for an expression-producing caller and package it
/// with the target setter path.
pub fn try_build_assignment(
    ctx: &mut BuildCtx,
    info: &MemberMappingInfo,
) -> Result<MemberAssignment, ResolveError> {
    let value = try_build(ctx, info, BuildStyle::Expression)?;
    let setter = build_setter_path(&info.target);
    Ok(MemberAssignment::new(setter, value))
}

/// Resolve a member pair for a statement-emitting caller. Also reports
/// whether the produced value requires a runtime null guard, so the caller
/// knows to wrap the assignment in a conditional.
pub fn try_build_container_assignment(
    ctx: &mut BuildCtx,
    info: &MemberMappingInfo,
) -> Result<(MemberAssignment, bool), ResolveError> {
    let value = try_build(ctx, info, BuildStyle::Statement)?;
    let needs_null_guard = value.requires_guard();
    let setter = build_setter_path(&info.target);
    Ok((MemberAssignment::new(setter, value), needs_null_guard))
}

/// Statement-style null handling, an ordered decision table.
fn statement_source_value(
    ctx: &BuildCtx,
    info: &MemberMappingInfo,
    mapping: MappingId,
) -> SourceValue {
    // Direct access is safe; the guard flag is part of the emitter contract
    // even on this branch.
    if !info.source.any_nullable() {
        return SourceValue::Mapped {
            mapping,
            getter: build_getter_path(&info.source, false),
            use_null_conditional: false,
            requires_guard: true,
        };
    }

    let delegate = ctx.registry.get(mapping);
    let target_accepts_null = info.target.leaf_type().nullable;
    if ctx.config.allow_null_property_assignment
        && (delegate.source_nullable() || (delegate.synthetic && target_accepts_null))
    {
        // The delegate tolerates null, or the pass-through target can
        // receive null directly; read through a null-propagating chain.
        return SourceValue::Mapped {
            mapping,
            getter: build_getter_path(&info.source, true),
            use_null_conditional: true,
            requires_guard: false,
        };
    }

    // The caller must establish that the whole source path is non-null
    // before invoking the delegate.
    SourceValue::Mapped {
        mapping,
        getter: build_getter_path(&info.source, false),
        use_null_conditional: false,
        requires_guard: true,
    }
}

/// Expression-style resolution cannot represent a member that recurses into
/// the very mapping that contains it.
fn validate_no_expression_loop(
    ctx: &mut BuildCtx,
    info: &MemberMappingInfo,
    mapping: MappingId,
) -> Result<(), ResolveError> {
    if mapping != ctx.current_mapping {
        return Ok(());
    }

    let diagnostic = match info.target.leaf_kind() {
        TargetLeaf::CtorParam => {
            let owner_target = ctx.registry.get(ctx.current_mapping).target_type.clone();
            create_ctor_loop_diagnostic(
                &info.source.display_name(),
                &info.target.display_name(),
                &owner_target,
                info.location.clone(),
            )
        }
        TargetLeaf::Settable => create_init_only_loop_diagnostic(
            &info.source.display_name(),
            &info.target.display_name(),
            info.location.clone(),
        ),
    };
    ctx.diagnostics.report(diagnostic);
    Err(ResolveError::ReferenceLoop)
}

/// Expression-style null handling. An expression has no statement body to
/// guard with a conditional, so the getter always propagates null and a
/// fallback bridges the gap when the delegate cannot take null itself.
fn expression_source_value(
    ctx: &BuildCtx,
    info: &MemberMappingInfo,
    mapping: MappingId,
) -> SourceValue {
    let delegate = ctx.registry.get(mapping);
    let getter = build_getter_path(&info.source, true);

    let fallback = if !delegate.source_nullable() && info.source.any_nullable() {
        ctx.config.null_fallback()
    } else {
        NullFallback::Default
    };

    SourceValue::NullMapped {
        mapping,
        getter,
        target_type: info.target.leaf_type().clone(),
        fallback,
        statement_context: !ctx.is_expression,
    }
}

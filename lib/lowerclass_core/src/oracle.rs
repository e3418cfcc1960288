use crate::decl::{ClassDeclaration, SupertypeRef};
use crate::names::*;
use crate::supertype::*;
use anyhow::Result;

/// Where a resolved symbol was declared
#[derive(Debug, Clone, Copy)]
pub enum Declaration<'a> {
    Source(&'a ClassDeclaration),
    Platform(&'a PlatformClass),
}

/// Read-only view of semantic resolution.
///
/// The lowering pass never mutates it, so one oracle can serve any number of
/// classes.
pub trait ResolutionOracle {
    /// Descriptor of the class being lowered
    fn resolve_class(&self, decl: &ClassDeclaration) -> Result<ClassDescriptor>;

    /// Resolve a supertype written in `owner`'s header.
    /// Fails with `Error::UnresolvedSupertype` when the name is unknown.
    fn resolve_supertype(
        &self,
        owner: &ClassFullname,
        sup: &SupertypeRef,
    ) -> Result<ResolvedSupertype>;

    fn declaring_source_of(&self, name: &ClassFullname) -> Option<Declaration<'_>>;

    fn is_interface_like(&self, name: &ClassFullname) -> bool;

    /// Interfaces implemented by a platform class and by each of its
    /// platform superclasses, nearest class first, without duplicates.
    fn interface_closure_of(&self, platform_class: &ClassFullname) -> Vec<BinaryName>;
}

//! Shape decisions of the lowering: which artifacts a class turns into and
//! what each of them inherits.
//!
//! 1. `classify` folds the supertypes of a class into a `ClassShape`
//!    (at most one concrete base plus an ordered interface set)
//! 2. `plan` derives the three `ArtifactHeader`s from the shape
mod artifact;
mod hierarchy;
mod plan;
pub use crate::artifact::*;
pub use crate::hierarchy::{classify, ClassShape, ShapeInterface};
pub use crate::plan::{plan, ArtifactPlan};
use anyhow::Result;
use lowerclass_core::decl::ClassDeclaration;
use lowerclass_core::oracle::ResolutionOracle;

/// Classify `decl` and plan its artifacts.
/// Fails without side effects if the hierarchy cannot be linearized.
pub fn build(oracle: &dyn ResolutionOracle, decl: &ClassDeclaration) -> Result<ArtifactPlan> {
    let descriptor = oracle.resolve_class(decl)?;
    let shape = classify(oracle, decl)?;
    log::debug!(
        "classified {}: base={:?}, {} interface(s)",
        descriptor.fullname,
        shape.superclass,
        shape.interfaces.len()
    );
    Ok(plan(&descriptor, shape))
}

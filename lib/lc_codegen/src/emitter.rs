use crate::sink::ArtifactWriter;
use crate::strategy::strategy_for;
use anyhow::Result;
use lc_shape::ArtifactKind;
use lowerclass_core::decl::*;

/// Emits the members for a property into the open artifact
pub trait PropertyEmitter {
    fn emit_property(
        &self,
        out: &mut ArtifactWriter<'_>,
        decl: &PropertyDecl,
        kind: ArtifactKind,
    ) -> Result<()>;
}

/// Emits the members for a function into the open artifact
pub trait FunctionEmitter {
    fn emit_function(
        &self,
        out: &mut ArtifactWriter<'_>,
        decl: &FunctionDecl,
        kind: ArtifactKind,
    ) -> Result<()>;
}

/// Member emitters used for one lowering run
#[derive(Clone, Copy)]
pub struct Emitters<'e> {
    pub property: &'e dyn PropertyEmitter,
    pub function: &'e dyn FunctionEmitter,
}

impl Emitters<'static> {
    /// Emitters producing member stubs only
    pub fn stubs() -> Emitters<'static> {
        Emitters {
            property: &StubPropertyEmitter,
            function: &StubFunctionEmitter,
        }
    }
}

/// Writes accessor (and field) stubs chosen by the body strategy of the kind
#[derive(Debug, Default)]
pub struct StubPropertyEmitter;

#[derive(Debug, Default)]
pub struct StubFunctionEmitter;

impl PropertyEmitter for StubPropertyEmitter {
    fn emit_property(
        &self,
        out: &mut ArtifactWriter<'_>,
        decl: &PropertyDecl,
        kind: ArtifactKind,
    ) -> Result<()> {
        for stub in strategy_for(kind).property(out.class(), decl) {
            out.add(stub)?;
        }
        Ok(())
    }
}

impl FunctionEmitter for StubFunctionEmitter {
    fn emit_function(
        &self,
        out: &mut ArtifactWriter<'_>,
        decl: &FunctionDecl,
        kind: ArtifactKind,
    ) -> Result<()> {
        for stub in strategy_for(kind).function(out.class(), decl) {
            out.add(stub)?;
        }
        Ok(())
    }
}

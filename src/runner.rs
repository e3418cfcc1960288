use anyhow::Result;
use lc_codegen::sink::JsonSink;
use lc_codegen::{ClassOutcome, Emitters};
use lc_index::ClassIndex;
use lc_shape::ArtifactPlan;
use lowerclass_core::names::ClassFullname;
use std::path::{Path, PathBuf};

/// Result of `lower`
#[derive(Debug)]
pub struct LowerReport {
    pub outcomes: Vec<ClassOutcome>,
    /// Artifact files, in the order they were written
    pub written: Vec<PathBuf>,
}

impl LowerReport {
    /// Classes which could not be lowered
    pub fn failures(&self) -> impl Iterator<Item = (&ClassFullname, &anyhow::Error)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.class, e)))
    }
}

/// Lower the classes of `program` into json files under `out_dir`
pub fn lower<P: AsRef<Path>>(program: P, out_dir: &Path) -> Result<LowerReport> {
    let index = ClassIndex::load(program)?;
    log::debug!("loaded program");
    let mut sink = JsonSink::new(out_dir);
    let outcomes = lc_codegen::generate_all(&index, index.classes(), &mut sink, &Emitters::stubs());
    log::debug!("lowered {} classes", outcomes.len());
    Ok(LowerReport {
        outcomes,
        written: sink.written().to_vec(),
    })
}

/// Plan the artifacts of the classes of `program` without emitting them
pub fn plan<P: AsRef<Path>>(program: P) -> Result<Vec<(ClassFullname, Result<ArtifactPlan>)>> {
    let index = ClassIndex::load(program)?;
    log::debug!("loaded program");
    Ok(index
        .classes()
        .iter()
        .map(|decl| (decl.name.clone(), lc_shape::build(&index, decl)))
        .collect())
}

/// Human readable summary of one class
pub fn describe(class: &ClassFullname, result: &Result<ArtifactPlan>) -> String {
    match result {
        Ok(plan) => plan.to_string(),
        Err(e) => format!("class {}\n  error: {}\n", class, e),
    }
}

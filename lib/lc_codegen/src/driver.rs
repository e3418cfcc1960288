use crate::dispatch::dispatch_members;
use crate::emitter::Emitters;
use crate::sink::{ArtifactHandle, ArtifactWriter, ClassSink};
use anyhow::Result;
use lc_shape::{ArtifactKind, ArtifactPlan};
use lowerclass_core::decl::ClassDeclaration;
use lowerclass_core::names::ClassFullname;
use lowerclass_core::oracle::ResolutionOracle;

/// Progress of emitting the artifacts of one class
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Stage {
    Start,
    Open(ArtifactKind),
    Closed(ArtifactKind),
    Done,
}

impl Stage {
    /// The stage after this one. None after `Done`
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Start => Some(Stage::Open(ArtifactKind::Interface)),
            Stage::Open(kind) => Some(Stage::Closed(kind)),
            Stage::Closed(kind) => match kind.next() {
                Some(k) => Some(Stage::Open(k)),
                None => Some(Stage::Done),
            },
            Stage::Done => None,
        }
    }
}

/// Lower one class: plan its artifacts, then emit interface, implementation
/// and delegating implementation in this order.
///
/// Nothing is opened if the hierarchy cannot be classified. If an emitter or
/// the sink fails while an artifact is open, the artifact is aborted before
/// the error is returned.
pub fn generate(
    oracle: &dyn ResolutionOracle,
    decl: &ClassDeclaration,
    sink: &mut dyn ClassSink,
    emitters: &Emitters<'_>,
) -> Result<ArtifactPlan> {
    let plan = lc_shape::build(oracle, decl)?;
    let mut stage = Stage::Start;
    let mut current: Option<ArtifactHandle> = None;
    while let Some(next) = stage.next() {
        stage = next;
        log::trace!("{}: {:?}", decl.name, stage);
        match stage {
            Stage::Open(kind) => {
                let handle = sink.open(plan.header(kind))?;
                let mut out = ArtifactWriter::new(sink, handle, &decl.name);
                if let Err(e) = dispatch_members(decl, &mut out, kind, emitters) {
                    abort(sink, handle, &decl.name);
                    return Err(e);
                }
                current = Some(handle);
            }
            Stage::Closed(_) => {
                if let Some(handle) = current.take() {
                    if let Err(e) = sink.close(handle) {
                        abort(sink, handle, &decl.name);
                        return Err(e);
                    }
                }
            }
            Stage::Start | Stage::Done => (),
        }
    }
    Ok(plan)
}

/// Abort an artifact on the way out of a failure. The first error wins
/// over a failing abort.
fn abort(sink: &mut dyn ClassSink, handle: ArtifactHandle, class: &ClassFullname) {
    if let Err(e) = sink.abort(handle) {
        log::debug!("{}: abort of {:?} failed: {}", class, handle, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages() {
        let mut stages = vec![Stage::Start];
        while let Some(s) = stages.last().unwrap().next() {
            stages.push(s);
        }
        assert_eq!(
            stages,
            vec![
                Stage::Start,
                Stage::Open(ArtifactKind::Interface),
                Stage::Closed(ArtifactKind::Interface),
                Stage::Open(ArtifactKind::Implementation),
                Stage::Closed(ArtifactKind::Implementation),
                Stage::Open(ArtifactKind::DelegatingImplementation),
                Stage::Closed(ArtifactKind::DelegatingImplementation),
                Stage::Done,
            ]
        );
    }
}

mod json;
mod recording;
use crate::member::MemberStub;
use anyhow::Result;
pub use json::JsonSink;
use lc_shape::ArtifactHeader;
use lowerclass_core::names::ClassFullname;
pub use recording::{RecordedArtifact, RecordingSink, SinkEvent};

/// Identifies an artifact between `open` and `close`
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ArtifactHandle(pub usize);

/// Consumer of emitted artifacts.
///
/// Each artifact is bracketed: `open`, any number of `add_member`, then
/// exactly one of `close` (keep it) or `abort` (drop it).
pub trait ClassSink {
    fn open(&mut self, header: &ArtifactHeader) -> Result<ArtifactHandle>;
    fn add_member(&mut self, handle: ArtifactHandle, member: MemberStub) -> Result<()>;
    fn close(&mut self, handle: ArtifactHandle) -> Result<()>;
    /// Drop an artifact that could not be completed. Nothing of it may be
    /// persisted.
    fn abort(&mut self, handle: ArtifactHandle) -> Result<()>;
}

/// The currently open artifact, as seen by member emitters
pub struct ArtifactWriter<'a> {
    sink: &'a mut dyn ClassSink,
    handle: ArtifactHandle,
    class: &'a ClassFullname,
}

impl<'a> ArtifactWriter<'a> {
    pub fn new(
        sink: &'a mut dyn ClassSink,
        handle: ArtifactHandle,
        class: &'a ClassFullname,
    ) -> ArtifactWriter<'a> {
        ArtifactWriter {
            sink,
            handle,
            class,
        }
    }

    /// The class whose artifact is being written
    pub fn class(&self) -> &ClassFullname {
        self.class
    }

    pub fn add(&mut self, member: MemberStub) -> Result<()> {
        self.sink.add_member(self.handle, member)
    }
}

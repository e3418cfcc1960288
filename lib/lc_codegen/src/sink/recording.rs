use super::{ArtifactHandle, ClassSink};
use crate::error;
use crate::member::MemberStub;
use anyhow::Result;
use lc_shape::ArtifactHeader;
use lowerclass_core::names::BinaryName;
use std::collections::HashMap;

/// A complete artifact kept in memory
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RecordedArtifact {
    pub header: ArtifactHeader,
    pub members: Vec<MemberStub>,
}

/// Calls made on a `RecordingSink`, in order
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SinkEvent {
    Open(BinaryName),
    Member(BinaryName, String),
    Close(BinaryName),
    Abort(BinaryName),
}

/// Sink which keeps everything in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    next_handle: usize,
    open: HashMap<ArtifactHandle, RecordedArtifact>,
    artifacts: Vec<RecordedArtifact>,
    events: Vec<SinkEvent>,
    /// Member names to reject (for testing error paths)
    reject: Vec<String>,
    /// Artifacts whose `close` fails
    failing_close: Vec<BinaryName>,
}

impl RecordingSink {
    pub fn new() -> RecordingSink {
        Default::default()
    }

    /// Make `add_member` fail for members named `name`
    pub fn rejecting(mut self, name: impl Into<String>) -> Self {
        self.reject.push(name.into());
        self
    }

    /// Make `close` fail for the artifact `name`. The artifact stays open
    pub fn failing_close(mut self, name: BinaryName) -> Self {
        self.failing_close.push(name);
        self
    }

    /// Closed artifacts, in the order they were closed
    pub fn artifacts(&self) -> &[RecordedArtifact] {
        &self.artifacts
    }

    pub fn artifact(&self, name: &BinaryName) -> Option<&RecordedArtifact> {
        self.artifacts.iter().find(|a| &a.header.name == name)
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Number of `open` calls so far
    pub fn open_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Open(_)))
            .count()
    }

    /// Whether some artifact is opened but not closed nor aborted
    pub fn has_open_artifacts(&self) -> bool {
        !self.open.is_empty()
    }

    fn take_open(&mut self, handle: ArtifactHandle) -> Result<RecordedArtifact> {
        self.open.remove(&handle).ok_or_else(|| error::not_open(handle))
    }
}

impl ClassSink for RecordingSink {
    fn open(&mut self, header: &ArtifactHeader) -> Result<ArtifactHandle> {
        if self.open.values().any(|a| a.header.name == header.name) {
            return Err(error::already_open(&header.name));
        }
        let handle = ArtifactHandle(self.next_handle);
        self.next_handle += 1;
        self.events.push(SinkEvent::Open(header.name.clone()));
        self.open.insert(
            handle,
            RecordedArtifact {
                header: header.clone(),
                members: vec![],
            },
        );
        Ok(handle)
    }

    fn add_member(&mut self, handle: ArtifactHandle, member: MemberStub) -> Result<()> {
        let artifact = self.open.get_mut(&handle).ok_or_else(|| error::not_open(handle))?;
        if self.reject.contains(&member.name) {
            return Err(error::rejected_member(&artifact.header.name, &member.name));
        }
        self.events
            .push(SinkEvent::Member(artifact.header.name.clone(), member.name.clone()));
        artifact.members.push(member);
        Ok(())
    }

    fn close(&mut self, handle: ArtifactHandle) -> Result<()> {
        let name = &self
            .open
            .get(&handle)
            .ok_or_else(|| error::not_open(handle))?
            .header
            .name;
        if self.failing_close.contains(name) {
            return Err(error::close_failed(name));
        }
        let artifact = self.take_open(handle)?;
        self.events.push(SinkEvent::Close(artifact.header.name.clone()));
        self.artifacts.push(artifact);
        Ok(())
    }

    fn abort(&mut self, handle: ArtifactHandle) -> Result<()> {
        let artifact = self.take_open(handle)?;
        self.events.push(SinkEvent::Abort(artifact.header.name));
        Ok(())
    }
}

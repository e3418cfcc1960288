use crate::sink::ArtifactHandle;
use lowerclass_core::names::BinaryName;

/// Errors raised by the sinks of this crate
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("artifact {0:?} is not open")]
    NotOpen(ArtifactHandle),
    #[error("artifact {name} is already open")]
    AlreadyOpen { name: BinaryName },
    #[error("sink rejected member {member} of {artifact}")]
    RejectedMember { artifact: BinaryName, member: String },
    #[error("failed to close artifact {name}")]
    CloseFailed { name: BinaryName },
}

pub fn not_open(handle: ArtifactHandle) -> anyhow::Error {
    Error::NotOpen(handle).into()
}

pub fn already_open(name: &BinaryName) -> anyhow::Error {
    Error::AlreadyOpen { name: name.clone() }.into()
}

pub fn rejected_member(artifact: &BinaryName, member: &str) -> anyhow::Error {
    Error::RejectedMember {
        artifact: artifact.clone(),
        member: member.to_string(),
    }
    .into()
}

pub fn close_failed(name: &BinaryName) -> anyhow::Error {
    Error::CloseFailed { name: name.clone() }.into()
}

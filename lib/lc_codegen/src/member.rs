use lc_shape::AccessFlags;
use lowerclass_core::names::BinaryName;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    Method,
}

/// What the body of an emitted method is
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberBody {
    /// Fields have no body
    None,
    /// Declaration only (interface artifact)
    Abstract,
    /// The body as written in the class
    Direct,
    /// Forwards the call through `delegate`
    Delegating { delegate: BinaryName },
}

/// Structural description of one member of an artifact.
/// Instructions are out of scope; only the body kind is recorded.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct MemberStub {
    pub kind: MemberKind,
    pub name: String,
    pub descriptor: String,
    pub flags: AccessFlags,
    pub body: MemberBody,
}

impl MemberStub {
    pub fn method(
        name: impl Into<String>,
        descriptor: String,
        flags: AccessFlags,
        body: MemberBody,
    ) -> MemberStub {
        MemberStub {
            kind: MemberKind::Method,
            name: name.into(),
            descriptor,
            flags,
            body,
        }
    }

    pub fn field(name: impl Into<String>, descriptor: String, flags: AccessFlags) -> MemberStub {
        MemberStub {
            kind: MemberKind::Field,
            name: name.into(),
            descriptor,
            flags,
            body: MemberBody::None,
        }
    }
}

impl std::fmt::Display for MemberStub {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            MemberKind::Field => {
                write!(f, "field {}: {} {}", self.name, self.descriptor, self.flags)?
            }
            MemberKind::Method => {
                write!(f, "method {}{} {}", self.name, self.descriptor, self.flags)?
            }
        }
        match &self.body {
            MemberBody::None => Ok(()),
            MemberBody::Abstract => write!(f, " abstract"),
            MemberBody::Direct => write!(f, " direct"),
            MemberBody::Delegating { delegate } => write!(f, " delegating to {}", delegate),
        }
    }
}

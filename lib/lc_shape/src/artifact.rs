use lowerclass_core::names::*;
use serde::{Deserialize, Serialize};

/// Class file version of every emitted artifact (Java 6)
pub const V1_6: u32 = 50;

/// The three artifacts a class is lowered into
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    /// Abstract interface carrying the whole member surface of the class
    Interface,
    /// The class itself
    Implementation,
    /// Copy of the class whose interface-originated members delegate
    DelegatingImplementation,
}

impl ArtifactKind {
    /// In emission order. Later artifacts refer to the interface artifact
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Interface,
        ArtifactKind::Implementation,
        ArtifactKind::DelegatingImplementation,
    ];

    /// The kind emitted after this one
    pub fn next(self) -> Option<ArtifactKind> {
        match self {
            ArtifactKind::Interface => Some(ArtifactKind::Implementation),
            ArtifactKind::Implementation => Some(ArtifactKind::DelegatingImplementation),
            ArtifactKind::DelegatingImplementation => None,
        }
    }

    /// Binary name of the artifact of this kind for `class`
    pub fn artifact_name(self, class: &ClassFullname) -> BinaryName {
        match self {
            ArtifactKind::Interface => class.interface_name(),
            ArtifactKind::Implementation => class.impl_name(),
            ArtifactKind::DelegatingImplementation => class.delegating_impl_name(),
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            ArtifactKind::Interface => "interface",
            ArtifactKind::Implementation => "impl",
            ArtifactKind::DelegatingImplementation => "delegating-impl",
        };
        write!(f, "{}", s)
    }
}

/// Access flags of classes and members, as in the class file format
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessFlags(pub u16);

impl AccessFlags {
    pub const PUBLIC: AccessFlags = AccessFlags(0x0001);
    pub const PRIVATE: AccessFlags = AccessFlags(0x0002);
    pub const FINAL: AccessFlags = AccessFlags(0x0010);
    pub const INTERFACE: AccessFlags = AccessFlags(0x0200);
    pub const ABSTRACT: AccessFlags = AccessFlags(0x0400);

    pub fn contains(self, other: AccessFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for AccessFlags {
    type Output = AccessFlags;

    fn bitor(self, rhs: AccessFlags) -> AccessFlags {
        AccessFlags(self.0 | rhs.0)
    }
}

impl std::fmt::Display for AccessFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// Everything the sink needs to open an artifact
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ArtifactHeader {
    pub kind: ArtifactKind,
    pub name: BinaryName,
    pub version: u32,
    pub flags: AccessFlags,
    pub superclass: BinaryName,
    pub interfaces: Vec<BinaryName>,
}

impl std::fmt::Display for ArtifactHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let interfaces = self
            .interfaces
            .iter()
            .map(|x| x.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{} {} extends {} implements [{}] (flags {}, version {})",
            self.kind, self.name, self.superclass, interfaces, self.flags, self.version
        )
    }
}

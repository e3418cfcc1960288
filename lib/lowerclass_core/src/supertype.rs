use crate::names::*;
use serde::{Deserialize, Serialize};

/// Whether a supertype contributes instance state (a class) or only a
/// contract (an interface). Decided by the oracle.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum SupertypeKind {
    ConcreteBase,
    InterfaceLike,
}

/// Where the declaration of a supertype comes from
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Declared in the program being compiled
    SourceDefined,
    /// Pre-existing type of the target platform (eg. `java.util.AbstractList`)
    Platform,
}

/// A supertype reference after resolution
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ResolvedSupertype {
    pub fullname: ClassFullname,
    pub binary: BinaryName,
    pub kind: SupertypeKind,
    pub origin: Origin,
}

impl ResolvedSupertype {
    pub fn platform_class(name: &str) -> ResolvedSupertype {
        Self::platform(name, SupertypeKind::ConcreteBase)
    }

    pub fn platform_interface(name: &str) -> ResolvedSupertype {
        Self::platform(name, SupertypeKind::InterfaceLike)
    }

    fn platform(name: &str, kind: SupertypeKind) -> ResolvedSupertype {
        let fullname = class_fullname(name);
        ResolvedSupertype {
            binary: fullname.to_binary_name(),
            fullname,
            kind,
            origin: Origin::Platform,
        }
    }

    /// A class of the program. These are always inherited through their
    /// interface artifact.
    pub fn source(name: &str) -> ResolvedSupertype {
        let fullname = class_fullname(name);
        ResolvedSupertype {
            binary: fullname.interface_name(),
            fullname,
            kind: SupertypeKind::InterfaceLike,
            origin: Origin::SourceDefined,
        }
    }
}

/// A type provided by the platform
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct PlatformClass {
    pub fullname: ClassFullname,
    pub is_interface: bool,
    /// None for the universal root and for interfaces
    pub superclass: Option<ClassFullname>,
    /// Directly implemented (or extended, for interfaces) interfaces
    pub interfaces: Vec<ClassFullname>,
}

/// Semantic information about the class being lowered
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub fullname: ClassFullname,
}

impl ClassDescriptor {
    pub fn interface_name(&self) -> BinaryName {
        self.fullname.interface_name()
    }
}

use super::binary_name::*;
use super::{DELEGATING_IMPL_SUFFIX, IMPL_SUFFIX};
use serde::{Deserialize, Serialize};

/// Fully qualified name of a class as written in the source (eg. `demo.Foo`)
#[derive(Debug, PartialEq, Clone, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassFullname(pub String);

impl std::fmt::Display for ClassFullname {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn class_fullname(s: impl Into<String>) -> ClassFullname {
    let name = s.into();
    debug_assert!(!name.is_empty());
    debug_assert!(!name.contains('/'));
    debug_assert!(!name.starts_with('.'));
    ClassFullname(name)
}

impl ClassFullname {
    /// `demo.Foo` -> `demo/Foo`
    pub fn to_binary_name(&self) -> BinaryName {
        binary_name(self.0.replace('.', "/"))
    }

    /// Package part of the name (eg. `demo`). Empty for toplevel classes
    pub fn package(&self) -> &str {
        match self.0.rfind('.') {
            Some(i) => &self.0[..i],
            None => "",
        }
    }

    /// Binary name of the interface artifact which carries the public
    /// contract of this class.
    pub fn interface_name(&self) -> BinaryName {
        self.to_binary_name()
    }

    /// Binary name of the implementation artifact
    pub fn impl_name(&self) -> BinaryName {
        self.to_binary_name().with_suffix(IMPL_SUFFIX)
    }

    /// Binary name of the delegating implementation artifact
    pub fn delegating_impl_name(&self) -> BinaryName {
        self.to_binary_name().with_suffix(DELEGATING_IMPL_SUFFIX)
    }
}

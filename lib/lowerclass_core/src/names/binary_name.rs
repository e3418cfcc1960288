use serde::{Deserialize, Serialize};

/// Internal name of a class in the binary format (eg. `java/lang/Object`)
#[derive(Debug, PartialEq, Clone, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BinaryName(pub String);

impl std::fmt::Display for BinaryName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn binary_name(s: impl Into<String>) -> BinaryName {
    let name = s.into();
    debug_assert!(!name.is_empty());
    debug_assert!(!name.contains('.'));
    BinaryName(name)
}

/// The class every class ultimately inherits
pub fn universal_root() -> BinaryName {
    binary_name("java/lang/Object")
}

impl BinaryName {
    pub fn with_suffix(&self, suffix: &str) -> BinaryName {
        BinaryName(format!("{}{}", self.0, suffix))
    }

    /// Descriptor of the reference type (eg. `Ljava/lang/String;`)
    pub fn descriptor(&self) -> String {
        format!("L{};", self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

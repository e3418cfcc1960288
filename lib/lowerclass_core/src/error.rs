use crate::names::*;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// More than one concrete class among the supertypes
    #[error(
        "cannot determine single class to inherit from: {class} extends both {first} and {second}"
    )]
    AmbiguousBase {
        class: ClassFullname,
        first: BinaryName,
        second: BinaryName,
    },
    #[error("unresolved supertype `{name}' of {class}")]
    UnresolvedSupertype { class: ClassFullname, name: String },
    #[error("unknown class {name}")]
    UnresolvedClass { name: ClassFullname },
}

pub fn ambiguous_base(
    class: &ClassFullname,
    first: &BinaryName,
    second: &BinaryName,
) -> anyhow::Error {
    Error::AmbiguousBase {
        class: class.clone(),
        first: first.clone(),
        second: second.clone(),
    }
    .into()
}

pub fn unresolved_supertype(class: &ClassFullname, name: impl Into<String>) -> anyhow::Error {
    Error::UnresolvedSupertype {
        class: class.clone(),
        name: name.into(),
    }
    .into()
}

pub fn unresolved_class(name: &ClassFullname) -> anyhow::Error {
    Error::UnresolvedClass { name: name.clone() }.into()
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("class {name} is defined more than once")]
    DuplicateClass { name: String },
    /// The program description is syntactically fine but meaningless
    #[error("{msg}")]
    BrokenProgram { msg: String },
}

pub fn duplicate_class(name: &str) -> anyhow::Error {
    Error::DuplicateClass {
        name: name.to_string(),
    }
    .into()
}

pub fn broken_program(msg: impl Into<String>) -> anyhow::Error {
    Error::BrokenProgram { msg: msg.into() }.into()
}

pub mod decl;
pub mod error;
pub mod names;
pub mod oracle;
pub mod supertype;
pub mod ty;

//! Table-driven resolution oracle.
//!
//! `ClassIndex` knows the classes of one program and the platform types they
//! may inherit, loaded from a JSON5 program description merged over the
//! bundled platform table (`platform.json5`).
mod error;
mod indexing;
mod program;
mod query;
pub use crate::error::Error;
pub use crate::program::*;
use anyhow::{Context, Result};
use lowerclass_core::decl::ClassDeclaration;
use lowerclass_core::names::*;
use lowerclass_core::supertype::PlatformClass;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUNDLED_PLATFORM: &str = include_str!("platform.json5");

#[derive(Debug, Default)]
pub struct ClassIndex {
    /// Classes of the program, in the order of the description
    classes: Vec<ClassDeclaration>,
    class_idx: HashMap<ClassFullname, usize>,
    platform: HashMap<ClassFullname, PlatformClass>,
}

impl ClassIndex {
    /// Load a program description from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ClassIndex> {
        let path = path.as_ref();
        let src = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        ClassIndex::from_json5(&src).with_context(|| format!("{} is broken", path.display()))
    }

    pub fn from_json5(src: &str) -> Result<ClassIndex> {
        let program: ProgramDef = json5::from_str(src).context("not a valid program description")?;
        ClassIndex::create(program)
    }

    /// Classes of the program, in declaration order
    pub fn classes(&self) -> &[ClassDeclaration] {
        &self.classes
    }

    pub fn get_class(&self, name: &ClassFullname) -> Option<&ClassDeclaration> {
        self.class_idx.get(name).map(|i| &self.classes[*i])
    }

    pub fn get_platform(&self, name: &ClassFullname) -> Option<&PlatformClass> {
        self.platform.get(name)
    }
}

fn bundled_platform() -> Result<Vec<PlatformClassDef>> {
    let program: ProgramDef =
        json5::from_str(BUNDLED_PLATFORM).context("[BUG] bundled platform.json5 is broken")?;
    Ok(program.platform)
}

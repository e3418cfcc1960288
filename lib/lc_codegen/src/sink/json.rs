use super::{ArtifactHandle, ClassSink};
use crate::error;
use crate::member::MemberStub;
use anyhow::{Context, Result};
use lc_shape::ArtifactHeader;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
struct ArtifactFile {
    #[serde(flatten)]
    header: ArtifactHeader,
    members: Vec<MemberStub>,
}

/// Writes each artifact to `<out_dir>/<binary name>.json` when it is closed.
/// Aborted artifacts are never written.
#[derive(Debug)]
pub struct JsonSink {
    out_dir: PathBuf,
    next_handle: usize,
    open: HashMap<ArtifactHandle, ArtifactFile>,
    written: Vec<PathBuf>,
}

impl JsonSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> JsonSink {
        JsonSink {
            out_dir: out_dir.into(),
            next_handle: 0,
            open: HashMap::new(),
            written: vec![],
        }
    }

    /// Files written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Path of the file for the artifact `name` (eg. `demo/Foo$$Impl`)
    pub fn path_for(&self, name: &str) -> PathBuf {
        let mut path = self.out_dir.clone();
        path.extend(name.split('/'));
        path.set_extension("json");
        path
    }
}

impl ClassSink for JsonSink {
    fn open(&mut self, header: &ArtifactHeader) -> Result<ArtifactHandle> {
        if self.open.values().any(|f| f.header.name == header.name) {
            return Err(error::already_open(&header.name));
        }
        let handle = ArtifactHandle(self.next_handle);
        self.next_handle += 1;
        self.open.insert(
            handle,
            ArtifactFile {
                header: header.clone(),
                members: vec![],
            },
        );
        Ok(handle)
    }

    fn add_member(&mut self, handle: ArtifactHandle, member: MemberStub) -> Result<()> {
        let file = self.open.get_mut(&handle).ok_or_else(|| error::not_open(handle))?;
        file.members.push(member);
        Ok(())
    }

    fn close(&mut self, handle: ArtifactHandle) -> Result<()> {
        let file = self.open.remove(&handle).ok_or_else(|| error::not_open(handle))?;
        let path = self.path_for(file.header.name.as_str());
        write_json(&path, &file)?;
        log::debug!("wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }

    fn abort(&mut self, handle: ArtifactHandle) -> Result<()> {
        self.open.remove(&handle).ok_or_else(|| error::not_open(handle))?;
        Ok(())
    }
}

fn write_json(path: &Path, file: &ArtifactFile) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(file)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

//! On-disk working copy of an editor session
//!
//! Layout:
//! ```text
//! .ladder/
//!   draft.toml      current label and rows
//!   outbox/         payloads written by OutboxSubmitter
//!   tmp/            staging area for atomic writes
//! ```
//!
//! The draft only lives between shell invocations. It is removed on cancel
//! and after a successful submit.

use crate::error::{Result, SessionError};
use ladder_core::Ladder;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the per-project directory
pub const LADDER_DIR: &str = ".ladder";

const DRAFT_FILE: &str = "draft.toml";

/// Serialized session state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub label: String,
    #[serde(default = "Ladder::empty")]
    pub rows: Ladder,
}

impl Draft {
    pub fn new(label: impl Into<String>, rows: Ladder) -> Self {
        Self {
            label: label.into(),
            rows,
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Handle on a `.ladder/` directory
#[derive(Debug, Clone)]
pub struct DraftStore {
    /// Directory containing `.ladder/`
    root: PathBuf,
    ladder_dir: PathBuf,
}

impl DraftStore {
    /// Create `.ladder/` under `root` if missing
    pub fn init(root: &Path) -> Result<Self> {
        let store = Self::at(root);
        std::fs::create_dir_all(store.tmp_dir())?;
        tracing::debug!(dir = %store.ladder_dir.display(), "initialized ladder directory");
        Ok(store)
    }

    /// Open an existing `.ladder/` directly under `root`
    pub fn open(root: &Path) -> Result<Self> {
        let store = Self::at(root);
        if !store.ladder_dir.is_dir() {
            return Err(SessionError::NotInitialized(root.to_path_buf()));
        }
        Ok(store)
    }

    /// Walk up from `start` to the nearest directory holding `.ladder/`
    pub fn find(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();
        loop {
            if current.join(LADDER_DIR).is_dir() {
                return Ok(Self::at(&current));
            }
            if !current.pop() {
                return Err(SessionError::NotInitialized(start.to_path_buf()));
            }
        }
    }

    fn at(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            ladder_dir: root.join(LADDER_DIR),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ladder_dir(&self) -> &Path {
        &self.ladder_dir
    }

    pub fn draft_path(&self) -> PathBuf {
        self.ladder_dir.join(DRAFT_FILE)
    }

    pub fn outbox_dir(&self) -> PathBuf {
        self.ladder_dir.join("outbox")
    }

    fn tmp_dir(&self) -> PathBuf {
        self.ladder_dir.join("tmp")
    }

    pub fn has_draft(&self) -> bool {
        self.draft_path().is_file()
    }

    pub fn load(&self) -> Result<Draft> {
        let path = self.draft_path();
        if !path.is_file() {
            return Err(SessionError::NoDraft(path));
        }
        let text = std::fs::read_to_string(&path)?;
        Draft::from_toml(&text)
    }

    pub fn save(&self, draft: &Draft) -> Result<()> {
        let text = draft.to_toml()?;
        let tmp_dir = self.tmp_dir();
        std::fs::create_dir_all(&tmp_dir)?;
        atomic_write(&tmp_dir, &self.draft_path(), text.as_bytes())?;
        tracing::debug!(rows = draft.rows.len(), label = %draft.label, "saved draft");
        Ok(())
    }

    /// Delete the draft; returns whether one existed
    pub fn discard(&self) -> Result<bool> {
        let path = self.draft_path();
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "discarded draft");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Atomic write helper
///
/// Writes data to a temporary file in `tmp_dir`, fsyncs it, then renames it
/// over `target`. `tmp_dir` must be on the same filesystem as `target`.
pub fn atomic_write(tmp_dir: &Path, target: &Path, data: &[u8]) -> Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(tmp_dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

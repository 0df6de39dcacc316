//! JSON knowledge base loader.
//!
//! Reads the knowledge base from a JSON document shaped
//! `{"category": {"item": "description"}}`. A missing file is seeded with
//! the built-in AutoStream catalog so there is something to edit.

use autostream_domain::KnowledgeBase;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum KnowledgeBaseError {
    #[error("Failed to read knowledge base {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write knowledge base {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid knowledge base {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize knowledge base for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads a [`KnowledgeBase`] from a JSON file.
pub struct JsonKnowledgeBaseLoader {
    path: PathBuf,
}

impl JsonKnowledgeBaseLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the knowledge base, writing the default one first if the file
    /// does not exist.
    pub fn load_or_init(&self) -> Result<KnowledgeBase, KnowledgeBaseError> {
        if !self.path.exists() {
            let kb = KnowledgeBase::autostream();
            self.write(&kb)?;
            info!(
                "Wrote default knowledge base to {} ({} items)",
                self.path.display(),
                kb.item_count()
            );
            return Ok(kb);
        }
        self.load()
    }

    pub fn load(&self) -> Result<KnowledgeBase, KnowledgeBaseError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            KnowledgeBaseError::Read {
                path: self.path.clone(),
                source,
            }
        })?;
        let kb: KnowledgeBase =
            serde_json::from_str(&content).map_err(|source| KnowledgeBaseError::Parse {
                path: self.path.clone(),
                source,
            })?;
        info!(
            "Loaded knowledge base from {} ({} items)",
            self.path.display(),
            kb.item_count()
        );
        Ok(kb)
    }

    pub fn write(&self, kb: &KnowledgeBase) -> Result<(), KnowledgeBaseError> {
        let write_err = |source| KnowledgeBaseError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let json = serde_json::to_string_pretty(kb).map_err(|source| {
            KnowledgeBaseError::Serialize {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, json).map_err(write_err)
    }
}

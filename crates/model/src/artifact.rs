//! Artifact descriptors declared by binaries.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One artifact declared by a binary.
///
/// Only artifacts produced by the local build carry a concrete file; content
/// resolution is defined for those alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Artifact {
  /// Produced by a local build task and backed by a file on disk.
  PublishedLocal { name: String, file: PathBuf },

  /// Declared by the model but not wired to a producing task yet.
  Unbacked { name: String },
}

impl Artifact {
  /// A locally produced artifact backed by `file`.
  pub fn published(name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
    Artifact::PublishedLocal {
      name: name.into(),
      file: file.into(),
    }
  }

  pub fn name(&self) -> &str {
    match self {
      Artifact::PublishedLocal { name, .. } => name,
      Artifact::Unbacked { name } => name,
    }
  }
}

impl fmt::Display for Artifact {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Artifact::PublishedLocal { name, file } => write!(f, "{} ({})", name, file.display()),
      Artifact::Unbacked { name } => write!(f, "{name} (unbacked)"),
    }
  }
}

/// Kinds of artifacts that can be queried by type rather than through a
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactType {
  Sources,
  Docs,
}

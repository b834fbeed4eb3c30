//! Project paths addressing modules within a build.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing a project path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectPathError {
  #[error("project path is empty")]
  Empty,

  #[error("project path '{0}' must start with ':'")]
  MissingRoot(String),

  #[error("project path '{0}' contains an empty segment")]
  EmptySegment(String),
}

/// The address of a module within a multi-module build.
///
/// Paths are colon separated: `:` is the root module, `:lib` a direct child,
/// `:services:auth` a nested one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectPath(String);

impl ProjectPath {
  /// The root module of the build.
  pub fn root() -> Self {
    ProjectPath(":".to_string())
  }

  /// Parse and validate a project path.
  pub fn new(path: impl Into<String>) -> Result<Self, ProjectPathError> {
    let path = path.into();
    if path.is_empty() {
      return Err(ProjectPathError::Empty);
    }
    if !path.starts_with(':') {
      return Err(ProjectPathError::MissingRoot(path));
    }
    if path.len() > 1 && path[1..].split(':').any(str::is_empty) {
      return Err(ProjectPathError::EmptySegment(path));
    }
    Ok(ProjectPath(path))
  }

  /// The raw path string.
  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn is_root(&self) -> bool {
    self.0 == ":"
  }

  /// Path segments below the root, outermost first.
  pub fn segments(&self) -> impl Iterator<Item = &str> {
    self.0[1..].split(':').filter(|segment| !segment.is_empty())
  }
}

impl fmt::Display for ProjectPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

//! Component identities, selectors and dependency edges.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::library::UsageKind;
use crate::path::ProjectPath;

/// Identity of one binary variant of a local library.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LibraryBinaryId {
  pub project: ProjectPath,
  pub library: String,
  pub variant: String,
}

impl LibraryBinaryId {
  pub fn new(project: ProjectPath, library: impl Into<String>, variant: impl Into<String>) -> Self {
    LibraryBinaryId {
      project,
      library: library.into(),
      variant: variant.into(),
    }
  }
}

impl fmt::Display for LibraryBinaryId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}:{}", self.project, self.library, self.variant)
  }
}

/// Identity of a published component from an external repository.
///
/// Owned by the published-dependency engine; present here so the identifier
/// union is total and chain dispatch stays an exhaustive match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleId {
  pub group: String,
  pub name: String,
  pub version: String,
}

impl fmt::Display for ModuleId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}:{}", self.group, self.name, self.version)
  }
}

/// The identity of any resolvable component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
  /// A binary variant of a library in this build.
  LibraryBinary(LibraryBinaryId),
  /// A published component from an external repository.
  Module(ModuleId),
}

impl fmt::Display for ComponentId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ComponentId::LibraryBinary(id) => id.fmt(f),
      ComponentId::Module(id) => id.fmt(f),
    }
  }
}

/// A reference from a dependant to a library in another module of the same
/// build.
///
/// `library` is `None` when the edge names only the module, meaning "the
/// module's sole library". Created per dependency edge, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LibrarySelector {
  pub project: ProjectPath,
  pub library: Option<String>,
}

impl LibrarySelector {
  /// Reference a library by name.
  pub fn new(project: ProjectPath, library: impl Into<String>) -> Self {
    LibrarySelector {
      project,
      library: Some(library.into()),
    }
  }

  /// Reference the sole library of a module.
  pub fn sole_library(project: ProjectPath) -> Self {
    LibrarySelector { project, library: None }
  }

  pub fn library_name(&self) -> Option<&str> {
    self.library.as_deref()
  }
}

impl fmt::Display for LibrarySelector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.library {
      Some(library) => write!(f, "{} library '{}'", self.project, library),
      None => write!(f, "{} (sole library)", self.project),
    }
  }
}

/// Selector for a published component, handled by the external engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleSelector {
  pub group: String,
  pub name: String,
  pub version: String,
}

/// Any selector the outer dependency engine may hand to a resolver chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentSelector {
  /// A library of another module in the same build.
  Library(LibrarySelector),
  /// A published component from an external repository.
  Module(ModuleSelector),
}

/// One dependency edge of the graph under resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
  selector: ComponentSelector,
  target_configuration: Option<String>,
}

impl Dependency {
  pub fn new(selector: ComponentSelector) -> Self {
    Dependency {
      selector,
      target_configuration: None,
    }
  }

  /// Pin the configuration artifacts will be resolved against.
  pub fn with_target_configuration(mut self, name: impl Into<String>) -> Self {
    self.target_configuration = Some(name.into());
    self
  }

  pub fn selector(&self) -> &ComponentSelector {
    &self.selector
  }

  /// The configuration artifacts are resolved against: the pinned one, or
  /// the API configuration when the edge does not say.
  pub fn target_configuration_name(&self) -> &str {
    self
      .target_configuration
      .as_deref()
      .unwrap_or(UsageKind::Api.configuration_name())
  }
}

//! Library selection within a target project.
//!
//! Implements the selector resolver's name and capability policy: the
//! capability filter runs first, then the name policy over what remains.

use std::sync::Arc;

use keel_model::library::{BinaryKind, Library};
use keel_model::registry::ComponentContainer;

/// Outcome of selecting a library within one project.
///
/// Constructed once per resolution call and never mutated afterwards; the
/// candidate lists exist purely for diagnostics.
#[derive(Debug, Clone)]
pub enum LibrarySelection {
  /// The selector's project path does not exist in this build.
  ProjectNotFound,

  /// No eligible library matched; `candidates` lists what was eligible.
  NotFound { candidates: Vec<String> },

  /// No library name was given and several libraries were eligible.
  Ambiguous { candidates: Vec<String> },

  /// Exactly one library matched.
  Selected(Arc<Library>),
}

impl LibrarySelection {
  /// Apply the selection policy over a project's components.
  ///
  /// Libraries without a single binary of `kind` are not candidates even
  /// when their name matches exactly. With no name given, exactly one
  /// candidate must remain. A project without a components container is
  /// legal and simply has nothing to offer.
  ///
  /// Pure function of its inputs; safe to call concurrently.
  pub fn select(
    components: Option<&ComponentContainer>,
    name: Option<&str>,
    kind: BinaryKind,
  ) -> Self {
    let Some(components) = components else {
      return LibrarySelection::NotFound { candidates: Vec::new() };
    };

    // Ordered by name since the container is; candidate lists stay stable.
    let candidates: Vec<&Arc<Library>> = components
      .libraries()
      .filter(|library| library.has_binaries_of_kind(kind))
      .collect();

    match name {
      Some(name) => match candidates.iter().copied().find(|library| library.name() == name) {
        Some(library) => LibrarySelection::Selected(Arc::clone(library)),
        None => LibrarySelection::NotFound {
          candidates: candidate_names(&candidates),
        },
      },
      None => match candidates.as_slice() {
        [] => LibrarySelection::NotFound { candidates: Vec::new() },
        [single] => LibrarySelection::Selected(Arc::clone(*single)),
        _ => LibrarySelection::Ambiguous {
          candidates: candidate_names(&candidates),
        },
      },
    }
  }

  /// The selected library, when the selection succeeded.
  pub fn selected(&self) -> Option<&Arc<Library>> {
    match self {
      LibrarySelection::Selected(library) => Some(library),
      _ => None,
    }
  }
}

fn candidate_names(candidates: &[&Arc<Library>]) -> Vec<String> {
  candidates.iter().map(|library| library.name().to_string()).collect()
}

#[cfg(test)]
mod tests {
  use keel_model::library::Binary;

  use super::*;

  fn jvm_library(name: &str) -> Library {
    Library::new(name).with_binary(Binary::new("jvm", BinaryKind::Jvm))
  }

  fn native_library(name: &str) -> Library {
    Library::new(name).with_binary(Binary::new("native", BinaryKind::Native))
  }

  #[test]
  fn missing_container_selects_nothing() {
    let selection = LibrarySelection::select(None, Some("core"), BinaryKind::Jvm);

    assert!(matches!(
      selection,
      LibrarySelection::NotFound { candidates } if candidates.is_empty()
    ));
  }

  #[test]
  fn exact_name_match_selects_library() {
    let container = ComponentContainer::new()
      .with_library(jvm_library("core"))
      .with_library(jvm_library("ext"));

    let selection = LibrarySelection::select(Some(&container), Some("core"), BinaryKind::Jvm);

    assert_eq!(selection.selected().unwrap().name(), "core");
  }

  #[test]
  fn capability_filter_excludes_exact_name_match() {
    let container = ComponentContainer::new()
      .with_library(native_library("core"))
      .with_library(jvm_library("ext"));

    let selection = LibrarySelection::select(Some(&container), Some("core"), BinaryKind::Jvm);

    // "core" exists but has no JVM binaries; the eligible list names "ext".
    assert!(matches!(
      selection,
      LibrarySelection::NotFound { candidates } if candidates == vec!["ext".to_string()]
    ));
  }

  #[test]
  fn sole_eligible_library_is_selected_without_name() {
    let container = ComponentContainer::new()
      .with_library(jvm_library("core"))
      .with_library(native_library("tool"));

    let selection = LibrarySelection::select(Some(&container), None, BinaryKind::Jvm);

    assert_eq!(selection.selected().unwrap().name(), "core");
  }

  #[test]
  fn several_eligible_libraries_without_name_are_ambiguous() {
    let container = ComponentContainer::new()
      .with_library(jvm_library("ext"))
      .with_library(jvm_library("core"));

    let selection = LibrarySelection::select(Some(&container), None, BinaryKind::Jvm);

    assert!(matches!(
      selection,
      LibrarySelection::Ambiguous { candidates }
        if candidates == vec!["core".to_string(), "ext".to_string()]
    ));
  }

  #[test]
  fn empty_container_reports_no_candidates() {
    let container = ComponentContainer::new();

    let selection = LibrarySelection::select(Some(&container), None, BinaryKind::Jvm);

    assert!(matches!(
      selection,
      LibrarySelection::NotFound { candidates } if candidates.is_empty()
    ));
  }
}

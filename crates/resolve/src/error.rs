//! The soft failure taxonomy of local library resolution.
//!
//! Every failure is data: a typed variant carrying the payload the outer
//! dependency engine needs to render an actionable diagnostic or try the
//! next resolver in its chain. Nothing here aborts the process.

use keel_model::artifact::Artifact;
use keel_model::component::ComponentId;
use keel_model::library::Binary;
use keel_model::path::ProjectPath;
use keel_model::variant::VariantCoordinates;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message;

/// A binary described for diagnostics: its variant name and offered
/// coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDescription {
  pub binary: String,
  pub coordinates: VariantCoordinates,
}

impl VariantDescription {
  pub fn of(binary: &Binary) -> Self {
    VariantDescription {
      binary: binary.name().to_string(),
      coordinates: binary.coordinates().clone(),
    }
  }
}

/// Failures reported by local library resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ResolveError {
  /// The selector references a module that does not exist in this build.
  #[error("project '{path}' not found in build")]
  ProjectNotFound { path: ProjectPath },

  /// No eligible library matched the requested name; `candidates` lists the
  /// libraries that were eligible.
  #[error("{}", message::library_not_found(.project, .name.as_deref(), .candidates))]
  LibraryNotFound {
    project: ProjectPath,
    name: Option<String>,
    candidates: Vec<String>,
  },

  /// No library name was given and several libraries were eligible.
  #[error("{}", message::ambiguous_library(.project, .candidates))]
  AmbiguousLibraryName {
    project: ProjectPath,
    candidates: Vec<String>,
  },

  /// The library has binaries, but none intersect the requested coordinates.
  /// `offered` is the full candidate set.
  #[error("{}", message::no_compatible_variant(.library, .requested, .offered))]
  NoCompatibleVariant {
    library: String,
    requested: VariantCoordinates,
    offered: Vec<VariantDescription>,
  },

  /// More than one binary satisfies every requested axis. Deliberately not
  /// auto-resolved by any implicit priority, so variant selection stays
  /// reproducible and explainable.
  #[error("{}", message::ambiguous_variant(.library, .requested, .candidates))]
  AmbiguousVariant {
    library: String,
    requested: VariantCoordinates,
    candidates: Vec<VariantDescription>,
  },

  /// The named configuration exposes no artifacts on the resolved component.
  #[error("unable to resolve artifacts for {component}")]
  ArtifactResolve { component: ComponentId },

  /// Content was requested for an artifact kind local builds do not produce.
  #[error("unsupported artifact kind: {artifact}")]
  UnsupportedArtifact { artifact: Artifact },
}

#[cfg(test)]
mod tests {
  use keel_model::component::LibraryBinaryId;
  use keel_model::library::BinaryKind;

  use super::*;

  #[test]
  fn variant_description_captures_name_and_coordinates() {
    let binary = Binary::new("jvm8", BinaryKind::Jvm).with_coordinate("platform", "jvm8");

    let description = VariantDescription::of(&binary);

    assert_eq!(description.binary, "jvm8");
    assert_eq!(description.coordinates.get("platform"), Some("jvm8"));
  }

  #[test]
  fn messages_carry_their_payload() {
    let project = ProjectPath::new(":lib").unwrap();

    let error = ResolveError::ProjectNotFound { path: project.clone() };
    assert_eq!(error.to_string(), "project ':lib' not found in build");

    let error = ResolveError::LibraryNotFound {
      project: project.clone(),
      name: Some("corr".to_string()),
      candidates: vec!["core".to_string()],
    };
    assert_eq!(
      error.to_string(),
      "could not find library 'corr' in project ':lib'; did you want to use 'core'?"
    );

    let error = ResolveError::ArtifactResolve {
      component: ComponentId::LibraryBinary(LibraryBinaryId::new(project, "core", "jvm8")),
    };
    assert_eq!(error.to_string(), "unable to resolve artifacts for :lib/core:jvm8");
  }

  #[test]
  fn serde_roundtrip() {
    let error = ResolveError::NoCompatibleVariant {
      library: "core".to_string(),
      requested: VariantCoordinates::new().with("platform", "jvm7"),
      offered: vec![VariantDescription {
        binary: "jvm8".to_string(),
        coordinates: VariantCoordinates::new().with("platform", "jvm8"),
      }],
    };

    let json = serde_json::to_string(&error).unwrap();
    let deserialized: ResolveError = serde_json::from_str(&json).unwrap();
    assert_eq!(error, deserialized);
  }
}

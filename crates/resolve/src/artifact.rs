//! Artifact resolution for resolved local library components.
//!
//! Participates in a resolver chain: every operation first matches on the
//! component identity and silently skips anything that is not a local
//! library binary, so the first resolver owning an identity kind wins and
//! none ever claims or fails a resolution it does not own.

use std::path::PathBuf;

use keel_model::artifact::{Artifact, ArtifactType};
use keel_model::component::ComponentId;
use tracing::debug;

use crate::error::ResolveError;
use crate::metadata::{BoundArtifact, ComponentMetadata};
use crate::resolver::Resolution;

/// Resolves artifact sets and artifact contents for local library
/// components. Stateless; one instance serves a whole build.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalArtifactResolver;

impl LocalArtifactResolver {
  pub fn new() -> Self {
    LocalArtifactResolver
  }

  /// Artifacts exposed by the configuration named `usage`.
  ///
  /// An absent or empty configuration fails: the dependant asked for a
  /// consumption purpose this component does not serve.
  pub fn resolve_configuration_artifacts(
    &self,
    component: &ComponentMetadata,
    usage: &str,
  ) -> Resolution<Vec<BoundArtifact>> {
    match component.id() {
      ComponentId::Module(_) => return Resolution::Skipped,
      ComponentId::LibraryBinary(_) => {}
    }

    match component.configuration(usage) {
      Some(configuration) if !configuration.artifacts.is_empty() => {
        debug!(
          component = %component.id(),
          usage,
          artifacts = configuration.artifacts.len(),
          "resolved configuration artifacts"
        );
        Resolution::Resolved(configuration.artifacts.clone())
      }
      _ => Resolution::Failed(ResolveError::ArtifactResolve {
        component: component.id().clone(),
      }),
    }
  }

  /// Type-based artifact queries (sources, docs) are not served by local
  /// libraries; the answer is an empty set, not a failure.
  pub fn resolve_artifacts_by_type(
    &self,
    component: &ComponentMetadata,
    _artifact_type: ArtifactType,
  ) -> Resolution<Vec<BoundArtifact>> {
    match component.id() {
      ComponentId::Module(_) => Resolution::Skipped,
      ComponentId::LibraryBinary(_) => Resolution::Resolved(Vec::new()),
    }
  }

  /// The file behind a single resolved artifact.
  ///
  /// Only artifacts produced by local builds carry a file; anything else is
  /// an unsupported kind here.
  pub fn resolve_artifact_content(&self, artifact: &BoundArtifact) -> Resolution<PathBuf> {
    match &artifact.component {
      ComponentId::Module(_) => return Resolution::Skipped,
      ComponentId::LibraryBinary(_) => {}
    }

    match &artifact.artifact {
      Artifact::PublishedLocal { file, .. } => Resolution::Resolved(file.clone()),
      other => Resolution::Failed(ResolveError::UnsupportedArtifact {
        artifact: other.clone(),
      }),
    }
  }
}

#[cfg(test)]
mod tests {
  use keel_model::component::{LibraryBinaryId, ModuleId};
  use keel_model::path::ProjectPath;

  use super::*;
  use crate::metadata::ConfigurationMetadata;

  fn library_id() -> ComponentId {
    ComponentId::LibraryBinary(LibraryBinaryId::new(
      ProjectPath::new(":lib").unwrap(),
      "core",
      "jvm8",
    ))
  }

  fn module_id() -> ComponentId {
    ComponentId::Module(ModuleId {
      group: "org.example".to_string(),
      name: "widgets".to_string(),
      version: "1.2".to_string(),
    })
  }

  fn bound(component: &ComponentId, artifact: Artifact) -> BoundArtifact {
    BoundArtifact {
      component: component.clone(),
      artifact,
    }
  }

  fn component_with_api_artifacts() -> ComponentMetadata {
    let id = library_id();
    let artifact = bound(&id, Artifact::published("core.jar", "/build/libs/core.jar"));
    ComponentMetadata::new(id).with_configuration(
      "api",
      ConfigurationMetadata {
        artifacts: vec![artifact],
      },
    )
  }

  #[test]
  fn named_configuration_yields_its_artifacts() {
    let component = component_with_api_artifacts();

    let outcome = LocalArtifactResolver::new().resolve_configuration_artifacts(&component, "api");

    let artifacts = outcome.into_result().unwrap().unwrap();
    assert_eq!(artifacts.len(), 1);
    assert_eq!(artifacts[0].artifact.name(), "core.jar");
  }

  #[test]
  fn missing_configuration_fails_naming_the_component() {
    let component = component_with_api_artifacts();

    let outcome =
      LocalArtifactResolver::new().resolve_configuration_artifacts(&component, "runtime");

    assert_eq!(
      outcome,
      Resolution::Failed(ResolveError::ArtifactResolve {
        component: library_id(),
      })
    );
  }

  #[test]
  fn empty_configuration_fails_like_a_missing_one() {
    let component = ComponentMetadata::new(library_id())
      .with_configuration("api", ConfigurationMetadata::default());

    let outcome = LocalArtifactResolver::new().resolve_configuration_artifacts(&component, "api");

    assert!(matches!(
      outcome,
      Resolution::Failed(ResolveError::ArtifactResolve { .. })
    ));
  }

  #[test]
  fn type_queries_always_answer_empty_for_local_libraries() {
    let component = component_with_api_artifacts();
    let resolver = LocalArtifactResolver::new();

    for artifact_type in [ArtifactType::Sources, ArtifactType::Docs] {
      let outcome = resolver.resolve_artifacts_by_type(&component, artifact_type);
      assert_eq!(outcome, Resolution::Resolved(Vec::new()));
    }
  }

  #[test]
  fn published_local_artifact_content_is_its_file() {
    let artifact = bound(
      &library_id(),
      Artifact::published("core.jar", "/build/libs/core.jar"),
    );

    let outcome = LocalArtifactResolver::new().resolve_artifact_content(&artifact);

    assert_eq!(outcome, Resolution::Resolved(PathBuf::from("/build/libs/core.jar")));
  }

  #[test]
  fn unbacked_artifact_content_is_unsupported() {
    let unbacked = Artifact::Unbacked {
      name: "core-sources".to_string(),
    };
    let artifact = bound(&library_id(), unbacked.clone());

    let outcome = LocalArtifactResolver::new().resolve_artifact_content(&artifact);

    assert_eq!(
      outcome,
      Resolution::Failed(ResolveError::UnsupportedArtifact { artifact: unbacked })
    );
  }

  #[test]
  fn foreign_components_are_skipped_by_every_operation() {
    let resolver = LocalArtifactResolver::new();
    let component = ComponentMetadata::new(module_id());

    assert!(resolver.resolve_configuration_artifacts(&component, "api").is_skipped());
    assert!(resolver
      .resolve_artifacts_by_type(&component, ArtifactType::Sources)
      .is_skipped());

    let artifact = bound(&module_id(), Artifact::published("widgets.jar", "/cache/widgets.jar"));
    assert!(resolver.resolve_artifact_content(&artifact).is_skipped());
  }
}

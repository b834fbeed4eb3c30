//! Resolved component metadata and the adaptation seam.

use std::collections::BTreeMap;

use keel_model::artifact::Artifact;
use keel_model::component::{ComponentId, LibraryBinaryId};
use keel_model::library::{Binary, Library};
use keel_model::path::ProjectPath;

/// An artifact bound to the component that exposes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundArtifact {
  pub component: ComponentId,
  pub artifact: Artifact,
}

/// A named bundle of artifacts exposed for one consumption purpose.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigurationMetadata {
  pub artifacts: Vec<BoundArtifact>,
}

/// Detailed metadata of a resolved component, consumed by artifact
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMetadata {
  id: ComponentId,
  configurations: BTreeMap<String, ConfigurationMetadata>,
}

impl ComponentMetadata {
  pub fn new(id: ComponentId) -> Self {
    ComponentMetadata {
      id,
      configurations: BTreeMap::new(),
    }
  }

  pub fn with_configuration(
    mut self,
    name: impl Into<String>,
    configuration: ConfigurationMetadata,
  ) -> Self {
    self.configurations.insert(name.into(), configuration);
    self
  }

  pub fn id(&self) -> &ComponentId {
    &self.id
  }

  pub fn configuration(&self, name: &str) -> Option<&ConfigurationMetadata> {
    self.configurations.get(name)
  }

  /// Configuration names, ordered.
  pub fn configuration_names(&self) -> impl Iterator<Item = &str> {
    self.configurations.keys().map(String::as_str)
  }
}

/// Turns a selected binary into resolvable component metadata.
///
/// Called only on a successful variant selection.
pub trait ComponentMetadataAdapter: Send + Sync {
  /// Adapt `binary` of `library`, owned by the project at `project`.
  fn adapt(&self, library: &Library, binary: &Binary, project: &ProjectPath) -> ComponentMetadata;
}

/// Default adapter: mints the binary's identity and exposes its declared
/// usage groups as configurations.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsageMetadataAdapter;

impl ComponentMetadataAdapter for UsageMetadataAdapter {
  fn adapt(&self, library: &Library, binary: &Binary, project: &ProjectPath) -> ComponentMetadata {
    let id = ComponentId::LibraryBinary(LibraryBinaryId::new(
      project.clone(),
      library.name(),
      binary.name(),
    ));

    let mut metadata = ComponentMetadata::new(id.clone());
    for (usage, artifacts) in binary.artifacts() {
      let bound = artifacts
        .iter()
        .map(|artifact| BoundArtifact {
          component: id.clone(),
          artifact: artifact.clone(),
        })
        .collect();
      metadata = metadata.with_configuration(usage.clone(), ConfigurationMetadata { artifacts: bound });
    }
    metadata
  }
}

#[cfg(test)]
mod tests {
  use keel_model::library::BinaryKind;

  use super::*;

  #[test]
  fn adapter_mints_identity_and_copies_usage_groups() {
    let library = Library::new("core");
    let binary = Binary::new("jvm8", BinaryKind::Jvm)
      .with_coordinate("platform", "jvm8")
      .with_artifact("api", Artifact::published("core-api.jar", "/build/core-api.jar"))
      .with_artifact("runtime", Artifact::published("core.jar", "/build/core.jar"));
    let project = ProjectPath::new(":lib").unwrap();

    let metadata = UsageMetadataAdapter.adapt(&library, &binary, &project);

    let expected_id = ComponentId::LibraryBinary(LibraryBinaryId::new(project, "core", "jvm8"));
    assert_eq!(metadata.id(), &expected_id);
    assert_eq!(metadata.configuration_names().collect::<Vec<_>>(), vec!["api", "runtime"]);

    let api = metadata.configuration("api").unwrap();
    assert_eq!(api.artifacts.len(), 1);
    assert_eq!(api.artifacts[0].component, expected_id);
    assert_eq!(api.artifacts[0].artifact.name(), "core-api.jar");
  }

  #[test]
  fn binary_without_artifacts_adapts_to_bare_metadata() {
    let library = Library::new("core");
    let binary = Binary::new("jvm8", BinaryKind::Jvm);
    let project = ProjectPath::new(":lib").unwrap();

    let metadata = UsageMetadataAdapter.adapt(&library, &binary, &project);

    assert_eq!(metadata.configuration_names().count(), 0);
    assert!(metadata.configuration("api").is_none());
  }
}

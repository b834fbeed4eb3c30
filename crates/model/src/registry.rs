//! Per-project component registries and the model lookup seam.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::library::Library;
use crate::path::ProjectPath;

/// Raised by lookup when a path does not name a module of this build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("project '{0}' not found in build")]
pub struct UnknownProject(pub ProjectPath);

/// The component registry of one project, libraries ordered by name.
#[derive(Debug, Clone, Default)]
pub struct ComponentContainer {
  libraries: BTreeMap<String, Arc<Library>>,
}

impl ComponentContainer {
  pub fn new() -> Self {
    ComponentContainer::default()
  }

  /// Add a library, replacing any previous library of the same name.
  pub fn with_library(mut self, library: Library) -> Self {
    self.libraries.insert(library.name().to_string(), Arc::new(library));
    self
  }

  /// Declared libraries ordered by name.
  pub fn libraries(&self) -> impl Iterator<Item = &Arc<Library>> {
    self.libraries.values()
  }

  pub fn library(&self, name: &str) -> Option<&Arc<Library>> {
    self.libraries.get(name)
  }

  pub fn is_empty(&self) -> bool {
    self.libraries.is_empty()
  }
}

/// The built model of one project.
///
/// A project that never declared a components container is a legal,
/// resolvable state: lookup succeeds and selection reports no candidates.
#[derive(Debug, Clone)]
pub struct ProjectModel {
  path: ProjectPath,
  components: Option<ComponentContainer>,
}

impl ProjectModel {
  /// A project without a components container.
  pub fn new(path: ProjectPath) -> Self {
    ProjectModel { path, components: None }
  }

  pub fn with_components(path: ProjectPath, components: ComponentContainer) -> Self {
    ProjectModel {
      path,
      components: Some(components),
    }
  }

  pub fn path(&self) -> &ProjectPath {
    &self.path
  }

  pub fn components(&self) -> Option<&ComponentContainer> {
    self.components.as_ref()
  }
}

/// Lookup seam from project paths to built project models.
///
/// Implementations own the registry and its synchronization, and may build a
/// project's model lazily on first access; that build is an opaque,
/// possibly-expensive synchronous call from the caller's point of view.
/// Callers treat every returned model as read-only.
pub trait ProjectModelResolver: Send + Sync {
  fn resolve_project_model(&self, path: &ProjectPath) -> Result<Arc<ProjectModel>, UnknownProject>;
}

/// In-memory model store for a single build.
///
/// Projects may be registered after construction; registration and lookup
/// synchronize on an internal lock so concurrent resolution over different
/// dependency edges stays safe.
#[derive(Default)]
pub struct InMemoryModelResolver {
  projects: RwLock<HashMap<ProjectPath, Arc<ProjectModel>>>,
}

impl InMemoryModelResolver {
  pub fn new() -> Self {
    InMemoryModelResolver::default()
  }

  /// Register a project's model, replacing any previous model for its path.
  pub fn register(&self, model: ProjectModel) {
    let model = Arc::new(model);
    self
      .projects
      .write()
      .expect("project registry lock poisoned")
      .insert(model.path().clone(), model);
  }
}

impl ProjectModelResolver for InMemoryModelResolver {
  fn resolve_project_model(&self, path: &ProjectPath) -> Result<Arc<ProjectModel>, UnknownProject> {
    self
      .projects
      .read()
      .expect("project registry lock poisoned")
      .get(path)
      .cloned()
      .ok_or_else(|| UnknownProject(path.clone()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::library::{Binary, BinaryKind};

  fn lib_path() -> ProjectPath {
    ProjectPath::new(":lib").unwrap()
  }

  fn core_library() -> Library {
    Library::new("core").with_binary(Binary::new("jvm8", BinaryKind::Jvm))
  }

  #[test]
  fn lookup_finds_registered_model() {
    let resolver = InMemoryModelResolver::new();
    resolver.register(ProjectModel::with_components(
      lib_path(),
      ComponentContainer::new().with_library(core_library()),
    ));

    let model = resolver.resolve_project_model(&lib_path()).unwrap();
    assert_eq!(model.path(), &lib_path());
    assert!(model.components().unwrap().library("core").is_some());
  }

  #[test]
  fn lookup_reports_unknown_project() {
    let resolver = InMemoryModelResolver::new();
    let missing = ProjectPath::new(":missing").unwrap();

    let error = resolver.resolve_project_model(&missing).unwrap_err();
    assert_eq!(error, UnknownProject(missing));
  }

  #[test]
  fn late_registration_is_visible_to_later_lookups() {
    let resolver = InMemoryModelResolver::new();
    let path = ProjectPath::new(":late").unwrap();

    assert!(resolver.resolve_project_model(&path).is_err());

    resolver.register(ProjectModel::new(path.clone()));
    let model = resolver.resolve_project_model(&path).unwrap();
    assert!(model.components().is_none());
  }

  #[test]
  fn container_orders_libraries_by_name() {
    let container = ComponentContainer::new()
      .with_library(Library::new("ext"))
      .with_library(Library::new("core"));

    let names: Vec<_> = container.libraries().map(|l| l.name().to_string()).collect();
    assert_eq!(names, vec!["core", "ext"]);
  }

  #[test]
  fn concurrent_lookups_share_one_model() {
    let resolver = Arc::new(InMemoryModelResolver::new());
    resolver.register(ProjectModel::with_components(
      lib_path(),
      ComponentContainer::new().with_library(core_library()),
    ));

    let handles: Vec<_> = (0..4)
      .map(|_| {
        let resolver = Arc::clone(&resolver);
        std::thread::spawn(move || {
          let path = ProjectPath::new(":lib").unwrap();
          resolver.resolve_project_model(&path).unwrap().path().clone()
        })
      })
      .collect();

    for handle in handles {
      assert_eq!(handle.join().unwrap(), lib_path());
    }
  }
}

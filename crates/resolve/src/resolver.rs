//! The per-edge resolution orchestrator.
//!
//! The outer dependency graph engine drives one `LocalLibraryResolver` per
//! binary capability, once per dependency edge, possibly from many workers
//! at once. The resolver holds no per-call state: project lookup, library
//! selection, variant filtering and adaptation all run on locals, so calls
//! interleave freely without locking.

use std::sync::Arc;

use keel_model::component::{ComponentId, ComponentSelector, Dependency, LibrarySelector};
use keel_model::library::{Binary, BinaryKind};
use keel_model::registry::ProjectModelResolver;
use keel_model::variant::VariantCoordinates;
use tracing::debug;

use crate::axis::AxisRegistry;
use crate::error::{ResolveError, VariantDescription};
use crate::matcher::VariantMatcher;
use crate::metadata::{ComponentMetadata, ComponentMetadataAdapter};
use crate::selection::LibrarySelection;

/// Outcome of one resolver in a chain.
///
/// `Skipped` means the input is not of a kind this resolver owns and the
/// next resolver in the chain should see it. When the input is owned,
/// exactly one of `Resolved` or `Failed` is produced per call.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
  /// Not this resolver's identifier kind; a silent no-op.
  Skipped,
  Resolved(T),
  Failed(ResolveError),
}

impl<T> Resolution<T> {
  pub fn is_skipped(&self) -> bool {
    matches!(self, Resolution::Skipped)
  }

  /// `None` when skipped, otherwise the reported result.
  pub fn into_result(self) -> Option<Result<T, ResolveError>> {
    match self {
      Resolution::Skipped => None,
      Resolution::Resolved(value) => Some(Ok(value)),
      Resolution::Failed(error) => Some(Err(error)),
    }
  }
}

/// Resolves local library dependency edges for one binary capability.
///
/// Collaborators are shared and read-only; the capability is captured at
/// construction and decides which libraries and binaries are visible.
pub struct LocalLibraryResolver {
  kind: BinaryKind,
  projects: Arc<dyn ProjectModelResolver>,
  matcher: VariantMatcher,
  adapter: Arc<dyn ComponentMetadataAdapter>,
}

impl LocalLibraryResolver {
  pub fn new(
    kind: BinaryKind,
    projects: Arc<dyn ProjectModelResolver>,
    axes: AxisRegistry,
    adapter: Arc<dyn ComponentMetadataAdapter>,
  ) -> Self {
    LocalLibraryResolver {
      kind,
      projects,
      matcher: VariantMatcher::new(axes),
      adapter,
    }
  }

  /// Resolve one dependency edge to component metadata.
  ///
  /// Selectors for published modules are skipped; they belong to the
  /// published-dependency engine further down the chain.
  pub fn resolve_dependency(
    &self,
    dependency: &Dependency,
    requested: &VariantCoordinates,
  ) -> Resolution<ComponentMetadata> {
    let selector = match dependency.selector() {
      ComponentSelector::Library(selector) => selector,
      ComponentSelector::Module(_) => return Resolution::Skipped,
    };

    match self.resolve_library(selector, requested) {
      Ok(metadata) => Resolution::Resolved(metadata),
      Err(error) => Resolution::Failed(error),
    }
  }

  /// Resolve detailed metadata from a component identity.
  ///
  /// Identities of published modules are skipped. Reaching a local library
  /// binary identity through this path means the surrounding system asked
  /// for a capability that does not exist yet; that is a gap in the caller,
  /// not a build failure, so it aborts instead of reporting a soft outcome.
  pub fn resolve_component(&self, id: &ComponentId) -> Resolution<ComponentMetadata> {
    match id {
      ComponentId::Module(_) => Resolution::Skipped,
      ComponentId::LibraryBinary(id) => {
        unimplemented!("resolving component metadata from identity {id} is not supported yet")
      }
    }
  }

  fn resolve_library(
    &self,
    selector: &LibrarySelector,
    requested: &VariantCoordinates,
  ) -> Result<ComponentMetadata, ResolveError> {
    debug!(selector = %selector, requested = %requested, "resolving local library dependency");

    let library = match self.select_library(selector) {
      LibrarySelection::Selected(library) => library,
      LibrarySelection::ProjectNotFound => {
        return Err(ResolveError::ProjectNotFound {
          path: selector.project.clone(),
        });
      }
      LibrarySelection::NotFound { candidates } => {
        return Err(ResolveError::LibraryNotFound {
          project: selector.project.clone(),
          name: selector.library.clone(),
          candidates,
        });
      }
      LibrarySelection::Ambiguous { candidates } => {
        return Err(ResolveError::AmbiguousLibraryName {
          project: selector.project.clone(),
          candidates,
        });
      }
    };

    // Selection guarantees at least one binary of the capability.
    let candidates: Vec<&Arc<Binary>> = library.binaries_of_kind(self.kind).collect();
    let compatible = self.matcher.filter_compatible(requested, candidates.iter().copied());
    debug!(
      library = library.name(),
      candidates = candidates.len(),
      compatible = compatible.len(),
      "filtered variants"
    );

    match compatible.as_slice() {
      [] => Err(ResolveError::NoCompatibleVariant {
        library: library.name().to_string(),
        requested: requested.clone(),
        offered: candidates.iter().map(|binary| VariantDescription::of(binary)).collect(),
      }),
      [binary] => {
        let metadata = self.adapter.adapt(&library, binary, &selector.project);
        debug!(component = %metadata.id(), "resolved local library dependency");
        Ok(metadata)
      }
      _ => Err(ResolveError::AmbiguousVariant {
        library: library.name().to_string(),
        requested: requested.clone(),
        candidates: compatible.iter().map(|binary| VariantDescription::of(binary)).collect(),
      }),
    }
  }

  /// Look up the target project and apply the library selection policy.
  fn select_library(&self, selector: &LibrarySelector) -> LibrarySelection {
    let model = match self.projects.resolve_project_model(&selector.project) {
      Ok(model) => model,
      Err(_) => return LibrarySelection::ProjectNotFound,
    };
    LibrarySelection::select(model.components(), selector.library_name(), self.kind)
  }
}

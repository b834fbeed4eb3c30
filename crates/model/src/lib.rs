//! keel-model: The read-only project and component model for keel
//!
//! This crate provides the model types the resolution engine works over:
//! - `ProjectPath`: colon-separated address of a module within the build
//! - `Library` / `Binary`: a named component and its buildable variants
//! - `VariantCoordinates`: axis/value pairs describing what a variant offers
//! - `ComponentId` and selectors: identities and references between modules
//! - `ProjectModelResolver`: the lookup seam to per-project models

pub mod artifact;
pub mod component;
pub mod library;
pub mod path;
pub mod registry;
pub mod variant;

pub use artifact::{Artifact, ArtifactType};
pub use component::{
  ComponentId, ComponentSelector, Dependency, LibraryBinaryId, LibrarySelector, ModuleId,
  ModuleSelector,
};
pub use library::{Binary, BinaryKind, Library, UsageKind};
pub use path::{ProjectPath, ProjectPathError};
pub use registry::{
  ComponentContainer, InMemoryModelResolver, ProjectModel, ProjectModelResolver, UnknownProject,
};
pub use variant::VariantCoordinates;

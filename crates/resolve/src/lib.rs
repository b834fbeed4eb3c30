//! keel-resolve: Local library dependency resolution for keel builds
//!
//! Given one dependency edge pointing at a library of another module in the
//! same build, this crate decides which binary variant of that library
//! satisfies the requester's variant coordinates and exposes the variant's
//! artifacts:
//! - `axis` / `matcher`: pluggable per-axis compatibility and variant filtering
//! - `selection`: project and library lookup with typed absence handling
//! - `resolver`: the orchestrator driven once per dependency edge
//! - `artifact`: artifact-set and artifact-content resolution
//! - `error`: the soft failure taxonomy consumed by the outer graph engine

pub mod artifact;
pub mod axis;
pub mod error;
pub mod matcher;
mod message;
pub mod metadata;
pub mod resolver;
pub mod selection;

pub use artifact::LocalArtifactResolver;
pub use axis::{AxisRegistry, ExactMatch, VariantAxisRule, rule_fn};
pub use error::{ResolveError, VariantDescription};
pub use matcher::VariantMatcher;
pub use metadata::{
  BoundArtifact, ComponentMetadata, ComponentMetadataAdapter, ConfigurationMetadata,
  UsageMetadataAdapter,
};
pub use resolver::{LocalLibraryResolver, Resolution};
pub use selection::LibrarySelection;

//! Libraries and their buildable binary variants.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::artifact::Artifact;
use crate::variant::VariantCoordinates;

/// The capability a binary provides to dependants.
///
/// A resolver chain is constructed per capability; a library with no binary
/// of the requested capability is invisible to that resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryKind {
  /// Binaries that run on the JVM.
  Jvm,
  /// Natively compiled binaries.
  Native,
}

/// Canonical usage names under which a binary groups its artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsageKind {
  /// Artifacts a dependant compiles against.
  Api,
  /// Artifacts a dependant needs at run time.
  Runtime,
}

impl UsageKind {
  pub fn configuration_name(self) -> &'static str {
    match self {
      UsageKind::Api => "api",
      UsageKind::Runtime => "runtime",
    }
  }
}

/// One buildable variant of a library.
///
/// A binary belongs to exactly one library. Its coordinate set describes
/// what it offers; an axis absent from the set matches any requested value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
  name: String,
  kind: BinaryKind,
  coordinates: VariantCoordinates,
  artifacts: BTreeMap<String, Vec<Artifact>>,
}

impl Binary {
  pub fn new(name: impl Into<String>, kind: BinaryKind) -> Self {
    Binary {
      name: name.into(),
      kind,
      coordinates: VariantCoordinates::new(),
      artifacts: BTreeMap::new(),
    }
  }

  /// Set the offered value of one variant axis.
  pub fn with_coordinate(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
    self.coordinates = self.coordinates.with(axis, value);
    self
  }

  /// Declare an artifact under a usage name.
  pub fn with_artifact(mut self, usage: impl Into<String>, artifact: Artifact) -> Self {
    self.artifacts.entry(usage.into()).or_default().push(artifact);
    self
  }

  /// The variant name, unique within the owning library.
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn kind(&self) -> BinaryKind {
    self.kind
  }

  pub fn coordinates(&self) -> &VariantCoordinates {
    &self.coordinates
  }

  /// Declared artifacts grouped by usage name, ordered.
  pub fn artifacts(&self) -> &BTreeMap<String, Vec<Artifact>> {
    &self.artifacts
  }

  /// Artifacts declared under `usage`; empty when the usage is unknown.
  pub fn artifacts_for(&self, usage: &str) -> &[Artifact] {
    self.artifacts.get(usage).map(Vec::as_slice).unwrap_or(&[])
  }
}

/// A named unit of buildable output owned by one module.
///
/// Binaries are kept ordered by name. A library is immutable once the owning
/// project model has been built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Library {
  name: String,
  binaries: BTreeMap<String, Arc<Binary>>,
}

impl Library {
  pub fn new(name: impl Into<String>) -> Self {
    Library {
      name: name.into(),
      binaries: BTreeMap::new(),
    }
  }

  /// Add a binary, replacing any previous binary of the same name.
  pub fn with_binary(mut self, binary: Binary) -> Self {
    self.binaries.insert(binary.name().to_string(), Arc::new(binary));
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Binaries ordered by name.
  pub fn binaries(&self) -> impl Iterator<Item = &Arc<Binary>> {
    self.binaries.values()
  }

  pub fn binary(&self, name: &str) -> Option<&Arc<Binary>> {
    self.binaries.get(name)
  }

  /// Binaries of one capability, ordered by name.
  pub fn binaries_of_kind(&self, kind: BinaryKind) -> impl Iterator<Item = &Arc<Binary>> {
    self.binaries.values().filter(move |binary| binary.kind() == kind)
  }

  pub fn has_binaries_of_kind(&self, kind: BinaryKind) -> bool {
    self.binaries_of_kind(kind).next().is_some()
  }
}

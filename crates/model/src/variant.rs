//! Variant coordinates: the axis/value pairs a binary offers or a dependant
//! requests.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An open set of axis name to axis value pairs.
///
/// Axes are kept ordered by name so coordinate sets compare, hash and render
/// deterministically regardless of insertion order.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VariantCoordinates(BTreeMap<String, String>);

impl VariantCoordinates {
  pub fn new() -> Self {
    VariantCoordinates(BTreeMap::new())
  }

  /// Add or replace the value of a single axis.
  pub fn with(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
    self.0.insert(axis.into(), value.into());
    self
  }

  /// The value this coordinate set carries for `axis`, if any.
  pub fn get(&self, axis: &str) -> Option<&str> {
    self.0.get(axis).map(String::as_str)
  }

  /// Axis names, ordered.
  pub fn axes(&self) -> impl Iterator<Item = &str> {
    self.0.keys().map(String::as_str)
  }

  /// Axis/value pairs, ordered by axis name.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(axis, value)| (axis.as_str(), value.as_str()))
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl FromIterator<(String, String)> for VariantCoordinates {
  fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
    VariantCoordinates(iter.into_iter().collect())
  }
}

impl fmt::Display for VariantCoordinates {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[")?;
    for (index, (axis, value)) in self.iter().enumerate() {
      if index > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{axis}:{value}")?;
    }
    write!(f, "]")
  }
}

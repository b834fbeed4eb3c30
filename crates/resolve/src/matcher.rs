//! Variant filtering over a library's binaries.

use std::collections::HashSet;
use std::sync::Arc;

use keel_model::library::Binary;
use keel_model::variant::VariantCoordinates;
use tracing::trace;

use crate::axis::AxisRegistry;

/// Filters candidate binaries down to those compatible with a requested
/// coordinate set.
///
/// Compatibility is admit/reject per axis. There is no closest-match scoring
/// and no preference order between admitted candidates, so a small metadata
/// change never silently reroutes a dependency.
pub struct VariantMatcher {
  axes: AxisRegistry,
}

impl VariantMatcher {
  pub fn new(axes: AxisRegistry) -> Self {
    VariantMatcher { axes }
  }

  /// Keep the binaries compatible with every requested axis.
  ///
  /// A binary with no value for a requested axis matches that axis as a
  /// wildcard. Input order is preserved; binaries with identical coordinate
  /// sets are presented once.
  pub fn filter_compatible<'a>(
    &self,
    requested: &VariantCoordinates,
    candidates: impl IntoIterator<Item = &'a Arc<Binary>>,
  ) -> Vec<Arc<Binary>> {
    let mut seen = HashSet::new();
    let mut compatible = Vec::new();

    for binary in candidates {
      if !self.is_compatible(requested, binary) {
        trace!(
          binary = binary.name(),
          offered = %binary.coordinates(),
          requested = %requested,
          "variant rejected"
        );
        continue;
      }
      if seen.insert(binary.coordinates().clone()) {
        compatible.push(Arc::clone(binary));
      }
    }

    compatible
  }

  fn is_compatible(&self, requested: &VariantCoordinates, binary: &Binary) -> bool {
    requested.iter().all(|(axis, wanted)| match binary.coordinates().get(axis) {
      None => true,
      Some(offered) => self.axes.rule_for(axis).is_compatible(wanted, offered),
    })
  }
}

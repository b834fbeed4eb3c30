//! Pluggable per-axis variant compatibility rules.
//!
//! Each axis of a variant coordinate set carries its own compatibility rule.
//! Rules are registered by axis name when the matcher is constructed; axes
//! without a registered rule fall back to exact value equality, so new axes
//! are additive and the matching algorithm itself never changes.

use std::collections::HashMap;
use std::sync::Arc;

/// Decides whether an offered axis value satisfies a requested one.
pub trait VariantAxisRule: Send + Sync {
  fn is_compatible(&self, requested: &str, offered: &str) -> bool;
}

/// The default rule: values are compatible iff equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl VariantAxisRule for ExactMatch {
  fn is_compatible(&self, requested: &str, offered: &str) -> bool {
    requested == offered
  }
}

/// Wrap a plain closure as an axis rule, so a one-off policy can be supplied
/// inline at registration time.
pub fn rule_fn<F>(rule: F) -> impl VariantAxisRule
where
  F: Fn(&str, &str) -> bool + Send + Sync,
{
  struct FnRule<F>(F);

  impl<F> VariantAxisRule for FnRule<F>
  where
    F: Fn(&str, &str) -> bool + Send + Sync,
  {
    fn is_compatible(&self, requested: &str, offered: &str) -> bool {
      (self.0)(requested, offered)
    }
  }

  FnRule(rule)
}

/// Registry from axis name to the rule governing that axis.
#[derive(Clone)]
pub struct AxisRegistry {
  rules: HashMap<String, Arc<dyn VariantAxisRule>>,
  fallback: Arc<dyn VariantAxisRule>,
}

impl AxisRegistry {
  pub fn new() -> Self {
    AxisRegistry {
      rules: HashMap::new(),
      fallback: Arc::new(ExactMatch),
    }
  }

  /// Register a rule for one axis, replacing any previous rule for it.
  pub fn register(mut self, axis: impl Into<String>, rule: impl VariantAxisRule + 'static) -> Self {
    self.rules.insert(axis.into(), Arc::new(rule));
    self
  }

  /// The rule governing `axis`; exact match unless one was registered.
  pub fn rule_for(&self, axis: &str) -> &dyn VariantAxisRule {
    self
      .rules
      .get(axis)
      .map(|rule| rule.as_ref())
      .unwrap_or_else(|| self.fallback.as_ref())
  }
}

impl Default for AxisRegistry {
  fn default() -> Self {
    AxisRegistry::new()
  }
}

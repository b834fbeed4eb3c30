//! Diagnostic message rendering for resolution failures.
//!
//! Messages always spell out what was available, so a failed edge can be
//! corrected without re-running the build with extra logging.

use keel_model::path::ProjectPath;
use keel_model::variant::VariantCoordinates;

use crate::error::VariantDescription;

pub(crate) fn library_not_found(
  project: &ProjectPath,
  name: Option<&str>,
  candidates: &[String],
) -> String {
  let mut message = match name {
    Some(name) => format!("could not find library '{name}' in project '{project}'"),
    None => format!("project '{project}' does not declare any eligible library"),
  };
  match candidates {
    [] => {}
    [single] => message.push_str(&format!("; did you want to use '{single}'?")),
    _ => message.push_str(&format!("; did you want to use one of {}?", quoted(candidates))),
  }
  message
}

pub(crate) fn ambiguous_library(project: &ProjectPath, candidates: &[String]) -> String {
  format!(
    "several libraries in project '{project}' are eligible: {}; qualify the dependency with a library name",
    quoted(candidates)
  )
}

pub(crate) fn no_compatible_variant(
  library: &str,
  requested: &VariantCoordinates,
  offered: &[VariantDescription],
) -> String {
  let mut message = format!(
    "no compatible variant of library '{library}' for requested coordinates {requested}; available:"
  );
  push_variants(&mut message, offered);
  message
}

pub(crate) fn ambiguous_variant(
  library: &str,
  requested: &VariantCoordinates,
  candidates: &[VariantDescription],
) -> String {
  let mut message = format!(
    "several variants of library '{library}' satisfy requested coordinates {requested}:"
  );
  push_variants(&mut message, candidates);
  message.push_str("\nnarrow the requested coordinates to a single variant");
  message
}

fn push_variants(message: &mut String, variants: &[VariantDescription]) {
  for variant in variants {
    message.push_str(&format!("\n  - {} {}", variant.binary, variant.coordinates));
  }
}

fn quoted(names: &[String]) -> String {
  let quoted: Vec<String> = names.iter().map(|name| format!("'{name}'")).collect();
  quoted.join(", ")
}

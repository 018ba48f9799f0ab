use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceHints {
  #[default]
  Off,
  Warning,
  Error,
}

impl Display for PerformanceHints {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Off => write!(f, "off"),
      Self::Warning => write!(f, "warning"),
      Self::Error => write!(f, "error"),
    }
  }
}

/// Thresholds for the engine's oversized-artifact diagnostics. Sizes are in
/// bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PerformanceOptions {
  pub hints: PerformanceHints,
  pub max_asset_size: u64,
  pub max_entrypoint_size: u64,
}

impl Default for PerformanceOptions {
  fn default() -> Self {
    Self { hints: PerformanceHints::Off, max_asset_size: 250_000, max_entrypoint_size: 250_000 }
  }
}

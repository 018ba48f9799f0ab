use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Debug-map generation strategy handed to the build engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
  #[default]
  Eval,
  EvalSourceMap,
  SourceMap,
  HiddenSourceMap,
  InlineSourceMap,
}

impl Devtool {
  /// Whether the engine writes the map as its own output artifact.
  #[inline]
  pub fn emits_separate_file(&self) -> bool {
    matches!(self, Self::SourceMap | Self::HiddenSourceMap)
  }

  #[inline]
  pub fn references_map_in_bundle(&self) -> bool {
    !matches!(self, Self::HiddenSourceMap)
  }
}

impl Display for Devtool {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Eval => write!(f, "eval"),
      Self::EvalSourceMap => write!(f, "eval-source-map"),
      Self::SourceMap => write!(f, "source-map"),
      Self::HiddenSourceMap => write!(f, "hidden-source-map"),
      Self::InlineSourceMap => write!(f, "inline-source-map"),
    }
  }
}

impl FromStr for Devtool {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "eval" => Ok(Self::Eval),
      "eval-source-map" => Ok(Self::EvalSourceMap),
      "source-map" => Ok(Self::SourceMap),
      "hidden-source-map" => Ok(Self::HiddenSourceMap),
      "inline-source-map" => Ok(Self::InlineSourceMap),
      _ => Err(format!("Invalid devtool \"{s}\".")),
    }
  }
}

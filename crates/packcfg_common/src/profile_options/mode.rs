use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Optimization profile of a build. There is no third value; anything that is
/// not one of these two is rejected at the parse boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  #[default]
  Development,
  Production,
}

impl Mode {
  #[inline]
  pub fn is_production(&self) -> bool {
    matches!(self, Self::Production)
  }
}

impl Display for Mode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Development => write!(f, "development"),
      Self::Production => write!(f, "production"),
    }
  }
}

impl FromStr for Mode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "development" => Ok(Self::Development),
      "production" => Ok(Self::Production),
      _ => Err(format!("Invalid mode \"{s}\".")),
    }
  }
}

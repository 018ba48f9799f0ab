pub mod devtool;
pub mod filename_template;
pub mod input_item;
pub mod mode;
pub mod normalized_profile;
pub mod performance;
pub mod plugin_descriptor;

use serde::{Deserialize, Serialize};

use crate::{Devtool, InputItem, Mode, PerformanceOptions, PluginDescriptor};

/// Raw, partially-filled profile overrides. Every unset key falls back to the
/// default owned by the base factory. Serde names follow the option file
/// convention (`filenameTemplate`, `prependSources`, ...); unknown keys are a
/// hard error rather than a silently ignored typo.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfileOptions {
  // --- Input
  pub input: Option<Vec<InputItem>>,
  pub prepend_sources: Option<Vec<String>>,

  // --- Output
  pub filename_template: Option<String>,
  pub public_path: Option<String>,
  pub dir: Option<String>,

  // --- Profile
  pub mode: Option<Mode>,
  pub devtool: Option<Devtool>,
  pub named_modules: Option<bool>,
  pub minimize: Option<bool>,

  // --- Extensions
  pub plugins: Option<Vec<PluginDescriptor>>,
  pub performance: Option<PerformanceOptions>,
}

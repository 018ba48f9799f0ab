use serde::Serialize;

use crate::{
  Devtool, FilenameTemplate, InputItem, Mode, PerformanceOptions, PluginDescriptor,
};

/// The finished configuration handed to the build engine. Every key is
/// resolved; nothing in here is optional or lazily defaulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProfile {
  pub input: Vec<InputItem>,
  pub filename_template: FilenameTemplate,
  pub public_path: String,
  pub dir: String,
  pub mode: Mode,
  pub devtool: Devtool,
  pub named_modules: bool,
  pub minimize: bool,
  pub plugins: Vec<PluginDescriptor>,
  pub performance: PerformanceOptions,
}

impl NormalizedProfile {
  #[inline]
  pub fn is_production(&self) -> bool {
    self.mode.is_production()
  }

  /// The handoff artifact for engines that take their configuration as JSON.
  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }
}

use itertools::Itertools;
use packcfg_common::{
  Devtool, FilenameTemplate, Mode, NormalizedProfile, PerformanceHints, PerformanceOptions,
  PluginDescriptor, ProfileOptions,
};
use packcfg_error::{ConfigError, ConfigResult};

use crate::env::DEFAULT_PUBLIC_PATH;

pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Release templates carry a content hash so artifact names change with
/// their contents.
pub fn default_filename_template(mode: Mode) -> &'static str {
  match mode {
    Mode::Development => "[name]",
    Mode::Production => "[name]-[hash]",
  }
}

/// The standard base factory: defaults follow the selected mode, the way an
/// engine derives its optimization defaults from it. Overrides are applied on
/// top by `compose`; validation here is the only validation this layer does.
pub fn base_profile(options: &ProfileOptions) -> ConfigResult<NormalizedProfile> {
  validate(options)?;

  let mode = options.mode.unwrap_or_default();
  Ok(NormalizedProfile {
    input: Vec::new(),
    filename_template: FilenameTemplate::from(default_filename_template(mode)),
    public_path: DEFAULT_PUBLIC_PATH.to_string(),
    dir: DEFAULT_OUTPUT_DIR.to_string(),
    mode,
    devtool: match mode {
      Mode::Development => Devtool::Eval,
      Mode::Production => Devtool::SourceMap,
    },
    named_modules: !mode.is_production(),
    minimize: mode.is_production(),
    plugins: Vec::new(),
    performance: PerformanceOptions {
      hints: if mode.is_production() { PerformanceHints::Warning } else { PerformanceHints::Off },
      ..PerformanceOptions::default()
    },
  })
}

fn validate(options: &ProfileOptions) -> ConfigResult<()> {
  let mut errors = Vec::new();

  let mode = options.mode.unwrap_or_default();
  let template = FilenameTemplate::new(
    options
      .filename_template
      .clone()
      .unwrap_or_else(|| default_filename_template(mode).to_string()),
  );
  let mut missing = Vec::new();
  if !template.has_name_placeholder() {
    missing.push("[name]");
  }
  // Release artifacts are content-addressed; an unhashed template would
  // silently break cache busting.
  if mode.is_production() && !template.has_hash_placeholder() {
    missing.push("[hash]");
  }
  if !missing.is_empty() {
    errors.push(ConfigError::invalid_option(
      "filenameTemplate",
      format!(
        "\"{}\" is missing the {} placeholder.",
        template.template(),
        missing.iter().join(" and ")
      ),
    ));
  }

  if let Some(sources) = &options.prepend_sources {
    if sources.iter().any(|source| source.trim().is_empty()) {
      errors.push(ConfigError::invalid_option(
        "prependSources",
        "entries must be non-empty import specifiers.",
      ));
    }
  }

  if let Some(performance) = &options.performance {
    if performance.max_asset_size == 0 || performance.max_entrypoint_size == 0 {
      errors.push(ConfigError::invalid_option(
        "performance",
        "size thresholds must be greater than zero.",
      ));
    }
  }

  if errors.is_empty() { Ok(()) } else { Err(errors.into()) }
}

/// The release overlay: hashed artifact names, minification, full source
/// maps, CSS minification, and the deployment-specific public path. The
/// resolved path is an explicit argument so the one environment read stays at
/// the entry point.
pub fn production_profile(public_path: String) -> ProfileOptions {
  ProfileOptions {
    filename_template: Some("[name]-[hash]".to_string()),
    mode: Some(Mode::Production),
    devtool: Some(Devtool::SourceMap),
    named_modules: Some(false),
    minimize: Some(true),
    public_path: Some(public_path),
    prepend_sources: Some(Vec::new()),
    plugins: Some(vec![css_optimizer_plugin()]),
    performance: Some(PerformanceOptions {
      hints: PerformanceHints::Warning,
      ..PerformanceOptions::default()
    }),
    ..ProfileOptions::default()
  }
}

fn css_optimizer_plugin() -> PluginDescriptor {
  PluginDescriptor::new("optimize-css-assets").with_option(
    "preset",
    serde_json::json!(["default", { "discardComments": { "removeAll": true } }]),
  )
}

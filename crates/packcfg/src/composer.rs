use packcfg_common::{FilenameTemplate, InputItem, NormalizedProfile, ProfileOptions};
use packcfg_error::ConfigResult;
use packcfg_utils::sanitize_entry_name::sanitize_entry_name;

/// Composes a finished configuration from a base factory and an overlay of
/// overrides. The factory owns defaults and validation; the overlay step
/// replaces every key the caller actually set. Pure: no environment reads and
/// no logging happen in here.
pub fn compose<F>(base_factory: F, options: ProfileOptions) -> ConfigResult<NormalizedProfile>
where
  F: FnOnce(&ProfileOptions) -> ConfigResult<NormalizedProfile>,
{
  let base = base_factory(&options)?;
  Ok(apply_overrides(base, options))
}

// Shallow merge. A set key replaces the base value wholesale; keys left unset
// keep the factory default. No deep merge, no key renaming.
fn apply_overrides(mut profile: NormalizedProfile, options: ProfileOptions) -> NormalizedProfile {
  let ProfileOptions {
    input,
    prepend_sources,
    filename_template,
    public_path,
    dir,
    mode,
    devtool,
    named_modules,
    minimize,
    plugins,
    performance,
  } = options;

  if let Some(input) = input {
    profile.input = input;
  }
  if let Some(template) = filename_template {
    profile.filename_template = FilenameTemplate::new(template);
  }
  if let Some(public_path) = public_path {
    profile.public_path = public_path;
  }
  if let Some(dir) = dir {
    profile.dir = dir;
  }
  if let Some(mode) = mode {
    profile.mode = mode;
  }
  if let Some(devtool) = devtool {
    profile.devtool = devtool;
  }
  if let Some(named_modules) = named_modules {
    profile.named_modules = named_modules;
  }
  if let Some(minimize) = minimize {
    profile.minimize = minimize;
  }
  if let Some(plugins) = plugins {
    profile.plugins = plugins;
  }
  if let Some(performance) = performance {
    profile.performance = performance;
  }

  if let Some(sources) = prepend_sources {
    let mut entries: Vec<InputItem> = sources.into_iter().map(InputItem::from).collect();
    entries.append(&mut profile.input);
    profile.input = entries;
  }

  // Named entries feed the `[name]` placeholder and must stay filename-safe.
  for item in &mut profile.input {
    if let Some(name) = &mut item.name {
      *name = sanitize_entry_name(name);
    }
  }

  profile
}

/// Recovers the overridable keys from a finished configuration. Prepended
/// sources were already folded into `input`, so they come back as part of it.
pub fn extract_options(profile: &NormalizedProfile) -> ProfileOptions {
  ProfileOptions {
    input: Some(profile.input.clone()),
    prepend_sources: None,
    filename_template: Some(profile.filename_template.template().to_string()),
    public_path: Some(profile.public_path.clone()),
    dir: Some(profile.dir.clone()),
    mode: Some(profile.mode),
    devtool: Some(profile.devtool),
    named_modules: Some(profile.named_modules),
    minimize: Some(profile.minimize),
    plugins: Some(profile.plugins.clone()),
    performance: Some(profile.performance),
  }
}

#[cfg(test)]
mod tests {
  use packcfg_common::{Devtool, Mode, PerformanceHints, PluginDescriptor};

  use super::*;
  use crate::profiles::{base_profile, production_profile};

  #[test]
  fn composing_twice_yields_equal_profiles() {
    let options = production_profile("/assets/".to_string());
    let first = compose(base_profile, options.clone()).unwrap();
    let second = compose(base_profile, options).unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn unset_keys_keep_factory_defaults() {
    let options = ProfileOptions { minimize: Some(true), ..ProfileOptions::default() };
    let profile = compose(base_profile, options).unwrap();

    assert!(profile.minimize);
    assert_eq!(profile.mode, Mode::Development);
    assert_eq!(profile.devtool, Devtool::Eval);
    assert!(profile.named_modules);
    assert_eq!(profile.public_path, "/assets/");
    assert_eq!(profile.dir, "dist");
  }

  #[test]
  fn omitted_mode_falls_back_instead_of_failing() {
    let profile = compose(base_profile, ProfileOptions::default()).unwrap();
    assert_eq!(profile.mode, Mode::Development);
    assert!(!profile.is_production());
  }

  #[test]
  fn production_mode_alone_implies_minification() {
    let options = ProfileOptions { mode: Some(Mode::Production), ..ProfileOptions::default() };
    let profile = compose(base_profile, options).unwrap();
    assert!(profile.minimize);
    assert_eq!(profile.devtool, Devtool::SourceMap);
    assert!(profile.filename_template.has_hash_placeholder());
  }

  #[test]
  fn plugins_keep_order_and_identity() {
    let plugins = vec![
      PluginDescriptor::new("define"),
      PluginDescriptor::new("optimize-css-assets"),
      PluginDescriptor::new("banner"),
    ];
    let options = ProfileOptions { plugins: Some(plugins.clone()), ..ProfileOptions::default() };
    let profile = compose(base_profile, options).unwrap();
    assert_eq!(profile.plugins, plugins);
  }

  #[test]
  fn prepended_sources_come_before_the_main_entries() {
    let options = ProfileOptions {
      input: Some(vec![
        InputItem { name: Some("main".to_string()), import: "./src/index.js".to_string() },
      ]),
      prepend_sources: Some(vec!["./src/polyfills.js".to_string(), "./src/hmr.js".to_string()]),
      ..ProfileOptions::default()
    };
    let profile = compose(base_profile, options).unwrap();

    let imports: Vec<_> = profile.input.iter().map(|item| item.import.as_str()).collect();
    assert_eq!(imports, ["./src/polyfills.js", "./src/hmr.js", "./src/index.js"]);
  }

  #[test]
  fn entry_names_are_sanitized_for_filenames() {
    let options = ProfileOptions {
      input: Some(vec![
        InputItem { name: Some("webapp/main".to_string()), import: "./src/index.js".to_string() },
      ]),
      ..ProfileOptions::default()
    };
    let profile = compose(base_profile, options).unwrap();
    assert_eq!(profile.input[0].name.as_deref(), Some("webapp_main"));
  }

  #[test]
  fn production_overlay_applies_release_settings() {
    let options = production_profile("https://cdn.example.com/static/".to_string());
    let profile = compose(base_profile, options).unwrap();

    assert!(profile.is_production());
    assert!(profile.minimize);
    assert!(!profile.named_modules);
    assert_eq!(profile.devtool, Devtool::SourceMap);
    assert!(profile.devtool.emits_separate_file());
    assert_eq!(profile.public_path, "https://cdn.example.com/static/");
    assert_eq!(profile.filename_template.template(), "[name]-[hash]");
    assert!(profile.filename_template.has_hash_placeholder());
    assert_eq!(profile.performance.hints, PerformanceHints::Warning);
    assert_eq!(profile.plugins.len(), 1);
    assert_eq!(profile.plugins[0].name, "optimize-css-assets");
  }

  #[test]
  fn factory_rejection_propagates_as_config_error() {
    let options = ProfileOptions {
      filename_template: Some("bundle.js".to_string()),
      ..ProfileOptions::default()
    };
    let errors = compose(base_profile, options).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("filenameTemplate"));
  }

  #[test]
  fn production_without_hashed_template_is_rejected() {
    let options = ProfileOptions {
      filename_template: Some("[name].js".to_string()),
      mode: Some(Mode::Production),
      ..ProfileOptions::default()
    };
    let errors = compose(base_profile, options).unwrap_err();
    assert!(errors[0].to_string().contains("[hash]"));
  }

  #[test]
  fn extracted_options_recompose_to_the_same_profile() {
    let profile =
      compose(base_profile, production_profile("https://cdn.example.com/static/".to_string()))
        .unwrap();

    let extracted = extract_options(&profile);
    assert_eq!(extracted.filename_template.as_deref(), Some("[name]-[hash]"));
    assert_eq!(extracted.mode, Some(Mode::Production));
    assert_eq!(extracted.public_path.as_deref(), Some("https://cdn.example.com/static/"));

    let recomposed = compose(base_profile, extracted).unwrap();
    assert_eq!(recomposed, profile);
  }
}

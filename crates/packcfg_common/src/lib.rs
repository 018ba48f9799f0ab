mod profile_options;

pub use profile_options::{
  ProfileOptions,
  devtool::Devtool,
  filename_template::{FileNameRenderOptions, FilenameTemplate},
  input_item::InputItem,
  mode::Mode,
  normalized_profile::NormalizedProfile,
  performance::{PerformanceHints, PerformanceOptions},
  plugin_descriptor::PluginDescriptor,
};

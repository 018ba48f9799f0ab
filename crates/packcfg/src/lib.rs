mod composer;
mod diagnostics;
mod env;
mod profiles;

pub use crate::composer::{compose, extract_options};
pub use crate::diagnostics::report_profile;
pub use crate::env::{DEFAULT_PUBLIC_PATH, STATIC_URL_VAR, public_path_from_env, resolve_or_default};
pub use crate::profiles::{
  DEFAULT_OUTPUT_DIR, base_profile, default_filename_template, production_profile,
};
pub use packcfg_common::*;
pub use packcfg_error::{ConfigError, ConfigResult};

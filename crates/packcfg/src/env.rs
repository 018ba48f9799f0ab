use std::env;

/// Environment variable supplying the deployment-specific asset base path.
pub const STATIC_URL_VAR: &str = "STATIC_URL";

/// Fallback when no deployment path is configured. Builds still succeed and
/// assets are served root-relative.
pub const DEFAULT_PUBLIC_PATH: &str = "/assets/";

/// Explicit fallback instead of an or-on-falsy chain: only an absent value
/// falls back, a `Some` is kept verbatim — including the empty string, which
/// is a legitimate "serve from wherever the page lives" setting.
pub fn resolve_or_default(value: Option<String>, default: &str) -> String {
  value.unwrap_or_else(|| default.to_string())
}

/// The single environment read of this crate. Meant to be called at the
/// outermost entry point; `compose` itself never touches the environment.
pub fn public_path_from_env() -> String {
  resolve_or_default(env::var(STATIC_URL_VAR).ok(), DEFAULT_PUBLIC_PATH)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn absent_value_falls_back() {
    assert_eq!(resolve_or_default(None, DEFAULT_PUBLIC_PATH), "/assets/");
  }

  #[test]
  fn present_value_wins() {
    let resolved =
      resolve_or_default(Some("https://cdn.example.com/static/".to_string()), DEFAULT_PUBLIC_PATH);
    assert_eq!(resolved, "https://cdn.example.com/static/");
  }

  #[test]
  fn intentionally_empty_value_is_not_masked() {
    assert_eq!(resolve_or_default(Some(String::new()), DEFAULT_PUBLIC_PATH), "");
  }

  #[test]
  fn env_read_respects_set_and_unset() {
    let saved = env::var(STATIC_URL_VAR).ok();

    env::set_var(STATIC_URL_VAR, "https://cdn.example.com/static/");
    assert_eq!(public_path_from_env(), "https://cdn.example.com/static/");

    env::remove_var(STATIC_URL_VAR);
    assert_eq!(public_path_from_env(), DEFAULT_PUBLIC_PATH);

    match saved {
      Some(value) => env::set_var(STATIC_URL_VAR, value),
      None => env::remove_var(STATIC_URL_VAR),
    }
  }
}

use std::fmt::Display;
use std::ops::{Deref, DerefMut};

/// Failure of a profile composition. Carries every problem the base factory
/// found, not just the first one.
#[derive(Debug)]
pub struct ConfigError(pub Vec<anyhow::Error>);

impl ConfigError {
  /// The canonical `Invalid value for option "name" - reason.` message.
  pub fn invalid_option(option: &str, reason: impl Display) -> anyhow::Error {
    anyhow::anyhow!("Invalid value for option \"{option}\" - {reason}")
  }
}

impl Display for ConfigError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let mut first = true;
    for error in &self.0 {
      if !first {
        write!(f, "; ")?;
      }
      write!(f, "{error}")?;
      first = false;
    }
    Ok(())
  }
}

impl Deref for ConfigError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for ConfigError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for ConfigError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for ConfigError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type ConfigResult<T> = anyhow::Result<T, ConfigError>;

#[test]
fn test_invalid_option_message() {
  let error = ConfigError::invalid_option("mode", "expected \"development\" or \"production\".");
  assert_eq!(
    error.to_string(),
    "Invalid value for option \"mode\" - expected \"development\" or \"production\"."
  );
}

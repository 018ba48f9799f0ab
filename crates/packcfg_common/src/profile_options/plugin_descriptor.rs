use packcfg_utils::indexmap::FxIndexMap;
use serde::{Deserialize, Serialize};

/// An extension hook the build engine invokes during the build. The engine
/// resolves the name; this layer only carries descriptors through in the
/// order they were listed.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
  pub name: String,
  #[serde(default)]
  pub options: FxIndexMap<String, serde_json::Value>,
}

impl PluginDescriptor {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), options: FxIndexMap::default() }
  }

  #[must_use]
  pub fn with_option(mut self, key: &str, value: serde_json::Value) -> Self {
    self.options.insert(key.to_string(), value);
    self
  }
}

impl From<&str> for PluginDescriptor {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

use packcfg_utils::hash_pattern::extract_hash_pattern;
use serde::{Deserialize, Serialize};

/// Output artifact naming pattern. Supported placeholders are `[name]`,
/// `[hash]`/`[hash:len]` and `[ext]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilenameTemplate {
  template: String,
}

#[derive(Debug, Default)]
pub struct FileNameRenderOptions<'me> {
  pub name: Option<&'me str>,
  pub hash: Option<&'me str>,
  pub ext: Option<&'me str>,
}

impl FilenameTemplate {
  pub fn new(template: String) -> Self {
    Self { template }
  }

  pub fn template(&self) -> &str {
    &self.template
  }

  pub fn has_name_placeholder(&self) -> bool {
    self.template.contains("[name]")
  }

  pub fn has_hash_placeholder(&self) -> bool {
    extract_hash_pattern(&self.template).is_some()
  }

  pub fn render(&self, options: &FileNameRenderOptions) -> String {
    let mut rendered = self.template.clone();
    if let Some(name) = options.name {
      rendered = rendered.replace("[name]", name);
    }
    if let Some(hash) = options.hash {
      if let Some(pattern) = extract_hash_pattern(&rendered) {
        let len = pattern.len.unwrap_or(hash.len()).min(hash.len());
        rendered = rendered.replace(pattern.pattern.as_str(), &hash[..len]);
      }
    }
    if let Some(ext) = options.ext {
      rendered = rendered.replace("[ext]", ext);
    }
    rendered
  }
}

impl From<&str> for FilenameTemplate {
  fn from(value: &str) -> Self {
    Self::new(value.to_string())
  }
}

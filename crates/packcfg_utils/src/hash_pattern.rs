/// A `[hash]` or `[hash:len]` occurrence inside a filename template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashPattern {
  pub pattern: String,
  pub len: Option<usize>,
}

/// Finds the first hash placeholder in `template`. `[hash]` means the full
/// digest, `[hash:8]` the first 8 characters. Anything else between the
/// brackets is not a hash placeholder.
pub fn extract_hash_pattern(template: &str) -> Option<HashPattern> {
  let start = template.find("[hash")?;
  let rest = &template[start + "[hash".len()..];
  let suffix = &rest[..rest.find(']')?];

  let len: Option<usize> = if suffix.is_empty() {
    None
  } else {
    let digits = suffix.strip_prefix(':')?;
    Some(digits.parse().ok()?)
  };

  Some(HashPattern { pattern: format!("[hash{suffix}]"), len })
}

#[test]
fn test_extract_hash_pattern() {
  assert_eq!(
    extract_hash_pattern("[name]-[hash]"),
    Some(HashPattern { pattern: "[hash]".to_string(), len: None })
  );
  assert_eq!(
    extract_hash_pattern("[name]-[hash:8].js"),
    Some(HashPattern { pattern: "[hash:8]".to_string(), len: Some(8) })
  );
  assert_eq!(extract_hash_pattern("[name].js"), None);
  assert_eq!(extract_hash_pattern("[hashes]"), None);
  assert_eq!(extract_hash_pattern("[hash:]"), None);
}

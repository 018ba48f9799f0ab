/// Entry names end up inside `[name]` placeholders, so anything that is not
/// safe in a filename is replaced with `_`.
pub fn sanitize_entry_name(name: &str) -> String {
  name
    .chars()
    .map(|char| if char.is_ascii_alphanumeric() || matches!(char, '-' | '_') { char } else { '_' })
    .collect()
}

#[test]
fn test_sanitize_entry_name() {
  assert_eq!(sanitize_entry_name("webapp/main.bundle"), "webapp_main_bundle");
  assert_eq!(sanitize_entry_name("vendor-2024_x"), "vendor-2024_x");
}

pub mod hash_pattern;
pub mod indexmap;
pub mod sanitize_entry_name;

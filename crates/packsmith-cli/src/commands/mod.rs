pub mod completions;
pub mod manifest;
pub mod materials;
pub mod style_log;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_MATERIAL_ERROR: u8 = 3;

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_pretty_serializes_object() {
        let val = serde_json::json!({"format_version": 2});
        let result = json_pretty(&val).unwrap();
        assert!(result.contains("\"format_version\": 2"));
    }

    #[test]
    fn json_pretty_serializes_path_list() {
        let val = vec!["src/materials/Sky", "src/materials/Actor"];
        let result = json_pretty(&val).unwrap();
        assert!(result.starts_with('['));
        assert!(result.contains("src/materials/Sky"));
    }

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(EXIT_SUCCESS, EXIT_FAILURE);
        assert_ne!(EXIT_FAILURE, EXIT_CONFIG_ERROR);
        assert_ne!(EXIT_CONFIG_ERROR, EXIT_MATERIAL_ERROR);
    }
}

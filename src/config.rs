use std::path::Path;

use coordforge_core::FormatSpec;

use crate::error::CliError;

/// Load a JSON format description such as `{"zero": "L", "places": [2, 4]}`
pub fn load_format_spec(path: &Path) -> Result<FormatSpec, CliError> {
    let json = std::fs::read_to_string(path).map_err(|source| CliError::FormatFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&json).map_err(|source| CliError::FormatFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Combine the optional format file with command line overrides.
///
/// Flags win over the file, field by field.
pub fn resolve_format_spec(
    format_file: Option<&Path>,
    zero: Option<String>,
    places: Option<Vec<f64>>,
) -> Result<FormatSpec, CliError> {
    let mut spec = match format_file {
        Some(path) => {
            log::info!("Loading coordinate format from {}", path.display());
            load_format_spec(path)?
        }
        None => FormatSpec::default(),
    };

    if zero.is_some() {
        spec.zero = zero;
    }
    if places.is_some() {
        spec.places = places;
    }

    log::debug!("Resolved format options: {:?}", spec);
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_format_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_format_file() {
        let file = write_format_file(r#"{"zero": "L", "places": [2, 4]}"#);
        let spec = load_format_spec(file.path()).unwrap();
        assert_eq!(spec.zero.as_deref(), Some("L"));
        assert_eq!(spec.places, Some(vec![2.0, 4.0]));
    }

    #[test]
    fn test_flags_override_file() {
        let file = write_format_file(r#"{"zero": "L", "places": [2, 4]}"#);
        let spec =
            resolve_format_spec(Some(file.path()), Some("T".to_string()), None).unwrap();
        assert_eq!(spec.zero.as_deref(), Some("T"));
        assert_eq!(spec.places, Some(vec![2.0, 4.0]));
    }

    #[test]
    fn test_no_file_no_flags_is_empty() {
        let spec = resolve_format_spec(None, None, None).unwrap();
        assert_eq!(spec, FormatSpec::default());
    }

    #[test]
    fn test_bad_format_file() {
        let file = write_format_file("{\"zero\": ");
        assert!(matches!(
            load_format_spec(file.path()),
            Err(CliError::FormatFileParse { .. })
        ));

        let missing = Path::new("/nonexistent/coordforge/format.json");
        assert!(matches!(
            load_format_spec(missing),
            Err(CliError::FormatFileRead { .. })
        ));
    }
}

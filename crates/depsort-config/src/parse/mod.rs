//! Manifest parsing from TOML and JSON

use camino::Utf8Path;
use tracing::debug;

use depsort_core::error::DepsortError;

use crate::manifest::{validate_manifest, ServiceManifest};
use crate::ConfigResult;

/// Parse a TOML manifest
pub fn parse_toml_manifest(content: &str) -> ConfigResult<ServiceManifest> {
    let manifest: ServiceManifest = toml::from_str(content).map_err(|e| {
        let (line, column) = e
            .span()
            .map(|span| line_column(content, span.start))
            .unwrap_or((0, 0));
        DepsortError::ManifestParse {
            file: None,
            message: e.message().to_string(),
            line,
            column,
        }
    })?;

    validate_manifest(&manifest)?;
    Ok(manifest)
}

/// Parse a JSON manifest
pub fn parse_json_manifest(content: &str) -> ConfigResult<ServiceManifest> {
    let manifest: ServiceManifest =
        serde_json::from_str(content).map_err(|e| DepsortError::JsonParse {
            file: None,
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        })?;

    validate_manifest(&manifest)?;
    Ok(manifest)
}

/// Load and parse a manifest, choosing the format from the file extension
pub fn load_from_file(path: &Utf8Path) -> ConfigResult<ServiceManifest> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| DepsortError::io(format!("Failed to read {}", path), e))?;

    debug!(path = %path, bytes = content.len(), "Loaded manifest");

    let parsed = match path.extension() {
        Some("toml") => parse_toml_manifest(&content),
        Some("json") => parse_json_manifest(&content),
        _ => {
            return Err(DepsortError::config(
                "manifest",
                format!(
                    "Unsupported manifest format for {}, expected .toml or .json",
                    path
                ),
            ))
        },
    };

    parsed.map_err(|e| e.in_file(path.as_str()))
}

/// 1-based line and column of a byte offset
fn line_column(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset.min(content.len())];
    let line = before.matches('\n').count() + 1;
    let column = before
        .rfind('\n')
        .map(|newline| before.len() - newline)
        .unwrap_or(before.len() + 1);
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ServiceSpec;
    use camino::Utf8PathBuf;
    use depsort_core::types::TieBreak;

    const TOML_MANIFEST: &str = r#"
[settings]
tie-break = "lexical"

[services]
db = []
api = ["db"]
web = { depends-on = ["api", "cache"], description = "frontend" }
"#;

    #[test]
    fn test_parse_toml_manifest() {
        let manifest = parse_toml_manifest(TOML_MANIFEST).unwrap();

        assert_eq!(manifest.settings.tie_break, TieBreak::Lexical);
        assert_eq!(manifest.len(), 3);
        assert!(matches!(manifest.services.get("api"), Some(ServiceSpec::Simple(_))));

        let web = manifest.services.get("web").unwrap();
        assert_eq!(web.dependencies(), &["api".to_string(), "cache".to_string()]);
        assert_eq!(web.description(), Some("frontend"));
    }

    #[test]
    fn test_settings_default_when_absent() {
        let manifest = parse_toml_manifest("[services]\ndb = []\n").unwrap();
        assert_eq!(manifest.settings.tie_break, TieBreak::Registration);
    }

    #[test]
    fn test_toml_syntax_error_location() {
        let content = "[services]\ndb = [\n";
        match parse_toml_manifest(content) {
            Err(DepsortError::ManifestParse { line, .. }) => assert!(line >= 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_toml_invalid_tie_break() {
        let content = "[settings]\ntie-break = \"random\"\n[services]\ndb = []\n";
        assert!(matches!(
            parse_toml_manifest(content),
            Err(DepsortError::ManifestParse { .. })
        ));
    }

    #[test]
    fn test_parse_json_manifest() {
        let content = r#"{
            "settings": {"tie-break": "registration"},
            "services": {
                "db": [],
                "api": {"depends-on": ["db"]}
            }
        }"#;

        let manifest = parse_json_manifest(content).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(
            manifest.services.get("api").unwrap().dependencies(),
            &["db".to_string()]
        );
    }

    #[test]
    fn test_json_syntax_error() {
        assert!(matches!(
            parse_json_manifest("{\"services\": "),
            Err(DepsortError::JsonParse { .. })
        ));
    }

    #[test]
    fn test_misspelled_service_key_is_rejected() {
        let content = "[services]\ndb = []\nweb = { depends_on = [\"db\"] }\n";
        assert!(matches!(
            parse_toml_manifest(content),
            Err(DepsortError::ManifestParse { .. })
        ));

        let content = r#"{"services": {"db": [], "web": {"depends_on": ["db"]}}}"#;
        assert!(matches!(
            parse_json_manifest(content),
            Err(DepsortError::JsonParse { .. })
        ));
    }

    #[test]
    fn test_misspelled_setting_is_rejected() {
        let content = "[settings]\ntie_break = \"lexical\"\n\n[services]\ndb = []\n";
        match parse_toml_manifest(content) {
            Err(DepsortError::ManifestParse { message, .. }) => {
                assert!(message.contains("tie_break"), "message: {}", message)
            },
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_top_level_section_is_rejected() {
        let content = "[service]\ndb = []\n";
        assert!(matches!(
            parse_toml_manifest(content),
            Err(DepsortError::ManifestParse { .. })
        ));
    }

    #[test]
    fn test_load_from_file_by_extension() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();

        let toml_path = root.join("depsort.toml");
        std::fs::write(&toml_path, TOML_MANIFEST).unwrap();
        assert_eq!(load_from_file(&toml_path).unwrap().len(), 3);

        let json_path = root.join("depsort.json");
        std::fs::write(&json_path, r#"{"services": {"db": []}}"#).unwrap();
        assert_eq!(load_from_file(&json_path).unwrap().len(), 1);

        let yaml_path = root.join("depsort.yaml");
        std::fs::write(&yaml_path, "services: {}").unwrap();
        assert!(matches!(
            load_from_file(&yaml_path),
            Err(DepsortError::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_from_file(Utf8Path::new("/nonexistent/depsort.toml"));
        assert!(matches!(result, Err(DepsortError::Io { .. })));
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();

        let path = root.join("broken.json");
        std::fs::write(&path, "{\n  \"services\": ]\n}").unwrap();
        let err = load_from_file(&path).unwrap_err();
        let location = err.location().unwrap();
        assert!(location.starts_with(&format!("{}:2:", path)), "location: {}", location);

        let path = root.join("broken.toml");
        std::fs::write(&path, "[services]\ndb = [\n").unwrap();
        let err = load_from_file(&path).unwrap_err();
        let location = err.location().unwrap();
        assert!(location.starts_with(&format!("{}:", path)), "location: {}", location);
    }

    #[test]
    fn test_line_column() {
        let content = "ab\ncd\nef";
        assert_eq!(line_column(content, 0), (1, 1));
        assert_eq!(line_column(content, 4), (2, 2));
        assert_eq!(line_column(content, 6), (3, 1));
    }
}

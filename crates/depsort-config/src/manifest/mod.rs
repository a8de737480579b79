//! Service manifest types and validation

use indexmap::IndexMap;
use serde::Deserialize;

use depsort_core::error::DepsortError;
use depsort_core::types::{Service, TieBreak};
use depsort_core::utils::is_valid_service_name;

use crate::ConfigResult;

/// Complete service manifest
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceManifest {
    /// Ordering settings
    #[serde(default)]
    pub settings: Settings,

    /// Services in declaration order
    #[serde(default)]
    pub services: IndexMap<String, ServiceSpec>,
}

/// Ordering settings section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    /// Rule for services that become ready at the same time
    #[serde(default)]
    pub tie_break: TieBreak,
}

/// Service entry (dependency list or detailed table)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ServiceSpec {
    /// Plain list of dependency names
    Simple(Vec<String>),

    /// Table with dependencies and a description
    Detailed(DetailedService),
}

/// Table form of a service entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DetailedService {
    /// Dependency names
    #[serde(default)]
    pub depends_on: Vec<String>,

    /// Human-readable description
    pub description: Option<String>,
}

impl ServiceSpec {
    /// Dependency names declared by this entry
    pub fn dependencies(&self) -> &[String] {
        match self {
            ServiceSpec::Simple(deps) => deps,
            ServiceSpec::Detailed(detailed) => &detailed.depends_on,
        }
    }

    /// Description if present
    pub fn description(&self) -> Option<&str> {
        match self {
            ServiceSpec::Simple(_) => None,
            ServiceSpec::Detailed(detailed) => detailed.description.as_deref(),
        }
    }
}

impl ServiceManifest {
    /// Services declared by this manifest, in declaration order
    pub fn services(&self) -> impl Iterator<Item = Service> + '_ {
        self.services.iter().map(|(name, spec)| {
            Service::with_dependencies(name.as_str(), spec.dependencies().iter().cloned())
        })
    }

    /// Description of a declared service
    pub fn description(&self, name: &str) -> Option<&str> {
        self.services.get(name).and_then(ServiceSpec::description)
    }

    /// Number of declared services
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Check if no service is declared
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// Validate manifest completeness
pub fn validate_manifest(manifest: &ServiceManifest) -> ConfigResult<()> {
    if manifest.is_empty() {
        return Err(DepsortError::config(
            "services",
            "Manifest must declare at least one service",
        ));
    }

    for (name, spec) in &manifest.services {
        if !is_valid_service_name(name) {
            return Err(DepsortError::config(
                "services",
                format!(
                    "Invalid service name '{}'. Names must be non-empty and contain no whitespace",
                    name
                ),
            ));
        }

        for dependency in spec.dependencies() {
            if !is_valid_service_name(dependency) {
                return Err(DepsortError::config(
                    format!("services.{}", name),
                    format!("Invalid dependency name '{}'", dependency),
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(entries: &[(&str, ServiceSpec)]) -> ServiceManifest {
        ServiceManifest {
            settings: Settings::default(),
            services: entries
                .iter()
                .map(|(name, spec)| (name.to_string(), spec.clone()))
                .collect(),
        }
    }

    fn simple(deps: &[&str]) -> ServiceSpec {
        ServiceSpec::Simple(deps.iter().map(|d| d.to_string()).collect())
    }

    #[test]
    fn test_spec_accessors() {
        let detailed = ServiceSpec::Detailed(DetailedService {
            depends_on: vec!["db".to_string()],
            description: Some("REST API".to_string()),
        });

        assert_eq!(detailed.dependencies(), &["db".to_string()]);
        assert_eq!(detailed.description(), Some("REST API"));
        assert_eq!(simple(&["a"]).description(), None);

        let manifest = manifest(&[("api", detailed), ("db", simple(&[]))]);
        assert_eq!(manifest.description("api"), Some("REST API"));
        assert_eq!(manifest.description("db"), None);
        assert_eq!(manifest.description("cache"), None);
    }

    #[test]
    fn test_services_keep_declaration_order() {
        let manifest = manifest(&[
            ("web", simple(&["api"])),
            ("api", simple(&[])),
            ("db", simple(&[])),
        ]);

        let names: Vec<String> = manifest.services().map(|s| s.name).collect();
        assert_eq!(names, vec!["web", "api", "db"]);
    }

    #[test]
    fn test_validate_accepts_missing_dependencies() {
        // Undeclared dependencies are a graph concern, not a manifest error
        let manifest = manifest(&[("api", simple(&["db"]))]);
        assert!(validate_manifest(&manifest).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_manifest() {
        let result = validate_manifest(&ServiceManifest::default());
        assert!(matches!(result, Err(DepsortError::ConfigValidation { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        let bad_service = manifest(&[("my service", simple(&[]))]);
        assert!(validate_manifest(&bad_service).is_err());

        let bad_dependency = manifest(&[("api", simple(&[""]))]);
        match validate_manifest(&bad_dependency) {
            Err(DepsortError::ConfigValidation { field, .. }) => assert_eq!(field, "services.api"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}

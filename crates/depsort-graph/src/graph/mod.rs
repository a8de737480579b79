//! Dependency graph construction
//!
//! Services are accumulated into three registration-ordered maps: the
//! service records, the reverse edges (dependents of each id) and the
//! declared in-degree of each service. The sorter and the cycle detector
//! read these maps; nothing here validates the edges.

use indexmap::IndexMap;
use tracing::trace;

use depsort_core::types::Service;

/// Service dependency graph
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Registered services by name
    pub(crate) services: IndexMap<String, Service>,
    /// Reverse edges: id -> services that declared it as a dependency
    pub(crate) dependents: IndexMap<String, Vec<String>>,
    /// Number of dependencies each service declared when last registered
    pub(crate) in_degree: IndexMap<String, usize>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a sequence of services
    pub fn from_services(services: impl IntoIterator<Item = Service>) -> Self {
        services.into_iter().collect()
    }

    /// Register a service, overwriting any previous service with the same name
    ///
    /// Edges appended by an earlier registration of the same name are kept.
    pub fn add_service(&mut self, service: Service) {
        for dependency in &service.dependencies {
            self.dependents
                .entry(dependency.clone())
                .or_default()
                .push(service.name.clone());
        }

        self.in_degree
            .insert(service.name.clone(), service.dependencies.len());

        let name = service.name.clone();
        if self.services.insert(name, service).is_some() {
            trace!("Service re-registered, previous edges retained");
        }
    }

    /// Register a service from its name and dependency list
    pub fn add_entity<I, S>(&mut self, name: impl Into<String>, dependencies: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_service(Service::with_dependencies(name, dependencies));
    }

    /// Get number of registered services
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Check if no service has been registered
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Check if a service with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    /// Get a registered service by name
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.get(name)
    }

    /// All registered services in registration order
    pub fn services(&self) -> impl Iterator<Item = &Service> {
        self.services.values()
    }

    /// Services that declared `name` as a dependency, in declaration order
    pub fn dependents(&self, name: &str) -> &[String] {
        self.dependents
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Declared in-degree of a registered service
    pub fn in_degree(&self, name: &str) -> Option<usize> {
        self.in_degree.get(name).copied()
    }

    /// Dependency names that were never registered as services
    ///
    /// Returned in the order they were first declared.
    pub fn missing_dependencies(&self) -> Vec<&str> {
        self.dependents
            .keys()
            .filter(|name| !self.services.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }
}

impl FromIterator<Service> for DependencyGraph {
    fn from_iter<T: IntoIterator<Item = Service>>(iter: T) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl Extend<Service> for DependencyGraph {
    fn extend<T: IntoIterator<Item = Service>>(&mut self, iter: T) {
        for service in iter {
            self.add_service(service);
        }
    }
}

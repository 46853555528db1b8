//! Keyed cache of shared mesh handles.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::mesh::Mesh;

/// Cache of meshes keyed by resource name.
///
/// Repeated lookups of the same key return clones of one shared handle, so
/// geometry is built at most once per key and every node referencing it
/// shares the same data.
#[derive(Debug, Default)]
pub struct MeshRegistry {
    meshes: HashMap<String, Arc<Mesh>>,
}

impl MeshRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a mesh is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.meshes.contains_key(name)
    }

    /// Register a mesh under `name`, returning its shared handle.
    ///
    /// An existing mesh under the same name is replaced.
    pub fn insert(&mut self, name: impl Into<String>, mesh: Mesh) -> Arc<Mesh> {
        let handle = Arc::new(mesh);
        self.meshes.insert(name.into(), handle.clone());
        handle
    }

    /// Look up the mesh registered under `name`.
    pub fn get(&self, name: &str) -> Option<Arc<Mesh>> {
        self.meshes.get(name).cloned()
    }

    /// Look up `name`, building and caching the mesh on first use.
    pub fn get_or_insert_with(&mut self, name: &str, build: impl FnOnce() -> Mesh) -> Arc<Mesh> {
        if let Some(handle) = self.meshes.get(name) {
            return handle.clone();
        }
        debug!("Building mesh '{}'", name);
        self.insert(name, build())
    }

    /// Number of registered meshes.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

//! Resource loading and management.
//!
//! This crate handles the renderer's external and shared data:
//! - Path configuration loading (bottle path control points)
//! - Mesh data with procedural constructors
//! - A keyed registry of shared mesh handles

pub mod config;
pub mod error;
pub mod mesh;
pub mod registry;

pub use config::PathConfig;
pub use error::{ResourceError, ResourceResult};
pub use mesh::Mesh;
pub use registry::MeshRegistry;

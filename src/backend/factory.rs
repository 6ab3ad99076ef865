//! Backend factory for creating backend instances from configuration.

use anyhow::{Context, Result};
use std::sync::Arc;

use super::{http::HttpBackend, memory::MemoryBackend, ChunkBackend};
use crate::config::{BackendKind, ServiceConfig};

/// Create the backend selected by the `[service]` config section.
///
/// # Arguments
/// * `service` - The service configuration
/// * `project_id` - Project the demo store is seeded for
///
/// # Errors
/// Returns error if the HTTP client cannot be built
pub fn create_backend(service: &ServiceConfig, project_id: &str) -> Result<Arc<dyn ChunkBackend>> {
    match service.backend {
        BackendKind::Http => {
            let backend = HttpBackend::new(&service.base_url, service.api_token(), service.timeout())
                .with_context(|| format!("Failed to create HTTP backend for {}", service.base_url))?;
            Ok(Arc::new(backend))
        }
        BackendKind::Memory => Ok(Arc::new(MemoryBackend::with_demo_data(project_id))),
    }
}

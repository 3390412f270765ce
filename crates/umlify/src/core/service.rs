//! Diagram rendering service abstraction
//!
//! The rendering service is an external collaborator: markup text goes in,
//! a fetchable image URL comes out. Callers construct a service and inject
//! it where it is needed; there is no process-wide client.

use anyhow::Result;

/// A remote service able to render diagram markup
pub trait DiagramService: Send + Sync {
    /// Build the URL under which the rendered diagram can be fetched
    fn diagram_url(&self, markup: &str) -> Result<String>;

    /// Get the name of this service
    fn name(&self) -> &'static str;
}

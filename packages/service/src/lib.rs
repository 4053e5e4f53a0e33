//! # Pagecraft Service
//!
//! The content-service boundary: everything the site consumes from the
//! remote backend, expressed as an async trait object.
//!
//! The workspace is a consumer only. It never implements a network surface;
//! the exact transport behind [`ContentService`] is a collaborator's concern.
//! [`InMemoryContentService`] is the reference backend used by tests and the
//! CLI demo flow.

mod error;
mod handle;
mod memory;
mod service;

pub use error::ServiceError;
pub use handle::ServiceHandle;
pub use memory::InMemoryContentService;
pub use service::ContentService;

//! # Pagecraft Store
//!
//! Client-side content store: read-through caching of the Draft and Live
//! copies, bounded retry on loads, and deterministic cache invalidation
//! after save and publish.
//!
//! ## Lifecycle
//!
//! ```text
//! live()/draft() ──► cached & fresh? ──► return copy
//!                        │ no
//!                        ▼
//!                  fetch (retry ×2, 1000 ms) ──► store, bump version
//!
//! save_draft() ──► update remote ──► invalidate Draft slot only
//!
//! publish()    ──► publish remote ──► stale Draft + Live
//!                                 ──► eager Live refetch (non-fatal)
//! ```
//!
//! Consumers of Live content subscribe to [`CacheEvent`]s instead of sharing
//! a query-key space with the editor: on `Refreshed { slot: Live, .. }` they
//! re-read, which is how the public page updates in the same interaction
//! that triggered publish.

mod cache;
mod store;

pub use cache::{CacheEvent, CacheSlot, ContentCache, SlotState};
pub use store::{ContentStore, PublishOutcome, RetryPolicy, StoreError};

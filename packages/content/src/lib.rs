//! # Pagecraft Content
//!
//! Typed content model for the editable marketing site, plus the hero
//! layout resolver.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ content: WebsiteContent + layout resolver   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ store: Draft/Live caching + invalidation    │
//! │ editor: form state machine + publish gate   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: WebsiteContent → page        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Two lifecycle copies**: Draft is the sole mutable working copy;
//!    Live is replaced wholesale by publish, never partially merged.
//! 2. **Canonical enums**: alignment values are tagged enums everywhere;
//!    string reconciliation happens once, at the boundary.
//! 3. **Total layout resolution**: every alignment pair maps to an explicit
//!    directive; missing or unknown input degrades to a default, never errors.

mod layout;
mod model;

pub use layout::{
    resolve_cross_axis, resolve_image_focal_point, resolve_text_align, CrossAxis, FocalPoint,
    TextAlign,
};
pub use model::{
    Alignment, HeroContent, Position, Section, UserProfile, UserRole, VerticalAlignment,
    WebsiteContent,
};

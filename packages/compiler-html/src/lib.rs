//! # Pagecraft HTML Compiler
//!
//! Compiles a `WebsiteContent` document into a static HTML page: the public
//! read path made concrete. Placement of the hero elements goes through the
//! layout resolver, so the page and the editor preview agree on what a
//! `Position` means.

mod compiler;

pub use compiler::{compile_page, CompileOptions};

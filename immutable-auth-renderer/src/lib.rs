//! # immutable-auth-renderer
//!
//! Tera-based engine that renders the immutable-auth Solidity document: a
//! shared `immutableFactory` header followed by one `immutable<Name>` contract
//! per manifest entry.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use immutable_auth_core::Manifest;
//! use immutable_auth_renderer::Renderer;
//!
//! fn print_bundled() {
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(doc) = renderer.render(&Manifest::bundled()) {
//!             print!("{doc}");
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::BlockContext;
pub use engine::{render, Renderer, TemplateEngine};
pub use error::RenderError;

//! # tagsync-codegen
//!
//! Metadata-driven generator for per-service AWS update-tags functions.
//!
//! Each generated function reconciles a resource's tags from an old set to a
//! new set: it removes the keys that disappeared, then adds or overwrites the
//! keys that are new or changed. Services differ only in API shape (operation
//! names, field names, payload encodings), and those differences live in the
//! [`registry`] as total functions of the service identifier.
//!
//! ## Pipeline
//!
//! ```text
//! SERVICE_NAMES ─▶ sort ─▶ ServiceMetadata::resolve ─▶ Renderer (Tera)
//!                                                         │
//!              atomic_write ◀─ format_source (syn + prettyplease)
//! ```
//!
//! [`plan::plan_update`] follows the same control flow against concrete tag
//! sets, which is useful for checking what a generated function would send.

pub mod error;
pub mod format;
pub mod generate;
pub mod plan;
pub mod registry;
pub mod render;
pub mod writer;

pub use error::CodegenError;
pub use generate::{GenerationReport, Generator, DEFAULT_OUTPUT};
pub use plan::{plan_update, PlannedCall};
pub use registry::{ServiceMetadata, SERVICE_NAMES};
pub use render::Renderer;

//! Key/value tag sets for reconciling resource tags.
//!
//! This crate is the runtime half of the update-tags generator: every function
//! emitted by `tagsync-codegen` converts its previous and desired tags into a
//! [`KeyValueTags`], computes the [`removed`](KeyValueTags::removed) and
//! [`updated`](KeyValueTags::updated) partitions, and reports API failures as
//! [`UpdateTagsError`].
//!
//! # Modules
//!
//! - [`key_value_tags`] - The ordered tag set and its diff/chunk/filter operations
//! - [`normalize`] - Conversions from pair lists, maps, native tag lists and JSON values
//! - [`error`] - Tag set and generated-code error types

pub mod error;
pub mod key_value_tags;
pub mod normalize;

pub use error::{TagsError, UpdateTagsError};
pub use key_value_tags::{KeyValueTags, Tag, AWS_TAG_KEY_PREFIX};

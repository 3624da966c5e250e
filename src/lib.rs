#![warn(
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    rust_2021_compatibility
)]
// #![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

//! Recovers human-readable names for an obfuscated revision of a JVM artifact
//! by structurally matching it against a previously-named revision.
//!
//! Classes, methods, and fields from both revisions are loaded into a shared
//! [`model::World`], matched by a weighted classifier pipeline, and the
//! resulting one-to-one correspondence is read back off each symbol's
//! `match_cell`.
//! ## Features
#![doc = document_features::document_features!()]

pub mod classifier;
pub mod code;
pub mod compare;
pub mod config;
pub mod error;
pub mod matcher;
pub mod model;
pub mod similarity;
pub mod types;
pub mod walker;

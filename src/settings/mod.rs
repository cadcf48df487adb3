//! Settings resolution engine.
//!
//! This module implements the core of the client's configuration system:
//!
//! - [`source`] - the total order over update origins and the precedence
//!   comparator (inverted for policy settings).
//! - [`setting`] - one named value with its preprocess/validate/derive
//!   pipeline.
//! - [`registry`] - the [`Settings`] aggregate: bulk updates, freezing,
//!   copying, typed and computed accessors, snapshot export.
//! - [`value`] - shared coercion helpers over `serde_json::Value`.
//!
//! The declared schema itself (names, defaults, pipelines, dependency
//! lists) lives in the [`schema`](crate::schema) module.
//!
//! ## Precedence
//!
//! Ordinary settings: higher-ranked sources win (`env` beats `workspace`
//! beats `system`, ...). Policy settings invert the comparison so central
//! sources win (`entity` beats `project`). `override` beats everything.

pub mod registry;
pub mod setting;
pub mod source;
pub mod value;

pub use registry::{ConsoleMode, Settings};
pub use setting::{Deriver, Preprocessor, Setting, Validator};
pub use source::Source;

//! Translates Go-subset programs into Arduino sketches.
//!
//! ## Modules
//!
//! - [`overrides`] - exact-match identifier overrides loaded from JSON
//! - [`registry`] - recognized hardware controllers (`serial`, `wifi`)
//! - [`imports`] - include directives required by import declarations
//! - [`resolve`] - identifier and selector resolution
//! - [`sketch`] - the sketch generator
//! - [`translate`] - stream-level runs
//!
//! Resolution precedence is: override table, then controller registry, then
//! pass-through. See [`resolve`] for details.

#![forbid(unsafe_code)]

mod error;
pub mod imports;
pub mod overrides;
pub mod registry;
pub mod resolve;
pub mod sketch;
pub mod translate;

pub use error::{Result, TranslateError};
pub use overrides::{OverrideError, OverrideTable};
pub use registry::{Controller, ControllerRegistry};
pub use resolve::SelectorResolver;
pub use sketch::{
    compile_to_sketch, compile_to_sketch_with_options, type_to_sketch, SketchCodegen,
    SketchCodegenOptions,
};
pub use translate::Translator;

#[cfg(feature = "parser")]
pub use translate::translate;

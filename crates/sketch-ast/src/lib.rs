//! Program tree for the Go subset translated into Arduino sketches.
//!
//! The tree is produced once by a parser and only ever read afterwards.
//! Expressions are a tagged variant (identifier, selector, literal, call, ...)
//! so consumers match on shape instead of re-splitting dotted strings.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod ast;

#[cfg(feature = "alloc")]
pub mod pretty;

#[cfg(feature = "alloc")]
pub use ast::*;

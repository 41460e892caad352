//! Parser for the Go subset translated into Arduino sketches.
//!
//! This crate provides a parser built on the `nom` parsing library. It turns
//! source text into a [`sketch_ast::Program`] or a positioned [`ParseError`].

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod parser;

#[cfg(feature = "alloc")]
pub use parser::*;

//! Stream-level translation runs.
//!
//! A run reads the whole input, parses it, generates the sketch in memory and
//! only then writes it out, so nothing reaches the sink when parsing fails.

use std::fmt::Display;
use std::io::{Read, Write};
#[cfg(feature = "parser")]
use std::path::Path;

use log::debug;
use sketch_ast::Program;

use crate::error::{Result, TranslateError};
use crate::overrides::OverrideTable;
use crate::registry::ControllerRegistry;
use crate::sketch::{SketchCodegen, SketchCodegenOptions};

/// Translates programs against shared, read-only lookup tables.
///
/// A `Translator` holds only references, so any number of them may run
/// concurrently over the same tables.
#[derive(Clone, Debug)]
pub struct Translator<'a> {
    overrides: &'a OverrideTable,
    registry: &'a ControllerRegistry,
    options: SketchCodegenOptions,
}

impl<'a> Translator<'a> {
    pub fn new(overrides: &'a OverrideTable, registry: &'a ControllerRegistry) -> Self {
        Self {
            overrides,
            registry,
            options: SketchCodegenOptions::default(),
        }
    }

    /// Replace the code generation options.
    pub fn with_options(mut self, options: SketchCodegenOptions) -> Self {
        self.options = options;
        self
    }

    /// Translate an already parsed program.
    pub fn translate_program(&self, program: &Program) -> String {
        SketchCodegen::with_options(self.overrides, self.registry, self.options.clone())
            .generate(program)
    }

    /// Read source from `input`, parse it with `parse`, and write the sketch to `output`.
    ///
    /// Parse errors are reported through their `Display` text.
    pub fn translate_with<R, W, F, E>(&self, mut input: R, mut output: W, parse: F) -> Result<()>
    where
        R: Read,
        W: Write,
        F: FnOnce(&str) -> std::result::Result<Program, E>,
        E: Display,
    {
        let mut source = String::new();
        input.read_to_string(&mut source)?;
        debug!("read {} bytes of source", source.len());

        let program = parse(&source).map_err(|e| TranslateError::Parse(e.to_string()))?;
        let sketch = self.translate_program(&program);

        output.write_all(sketch.as_bytes())?;
        output.flush()?;
        debug!("wrote {} bytes of sketch", sketch.len());
        Ok(())
    }

    /// Parse and translate source text.
    #[cfg(feature = "parser")]
    pub fn translate_source(&self, source: &str) -> Result<String> {
        let program =
            sketch_parser::parse_program(source).map_err(|e| TranslateError::Parse(e.to_string()))?;
        Ok(self.translate_program(&program))
    }

    /// Stream translation using the bundled parser.
    #[cfg(feature = "parser")]
    pub fn translate<R: Read, W: Write>(&self, input: R, output: W) -> Result<()> {
        self.translate_with(input, output, sketch_parser::parse_program)
    }
}

/// One complete run: load overrides from `mapping`, then translate `input` into `output`
/// with the built-in controller registry.
#[cfg(feature = "parser")]
pub fn translate<R: Read, W: Write>(input: R, output: W, mapping: impl AsRef<Path>) -> Result<()> {
    let overrides = OverrideTable::load(mapping)?;
    let registry = ControllerRegistry::builtin();
    Translator::new(&overrides, &registry).translate(input, output)
}

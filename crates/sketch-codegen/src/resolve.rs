//! Identifier and selector resolution.
//!
//! Resolution order for `object.member`:
//!
//! 1. An exact override for the dotted string replaces it outright.
//! 2. A registered `object` becomes `<Controller>.<member with lower-case first char>`,
//!    so `serial.Begin` becomes `Serial.begin`.
//! 3. Otherwise both segments pass through unchanged.
//!
//! Bare identifiers only consult the override table.

use log::trace;

use crate::overrides::OverrideTable;
use crate::registry::ControllerRegistry;

/// Resolves identifiers against the override table and controller registry.
#[derive(Clone, Copy, Debug)]
pub struct SelectorResolver<'a> {
    overrides: &'a OverrideTable,
    registry: &'a ControllerRegistry,
}

impl<'a> SelectorResolver<'a> {
    pub fn new(overrides: &'a OverrideTable, registry: &'a ControllerRegistry) -> Self {
        Self { overrides, registry }
    }

    /// Resolve a bare identifier.
    pub fn resolve_identifier(&self, name: &str) -> String {
        match self.overrides.lookup(name) {
            Some(replacement) => {
                trace!("override `{}` -> `{}`", name, replacement);
                replacement.to_string()
            }
            None => name.to_string(),
        }
    }

    /// Resolve a qualified selector `object.member`.
    pub fn resolve_selector(&self, object: &str, member: &str) -> String {
        let dotted = format!("{}.{}", object, member);

        if let Some(replacement) = self.overrides.lookup(&dotted) {
            trace!("override `{}` -> `{}`", dotted, replacement);
            return replacement.to_string();
        }

        if let Some(controller) = self.registry.lookup(object) {
            let resolved = format!("{}.{}", controller.object, lower_first(member));
            trace!("controller `{}` -> `{}`", dotted, resolved);
            return resolved;
        }

        dotted
    }
}

/// Lower-case the first character, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides() -> OverrideTable {
        [("digital.Low", "LOW"), ("serial.Flush", "Serial.flushAll"), ("PI", "3.14")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("Begin"), "begin");
        assert_eq!(lower_first("LocalIP"), "localIP");
        assert_eq!(lower_first("println"), "println");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_registry_substitution() {
        let (overrides, registry) = (overrides(), ControllerRegistry::builtin());
        let resolver = SelectorResolver::new(&overrides, &registry);
        assert_eq!(resolver.resolve_selector("serial", "Begin"), "Serial.begin");
        assert_eq!(resolver.resolve_selector("wifi", "LocalIP"), "WiFi.localIP");
    }

    #[test]
    fn test_override_wins_over_registry() {
        let (overrides, registry) = (overrides(), ControllerRegistry::builtin());
        let resolver = SelectorResolver::new(&overrides, &registry);
        assert_eq!(resolver.resolve_selector("serial", "Flush"), "Serial.flushAll");
        assert_eq!(resolver.resolve_selector("digital", "Low"), "LOW");
    }

    #[test]
    fn test_unknown_object_passes_through() {
        let (overrides, registry) = (overrides(), ControllerRegistry::builtin());
        let resolver = SelectorResolver::new(&overrides, &registry);
        assert_eq!(resolver.resolve_selector("foo", "Bar"), "foo.Bar");
        assert_eq!(resolver.resolve_selector("Serial", "Begin"), "Serial.Begin");
        assert_eq!(resolver.resolve_selector("digital", "High"), "digital.High");
    }

    #[test]
    fn test_bare_identifiers_skip_registry() {
        let (overrides, registry) = (overrides(), ControllerRegistry::builtin());
        let resolver = SelectorResolver::new(&overrides, &registry);
        assert_eq!(resolver.resolve_identifier("serial"), "serial");
        assert_eq!(resolver.resolve_identifier("PI"), "3.14");
        assert_eq!(resolver.resolve_identifier("x"), "x");
    }
}

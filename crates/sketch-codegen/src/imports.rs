//! Import resolution.
//!
//! Only the trailing segment of an import path matters: it is looked up in
//! the [`ControllerRegistry`] and, when the facility needs a header, that
//! header is included once. Everything else is dropped without error.

use log::debug;
use sketch_ast::Import;

use crate::registry::ControllerRegistry;

/// Headers required by `imports`, deduplicated, in first-encounter order.
pub fn required_headers<'r>(imports: &[Import], registry: &'r ControllerRegistry) -> Vec<&'r str> {
    let mut headers: Vec<&'r str> = Vec::new();

    for import in imports {
        let segment = import.path.trailing_segment();
        let header = registry
            .lookup(segment)
            .and_then(|controller| controller.header.as_deref());

        match header {
            Some(header) if !headers.contains(&header) => {
                debug!("import `{}` requires <{}>", import.path.as_str(), header);
                headers.push(header);
            }
            Some(_) => {}
            None => debug!("import `{}` needs no include", import.path.as_str()),
        }
    }

    headers
}

/// Format an include directive for `header`.
pub fn include_directive(header: &str) -> String {
    format!("#include <{}>", header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_headers_are_collected() {
        let imports = vec![
            Import::new("github.com/andygeiss/esp32-mqtt/api/controller"),
            Import::new("github.com/andygeiss/esp32-mqtt/api/controller/serial"),
            Import::new("github.com/andygeiss/esp32/api/controller/timer"),
            Import::aliased("wifi", "github.com/andygeiss/esp32/api/controller/wifi"),
        ];
        let registry = ControllerRegistry::builtin();
        assert_eq!(required_headers(&imports, &registry), vec!["WiFi.h"]);
    }

    #[test]
    fn test_alias_is_ignored() {
        // The alias names the wifi package, but the path does not end in it.
        let imports = vec![Import::aliased("wifi", "github.com/andygeiss/esp32-controller")];
        let registry = ControllerRegistry::builtin();
        assert!(required_headers(&imports, &registry).is_empty());
    }

    #[test]
    fn test_headers_are_deduplicated_in_order() {
        let imports = vec![
            Import::new("a/wire"),
            Import::new("b/wifi"),
            Import::aliased("w", "c/wifi"),
            Import::new("d/wire"),
        ];
        let registry = ControllerRegistry::builtin().with_controller("wire", "Wire", Some("Wire.h"));
        assert_eq!(required_headers(&imports, &registry), vec!["Wire.h", "WiFi.h"]);
    }

    #[test]
    fn test_include_directive() {
        assert_eq!(include_directive("WiFi.h"), "#include <WiFi.h>");
    }
}

use indoc::indoc;
use pretty_assertions::assert_eq;
use sketch_codegen::{ControllerRegistry, OverrideTable, Translator};

/// Drop all whitespace so layout differences do not matter.
fn squash(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn translate(source: &str) -> String {
    let overrides = OverrideTable::bundled().unwrap();
    let registry = ControllerRegistry::builtin();
    let mut out = Vec::new();
    Translator::new(&overrides, &registry)
        .translate(source.as_bytes(), &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

fn assert_sketch(source: &str, expected: &str) {
    assert_eq!(squash(&translate(source)), squash(expected));
}

#[test]
fn test_empty_package() {
    assert_sketch("package test", "void loop(){} void setup(){}");
}

#[test]
fn test_function_declarations() {
    let source = indoc! {"
        package test
        func foo() {}
        func bar() {}
    "};
    assert_sketch(source, "void foo(){} void bar(){}");
}

#[test]
fn test_function_declarations_with_args() {
    let source = indoc! {"
        package test
        func foo(x int) {}
        func bar(y int) {}
    "};
    assert_sketch(source, "void foo(int x){} void bar(int y){}");
}

#[test]
fn test_exact_layout() {
    let source = indoc! {r#"
        package test
        import "github.com/andygeiss/esp32/api/controller/wifi"
        const ssid string = "home"
        func setup() {
            serial.Begin(115200)
            wifi.BeginEncrypted(ssid, "secret")
        }
        func loop() {}
    "#};
    let expected = indoc! {r#"
        #include <WiFi.h>

        const char* ssid = "home";

        void setup() {
            Serial.begin(115200);
            WiFi.begin(ssid, "secret");
        }

        void loop() {}
    "#};
    assert_eq!(translate(source), expected);
}

#[test]
fn test_top_level_const_string() {
    let source = indoc! {r#"
        package test
        const foo string = "bar"
    "#};
    let sketch = squash(&translate(source));
    assert!(sketch.starts_with(r#"constchar*foo="bar";"#));
}

#[test]
fn test_const_in_function() {
    let source = indoc! {r#"
        package test
        func foo() {
            const foo string = "bar"
        }
    "#};
    assert_sketch(source, r#"void foo() { const char* foo = "bar"; }"#);
}

#[test]
fn test_var_in_function() {
    let source = indoc! {r#"
        package test
        func foo() {
            var foo string = "bar"
        }
    "#};
    assert_sketch(source, r#"void foo() { char* foo = "bar"; }"#);
}

#[test]
fn test_call_statements() {
    let source = indoc! {r#"
        package test
        func foo() {
            bar()
            bar(1,2,3)
            bar("foo")
        }
    "#};
    assert_sketch(source, r#"void foo() { bar(); bar(1,2,3); bar("foo"); }"#);
}

#[test]
fn test_unknown_package_call_passes_through() {
    let source = indoc! {r#"
        package test
        func foo() {
            foo.Bar(1,"2")
        }
    "#};
    assert_sketch(source, r#"void foo() { foo.Bar(1,"2"); }"#);
}

#[test]
fn test_assignments() {
    let source = indoc! {"
        package test
        func foo() {
            x = 1
            y = 2
            z = x + y
        }
    "};
    assert_sketch(source, "void foo() { x = 1; y = 2; z = x + y; }");
}

#[test]
fn test_assignments_from_calls() {
    let source = indoc! {"
        package test
        func foo() {
            x = bar()
            y = pkg.Bar()
            z = x + y
        }
    "};
    assert_sketch(source, "void foo() { x = bar(); y = pkg.Bar(); z = x + y; }");
}

#[test]
fn test_controller_selector() {
    let source = indoc! {"
        package test
        func foo() {
            serial.Begin()
        }
    "};
    assert_sketch(source, "void foo() { Serial.begin(); }");
}

#[test]
fn test_override_in_argument() {
    let source = indoc! {r#"
        package test
        func foo() {
            foo.Bar(1,"2",digital.Low)
        }
    "#};
    assert_sketch(source, r#"void foo() { foo.Bar(1,"2",LOW); }"#);
}

#[test]
fn test_nested_controller_calls() {
    let source = indoc! {"
        package test
        func foo() {
            serial.Println(wifi.LocalIP())
        }
    "};
    assert_sketch(source, "void foo() { Serial.println(WiFi.localIP()); }");
}

#[test]
fn test_package_imports() {
    let source = indoc! {r#"
        package test
        import "github.com/andygeiss/esp32-mqtt/api/controller"
        import "github.com/andygeiss/esp32-mqtt/api/controller/serial"
        import "github.com/andygeiss/esp32/api/controller/timer"
        import wifi "github.com/andygeiss/esp32/api/controller/wifi"
    "#};
    let sketch = translate(source);
    assert!(sketch.starts_with("#include <WiFi.h>\n\n"));
    assert_eq!(sketch.matches("#include").count(), 1);
}

#[test]
fn test_aliased_generic_import_is_ignored() {
    let source = indoc! {r#"
        package test
        import controller "github.com/andygeiss/esp32-controller"
        import "github.com/andygeiss/esp32-mqtt/api/controller/serial"
        import "github.com/andygeiss/esp32/api/controller/timer"
        import wifi "github.com/andygeiss/esp32/api/controller/wifi"
    "#};
    let sketch = translate(source);
    assert_eq!(sketch.matches("#include").count(), 1);
    assert!(sketch.contains("#include <WiFi.h>"));
}

#[test]
fn test_repeated_imports_include_once() {
    let source = indoc! {r#"
        package test
        import (
            "a/wifi"
            w "b/wifi"
        )
        import "c/wifi"
    "#};
    assert_eq!(translate(source).matches("#include <WiFi.h>").count(), 1);
}

#[test]
fn test_no_functions_synthesizes_both_entry_points() {
    let source = indoc! {r#"
        package test
        import "x/wifi"
        const a int = 1
        var b int
    "#};
    let sketch = translate(source);
    assert_eq!(sketch.matches("void ").count(), 2);
    assert!(sketch.contains("void setup() {}"));
    assert!(sketch.contains("void loop() {}"));
}

#[test]
fn test_function_count_is_preserved() {
    for n in 1..=5 {
        let mut source = String::from("package test\n");
        for i in 0..n {
            source.push_str(&format!("func f{}() {{}}\n", i));
        }
        let sketch = translate(&source);
        assert_eq!(sketch.matches("void ").count(), n);
        assert!(!sketch.contains("setup"));
        assert!(!sketch.contains("loop"));
    }
}

#[test]
fn test_single_non_entry_function_is_trusted() {
    let sketch = translate("package test\nfunc helper() {}\n");
    assert_eq!(sketch, "void helper() {}\n");
}

#[test]
fn test_type_mapping_in_params() {
    let source = "package test\nfunc f(a, b float64, c byte, d bool) {}\n";
    assert_eq!(
        translate(source),
        "void f(double a, double b, uint8_t c, bool d) {}\n"
    );
}

#[test]
fn test_digital_io() {
    let source = indoc! {"
        package main
        func setup() {
            digital.PinMode(2, digital.ModeOutput)
        }
        func loop() {
            digital.Write(2, digital.High)
            timer.Delay(500)
            digital.Write(2, digital.Low)
            timer.Delay(500)
        }
    "};
    assert_sketch(
        source,
        "void setup() { pinMode(2, OUTPUT); }
         void loop() { digitalWrite(2, HIGH); delay(500); digitalWrite(2, LOW); delay(500); }",
    );
}

#[test]
fn test_double_negation_stays_negation() {
    let source = "package test\nfunc f() {\n    x = - -y\n    z = -(a + b) * +c\n}\n";
    assert_eq!(
        translate(source),
        "void f() {\n    x = -(-y);\n    z = -(a + b) * +c;\n}\n"
    );
}

#[test]
fn test_prefix_decrement_is_rejected() {
    let overrides = OverrideTable::bundled().unwrap();
    let registry = ControllerRegistry::builtin();
    let err = Translator::new(&overrides, &registry)
        .translate_source("package p\nfunc f() { x = --y }")
        .unwrap_err();
    assert!(err.to_string().contains("increment and decrement"), "{}", err);
}

#[test]
fn test_selector_split_after_dot() {
    let source = "package test\nfunc f() {\n    serial.\n        Begin(9600)\n}\n";
    assert_sketch(source, "void f() { Serial.begin(9600); }");
}

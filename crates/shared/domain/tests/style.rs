use moneta_domain::style::{
    ContentGlobSet, HexColor, PluginRef, StyleConfig, StyleDataError, ThemeExtension,
};

#[test]
fn hex_color_validation() {
    assert!(HexColor::new("#9f7aea").is_ok());
    assert!(HexColor::new("#ABCDEF").is_ok());

    for bad in ["9f7aea", "#9f7ae", "#9f7aeaa", "#9f7aeg", "", "#"] {
        assert_eq!(
            HexColor::new(bad),
            Err(StyleDataError::InvalidHexColor(bad.to_owned())),
            "expected '{bad}' to be rejected"
        );
    }
}

#[test]
fn theme_extension_rejects_duplicate_shades() {
    let mut theme = ThemeExtension::new();
    theme.declare("purple", 400, HexColor::new("#9f7aea").unwrap()).unwrap();

    let err = theme.declare("purple", 400, HexColor::new("#000000").unwrap()).unwrap_err();
    assert_eq!(err, StyleDataError::DuplicateShade { family: "purple".to_owned(), shade: 400 });

    // A different shade in the same family is fine.
    theme.declare("purple", 600, HexColor::new("#6b46c1").unwrap()).unwrap();
    assert_eq!(theme.get("purple", 600).unwrap().as_str(), "#6b46c1");
}

#[test]
fn content_glob_set_invariants() {
    let empty: Vec<&str> = Vec::new();
    assert_eq!(ContentGlobSet::new(empty), Err(StyleDataError::EmptyGlobSet));
    assert_eq!(ContentGlobSet::new(["./index.html", ""]), Err(StyleDataError::EmptyPattern));

    let set = ContentGlobSet::new(["./index.html", "./src/**/*.rs"]).unwrap();
    assert_eq!(set.patterns(), ["./index.html", "./src/**/*.rs"]);
}

#[test]
fn plugin_ref_rejects_empty_module() {
    assert_eq!(PluginRef::new(""), Err(StyleDataError::EmptyPluginRef));
    assert_eq!(PluginRef::new("@tailwindcss/forms").unwrap().as_str(), "@tailwindcss/forms");
}

#[test]
fn standard_declaration_matches_the_design_tokens() {
    let style = StyleConfig::standard();

    let theme = style.theme_extensions();
    assert_eq!(theme.get("purple", 400).unwrap().as_str(), "#9f7aea");
    assert_eq!(theme.get("purple", 600).unwrap().as_str(), "#6b46c1");
    assert_eq!(theme.families().count(), 1);

    assert!(style.content_globs().len() > 0);
    assert_eq!(style.content_globs().patterns()[0], "./index.html");

    let plugins: Vec<&str> = style.plugins().iter().map(PluginRef::as_str).collect();
    assert_eq!(plugins, ["@tailwindcss/forms"]);
}

#[test]
fn standard_declaration_is_idempotent() {
    // No hidden mutable state: repeated calls are structurally identical.
    assert_eq!(StyleConfig::standard(), StyleConfig::standard());
    assert_eq!(
        StyleConfig::standard().theme_extensions(),
        StyleConfig::standard().theme_extensions()
    );
}

#[test]
fn theme_serializes_with_string_shade_keys() {
    let style = StyleConfig::standard();
    let value = serde_json::to_value(style.theme_extensions()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "purple": { "400": "#9f7aea", "600": "#6b46c1" } })
    );
}

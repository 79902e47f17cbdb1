use super::*;
use serde_json::json;

#[test]
fn parses_hex_forms() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgb(1.0, 0.0, 0.0));

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);

    let short: Color = "#fff".parse().unwrap();
    assert_eq!(short, Color::WHITE);
    assert_eq!(Color::from_hex("#91EAE4").unwrap().to_hex_rgb(), "#91eae4");
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Color::try_rgba(0.25, 0.5, 0.75, 1.0).unwrap());

    let c: Color = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Color::try_rgba(0.25, 0.5, 0.75, 0.9).unwrap());
}

#[test]
fn parses_hsla_object() {
    let c: Color = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert!((c.r - 1.0).abs() < 1e-9);
    assert!(c.g.abs() < 1e-9);
    assert!(c.b.abs() < 1e-9);
}

#[test]
fn malformed_colors_are_rejected() {
    for bad in [
        json!("ff0000"),
        json!("#ff00"),
        json!("#gg0000"),
        json!("#ff00zz80"),
        json!([0.1, 0.2]),
        json!({"r": 2.0, "g": 0.0, "b": 0.0}),
        json!([0.1, -0.2, 0.3]),
        json!(42),
        json!("tealish"),
        json!("rgb(1, 2)"),
        json!("rgb(300, 0, 0)"),
        json!("hsl(abc, 50%, 50%)"),
        json!("cmyk(0, 0, 0, 0)"),
    ] {
        assert!(
            serde_json::from_value::<Color>(bad.clone()).is_err(),
            "accepted {bad}"
        );
    }
    assert!(Color::from_hex("#ÿÿÿ").is_err());
}

#[test]
fn serializes_as_canonical_hex() {
    let c = Color::from_hex("#86A8E7").unwrap();
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#86a8e7ff"));
    let back: Color = serde_json::from_value(json!(c.to_hex())).unwrap();
    assert_eq!(back.to_rgba8(), c.to_rgba8());
}

#[test]
fn parses_css_color_strings() {
    let rgb = |r: u8, g: u8, b: u8| [r, g, b, 255];
    for (css, want) in [
        ("teal", rgb(0, 128, 128)),
        ("RebeccaPurple", rgb(0x66, 0x33, 0x99)),
        ("  white ", rgb(255, 255, 255)),
        ("rgb(145, 234, 228)", rgb(0x91, 0xea, 0xe4)),
        ("rgb(100% 0% 0%)", rgb(255, 0, 0)),
        ("hsl(120, 100%, 50%)", rgb(0, 255, 0)),
        ("hsl(240deg 100% 50%)", rgb(0, 0, 255)),
    ] {
        let c: Color = serde_json::from_value(json!(css)).unwrap();
        assert_eq!(c.to_rgba8(), want, "{css}");
    }

    let c: Color = "rgba(0, 0, 0, 0.5)".parse().unwrap();
    assert!((c.a - 0.5).abs() < 1e-12);
    let c: Color = "hsla(0, 100%, 50%, 25%)".parse().unwrap();
    assert_eq!(c.to_rgba8()[..3], [255, 0, 0]);
    assert!((c.a - 0.25).abs() < 1e-12);
    assert_eq!(Color::from_css("transparent").unwrap().a, 0.0);
}

#[test]
fn named_table_is_sorted_for_lookup() {
    use crate::style::named::{NAMED_COLORS, named_rgb};
    assert!(NAMED_COLORS.windows(2).all(|w| w[0].0 < w[1].0));
    assert_eq!(named_rgb("aliceblue"), Some(0xf0f8ff));
    assert_eq!(named_rgb("yellowgreen"), Some(0x9acd32));
    assert_eq!(named_rgb("Teal"), None);
}

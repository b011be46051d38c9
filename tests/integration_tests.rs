//! Integration tests for the conversion pipeline

use std::f64::consts::PI;

use serde_json::json;

use xcs2svg::document::ColorValue;
use xcs2svg::renderer::{draw_order, map_display, resolve_color};
use xcs2svg::{convert, Display, Document, SvgConfig};

/// Wrap displays in a single-canvas document and render it
fn render_one(displays: serde_json::Value) -> Option<String> {
    let source = json!({ "canvas": [ { "title": "Test", "displays": displays } ] }).to_string();
    let mut canvases = convert(&source, &SvgConfig::default()).expect("Should convert");
    canvases.remove(0).svg
}

fn display(value: serde_json::Value) -> Display {
    serde_json::from_value(value).expect("Should decode")
}

#[test]
fn test_packed_color_round_trip() {
    for c in (0..=0xffffffi64).step_by(4099) {
        let hex = resolve_color(&ColorValue::Number(c as f64));
        let back = i64::from_str_radix(&hex[1..], 16).unwrap();
        assert_eq!(back, c, "{}", hex);
    }
    let hex = resolve_color(&ColorValue::Number(0xffffff as f64));
    assert_eq!(hex, "#ffffff");
}

#[test]
fn test_rect_absolute_top_left() {
    let el = map_display(&display(json!({
        "type": "RECT", "x": 5, "y": 5, "width": 10, "height": 4
    })))
    .unwrap()
    .unwrap();
    let local_x: f64 = el.get("x").unwrap().parse().unwrap();
    let local_y: f64 = el.get("y").unwrap().parse().unwrap();
    assert_eq!((local_x, local_y), (-5.0, -2.0));
    assert_eq!(el.get("transform"), Some("translate(5, 5)"));
    assert_eq!((5.0 + local_x, 5.0 + local_y), (0.0, 3.0));
}

#[test]
fn test_line_with_invisible_stroke_stays_visible() {
    let svg = render_one(json!([
        { "type": "LINE", "endPoint": { "x": 5, "y": 5 }, "stroke": { "visible": false } }
    ]))
    .expect("line should render");
    assert!(svg.contains(r##"stroke="#000000""##));
    assert!(svg.contains(r#"stroke-width="1""#));
}

#[test]
fn test_all_invisible_canvas_produces_nothing() {
    let svg = render_one(json!([
        { "type": "RECT", "width": 5, "height": 5, "visible": false },
        { "type": "PATH", "dPath": "M0 0 L1 1", "visible": false }
    ]));
    assert_eq!(svg, None);
}

#[test]
fn test_z_order_with_default_and_ties() {
    let doc = Document::from_json(
        &json!({ "canvas": [ { "displays": [
            { "type": "RECT", "zOrder": 5 },
            { "type": "RECT", "zOrder": 1 },
            { "type": "RECT" },
            { "type": "TEXT", "zOrder": 1 }
        ] } ] })
        .to_string(),
    )
    .unwrap();
    let order: Vec<usize> = draw_order(&doc.canvases[0].displays)
        .iter()
        .map(|d| d.index)
        .collect();
    assert_eq!(order, vec![2, 1, 3, 0]);
}

#[test]
fn test_z_order_drives_markup_order() {
    let svg = render_one(json!([
        { "type": "TEXT", "text": "top", "zOrder": 9 },
        { "type": "RECT", "width": 2, "height": 2 }
    ]))
    .unwrap();
    let rect_at = svg.find("<rect").unwrap();
    let text_at = svg.find("<text").unwrap();
    assert!(rect_at < text_at);
}

#[test]
fn test_quarter_turn_rotation() {
    let el = map_display(&display(json!({
        "type": "RECT",
        "x": 1,
        "y": 2,
        "angle": PI / 2.0,
        "scale": { "x": 2, "y": 2 },
        "width": 1,
        "height": 1
    })))
    .unwrap()
    .unwrap();
    let transform = el.get("transform").unwrap();
    let parts: Vec<&str> = transform.split(") ").collect();
    assert_eq!(parts.len(), 3, "{}", transform);
    assert_eq!(parts[0], "translate(1, 2");
    assert_eq!(parts[2], "scale(2, 2)");

    let degrees: f64 = parts[1]
        .strip_prefix("rotate(")
        .unwrap()
        .parse()
        .unwrap();
    assert!((degrees - 90.0).abs() < 1e-9);
}

#[test]
fn test_empty_bitmap_is_omitted() {
    let svg = render_one(json!([
        { "type": "BITMAP", "width": 4, "height": 4, "base64": "" },
        { "type": "RECT", "width": 4, "height": 4 }
    ]))
    .unwrap();
    assert!(!svg.contains("<image"));
    assert!(svg.contains("<rect"));
}

#[test]
fn test_bitmap_embeds_data_url() {
    let svg = render_one(json!([
        { "type": "BITMAP", "width": 4, "height": 2, "base64": "data:image/png;base64,iVBORw0KGgo=" }
    ]))
    .unwrap();
    assert!(svg.contains(r#"<image transform="translate(0, 0)" x="-2" y="-1" width="4" height="2" href="data:image/png;base64,iVBORw0KGgo=" />"#));
}

#[test]
fn test_unknown_kind_skipped_silently() {
    let source = json!({ "canvas": [ { "displays": [
        { "type": "ELLIPSE", "width": 4, "height": 4 },
        { "type": "RECT", "width": 4, "height": 4 }
    ] } ] })
    .to_string();
    let canvases = convert(&source, &SvgConfig::default()).unwrap();
    assert_eq!(canvases[0].element_count, 1);
    assert!(canvases[0].diagnostics.is_empty());
}

#[test]
fn test_missing_canvas_array_is_fatal() {
    assert!(convert(r#"{ "displays": [] }"#, &SvgConfig::default()).is_err());
}

#[test]
fn test_null_fields_still_render() {
    let svg = render_one(json!([
        { "type": "PATH", "dPath": "M0 0 L1 1", "fillRule": null, "zOrder": null }
    ]))
    .expect("path should render");
    assert!(svg.contains(r#"<path transform="translate(0, 0)" d="M0 0 L1 1" fill="none" stroke="none" />"#));
}

#[test]
fn test_unpadded_bitmap_still_renders() {
    let svg = render_one(json!([
        { "type": "BITMAP", "width": 2, "height": 2, "base64": "data:image/png;base64,iVBORw0KGgo" }
    ]))
    .expect("bitmap should render");
    assert!(svg.contains(r#"href="data:image/png;base64,iVBORw0KGgo""#));
}

//! Per-kind mapping from displays to SVG primitives
//!
//! Every primitive is drawn around its display's local origin and placed
//! by the `transform` attribute, so rectangles and bitmaps are centered
//! on the origin and lines start at it.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::document::{
    BitmapShape, Display, DisplayKind, FillStyle, LineShape, PathShape, RectShape, TextShape,
};
use crate::error::ShapeError;

use super::paint::{resolve_fill, resolve_stroke, Stroke};
use super::svg::SvgElement;
use super::transform::Transform;

/// Decoder for embedded rasters; padding and trailing bits are optional
/// because image viewers accept payloads without them
const PAYLOAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Map one display to its SVG primitive
///
/// `Ok(None)` means the display legitimately draws nothing: an unknown
/// kind, an empty path, or an empty bitmap.
pub fn map_display(display: &Display) -> Result<Option<SvgElement>, ShapeError> {
    let element = match &display.kind {
        DisplayKind::Path(path) => map_path(display, path),
        DisplayKind::Rect(rect) => Some(map_rect(display, rect)),
        DisplayKind::Line(line) => Some(map_line(display, line)),
        DisplayKind::Bitmap(bitmap) => map_bitmap(display, bitmap)?,
        DisplayKind::Text(text) => Some(map_text(display, text)),
        DisplayKind::Unknown => None,
    };
    Ok(element)
}

/// Start an element carrying the display's placement
fn placed(tag: &'static str, display: &Display) -> SvgElement {
    SvgElement::new(tag).attr("transform", Transform::for_display(display))
}

fn map_path(display: &Display, path: &PathShape) -> Option<SvgElement> {
    if path.d_path.is_empty() {
        return None;
    }
    let mut el = placed("path", display)
        .attr("d", &path.d_path)
        .attr("fill", resolve_fill(&display.fill));
    if !path.fill_rule.is_empty() {
        el.push_attr("fill-rule", &path.fill_rule);
    }
    push_stroke(&mut el, resolve_stroke(&display.stroke).as_ref());
    push_fill_opacity(&mut el, &display.fill);
    Some(el)
}

fn map_rect(display: &Display, rect: &RectShape) -> SvgElement {
    let (w, h) = (display.width, display.height);
    let mut el = placed("rect", display)
        .attr("x", -w / 2.0)
        .attr("y", -h / 2.0)
        .attr("width", w)
        .attr("height", h);
    if rect.radius > 0.0 {
        el.push_attr("rx", rect.radius);
        el.push_attr("ry", rect.radius);
    }
    el.push_attr("fill", resolve_fill(&display.fill));
    push_stroke(&mut el, resolve_stroke(&display.stroke).as_ref());
    push_fill_opacity(&mut el, &display.fill);
    el
}

fn map_line(display: &Display, line: &LineShape) -> SvgElement {
    // A line without a stroke would be invisible
    let stroke = resolve_stroke(&display.stroke).unwrap_or_else(Stroke::fallback);
    let mut el = placed("line", display)
        .attr("x1", 0)
        .attr("y1", 0)
        .attr("x2", line.end_point.x)
        .attr("y2", line.end_point.y);
    push_stroke(&mut el, Some(&stroke));
    el
}

fn map_bitmap(display: &Display, bitmap: &BitmapShape) -> Result<Option<SvgElement>, ShapeError> {
    if bitmap.base64.is_empty() {
        return Ok(None);
    }
    let href = bitmap_href(&bitmap.base64)?;
    let (w, h) = (display.width, display.height);
    Ok(Some(
        placed("image", display)
            .attr("x", -w / 2.0)
            .attr("y", -h / 2.0)
            .attr("width", w)
            .attr("height", h)
            .attr("href", href),
    ))
}

fn map_text(display: &Display, text: &TextShape) -> SvgElement {
    let mut el = placed("text", display)
        .attr("font-size", text.style.font_size)
        .attr("font-family", &text.style.font_family)
        .attr("fill", resolve_fill(&display.fill));
    push_fill_opacity(&mut el, &display.fill);
    el.text(&text.text)
}

fn push_stroke(el: &mut SvgElement, stroke: Option<&Stroke>) {
    let Some(stroke) = stroke else {
        el.push_attr("stroke", "none");
        return;
    };
    el.push_attr("stroke", &stroke.color);
    el.push_attr("stroke-width", stroke.width);
    el.push_attr("stroke-linecap", &stroke.cap);
    el.push_attr("stroke-linejoin", &stroke.join);
    if stroke.opacity < 1.0 {
        el.push_attr("stroke-opacity", stroke.opacity);
    }
}

fn push_fill_opacity(el: &mut SvgElement, fill: &FillStyle) {
    if fill.visible && fill.alpha < 1.0 {
        el.push_attr("fill-opacity", fill.alpha);
    }
}

/// Produce an `href` for an embedded raster
///
/// `data:` URLs pass through once their base64 body checks out. Bare
/// base64 is validated and wrapped with a MIME type sniffed from the bytes.
fn bitmap_href(payload: &str) -> Result<String, ShapeError> {
    if let Some(rest) = payload.strip_prefix("data:") {
        if let Some((meta, body)) = rest.split_once(',') {
            if meta.ends_with(";base64") {
                PAYLOAD.decode(strip_whitespace(body))?;
            }
        }
        return Ok(payload.to_string());
    }

    let body = strip_whitespace(payload);
    let bytes = PAYLOAD.decode(&body)?;
    Ok(format!("data:{};base64,{}", sniff_mime(&bytes), body))
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else {
        "image/png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Base64 of the 8-byte PNG signature
    const PNG_SIGNATURE_B64: &str = "iVBORw0KGgo=";

    fn display(value: serde_json::Value) -> Display {
        serde_json::from_value(value).unwrap()
    }

    fn map(value: serde_json::Value) -> Option<SvgElement> {
        map_display(&display(value)).unwrap()
    }

    #[test]
    fn test_rect_centered_on_origin() {
        let el = map(json!({ "type": "RECT", "x": 5, "y": 5, "width": 10, "height": 4 })).unwrap();
        assert_eq!(el.tag, "rect");
        assert_eq!(el.get("transform"), Some("translate(5, 5)"));
        assert_eq!(el.get("x"), Some("-5"));
        assert_eq!(el.get("y"), Some("-2"));
        assert_eq!(el.get("width"), Some("10"));
        assert_eq!(el.get("height"), Some("4"));
        assert_eq!(el.get("rx"), None);
        assert_eq!(el.get("fill"), Some("none"));
        assert_eq!(el.get("stroke"), Some("none"));
    }

    #[test]
    fn test_rect_corner_radius() {
        let el = map(json!({ "type": "RECT", "width": 10, "height": 4, "radius": 1.5 })).unwrap();
        assert_eq!(el.get("rx"), Some("1.5"));
        assert_eq!(el.get("ry"), Some("1.5"));
    }

    #[test]
    fn test_path_markup() {
        let el = map(json!({
            "type": "PATH",
            "x": 1,
            "y": 2,
            "dPath": "M0 0 L4 4",
            "fill": { "visible": true, "color": 16711680, "alpha": 0.5 },
            "stroke": { "visible": true, "color": 255, "width": 0.2, "alpha": 0.8 }
        }))
        .unwrap();
        assert_eq!(
            el.to_markup(),
            concat!(
                r##"<path transform="translate(1, 2)" d="M0 0 L4 4" fill="#ff0000" fill-rule="nonzero" "##,
                r##"stroke="#0000ff" stroke-width="0.2" stroke-linecap="butt" stroke-linejoin="miter" "##,
                r##"stroke-opacity="0.8" fill-opacity="0.5" />"##
            )
        );
    }

    #[test]
    fn test_empty_path_draws_nothing() {
        assert_eq!(map(json!({ "type": "PATH", "dPath": "" })), None);
        assert_eq!(map(json!({ "type": "PATH" })), None);
    }

    #[test]
    fn test_null_fill_rule_is_omitted() {
        let el = map(json!({ "type": "PATH", "dPath": "M0 0 L1 1", "fillRule": null })).unwrap();
        assert_eq!(
            el.to_markup(),
            r#"<path transform="translate(0, 0)" d="M0 0 L1 1" fill="none" stroke="none" />"#
        );
    }

    #[test]
    fn test_custom_fill_rule() {
        let el = map(json!({ "type": "PATH", "dPath": "M0 0", "fillRule": "evenodd" })).unwrap();
        assert_eq!(el.get("fill-rule"), Some("evenodd"));
    }

    #[test]
    fn test_line_without_stroke_gets_fallback() {
        let el = map(json!({
            "type": "LINE",
            "endPoint": { "x": 10, "y": 0 },
            "stroke": { "visible": false, "color": 255 }
        }))
        .unwrap();
        assert_eq!(el.get("x1"), Some("0"));
        assert_eq!(el.get("y1"), Some("0"));
        assert_eq!(el.get("x2"), Some("10"));
        assert_eq!(el.get("stroke"), Some("#000000"));
        assert_eq!(el.get("stroke-width"), Some("1"));
    }

    #[test]
    fn test_line_keeps_declared_stroke() {
        let el = map(json!({
            "type": "LINE",
            "stroke": { "visible": true, "color": "#00ff00", "width": 3 }
        }))
        .unwrap();
        assert_eq!(el.get("stroke"), Some("#00ff00"));
        assert_eq!(el.get("stroke-width"), Some("3"));
    }

    #[test]
    fn test_empty_bitmap_draws_nothing() {
        assert_eq!(map(json!({ "type": "BITMAP", "width": 5, "height": 5 })), None);
    }

    #[test]
    fn test_bitmap_data_url_passes_through() {
        let url = format!("data:image/png;base64,{}", PNG_SIGNATURE_B64);
        let el = map(json!({ "type": "BITMAP", "width": 8, "height": 6, "base64": url })).unwrap();
        assert_eq!(el.tag, "image");
        assert_eq!(el.get("x"), Some("-4"));
        assert_eq!(el.get("y"), Some("-3"));
        assert_eq!(el.get("href"), Some(url.as_str()));
    }

    #[test]
    fn test_bare_base64_is_wrapped() {
        let el = map(json!({ "type": "BITMAP", "base64": PNG_SIGNATURE_B64 })).unwrap();
        let expected = format!("data:image/png;base64,{}", PNG_SIGNATURE_B64);
        assert_eq!(el.get("href"), Some(expected.as_str()));
    }

    #[test]
    fn test_unpadded_base64_is_accepted() {
        let url = "data:image/png;base64,iVBORw0KGgo";
        let el = map(json!({ "type": "BITMAP", "width": 2, "height": 2, "base64": url })).unwrap();
        assert_eq!(el.get("href"), Some(url));

        let el = map(json!({ "type": "BITMAP", "base64": "iVBORw0KGgo" })).unwrap();
        assert_eq!(el.get("href"), Some("data:image/png;base64,iVBORw0KGgo"));
    }

    #[test]
    fn test_jpeg_is_sniffed() {
        let payload = STANDARD.encode([0xff, 0xd8, 0xff, 0xe0]);
        let href = bitmap_href(&payload).unwrap();
        assert!(href.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_invalid_base64_is_an_error() {
        let result = map_display(&display(json!({ "type": "BITMAP", "base64": "not base64!" })));
        assert!(matches!(result, Err(ShapeError::InvalidBitmap(_))));

        let result = map_display(&display(json!({
            "type": "BITMAP",
            "base64": "data:image/png;base64,%%%"
        })));
        assert!(matches!(result, Err(ShapeError::InvalidBitmap(_))));
    }

    #[test]
    fn test_text_run() {
        let el = map(json!({
            "type": "TEXT",
            "x": 3,
            "y": 4,
            "text": "Power <80%>",
            "fill": { "visible": true, "color": 0 },
            "style": { "fontSize": 6, "fontFamily": "Lato" }
        }))
        .unwrap();
        assert_eq!(
            el.to_markup(),
            r##"<text transform="translate(3, 4)" font-size="6" font-family="Lato" fill="#000000">Power &lt;80%&gt;</text>"##
        );
        assert_eq!(el.content(), Some("Power <80%>"));
    }

    #[test]
    fn test_unknown_kind_draws_nothing() {
        assert_eq!(map(json!({ "type": "CIRCLE", "width": 3 })), None);
    }
}

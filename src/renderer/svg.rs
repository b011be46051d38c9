//! SVG element model and document builder

use crate::geometry::BoundingBox;

use super::SvgConfig;

/// A single SVG element with attributes in output order
#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    pub tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    text: Option<String>,
}

impl SvgElement {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: vec![],
            text: None,
        }
    }

    /// Append an attribute
    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    /// Append an attribute in place
    pub fn push_attr(&mut self, name: &'static str, value: impl ToString) {
        self.attrs.push((name, value.to_string()));
    }

    /// Set the character content
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.text = Some(content.into());
        self
    }

    /// Look up an attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Serialize to markup, escaping attribute values and content
    pub fn to_markup(&self) -> String {
        let mut out = format!("<{}", self.tag);
        for (name, value) in &self.attrs {
            out.push_str(&format!(r#" {}="{}""#, name, escape_xml(value)));
        }
        match &self.text {
            Some(text) => out.push_str(&format!(">{}</{}>", escape_xml(text), self.tag)),
            None => out.push_str(" />"),
        }
        out
    }
}

/// Build an SVG document incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    title: Option<String>,
    elements: Vec<SvgElement>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            title: None,
            elements: vec![],
        }
    }

    /// Set the `<title>` annotation
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Add a mapped shape
    pub fn push(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Build the final SVG string with `viewbox` as the viewport
    pub fn build(self, viewbox: BoundingBox) -> String {
        let nl = self.newline();
        let indent = self.indent_str();
        let unit = &self.config.unit;

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="{} {} {} {}" width="{}{}" height="{}{}">"#,
            viewbox.x, viewbox.y, viewbox.width, viewbox.height, viewbox.width, unit, viewbox.height, unit
        ));
        svg.push_str(nl);

        if let Some(title) = &self.title {
            svg.push_str(indent);
            svg.push_str(&format!("<title>{}</title>", escape_xml(title)));
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(indent);
            svg.push_str(&elem.to_markup());
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push('\n');

        svg
    }
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

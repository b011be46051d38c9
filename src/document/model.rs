//! Typed records for the project file format
//!
//! Every field carries the default the design tool assumes when it omits
//! the key, so a sparse record still decodes. An explicit `null` counts
//! as omitted.

use serde::{Deserialize, Deserializer};

use crate::geometry::Point;

/// Deserialize a field, treating `null` like a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A color as stored in a project file: a packed `0xRRGGBB` number, a
/// string (hex or numeric), or something unusable
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Default for ColorValue {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

/// Non-uniform scale factors
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "RawScale")]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    pub fn is_identity(&self) -> bool {
        self.x == 1.0 && self.y == 1.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawScale {
    x: Option<f64>,
    y: Option<f64>,
}

impl From<RawScale> for Scale {
    fn from(raw: RawScale) -> Self {
        Self {
            x: raw.x.unwrap_or(1.0),
            y: raw.y.unwrap_or(1.0),
        }
    }
}

/// The `fill` sub-record of a display
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawFill")]
pub struct FillStyle {
    pub visible: bool,
    pub color: ColorValue,
    pub alpha: f64,
}

impl Default for FillStyle {
    fn default() -> Self {
        RawFill::default().into()
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawFill {
    visible: Option<bool>,
    color: Option<ColorValue>,
    alpha: Option<f64>,
}

impl From<RawFill> for FillStyle {
    fn from(raw: RawFill) -> Self {
        Self {
            visible: raw.visible.unwrap_or(false),
            color: raw.color.unwrap_or_default(),
            alpha: raw.alpha.unwrap_or(1.0),
        }
    }
}

/// The `stroke` sub-record of a display
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawStroke")]
pub struct StrokeStyle {
    pub visible: bool,
    pub color: ColorValue,
    pub width: f64,
    pub alpha: f64,
    pub cap: String,
    pub join: String,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        RawStroke::default().into()
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawStroke {
    visible: Option<bool>,
    color: Option<ColorValue>,
    width: Option<f64>,
    alpha: Option<f64>,
    cap: Option<String>,
    join: Option<String>,
}

impl From<RawStroke> for StrokeStyle {
    fn from(raw: RawStroke) -> Self {
        Self {
            visible: raw.visible.unwrap_or(false),
            color: raw.color.unwrap_or_default(),
            width: raw.width.unwrap_or(1.0),
            alpha: raw.alpha.unwrap_or(1.0),
            cap: raw.cap.unwrap_or_else(|| "butt".to_string()),
            join: raw.join.unwrap_or_else(|| "miter".to_string()),
        }
    }
}

/// One drawable shape instance within a canvas
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    /// Position in the canvas's `displays` array, assigned by the loader
    #[serde(skip)]
    pub index: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub x: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub y: f64,
    /// Rotation in radians
    #[serde(default, deserialize_with = "null_as_default")]
    pub angle: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scale: Scale,
    #[serde(default = "default_visible", deserialize_with = "null_as_visible")]
    pub visible: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub z_order: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub width: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub height: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fill: FillStyle,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stroke: StrokeStyle,
    #[serde(flatten)]
    pub kind: DisplayKind,
}

fn default_visible() -> bool {
    true
}

fn null_as_visible<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

impl Display {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Kind-specific payload, selected by the record's `type` field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum DisplayKind {
    Path(PathShape),
    Rect(RectShape),
    Line(LineShape),
    Bitmap(BitmapShape),
    Text(TextShape),
    /// Any kind this converter does not draw
    #[serde(other)]
    Unknown,
}

impl DisplayKind {
    pub fn name(&self) -> &'static str {
        match self {
            DisplayKind::Path(_) => "PATH",
            DisplayKind::Rect(_) => "RECT",
            DisplayKind::Line(_) => "LINE",
            DisplayKind::Bitmap(_) => "BITMAP",
            DisplayKind::Text(_) => "TEXT",
            DisplayKind::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PathShape {
    /// SVG path commands, used verbatim
    #[serde(rename = "dPath", deserialize_with = "null_as_default")]
    pub d_path: String,
    /// Empty when the record sets it to `null`; no `fill-rule` is emitted then
    #[serde(deserialize_with = "null_as_default")]
    pub fill_rule: String,
}

impl Default for PathShape {
    fn default() -> Self {
        Self {
            d_path: String::new(),
            fill_rule: "nonzero".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RectShape {
    /// Corner radius
    #[serde(deserialize_with = "null_as_default")]
    pub radius: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineShape {
    /// Line end relative to the display's own origin
    #[serde(deserialize_with = "null_as_default")]
    pub end_point: Point,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BitmapShape {
    /// Either a `data:` URL or bare base64
    #[serde(deserialize_with = "null_as_default")]
    pub base64: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextShape {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawTextStyle")]
pub struct TextStyle {
    pub font_size: f64,
    pub font_family: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        RawTextStyle::default().into()
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawTextStyle {
    font_size: Option<f64>,
    font_family: Option<String>,
}

impl From<RawTextStyle> for TextStyle {
    fn from(raw: RawTextStyle) -> Self {
        Self {
            font_size: raw.font_size.unwrap_or(12.0),
            font_family: raw.font_family.unwrap_or_else(|| "sans-serif".to_string()),
        }
    }
}

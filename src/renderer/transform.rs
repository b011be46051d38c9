//! Transform composition for placing a display's local geometry
//!
//! The order is fixed: translate to the display position, then rotate and
//! scale about the translated origin. Rotation is stored in radians and
//! emitted in degrees.

use std::f64::consts::PI;
use std::fmt;

use crate::document::Display;
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: Point,
    /// Rotation in degrees, absent when the display is unrotated
    pub rotate: Option<f64>,
    /// Scale factors, absent when the display is unscaled
    pub scale: Option<(f64, f64)>,
}

impl Transform {
    pub fn for_display(display: &Display) -> Self {
        let rotate = (display.angle != 0.0).then(|| display.angle * 180.0 / PI);
        let scale = (!display.scale.is_identity()).then_some((display.scale.x, display.scale.y));
        Self {
            translate: display.position(),
            rotate,
            scale,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({}, {})", self.translate.x, self.translate.y)?;
        if let Some(degrees) = self.rotate {
            write!(f, " rotate({})", degrees)?;
        }
        if let Some((sx, sy)) = self.scale {
            write!(f, " scale({}, {})", sx, sy)?;
        }
        Ok(())
    }
}

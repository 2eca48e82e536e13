// Copyright 2025 the Shapeclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape selection and per-widget shape parameters.

use kurbo::Size;
use peniko::Color;

/// The clipping shape applied to a widget's image.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A circle inscribed in the (square) surface.
    #[default]
    Circle,
    /// An axis-aligned rectangle with uniformly rounded corners.
    RoundedRect,
    /// A rectangle whose bottom region is replaced by a single quadratic curve.
    WaveRect,
}

/// Which edge the wave curve of a [`ShapeKind::WaveRect`] attaches to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WaveDirection {
    /// The bottom edge bows upward, toward the top of the surface.
    #[default]
    TopEdge,
    /// The bottom edge bows downward, displaced up from the surface bottom.
    BottomEdge,
}

/// Construction-time shape parameters.
///
/// These are set once per widget and never re-parameterized afterwards;
/// outlines are a pure function of (surface, kind, params).
///
/// Fields that do not apply to the selected [`ShapeKind`] are ignored:
/// `corner_radius` only affects rounded rects, and `wave_height` /
/// `wave_direction` only affect wave rects.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeParams {
    /// Corner radius for [`ShapeKind::RoundedRect`], in surface units.
    ///
    /// The same nominal radius is reused for both the fill and the border
    /// outline; it is not inset alongside the rects. With large border
    /// widths this can look visually inconsistent, which matches the
    /// observed behavior being reproduced here.
    pub corner_radius: f64,
    /// Stroked border thickness. Zero disables the border stroke entirely.
    pub border_width: f64,
    /// Border stroke color.
    pub border_color: Color,
    /// Peak displacement of the wave curve for [`ShapeKind::WaveRect`].
    pub wave_height: f64,
    /// Edge the wave curve attaches to.
    pub wave_direction: WaveDirection,
    /// Display density factor applied to `wave_height` in the
    /// [`WaveDirection::BottomEdge`] branch only.
    ///
    /// The two wave directions intentionally disagree about the unit of
    /// `wave_height`: the bottom-edge branch multiplies it by this factor a
    /// second time, the top-edge branch does not. This reproduces observed
    /// behavior and is deliberately not unified; see DESIGN.md.
    pub scale_factor: f64,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            corner_radius: 10.0,
            border_width: 0.0,
            border_color: Color::WHITE,
            wave_height: 0.0,
            wave_direction: WaveDirection::default(),
            scale_factor: 1.0,
        }
    }
}

impl ShapeParams {
    /// Creates parameters with the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Half the border width, the inset of a centered stroke's centerline.
    #[must_use]
    pub fn half_border_width(&self) -> f64 {
        self.border_width / 2.0
    }
}

/// Resolves the raw measured surface size for a shape.
///
/// Circles are forced square, taking the smaller of the two measured
/// dimensions as the side; other shapes keep the measured size unchanged.
/// Callers are expected to apply this once per resize, before building
/// outlines.
#[must_use]
pub fn resolve_surface(kind: ShapeKind, raw: Size) -> Size {
    match kind {
        ShapeKind::Circle => {
            let side = raw.width.min(raw.height);
            Size::new(side, side)
        }
        ShapeKind::RoundedRect | ShapeKind::WaveRect => raw,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{ShapeKind, ShapeParams, WaveDirection, resolve_surface};

    #[test]
    fn defaults_match_widget_attribute_defaults() {
        let params = ShapeParams::default();
        assert_eq!(params.corner_radius, 10.0);
        assert_eq!(params.border_width, 0.0);
        assert_eq!(params.border_color, peniko::Color::WHITE);
        assert_eq!(params.wave_height, 0.0);
        assert_eq!(params.wave_direction, WaveDirection::TopEdge);
        assert_eq!(params.scale_factor, 1.0);
        assert_eq!(ShapeKind::default(), ShapeKind::Circle);
    }

    #[test]
    fn circle_surface_is_forced_square() {
        let resolved = resolve_surface(ShapeKind::Circle, Size::new(120.0, 80.0));
        assert_eq!(resolved, Size::new(80.0, 80.0));

        let resolved = resolve_surface(ShapeKind::Circle, Size::new(50.0, 300.0));
        assert_eq!(resolved, Size::new(50.0, 50.0));
    }

    #[test]
    fn non_circle_surface_is_unchanged() {
        let raw = Size::new(120.0, 80.0);
        assert_eq!(resolve_surface(ShapeKind::RoundedRect, raw), raw);
        assert_eq!(resolve_surface(ShapeKind::WaveRect, raw), raw);
    }
}

// Copyright 2025 the Shapeclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The outline builder: fill and border outlines for each shape.

use kurbo::{BezPath, Circle, Point, RoundedRect, Shape, Size};

use crate::params::{ShapeKind, ShapeParams, WaveDirection};

/// A closed vector boundary used for filling and stroking.
///
/// Circles and rounded rectangles stay analytic descriptors so backends can
/// use their native primitives; only wave rects need a generic path. Wave
/// paths contain move/line/quad/close elements exclusively.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    /// A circle given by center and radius.
    Circle(Circle),
    /// An axis-aligned rounded rectangle.
    RoundedRect(RoundedRect),
    /// A generic closed path.
    Path(BezPath),
}

impl Outline {
    /// Converts the outline into a [`BezPath`], flattening analytic shapes
    /// with the given tolerance.
    #[must_use]
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        match self {
            Self::Circle(circle) => circle.to_path(tolerance),
            Self::RoundedRect(rr) => rr.to_path(tolerance),
            Self::Path(path) => path.clone(),
        }
    }
}

/// Immutable geometry state for one widget, rebuilt in full on every resize.
///
/// `fill` is inset by the full border width and `border` by half of it, so a
/// stroke of `border_width` centered on `border` visually abuts the fill
/// without overlap or gap. Wave rects are the exception: fill and border
/// share one path, so their border is centered on the fill boundary itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeGeometry {
    /// The resolved surface size these outlines were built for.
    pub surface: Size,
    /// Outline to fill with the image paint.
    pub fill: Outline,
    /// Outline to stroke with the border paint when the border width is
    /// nonzero.
    pub border: Outline,
}

/// Builds the fill and border outlines for a surface.
///
/// The surface is expected to already be resolved via
/// [`resolve_surface`](crate::resolve_surface); in particular, circle
/// surfaces must be square.
///
/// Degenerate inputs are passed through rather than rejected: a border wider
/// than the shape yields a zero or negative fill radius (or an inverted
/// rect), which rasterizers collapse to nothing. The only guarded input is
/// the wave height, which is clamped to the surface height so the curve
/// cannot invert past the opposite edge.
#[must_use]
pub fn build_outlines(surface: Size, kind: ShapeKind, params: &ShapeParams) -> ShapeGeometry {
    let border_width = params.border_width;
    let half_border = params.half_border_width();
    let (fill, border) = match kind {
        ShapeKind::Circle => {
            let radius = surface.width / 2.0;
            let center = Point::new(radius, radius);
            (
                Outline::Circle(Circle::new(center, radius - border_width)),
                Outline::Circle(Circle::new(center, radius - half_border)),
            )
        }
        ShapeKind::RoundedRect => {
            let radius = params.corner_radius;
            (
                Outline::RoundedRect(RoundedRect::new(
                    border_width,
                    border_width,
                    surface.width - border_width,
                    surface.height - border_width,
                    radius,
                )),
                Outline::RoundedRect(RoundedRect::new(
                    half_border,
                    half_border,
                    surface.width - half_border,
                    surface.height - half_border,
                    radius,
                )),
            )
        }
        ShapeKind::WaveRect => {
            let path = wave_path(surface, params);
            // Fill and border share one path; the border is stroked directly
            // on the fill boundary for this shape.
            (Outline::Path(path.clone()), Outline::Path(path))
        }
    };
    ShapeGeometry {
        surface,
        fill,
        border,
    }
}

/// Builds the single closed wave-rect path.
fn wave_path(surface: Size, params: &ShapeParams) -> BezPath {
    let (width, height) = (surface.width, surface.height);
    let hb = params.half_border_width();
    // Clamp the raw wave height before any unit conversion, so the curve
    // cannot invert past the opposite edge.
    let wave = params.wave_height.min(height);

    let mut path = BezPath::new();
    path.move_to((hb, hb));
    match params.wave_direction {
        WaveDirection::TopEdge => {
            path.line_to((hb, height - hb));
            path.quad_to(
                Point::new(width / 2.0, height - hb - wave),
                Point::new(width - hb, height - hb),
            );
        }
        WaveDirection::BottomEdge => {
            // This branch converts the wave height through the display
            // density a second time while the top-edge branch does not.
            // Observed behavior, kept as-is; see DESIGN.md.
            let wave = wave * params.scale_factor;
            path.line_to((hb, height - wave - hb));
            path.quad_to(
                Point::new(width / 2.0, height - hb),
                Point::new(width - hb, height - wave - hb),
            );
        }
    }
    path.line_to((width - hb, hb));
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use kurbo::{PathEl, Point, Size};

    use super::{Outline, build_outlines};
    use crate::params::{ShapeKind, ShapeParams, WaveDirection};

    fn params() -> ShapeParams {
        ShapeParams::default()
    }

    #[test]
    fn circle_outlines_inset_by_border_and_half_border() {
        let mut p = params();
        p.border_width = 8.0;
        let geometry = build_outlines(Size::new(100.0, 100.0), ShapeKind::Circle, &p);

        let Outline::Circle(fill) = geometry.fill else {
            panic!("circle fill outline should stay analytic");
        };
        let Outline::Circle(border) = geometry.border else {
            panic!("circle border outline should stay analytic");
        };
        assert_eq!(fill.center, Point::new(50.0, 50.0));
        assert_eq!(border.center, Point::new(50.0, 50.0));
        assert_eq!(fill.radius, 42.0);
        assert_eq!(border.radius, 46.0);
    }

    #[test]
    fn degenerate_circle_border_passes_through() {
        let mut p = params();
        p.border_width = 60.0;
        let geometry = build_outlines(Size::new(100.0, 100.0), ShapeKind::Circle, &p);
        let Outline::Circle(fill) = geometry.fill else {
            panic!("circle fill outline should stay analytic");
        };
        // Negative radius is not an error; the rasterizer collapses it.
        assert_eq!(fill.radius, -10.0);
    }

    #[test]
    fn rounded_rect_outlines_inset_with_nominal_radius() {
        let mut p = params();
        p.border_width = 6.0;
        p.corner_radius = 12.0;
        let geometry = build_outlines(Size::new(200.0, 120.0), ShapeKind::RoundedRect, &p);

        let Outline::RoundedRect(fill) = geometry.fill else {
            panic!("rounded rect fill outline should stay analytic");
        };
        let Outline::RoundedRect(border) = geometry.border else {
            panic!("rounded rect border outline should stay analytic");
        };
        let fill_rect = fill.rect();
        assert_eq!(
            (fill_rect.x0, fill_rect.y0, fill_rect.x1, fill_rect.y1),
            (6.0, 6.0, 194.0, 114.0)
        );
        let border_rect = border.rect();
        assert_eq!(
            (
                border_rect.x0,
                border_rect.y0,
                border_rect.x1,
                border_rect.y1
            ),
            (3.0, 3.0, 197.0, 117.0)
        );
        // The nominal corner radius is reused for both outlines.
        assert_eq!(fill.radii().top_left, 12.0);
        assert_eq!(border.radii().top_left, 12.0);
    }

    #[test]
    fn zero_border_fill_equals_surface_bounds() {
        let geometry = build_outlines(Size::new(200.0, 120.0), ShapeKind::RoundedRect, &params());
        let Outline::RoundedRect(fill) = geometry.fill else {
            panic!("rounded rect fill outline should stay analytic");
        };
        let rect = fill.rect();
        assert_eq!((rect.x0, rect.y0, rect.x1, rect.y1), (0.0, 0.0, 200.0, 120.0));
    }

    #[test]
    fn wave_top_edge_path_elements() {
        let mut p = params();
        p.border_width = 4.0;
        p.wave_height = 30.0;
        p.wave_direction = WaveDirection::TopEdge;
        let geometry = build_outlines(Size::new(100.0, 80.0), ShapeKind::WaveRect, &p);
        let Outline::Path(path) = &geometry.fill else {
            panic!("wave fill outline should be a path");
        };

        let elements = path.elements();
        assert_eq!(
            elements,
            &[
                PathEl::MoveTo(Point::new(2.0, 2.0)),
                PathEl::LineTo(Point::new(2.0, 78.0)),
                PathEl::QuadTo(Point::new(50.0, 48.0), Point::new(98.0, 78.0)),
                PathEl::LineTo(Point::new(98.0, 2.0)),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn wave_top_edge_zero_height_degenerates_to_straight_bottom() {
        let mut p = params();
        p.border_width = 4.0;
        p.wave_direction = WaveDirection::TopEdge;
        let geometry = build_outlines(Size::new(100.0, 80.0), ShapeKind::WaveRect, &p);
        let Outline::Path(path) = &geometry.fill else {
            panic!("wave fill outline should be a path");
        };
        // Control point collinear with the endpoints: a straight bottom edge.
        assert_eq!(
            path.elements()[2],
            PathEl::QuadTo(Point::new(50.0, 78.0), Point::new(98.0, 78.0))
        );
    }

    #[test]
    fn wave_bottom_edge_path_elements() {
        let mut p = params();
        p.border_width = 4.0;
        p.wave_height = 30.0;
        p.wave_direction = WaveDirection::BottomEdge;
        let geometry = build_outlines(Size::new(100.0, 80.0), ShapeKind::WaveRect, &p);
        let Outline::Path(path) = &geometry.fill else {
            panic!("wave fill outline should be a path");
        };

        let elements = path.elements();
        assert_eq!(
            elements,
            &[
                PathEl::MoveTo(Point::new(2.0, 2.0)),
                PathEl::LineTo(Point::new(2.0, 48.0)),
                PathEl::QuadTo(Point::new(50.0, 78.0), Point::new(98.0, 48.0)),
                PathEl::LineTo(Point::new(98.0, 2.0)),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn wave_bottom_edge_applies_density_to_height() {
        let mut p = params();
        p.wave_height = 10.0;
        p.scale_factor = 2.0;
        p.wave_direction = WaveDirection::BottomEdge;
        let geometry = build_outlines(Size::new(100.0, 80.0), ShapeKind::WaveRect, &p);
        let Outline::Path(path) = &geometry.fill else {
            panic!("wave fill outline should be a path");
        };
        // 80 - 10 * 2 = 60 on both curve endpoints.
        assert_eq!(path.elements()[1], PathEl::LineTo(Point::new(0.0, 60.0)));
        assert_eq!(
            path.elements()[2],
            PathEl::QuadTo(Point::new(50.0, 80.0), Point::new(100.0, 60.0))
        );

        // The top-edge branch ignores the density factor.
        p.wave_direction = WaveDirection::TopEdge;
        let geometry = build_outlines(Size::new(100.0, 80.0), ShapeKind::WaveRect, &p);
        let Outline::Path(path) = &geometry.fill else {
            panic!("wave fill outline should be a path");
        };
        assert_eq!(
            path.elements()[2],
            PathEl::QuadTo(Point::new(50.0, 70.0), Point::new(100.0, 80.0))
        );
    }

    #[test]
    fn wave_height_clamped_to_surface_height() {
        let mut p = params();
        p.wave_height = 130.0;
        p.wave_direction = WaveDirection::TopEdge;
        let geometry = build_outlines(Size::new(100.0, 80.0), ShapeKind::WaveRect, &p);
        let Outline::Path(path) = &geometry.fill else {
            panic!("wave fill outline should be a path");
        };
        // Clamped to the surface height of 80, not the requested 130.
        assert_eq!(
            path.elements()[2],
            PathEl::QuadTo(Point::new(50.0, 0.0), Point::new(100.0, 80.0))
        );
    }

    #[test]
    fn wave_fill_and_border_share_one_path() {
        let mut p = params();
        p.border_width = 4.0;
        p.wave_height = 20.0;
        let geometry = build_outlines(Size::new(100.0, 80.0), ShapeKind::WaveRect, &p);
        assert_eq!(geometry.fill, geometry.border);
    }

    #[test]
    fn building_twice_is_idempotent() {
        let mut p = params();
        p.border_width = 3.0;
        p.wave_height = 15.0;
        for kind in [ShapeKind::Circle, ShapeKind::RoundedRect, ShapeKind::WaveRect] {
            let surface = Size::new(140.0, 140.0);
            let first = build_outlines(surface, kind, &p);
            let second = build_outlines(surface, kind, &p);
            assert_eq!(first, second, "outline build should be pure");
        }
    }
}

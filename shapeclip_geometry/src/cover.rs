// Copyright 2025 the Shapeclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cover-fit transform solver.
//!
//! "Cover" fitting scales a source image uniformly so it fully covers the
//! surface, overflowing on at most one axis (center-crop), as opposed to
//! "contain" fitting which never overflows.

use kurbo::{Affine, Size};

use crate::params::ShapeKind;

/// Intrinsic pixel dimensions of a bound source image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl ImageSize {
    /// Creates a new image size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if either axis is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The smaller of the two axes.
    #[must_use]
    pub const fn min_side(self) -> u32 {
        if self.width < self.height {
            self.width
        } else {
            self.height
        }
    }
}

/// Computes the uniform scale that makes `image` cover `surface`.
///
/// - For [`ShapeKind::Circle`] the scale is `surface.width / min(iw, ih)`,
///   so the image's shorter axis exactly spans the circle's bounding square
///   (circle surfaces are square by construction) and the longer axis
///   overflows symmetrically.
/// - For the rectangular shapes the scale is the larger of the two per-axis
///   ratios, guaranteeing both axes are covered with overflow on at most
///   one of them.
///
/// Callers must center the scaled image over the surface; the overflow
/// translation is implicit in center-anchored sampling and is not computed
/// here. The result is recomputed on every draw because the bound image may
/// be swapped without a resize.
///
/// Both image axes must be nonzero; the draw driver never invokes the
/// solver without a bound image.
#[must_use]
pub fn cover_scale(surface: Size, kind: ShapeKind, image: ImageSize) -> f64 {
    match kind {
        ShapeKind::Circle => surface.width / f64::from(image.min_side()),
        ShapeKind::RoundedRect | ShapeKind::WaveRect => {
            let sx = surface.width / f64::from(image.width);
            let sy = surface.height / f64::from(image.height);
            sx.max(sy)
        }
    }
}

/// The cover scale as a uniform affine, suitable as a paint transform for
/// image sampling.
#[must_use]
pub fn cover_transform(surface: Size, kind: ShapeKind, image: ImageSize) -> Affine {
    Affine::scale(cover_scale(surface, kind, image))
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Size};

    use super::{ImageSize, cover_scale, cover_transform};
    use crate::params::ShapeKind;

    #[test]
    fn circle_scale_spans_bounding_square_with_min_axis() {
        let surface = Size::new(100.0, 100.0);
        let image = ImageSize::new(400, 250);
        let scale = cover_scale(surface, ShapeKind::Circle, image);
        assert_eq!(scale, 100.0 / 250.0);
        // The scaled min axis exactly equals the circle's side.
        assert_eq!(scale * f64::from(image.min_side()), 100.0);
    }

    #[test]
    fn circle_scale_upscales_small_images() {
        let surface = Size::new(200.0, 200.0);
        let image = ImageSize::new(50, 80);
        let scale = cover_scale(surface, ShapeKind::Circle, image);
        assert_eq!(scale, 4.0);
    }

    #[test]
    fn rect_scale_is_tight_cover() {
        let surface = Size::new(300.0, 100.0);
        for kind in [ShapeKind::RoundedRect, ShapeKind::WaveRect] {
            for image in [
                ImageSize::new(600, 600),
                ImageSize::new(150, 400),
                ImageSize::new(30, 10),
                ImageSize::new(301, 99),
            ] {
                let scale = cover_scale(surface, kind, image);
                let scaled_w = scale * f64::from(image.width);
                let scaled_h = scale * f64::from(image.height);
                // Both axes covered...
                assert!(scaled_w >= surface.width - 1e-9, "width not covered");
                assert!(scaled_h >= surface.height - 1e-9, "height not covered");
                // ...and the binding axis is exact, no wasted overscale.
                let w_tight = (scaled_w - surface.width).abs() < 1e-9;
                let h_tight = (scaled_h - surface.height).abs() < 1e-9;
                assert!(w_tight || h_tight, "at least one axis must be tight");
            }
        }
    }

    #[test]
    fn rect_scale_matches_per_axis_maximum() {
        let surface = Size::new(120.0, 90.0);
        let image = ImageSize::new(60, 30);
        let scale = cover_scale(surface, ShapeKind::RoundedRect, image);
        assert_eq!(scale, 3.0);
    }

    #[test]
    fn transform_is_uniform_scale() {
        let surface = Size::new(120.0, 90.0);
        let image = ImageSize::new(60, 30);
        let transform = cover_transform(surface, ShapeKind::WaveRect, image);
        assert_eq!(transform, Affine::scale(3.0));
    }
}

// Copyright 2025 the Shapeclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shapeclip Display: the shape-clipped image draw driver.
//!
//! [`ShapeImage`] is the piece that a host view system embeds. It owns the
//! per-widget drawing state — shape selection, parameters, the current
//! [`ShapeGeometry`], and paint/path resource handles — and turns the host's
//! resize and draw callbacks into operations on an
//! [`ImagingBackend`](shapeclip_imaging::ImagingBackend).
//!
//! The host remains responsible for everything outside drawing: layout and
//! measurement, decoding the source image into a backend image resource,
//! and invoking [`ShapeImage::resize`] / [`ShapeImage::draw`] from its
//! single UI thread.
//!
//! ```rust
//! use kurbo::Size;
//! use shapeclip_display::ShapeImage;
//! use shapeclip_geometry::{ImageSize, ShapeKind, ShapeParams};
//! use shapeclip_imaging::{BrushDesc, ImageSampler, PaintDesc, ResourceBackend};
//! use shapeclip_imaging_ref::RefBackend;
//!
//! let mut backend = RefBackend::default();
//! let mut params = ShapeParams::new();
//! params.border_width = 4.0;
//!
//! let mut widget = ShapeImage::new(ShapeKind::Circle, params, &mut backend);
//! widget.resize(Size::new(120.0, 100.0), &mut backend);
//!
//! // The host decodes its bitmap, uploads it, and wraps it in an image paint.
//! # let image = backend.create_image(
//! #     shapeclip_imaging::ImageDesc {
//! #         width: 1,
//! #         height: 1,
//! #         format: shapeclip_imaging::ImageFormat::Rgba8,
//! #         alpha_type: shapeclip_imaging::ImageAlphaType::Alpha,
//! #     },
//! #     &[0, 0, 0, 0],
//! # );
//! let paint = backend.create_paint(PaintDesc {
//!     brush: BrushDesc::Image { image, sampler: ImageSampler::default() },
//! });
//! widget.set_image(paint, ImageSize::new(400, 300));
//!
//! widget.draw(&mut backend);
//! assert!(!backend.ops().is_empty());
//! ```

#![no_std]

use kurbo::Size;

use shapeclip_geometry::{
    ImageSize, Outline, ShapeGeometry, ShapeKind, ShapeParams, build_outlines, cover_transform,
    resolve_surface,
};
use shapeclip_imaging::{
    BrushDesc, CircleF, DrawOp, ImagingBackend, PaintDesc, PaintId, PathDesc, PathId,
    ResourceBackend, RoundedRectF, StateOp, StrokeStyle,
};

/// An image paint bound to the widget, with the image's intrinsic size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct BoundImage {
    /// Paint sampling the host-decoded image.
    paint: PaintId,
    /// Intrinsic pixel dimensions, used by the cover-fit solver.
    size: ImageSize,
}

/// Per-widget draw driver for a shape-clipped image.
///
/// The geometry is an explicit immutable value rebuilt on every
/// [`resize`](Self::resize) and read on every [`draw`](Self::draw); there is
/// no incremental state that can go stale between the two callbacks. The
/// cover-fit transform, by contrast, is recomputed on every draw because the
/// bound image can be swapped without a resize notification.
///
/// Drawing never fails: with no geometry (not yet resized) or no bound
/// image, [`draw`](Self::draw) is a no-op for that frame.
#[derive(Debug)]
pub struct ShapeImage {
    kind: ShapeKind,
    params: ShapeParams,
    geometry: Option<ShapeGeometry>,
    /// Path resource for the wave outline; `None` for other shapes.
    wave_path: Option<PathId>,
    border_paint: PaintId,
    image: Option<BoundImage>,
}

impl ShapeImage {
    /// Creates a widget driver, allocating its border paint.
    #[must_use]
    pub fn new(kind: ShapeKind, params: ShapeParams, backend: &mut impl ResourceBackend) -> Self {
        let border_paint = backend.create_paint(PaintDesc {
            brush: BrushDesc::Solid(params.border_color),
        });
        Self {
            kind,
            params,
            geometry: None,
            wave_path: None,
            border_paint,
            image: None,
        }
    }

    /// The widget's shape selection.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The widget's construction-time parameters.
    #[must_use]
    pub fn params(&self) -> &ShapeParams {
        &self.params
    }

    /// The current geometry, if the widget has been resized at least once.
    #[must_use]
    pub fn geometry(&self) -> Option<&ShapeGeometry> {
        self.geometry.as_ref()
    }

    /// Handles a resize notification from the host.
    ///
    /// Resolves the raw measured size (circles become square), rebuilds the
    /// outlines in full, and swaps the wave path resource when the shape
    /// needs one. Safe to call repeatedly with the same size; the rebuild is
    /// pure and yields identical geometry.
    pub fn resize(&mut self, raw: Size, backend: &mut impl ResourceBackend) {
        let surface = resolve_surface(self.kind, raw);
        let geometry = build_outlines(surface, self.kind, &self.params);

        if let Some(old) = self.wave_path.take() {
            backend.destroy_path(old);
        }
        if let Outline::Path(path) = &geometry.fill {
            self.wave_path = Some(backend.create_path(PathDesc::from_kurbo(path)));
        }
        self.geometry = Some(geometry);
    }

    /// Binds the host's image paint and the image's intrinsic size.
    ///
    /// The paint is expected to be a [`BrushDesc::Image`] paint created by
    /// the host from its decoded bitmap; the widget does not own it and
    /// never destroys it. An empty `size` unbinds the image instead, since
    /// the cover-fit solver has nothing to fit.
    pub fn set_image(&mut self, paint: PaintId, size: ImageSize) {
        if size.is_empty() {
            self.image = None;
        } else {
            self.image = Some(BoundImage { paint, size });
        }
    }

    /// Unbinds the image; subsequent draws are no-ops until a new image is
    /// bound.
    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Handles a draw request from the host.
    ///
    /// Emits, in order: the cover-fit paint transform, the image paint, and
    /// a fill of the fill outline; then, only when the border width is
    /// nonzero, the stroke style, the border paint, and a stroke of the
    /// border outline. A zero border width skips the stroke entirely rather
    /// than emitting a zero-width stroke.
    pub fn draw(&self, backend: &mut impl ImagingBackend) {
        let (Some(geometry), Some(image)) = (&self.geometry, &self.image) else {
            return;
        };
        let Some(fill) = self.draw_op(&geometry.fill, false) else {
            return;
        };

        let transform = cover_transform(geometry.surface, self.kind, image.size);
        backend.state(StateOp::SetPaintTransform(transform));
        backend.state(StateOp::SetPaint(image.paint));
        backend.draw(fill);

        if self.params.border_width > 0.0 {
            let Some(stroke) = self.draw_op(&geometry.border, true) else {
                return;
            };
            backend.state(StateOp::SetStroke(StrokeStyle::new(
                self.params.border_width,
            )));
            backend.state(StateOp::SetPaint(self.border_paint));
            backend.draw(stroke);
        }
    }

    /// Releases the widget's backend resources (border paint and wave path).
    ///
    /// The bound image paint is host-owned and left alone.
    pub fn release(self, backend: &mut impl ResourceBackend) {
        backend.destroy_paint(self.border_paint);
        if let Some(path) = self.wave_path {
            backend.destroy_path(path);
        }
    }

    /// Maps an outline onto a fill or stroke draw op.
    ///
    /// Returns `None` only when a path outline has no backing resource,
    /// which cannot happen after a resize; callers skip the draw in that
    /// case rather than panic.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "IR geometry is stored in f32; surface coordinates fit comfortably"
    )]
    fn draw_op(&self, outline: &Outline, stroke: bool) -> Option<DrawOp> {
        Some(match outline {
            Outline::Circle(circle) => {
                let circle = CircleF::from(*circle);
                if stroke {
                    DrawOp::StrokeCircle(circle)
                } else {
                    DrawOp::FillCircle(circle)
                }
            }
            Outline::RoundedRect(rr) => {
                let rect = rr.rect();
                let rr = RoundedRectF::new(
                    rect.x0 as f32,
                    rect.y0 as f32,
                    rect.x1 as f32,
                    rect.y1 as f32,
                    rr.radii().top_left as f32,
                );
                if stroke {
                    DrawOp::StrokeRoundedRect(rr)
                } else {
                    DrawOp::FillRoundedRect(rr)
                }
            }
            Outline::Path(_) => {
                let id = self.wave_path?;
                if stroke {
                    DrawOp::StrokePath(id)
                } else {
                    DrawOp::FillPath(id)
                }
            }
        })
    }
}

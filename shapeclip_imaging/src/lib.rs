// Copyright 2025 the Shapeclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shapeclip Imaging: backend-agnostic draw IR and backend traits.
//!
//! This crate defines the small, plain-old-data (POD) friendly drawing
//! surface that Shapeclip's display layer targets. It sits between the
//! geometry/display crates and concrete rasterizers (a GPU renderer, a CPU
//! rasterizer, a recording test backend, ...).
//!
//! # Core concepts
//!
//! - **Resources**: small, opaque handles ([`PathId`], [`ImageId`],
//!   [`PaintId`]) whose lifetimes are managed via [`ResourceBackend`].
//! - **Operations**: [`StateOp`] (mutate sampling/stroke/paint state) and
//!   [`DrawOp`] (produce pixels), accepted by [`ImagingBackend`].
//! - **Image paints**: [`BrushDesc::Image`] is the IR rendition of a
//!   clamped bitmap shader. The current paint transform
//!   ([`StateOp::SetPaintTransform`]) maps image pixels into local
//!   coordinates, which is how the cover-fit scale reaches the sampler.
//!
//! The op set is intentionally minimal: filling and stroking paths,
//! circles, and rounded rectangles is everything the shape-clipped image
//! widget needs. Layering, clipping, and compositing are left to richer
//! IRs; here the fill geometry itself is the clip.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;

pub use peniko::{Color, ImageAlphaType, ImageFormat, ImageSampler};

/// Affine transform type used by the draw IR.
pub type Affine = kurbo::Affine;

/// Stroke style used by [`StateOp::SetStroke`].
///
/// This is a re-export of [`kurbo::Stroke`], which captures width, joins,
/// caps, and related stroke parameters.
pub type StrokeStyle = kurbo::Stroke;

/// Identifier for a path resource.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// resource. Paths are expected to be reused across frames while they
/// remain alive.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathId(pub u32);

/// Identifier for an image resource.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// resource. Images are typically created once (from host-decoded pixels)
/// and reused until explicitly destroyed.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// Identifier for a paint resource.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// resource. Paints may be shared by many draw operations.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaintId(pub u32);

/// A simple axis-aligned rectangle in f32 coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RectF {
    /// Minimum X coordinate.
    pub x0: f32,
    /// Minimum Y coordinate.
    pub y0: f32,
    /// Maximum X coordinate.
    pub x1: f32,
    /// Maximum Y coordinate.
    pub y1: f32,
}

impl RectF {
    /// Create a new rectangle from min/max corners.
    #[inline]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Convert to kurbo's rectangle type.
    #[inline]
    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1),
            f64::from(self.y1),
        )
    }
}

impl From<kurbo::Rect> for RectF {
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "IR geometry is stored in f32; surface coordinates fit comfortably"
    )]
    fn from(rect: kurbo::Rect) -> Self {
        Self::new(rect.x0 as f32, rect.y0 as f32, rect.x1 as f32, rect.y1 as f32)
    }
}

/// A circle in f32 coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CircleF {
    /// X coordinate of the center.
    pub cx: f32,
    /// Y coordinate of the center.
    pub cy: f32,
    /// Radius.
    ///
    /// Zero and negative radii are valid inputs that draw nothing; backends
    /// must collapse them rather than reject them.
    pub radius: f32,
}

impl CircleF {
    /// Create a new circle from center and radius.
    #[inline]
    pub const fn new(cx: f32, cy: f32, radius: f32) -> Self {
        Self { cx, cy, radius }
    }

    /// Convert to kurbo's circle type.
    #[inline]
    pub fn to_kurbo(self) -> kurbo::Circle {
        kurbo::Circle::new(
            (f64::from(self.cx), f64::from(self.cy)),
            f64::from(self.radius),
        )
    }
}

impl From<kurbo::Circle> for CircleF {
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "IR geometry is stored in f32; surface coordinates fit comfortably"
    )]
    fn from(circle: kurbo::Circle) -> Self {
        Self::new(
            circle.center.x as f32,
            circle.center.y as f32,
            circle.radius as f32,
        )
    }
}

/// An axis-aligned rounded rectangle with a uniform corner radius, in f32
/// coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoundedRectF {
    /// The underlying axis-aligned rectangle.
    pub rect: RectF,
    /// Uniform radius of the rounded corners.
    pub radius: f32,
}

impl RoundedRectF {
    /// Create a new rounded rectangle from corners and radius.
    #[inline]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32, radius: f32) -> Self {
        Self {
            rect: RectF { x0, y0, x1, y1 },
            radius,
        }
    }

    /// Convert to kurbo's rounded-rect type.
    #[inline]
    pub fn to_kurbo(self) -> kurbo::RoundedRect {
        kurbo::RoundedRect::from_rect(self.rect.to_kurbo(), f64::from(self.radius))
    }
}

/// Simple path command enumeration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCmd {
    /// Move the current point without drawing.
    MoveTo {
        /// X coordinate of the new point.
        x: f32,
        /// Y coordinate of the new point.
        y: f32,
    },
    /// Draw a line from the current point to the given point.
    LineTo {
        /// X coordinate of the line end.
        x: f32,
        /// Y coordinate of the line end.
        y: f32,
    },
    /// Draw a quadratic Bézier curve from the current point to the given
    /// point, using a single control point.
    QuadTo {
        /// X coordinate of the control point.
        x1: f32,
        /// Y coordinate of the control point.
        y1: f32,
        /// X coordinate of the curve end.
        x: f32,
        /// Y coordinate of the curve end.
        y: f32,
    },
    /// Draw a cubic Bézier curve from the current point to the given point,
    /// using two control points.
    CurveTo {
        /// X coordinate of the first control point.
        x1: f32,
        /// Y coordinate of the first control point.
        y1: f32,
        /// X coordinate of the second control point.
        x2: f32,
        /// Y coordinate of the second control point.
        y2: f32,
        /// X coordinate of the curve end.
        x: f32,
        /// Y coordinate of the curve end.
        y: f32,
    },
    /// Close the current subpath.
    Close,
}

/// Description of a path resource.
#[derive(Clone, Debug, PartialEq)]
pub struct PathDesc {
    /// Command buffer describing the path geometry.
    pub commands: Box<[PathCmd]>,
}

impl PathDesc {
    /// Build a path description from a kurbo path.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "IR geometry is stored in f32; surface coordinates fit comfortably"
    )]
    pub fn from_kurbo(path: &kurbo::BezPath) -> Self {
        let commands = path
            .elements()
            .iter()
            .map(|el| match *el {
                kurbo::PathEl::MoveTo(p) => PathCmd::MoveTo {
                    x: p.x as f32,
                    y: p.y as f32,
                },
                kurbo::PathEl::LineTo(p) => PathCmd::LineTo {
                    x: p.x as f32,
                    y: p.y as f32,
                },
                kurbo::PathEl::QuadTo(p1, p) => PathCmd::QuadTo {
                    x1: p1.x as f32,
                    y1: p1.y as f32,
                    x: p.x as f32,
                    y: p.y as f32,
                },
                kurbo::PathEl::CurveTo(p1, p2, p) => PathCmd::CurveTo {
                    x1: p1.x as f32,
                    y1: p1.y as f32,
                    x2: p2.x as f32,
                    y2: p2.y as f32,
                    x: p.x as f32,
                    y: p.y as f32,
                },
                kurbo::PathEl::ClosePath => PathCmd::Close,
            })
            .collect();
        Self { commands }
    }

    /// Convert the command buffer back into a kurbo path.
    #[must_use]
    pub fn to_kurbo(&self) -> kurbo::BezPath {
        let mut path = kurbo::BezPath::new();
        for cmd in &self.commands {
            match *cmd {
                PathCmd::MoveTo { x, y } => path.move_to((f64::from(x), f64::from(y))),
                PathCmd::LineTo { x, y } => path.line_to((f64::from(x), f64::from(y))),
                PathCmd::QuadTo { x1, y1, x, y } => path.quad_to(
                    (f64::from(x1), f64::from(y1)),
                    (f64::from(x), f64::from(y)),
                ),
                PathCmd::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => path.curve_to(
                    (f64::from(x1), f64::from(y1)),
                    (f64::from(x2), f64::from(y2)),
                    (f64::from(x), f64::from(y)),
                ),
                PathCmd::Close => path.close_path(),
            }
        }
        path
    }
}

/// Description of an image resource.
///
/// The pixel payload itself is passed alongside this descriptor to
/// [`ResourceBackend::create_image`]; decoding is a host concern.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImageDesc {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel format of the image buffer.
    pub format: ImageFormat,
    /// Alpha encoding of the pixels (straight vs premultiplied).
    pub alpha_type: ImageAlphaType,
}

/// Brush used when rendering: a solid color or a sampled image.
///
/// An image brush is the IR rendition of a clamped bitmap shader: the image
/// resource is sampled through the current paint transform, so a uniform
/// scale set via [`StateOp::SetPaintTransform`] enlarges or shrinks the
/// texture under whatever geometry is filled with the paint.
#[derive(Clone, Debug, PartialEq)]
pub enum BrushDesc {
    /// A solid color.
    Solid(Color),
    /// An image sampled through the current paint transform.
    Image {
        /// Image resource to sample.
        image: ImageId,
        /// Parameters that specify how to sample the image (extend modes,
        /// filter quality).
        sampler: ImageSampler,
    },
}

/// Description of a paint resource.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintDesc {
    /// Brush used when rendering.
    pub brush: BrushDesc,
}

/// State operations that mutate the current drawing state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the paint-space transform used when sampling brushes. This is
    /// separate from any geometry transform a backend may maintain.
    SetPaintTransform(Affine),
    /// Set the current paint resource.
    SetPaint(PaintId),
    /// Set the current stroke style.
    SetStroke(StrokeStyle),
}

/// Draw operations that produce pixels given the current state.
///
/// The primitive set mirrors the shapes the display layer emits: generic
/// paths plus analytic circles and rounded rectangles, each fillable and
/// strokeable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill the given path with the current paint.
    FillPath(PathId),
    /// Stroke the given path with the current stroke and paint.
    StrokePath(PathId),
    /// Fill a circle with the current paint.
    FillCircle(CircleF),
    /// Stroke a circle with the current stroke and paint.
    StrokeCircle(CircleF),
    /// Fill a rounded rectangle with the current paint.
    FillRoundedRect(RoundedRectF),
    /// Stroke a rounded rectangle with the current stroke and paint.
    StrokeRoundedRect(RoundedRectF),
}

/// Unified operation, useful for backends that log or record.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// Resource lifetime interface.
///
/// Backends implement this to manage their own resource storage.
/// Implementations are free to choose how resources are allocated and
/// stored, but they must ensure that IDs remain valid and refer to the same
/// logical resource until the corresponding `destroy_*` function is called.
pub trait ResourceBackend {
    /// Create a path resource.
    fn create_path(&mut self, desc: PathDesc) -> PathId;
    /// Destroy a previously created path.
    fn destroy_path(&mut self, id: PathId);

    /// Create an image resource from raw pixels.
    ///
    /// The `pixels` slice is expected to contain tightly packed, row-major
    /// image data matching `desc`. Backends should document their accepted
    /// formats and any alignment requirements.
    fn create_image(&mut self, desc: ImageDesc, pixels: &[u8]) -> ImageId;
    /// Destroy a previously created image.
    fn destroy_image(&mut self, id: ImageId);

    /// Create a paint resource.
    fn create_paint(&mut self, desc: PaintDesc) -> PaintId;
    /// Destroy a previously created paint.
    fn destroy_paint(&mut self, id: PaintId);
}

/// Minimal drawing backend trait.
///
/// A backend accepts state and draw operations in submission order. There
/// is no frame or pass structure here; the display layer emits a short,
/// self-contained op sequence per draw.
pub trait ImagingBackend: ResourceBackend {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);
}

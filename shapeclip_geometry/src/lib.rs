// Copyright 2025 the Shapeclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shapeclip Geometry: shape outlines and cover-fit transforms.
//!
//! This crate is the headless core of Shapeclip. Given a surface size, a
//! shape selection, and border/curve parameters it computes:
//! - The vector outlines to fill (clipping the image) and to stroke (the
//!   optional border), via [`build_outlines`].
//! - The uniform scale mapping a source image onto the surface so the image
//!   fully covers the shape (center-crop semantics), via [`cover_scale`] /
//!   [`cover_transform`].
//!
//! It does **not** own a view, a rasterizer, or image decoding. Callers are
//! expected to:
//! - Resolve measured dimensions with [`resolve_surface`] and rebuild the
//!   [`ShapeGeometry`] on every resize.
//! - Recompute the cover transform on every draw, since the bound image can
//!   change independently of the surface.
//! - Center the scaled image over the surface (the overflow translation is
//!   implicit in center-anchored sampling and never computed here).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use shapeclip_geometry::{
//!     ImageSize, ShapeKind, ShapeParams, build_outlines, cover_scale, resolve_surface,
//! };
//!
//! let mut params = ShapeParams::new();
//! params.border_width = 4.0;
//!
//! // A 300x200 widget holding a circle-clipped image: the surface is
//! // forced square first.
//! let surface = resolve_surface(ShapeKind::Circle, Size::new(300.0, 200.0));
//! let geometry = build_outlines(surface, ShapeKind::Circle, &params);
//!
//! // Scale a 400x600 image so its shorter axis spans the circle.
//! let scale = cover_scale(geometry.surface, ShapeKind::Circle, ImageSize::new(400, 600));
//! assert_eq!(scale, 0.5);
//! ```
//!
//! ## Design notes
//!
//! - Both computations are pure functions of their inputs; there is no
//!   incremental state and no caching.
//! - Degenerate parameters (a border wider than the shape) produce
//!   degenerate outlines rather than errors; rasterizers collapse them.
//! - The two wave directions deliberately disagree about the unit of the
//!   wave height (see [`ShapeParams::scale_factor`]).

#![no_std]

mod cover;
mod outline;
mod params;

pub use cover::{ImageSize, cover_scale, cover_transform};
pub use outline::{Outline, ShapeGeometry, build_outlines};
pub use params::{ShapeKind, ShapeParams, WaveDirection, resolve_surface};

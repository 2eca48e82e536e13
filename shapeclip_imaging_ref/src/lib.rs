// Copyright 2025 the Shapeclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shapeclip Imaging Reference Backend.
//!
//! This crate provides a small, stateful implementation of
//! [`ImagingBackend`] and [`ResourceBackend`] for **op recording and state
//! tracing**.
//!
//! It is intentionally *not* a reference renderer:
//! - It does **not** rasterize to pixels.
//! - It does **not** establish "golden" rendering behavior across backends.
//! - It is intended primarily for tests and debugging that want to assert
//!   on emitted ops and the drawing state at the time each op is applied.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use shapeclip_imaging::{
    Affine, DrawOp, ImageDesc, ImageId, ImagingBackend, Op, PaintDesc, PaintId, PathDesc, PathId,
    ResourceBackend, StateOp, StrokeStyle,
};

/// Snapshot of the current drawing state inside the backend.
#[derive(Clone, Debug)]
pub struct StateSnapshot {
    /// Current paint-space transform used when sampling brushes.
    pub paint_transform: Affine,
    /// Current paint, if set.
    pub paint: Option<PaintId>,
    /// Current stroke style, if set.
    pub stroke: Option<StrokeStyle>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            paint_transform: Affine::IDENTITY,
            paint: None,
            stroke: None,
        }
    }
}

/// Event recorded by the reference backend.
#[derive(Clone, Debug)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Simple reference implementation of the imaging backend.
///
/// This backend:
/// - Stores resource descriptors in vectors keyed by their IDs,
/// - Tracks current paint / stroke / paint-transform state,
/// - Records high-level [`Event`]s as state and draw operations are applied.
#[derive(Default, Debug)]
pub struct RefBackend {
    paths: Vec<Option<PathDesc>>,
    images: Vec<Option<(ImageDesc, Vec<u8>)>>,
    paints: Vec<Option<PaintDesc>>,

    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// Underlying ops, in submission order.
    ops: Vec<Op>,
    /// Current drawing state.
    state: StateSnapshot,
}

impl RefBackend {
    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw operations.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Clears all recorded events and ops but keeps resources.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }

    /// Returns the descriptor for a live path resource.
    pub fn path_desc(&self, id: PathId) -> Option<&PathDesc> {
        self.paths.get(id.0 as usize).and_then(Option::as_ref)
    }

    /// Returns the descriptor for a live paint resource.
    pub fn paint_desc(&self, id: PaintId) -> Option<&PaintDesc> {
        self.paints.get(id.0 as usize).and_then(Option::as_ref)
    }

    /// Returns the descriptor and pixels for a live image resource.
    pub fn image_desc(&self, id: ImageId) -> Option<&(ImageDesc, Vec<u8>)> {
        self.images.get(id.0 as usize).and_then(Option::as_ref)
    }
}

impl ResourceBackend for RefBackend {
    fn create_path(&mut self, desc: PathDesc) -> PathId {
        let id =
            u32::try_from(self.paths.len()).expect("RefBackend: too many paths for u32 PathId");
        self.paths.push(Some(desc));
        PathId(id)
    }

    fn destroy_path(&mut self, id: PathId) {
        let idx = id.0 as usize;
        if let Some(slot) = self.paths.get_mut(idx) {
            *slot = None;
        }
    }

    fn create_image(&mut self, desc: ImageDesc, pixels: &[u8]) -> ImageId {
        let id =
            u32::try_from(self.images.len()).expect("RefBackend: too many images for u32 ImageId");
        self.images.push(Some((desc, pixels.to_vec())));
        ImageId(id)
    }

    fn destroy_image(&mut self, id: ImageId) {
        let idx = id.0 as usize;
        if let Some(slot) = self.images.get_mut(idx) {
            *slot = None;
        }
    }

    fn create_paint(&mut self, desc: PaintDesc) -> PaintId {
        let id =
            u32::try_from(self.paints.len()).expect("RefBackend: too many paints for u32 PaintId");
        self.paints.push(Some(desc));
        PaintId(id)
    }

    fn destroy_paint(&mut self, id: PaintId) {
        let idx = id.0 as usize;
        if let Some(slot) = self.paints.get_mut(idx) {
            *slot = None;
        }
    }
}

impl ImagingBackend for RefBackend {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetPaintTransform(tx) => self.state.paint_transform = *tx,
            StateOp::SetPaint(id) => self.state.paint = Some(*id),
            StateOp::SetStroke(style) => self.state.stroke = Some(style.clone()),
        }

        self.ops.push(Op::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(Op::Draw(op));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}

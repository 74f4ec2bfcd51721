//! Flattened per-frame render instances.
//!
//! [`FrameInstance`] is the renderer-facing form of one particle at one
//! timestamp: descriptor attributes and timeline sample resolved against a
//! concrete viewport, laid out `#[repr(C)]` and [`bytemuck::Pod`] so a
//! whole frame can be memcpy'd into a GPU instance buffer (or read field by
//! field from a CPU compositor - nothing here requires a GPU).

use crate::descriptor::ParticleDescriptor;
use crate::timeline::MotionSample;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// One particle, one frame, resolved to viewport units.
///
/// 32 bytes, no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrameInstance {
    /// Center position in viewport units. X is the spawn column plus the
    /// current sway offset; Y follows the fall track (negative above the
    /// top edge).
    pub position: [f32; 2],
    /// Rendered diameter (base size times depth scale), in viewport units.
    pub size: f32,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Opacity; forced to 0.0 while the particle's start delay is pending.
    pub opacity: f32,
    /// Blur radius in viewport units.
    pub blur: f32,
    /// Depth bucket for draw ordering (0 = farthest, draw first).
    pub layer: u32,
    /// 1 once the start delay has elapsed, else 0.
    pub started: u32,
}

impl FrameInstance {
    /// Resolve a descriptor and a motion sample against a viewport size.
    pub(crate) fn compose(
        particle: &ParticleDescriptor,
        motion: &MotionSample,
        viewport: Vec2,
    ) -> Self {
        let x = particle.horizontal_position / 100.0 * viewport.x + motion.sway_offset;
        let y = motion.y * viewport.y;

        Self {
            position: [x, y],
            size: particle.rendered_size(),
            rotation: motion.rotation,
            opacity: if motion.started { particle.opacity } else { 0.0 },
            blur: particle.blur_radius,
            layer: particle.depth_layer,
            started: motion.started as u32,
        }
    }
}

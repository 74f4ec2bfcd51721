//! Particle descriptors.
//!
//! A descriptor is the immutable record of one particle's sampled visual and
//! motion parameters. Descriptors are value objects: the generator fills
//! them in once and nothing mutates them afterwards; regeneration replaces
//! the whole batch.

/// One particle's sampled parameters.
///
/// Primary fields are drawn independently per particle. The secondary
/// fields (`scale`, `blur_radius`, `depth_layer`) are all derived from the
/// single shared [`depth`](ParticleDescriptor::depth) sample, which also
/// drives `size`, `fall_duration` and `opacity` - near particles are
/// coherently large, fast, sharp and opaque, giving the field a layered
/// parallax look instead of uncorrelated noise.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleDescriptor {
    /// Ordinal within the batch, contiguous `0..count`. Stable render key.
    pub id: u32,
    /// Horizontal spawn position as a percentage of container width, `[0, 100)`.
    pub horizontal_position: f32,
    /// Diameter in length units.
    pub size: f32,
    /// Seconds for one full vertical traversal. Larger = slower.
    pub fall_duration: f32,
    /// Seconds before the first animation cycle begins. Applies once;
    /// subsequent loops repeat back-to-back.
    pub start_delay: f32,
    /// Signed maximum horizontal displacement during fall, in length units.
    pub sway_amplitude: f32,
    /// Starting rotation angle in degrees, `[0, 360)`.
    pub initial_rotation: f32,
    /// Rendered opacity.
    pub opacity: f32,
    /// Shared depth sample in `[0, 1)`; 1 is nearest to the viewer.
    pub depth: f32,
    /// Visual scale multiplier, derived from depth.
    pub scale: f32,
    /// Blur radius in length units, derived from depth (far = blurrier).
    pub blur_radius: f32,
    /// Depth bucket for z-ordering, `0..depth_layers` (0 = farthest).
    pub depth_layer: u32,
}

impl ParticleDescriptor {
    /// Rendered diameter after applying the depth-driven scale.
    #[inline]
    pub fn rendered_size(&self) -> f32 {
        self.size * self.scale
    }
}

//! Batch generation and the particle field lifecycle.
//!
//! [`generate_batch`] is the core operation: given a count and a style
//! profile it produces a batch of independently sampled
//! [`ParticleDescriptor`]s together with their derived [`Timeline`]s.
//! Generation is pure and synchronous - no I/O, no timers, no shared state;
//! the only effect is consuming entropy.
//!
//! [`ParticleField`] wraps a batch with the mount/regenerate lifecycle:
//! it recomputes only when its declared inputs (count, style, sprite)
//! change, the way a UI layer memoizes a derived value on its inputs.
//!
//! # Quick Start
//!
//! ```ignore
//! use fallfield::{generate_batch, Style, Vec2};
//!
//! let batch = generate_batch(22, Style::Backend);
//! for instance in batch.frame(time.elapsed(), Vec2::new(1920.0, 1080.0)) {
//!     draw_sprite(instance);
//! }
//! ```

use crate::descriptor::ParticleDescriptor;
use crate::error::FieldError;
use crate::instance::FrameInstance;
use crate::sample::SampleContext;
use crate::style::{Style, StyleConfig};
use crate::timeline::Timeline;
use glam::Vec2;

/// Generate a batch of falling-particle descriptors for a built-in style.
///
/// Returns exactly `count` descriptors with contiguous ids `0..count`;
/// `count == 0` yields an empty batch. Order is stable within the returned
/// batch (ids double as render keys) but carries no other meaning.
///
/// Randomness is live: calling twice with the same inputs produces
/// different batches. There is no seeding API and no reproducibility
/// guarantee across calls.
pub fn generate_batch(count: usize, style: Style) -> Batch {
    // Built-in profiles are valid by construction; skip the validation path.
    batch_from(count, style.config())
}

/// Generate a batch from an explicit profile, validating it first.
///
/// This is the path for custom profiles; see [`StyleConfig::validate`] for
/// what gets rejected.
pub fn generate_batch_with(count: usize, config: &StyleConfig) -> Result<Batch, FieldError> {
    config.validate()?;
    Ok(batch_from(count, config.clone()))
}

fn batch_from(count: usize, config: StyleConfig) -> Batch {
    let delay_cap = config.effective_delay_cap(count);
    let particles: Vec<ParticleDescriptor> = (0..count)
        .map(|i| sample_particle(i as u32, count as u32, &config, delay_cap))
        .collect();
    let timelines = particles.iter().map(Timeline::for_descriptor).collect();

    Batch {
        config,
        particles,
        timelines,
    }
}

/// Sample one descriptor.
///
/// A single depth draw drives size, fall duration, opacity, blur, scale and
/// layer jointly (near = big, fast, sharp, opaque); position, delay, sway
/// and rotation are drawn independently. Depth is uniform, so each derived
/// attribute is still uniform over its own range.
fn sample_particle(
    index: u32,
    count: u32,
    config: &StyleConfig,
    delay_cap: f32,
) -> ParticleDescriptor {
    let mut ctx = SampleContext::new(index, count);

    let depth = ctx.random();
    let layer = ((depth * config.depth_layers as f32) as u32).min(config.depth_layers - 1);

    ParticleDescriptor {
        id: index,
        horizontal_position: ctx.random_range(0.0, 100.0),
        size: lerp(config.size.start, config.size.end, depth),
        // Near particles traverse faster, hence the inverted lerp.
        fall_duration: lerp(config.fall_duration.end, config.fall_duration.start, depth),
        start_delay: ctx.random_range(0.0, delay_cap),
        sway_amplitude: ctx.random_signed(config.sway_amplitude),
        initial_rotation: ctx.random_degrees(),
        opacity: lerp(config.opacity.start, config.opacity.end, depth),
        depth,
        scale: lerp(config.scale.start, config.scale.end, depth),
        blur_radius: (1.0 - depth) * config.max_blur,
        depth_layer: layer,
    }
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// A generated batch: descriptors plus their derived timelines.
///
/// Immutable once generated; regeneration replaces the whole batch. The
/// rendering surface should treat it as replace-only - there is no
/// incremental diffing contract.
#[derive(Debug, Clone)]
pub struct Batch {
    config: StyleConfig,
    particles: Vec<ParticleDescriptor>,
    timelines: Vec<Timeline>,
}

impl Batch {
    /// Number of particles in the batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the batch is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The profile this batch was generated from.
    #[inline]
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// The descriptors, in id order.
    #[inline]
    pub fn particles(&self) -> &[ParticleDescriptor] {
        &self.particles
    }

    /// The derived timelines, index-aligned with [`Batch::particles`].
    #[inline]
    pub fn timelines(&self) -> &[Timeline] {
        &self.timelines
    }

    /// Descriptor and timeline for one particle id.
    pub fn get(&self, id: u32) -> Option<(&ParticleDescriptor, &Timeline)> {
        let d = self.particles.get(id as usize)?;
        let t = self.timelines.get(id as usize)?;
        Some((d, t))
    }

    /// Evaluate every particle at time `t` and flatten to render instances.
    ///
    /// `viewport` is the rendering surface size in length units; horizontal
    /// percentages and normalized fall positions are resolved against it.
    /// The result is ready to upload to an instance buffer - see
    /// [`FrameInstance`].
    pub fn frame(&self, t: f32, viewport: Vec2) -> Vec<FrameInstance> {
        self.particles
            .iter()
            .zip(&self.timelines)
            .map(|(p, tl)| FrameInstance::compose(p, &tl.sample(t), viewport))
            .collect()
    }
}

/// A particle field with memoized-on-inputs regeneration.
///
/// Owns the current batch and the inputs it was generated from. Calling
/// [`batch`](ParticleField::batch) regenerates only when an input changed
/// since the last call, mirroring a per-mount memoized value in a UI tree:
/// stable inputs keep stable particles, a theme switch replaces the field
/// wholesale.
///
/// # Example
///
/// ```ignore
/// let mut field = ParticleField::new(Style::Backend)
///     .with_count(22)
///     .with_sprite("sakura-petal.png");
///
/// let first = field.batch().len();   // generates
/// field.set_style(Style::Security);  // invalidates
/// let second = field.batch().len();  // regenerates
/// ```
#[derive(Debug)]
pub struct ParticleField {
    count: usize,
    style: Style,
    sprite: Option<String>,
    batch: Option<Batch>,
}

/// Default particle count, matching a typical hero-banner field.
pub const DEFAULT_COUNT: usize = 20;

impl ParticleField {
    /// Create a field for a style with the default count and no sprite.
    pub fn new(style: Style) -> Self {
        Self {
            count: DEFAULT_COUNT,
            style,
            sprite: None,
            batch: None,
        }
    }

    /// Set the particle count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the sprite reference handed through to the rendering surface.
    ///
    /// Opaque to the generator; it only participates in memoization so a
    /// sprite swap forces a fresh batch alongside it.
    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = Some(sprite.into());
        self
    }

    /// Current particle count.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Current style.
    #[inline]
    pub fn style(&self) -> Style {
        self.style
    }

    /// Current sprite reference, if any.
    #[inline]
    pub fn sprite(&self) -> Option<&str> {
        self.sprite.as_deref()
    }

    /// Change the count. Invalidates the batch only if it differs.
    pub fn set_count(&mut self, count: usize) {
        if self.count != count {
            self.count = count;
            self.batch = None;
        }
    }

    /// Change the style. Invalidates the batch only if it differs.
    pub fn set_style(&mut self, style: Style) {
        if self.style != style {
            self.style = style;
            self.batch = None;
        }
    }

    /// Change the sprite. Invalidates the batch only if it differs.
    pub fn set_sprite(&mut self, sprite: Option<String>) {
        if self.sprite != sprite {
            self.sprite = sprite;
            self.batch = None;
        }
    }

    /// The batch for the current inputs, generating it if stale.
    pub fn batch(&mut self) -> &Batch {
        let (count, style) = (self.count, self.style);
        self.batch.get_or_insert_with(|| generate_batch(count, style))
    }

    /// Drop the current batch and generate a fresh one.
    pub fn regenerate(&mut self) -> &Batch {
        self.batch = None;
        self.batch()
    }
}

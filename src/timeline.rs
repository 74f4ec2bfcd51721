//! Motion timelines for falling particles.
//!
//! Each particle animates along three independent infinite loops:
//!
//! | Track | Path | Period |
//! |-------|------|--------|
//! | Fall | linear, above the top edge to below the bottom edge | `fall_duration` |
//! | Sway | keyframed back-and-forth, eased | `0.8 x fall_duration` |
//! | Spin | linear, one full turn from the initial angle | `1.5 x fall_duration` |
//!
//! The tracks start together after the particle's single start delay, then
//! each wraps on its own period and is never re-synchronized. Because the
//! periods differ, sway and spin drift out of phase with the fall over
//! time - that slow decoherence is what makes the field read as organic
//! rather than mechanical, and it must be preserved.
//!
//! Every track is a closed-form function of elapsed time modulo its own
//! period, so a renderer can evaluate any particle at any timestamp without
//! tracking loop counts or accumulating per-frame state.
//!
//! # Example
//!
//! ```ignore
//! let timeline = Timeline::for_descriptor(&descriptor);
//! let m = timeline.sample(time.elapsed());
//! draw(x_base + m.sway_offset, m.y * viewport_height, m.rotation);
//! ```

use crate::descriptor::ParticleDescriptor;

/// Vertical cycle start, in normalized container heights. Just above the
/// visible top edge so particles enter the frame instead of popping in.
pub const VERTICAL_START: f32 = -0.1;

/// Vertical cycle end, just below the visible bottom edge.
pub const VERTICAL_END: f32 = 1.1;

/// Sway period as a fraction of the fall period.
pub const SWAY_PERIOD_RATIO: f32 = 0.8;

/// Spin period as a multiple of the fall period.
pub const SPIN_PERIOD_RATIO: f32 = 1.5;

/// Sway keyframes as multiples of the particle's sway amplitude, hit at
/// equal phase steps through the sway period. The asymmetric return path
/// (full swing out, half back, third out again) is what keeps the drift
/// from looking like a metronome.
const SWAY_KEYFRAMES: [f32; 5] = [0.0, 1.0, -0.5, 1.0 / 3.0, 0.0];

/// The derived motion timeline for one particle.
///
/// Built once per descriptor at generation time; evaluation is pure and
/// allocation-free.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    start_delay: f32,
    fall_period: f32,
    sway_period: f32,
    spin_period: f32,
    sway_amplitude: f32,
    initial_rotation: f32,
}

/// A timeline evaluated at one timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    /// Vertical position in normalized container heights:
    /// [`VERTICAL_START`] at cycle start, [`VERTICAL_END`] at cycle end.
    pub y: f32,
    /// Progress through the current fall cycle, `[0, 1)`.
    pub fall_progress: f32,
    /// Horizontal displacement from the spawn column, in length units.
    pub sway_offset: f32,
    /// Current rotation in degrees (unbounded; wraps visually every 360).
    pub rotation: f32,
    /// False until the start delay has elapsed. A not-yet-started particle
    /// sits at its cycle-start pose, above the viewport.
    pub started: bool,
}

impl Timeline {
    /// Derive the timeline for a descriptor.
    pub fn for_descriptor(d: &ParticleDescriptor) -> Self {
        Self {
            start_delay: d.start_delay,
            fall_period: d.fall_duration,
            sway_period: d.fall_duration * SWAY_PERIOD_RATIO,
            spin_period: d.fall_duration * SPIN_PERIOD_RATIO,
            sway_amplitude: d.sway_amplitude,
            initial_rotation: d.initial_rotation,
        }
    }

    /// Seconds before the first cycle begins. Applies once, not per loop.
    #[inline]
    pub fn start_delay(&self) -> f32 {
        self.start_delay
    }

    /// Period of the vertical fall loop, in seconds.
    #[inline]
    pub fn fall_period(&self) -> f32 {
        self.fall_period
    }

    /// Period of the sway loop, in seconds.
    #[inline]
    pub fn sway_period(&self) -> f32 {
        self.sway_period
    }

    /// Period of the spin loop, in seconds.
    #[inline]
    pub fn spin_period(&self) -> f32 {
        self.spin_period
    }

    /// Evaluate all three tracks at time `t` seconds since mount.
    pub fn sample(&self, t: f32) -> MotionSample {
        let started = t >= self.start_delay;
        let elapsed = (t - self.start_delay).max(0.0);

        let fall_progress = phase(elapsed, self.fall_period);
        let y = VERTICAL_START + (VERTICAL_END - VERTICAL_START) * fall_progress;

        let sway_offset = sway_at(phase(elapsed, self.sway_period), self.sway_amplitude);

        // Linear spin; left unwrapped so consecutive samples interpolate
        // cleanly across the 360 boundary.
        let rotation = self.initial_rotation + 360.0 * phase(elapsed, self.spin_period);

        MotionSample {
            y,
            fall_progress,
            sway_offset,
            rotation,
            started,
        }
    }
}

/// Progress through a loop of the given period, `[0, 1)`.
#[inline]
fn phase(elapsed: f32, period: f32) -> f32 {
    (elapsed / period).fract()
}

/// Evaluate the keyframed sway path at a phase in `[0, 1)`.
fn sway_at(sway_phase: f32, amplitude: f32) -> f32 {
    let segments = (SWAY_KEYFRAMES.len() - 1) as f32;
    let position = sway_phase * segments;
    let segment = (position as usize).min(SWAY_KEYFRAMES.len() - 2);
    let t = ease_in_out(position - segment as f32);

    let from = SWAY_KEYFRAMES[segment];
    let to = SWAY_KEYFRAMES[segment + 1];
    amplitude * (from + (to - from) * t)
}

/// Smoothstep easing: zero slope at both ends of each keyframe segment.
#[inline]
fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

//! Style profiles for particle generation.
//!
//! A style profile is a named set of value ranges that selects the mood and
//! pacing of a generated field: how big the particles are, how fast they
//! fall, how opaque they render, how far they sway. The two built-in
//! profiles match the two visual themes they decorate:
//!
//! | Profile | Mood | Pacing |
//! |---------|------|--------|
//! | [`Style::Backend`] | Soft petals, translucent, lively drift | Fast fall (8-14s) |
//! | [`Style::Security`] | Heavier leaves, more opaque | Slow fall (15-22s) |
//!
//! The pacing contract is deliberate: the security profile's fall-duration
//! range lies entirely above the backend profile's, so switching themes
//! reads as a change of tempo, not just a change of sprite.
//!
//! # Custom profiles
//!
//! ```ignore
//! let mut config = Style::Backend.config();
//! config.size = 20.0..48.0;
//! config.max_blur = 0.0;
//! let batch = fallfield::generate_batch_with(30, &config)?;
//! ```

use crate::error::FieldError;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Blend mode hint for the rendering surface.
///
/// The generator never blends anything itself; this is carried on the
/// profile so a renderer can composite the sprite the way the theme expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha compositing (default).
    #[default]
    Normal,
    /// Multiply against the backdrop. Darkens; suits light backgrounds.
    Multiply,
    /// Screen against the backdrop. Lightens; suits dark backgrounds.
    Screen,
}

/// A named style profile.
///
/// Use [`Style::config`] to get the value ranges, or [`Style::from_name`]
/// to resolve a runtime string (e.g. a theme key from the embedding page).
/// Unknown names are an error, never a silent fallback - a caller that asks
/// for a theme that doesn't exist should hear about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Light theme: small translucent petals, quick fall, wide sway.
    #[default]
    Backend,
    /// Dark theme: larger opaque leaves, slow fall, narrow sway.
    Security,
}

impl Style {
    /// Resolve a style from its lowercase name.
    ///
    /// Returns [`FieldError::UnknownStyle`] for anything other than
    /// `"backend"` or `"security"`.
    pub fn from_name(name: &str) -> Result<Style, FieldError> {
        match name {
            "backend" => Ok(Style::Backend),
            "security" => Ok(Style::Security),
            other => Err(FieldError::UnknownStyle(other.to_string())),
        }
    }

    /// The profile's name, as accepted by [`Style::from_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Style::Backend => "backend",
            Style::Security => "security",
        }
    }

    /// The value ranges for this profile.
    pub fn config(&self) -> StyleConfig {
        match self {
            Style::Backend => StyleConfig::backend(),
            Style::Security => StyleConfig::security(),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::from_name(s)
    }
}

/// Value ranges for one style profile.
///
/// All length units are whatever the rendering surface treats as its length
/// unit (CSS pixels, world units); the generator only promises the sampled
/// values stay inside these ranges. Durations are seconds.
///
/// Secondary attributes (`scale`, blur, depth layer) are not sampled
/// independently: a single per-particle depth value in `[0, 1)` drives
/// size, fall duration, opacity, blur and layer jointly, so near particles
/// are coherently big, fast, sharp and opaque. See
/// [`generate_batch`](crate::generate_batch).
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    /// Particle diameter range in length units.
    pub size: Range<f32>,
    /// Seconds for one full vertical traversal. Larger = slower fall.
    pub fall_duration: Range<f32>,
    /// Rendered opacity range.
    pub opacity: Range<f32>,
    /// Maximum horizontal displacement during fall. Sampled in `-A..A`.
    pub sway_amplitude: f32,
    /// Baseline cap on the first-cycle start delay, in seconds.
    pub start_delay_cap: f32,
    /// Extra delay headroom per particle. The effective cap is
    /// `max(start_delay_cap, count * delay_per_particle)`, so large batches
    /// don't all enter the viewport in one synchronized burst.
    pub delay_per_particle: f32,
    /// Visual scale multiplier range, driven by depth.
    pub scale: Range<f32>,
    /// Blur radius at depth 0 (farthest). Near particles render sharp.
    pub max_blur: f32,
    /// Number of depth layers particles are bucketed into for z-ordering.
    pub depth_layers: u32,
    /// Compositing hint for the rendering surface.
    pub blend_mode: BlendMode,
}

impl StyleConfig {
    /// Ranges for [`Style::Backend`].
    pub fn backend() -> Self {
        Self {
            size: 14.0..32.0,
            fall_duration: 8.0..14.0,
            opacity: 0.3..0.8,
            sway_amplitude: 60.0,
            start_delay_cap: 8.0,
            delay_per_particle: 0.35,
            scale: 0.75..1.15,
            max_blur: 6.0,
            depth_layers: 3,
            blend_mode: BlendMode::Multiply,
        }
    }

    /// Ranges for [`Style::Security`].
    pub fn security() -> Self {
        Self {
            size: 16.0..36.0,
            fall_duration: 15.0..22.0,
            opacity: 0.45..0.95,
            sway_amplitude: 40.0,
            start_delay_cap: 10.0,
            delay_per_particle: 0.4,
            scale: 0.8..1.2,
            max_blur: 4.0,
            depth_layers: 3,
            blend_mode: BlendMode::Screen,
        }
    }

    /// Effective start-delay cap for a batch of `count` particles.
    pub fn effective_delay_cap(&self, count: usize) -> f32 {
        self.start_delay_cap.max(count as f32 * self.delay_per_particle)
    }

    /// Check every range and scalar for sanity.
    ///
    /// Built-in profiles always pass; this exists for custom profiles, where
    /// an inverted range would otherwise panic deep inside the sampler.
    pub fn validate(&self) -> Result<(), FieldError> {
        Self::check_range("size", &self.size)?;
        Self::check_range("fall_duration", &self.fall_duration)?;
        Self::check_range("opacity", &self.opacity)?;
        Self::check_range("scale", &self.scale)?;
        if self.fall_duration.start <= 0.0 {
            return Err(FieldError::InvalidParameter {
                field: "fall_duration",
                value: self.fall_duration.start,
            });
        }
        Self::check_non_negative("sway_amplitude", self.sway_amplitude)?;
        Self::check_non_negative("start_delay_cap", self.start_delay_cap)?;
        Self::check_non_negative("delay_per_particle", self.delay_per_particle)?;
        Self::check_non_negative("max_blur", self.max_blur)?;
        if self.depth_layers == 0 {
            return Err(FieldError::InvalidParameter {
                field: "depth_layers",
                value: 0.0,
            });
        }
        Ok(())
    }

    fn check_range(field: &'static str, range: &Range<f32>) -> Result<(), FieldError> {
        if !range.start.is_finite() || !range.end.is_finite() || range.start > range.end {
            return Err(FieldError::InvalidRange {
                field,
                min: range.start,
                max: range.end,
            });
        }
        Ok(())
    }

    fn check_non_negative(field: &'static str, value: f32) -> Result<(), FieldError> {
        if !value.is_finite() || value < 0.0 {
            return Err(FieldError::InvalidParameter { field, value });
        }
        Ok(())
    }
}

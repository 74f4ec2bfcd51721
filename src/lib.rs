//! # fallfield - Falling-Particle Field Generator
//!
//! Procedural batches of decorative falling particles (petals, leaves,
//! snow) with per-particle infinite-loop motion timelines, made easy.
//!
//! fallfield handles the parametrization - depth-correlated sampling, style
//! profiles, loop-period derivation - so a rendering surface only has to
//! draw N sprites wherever the timelines say they are.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fallfield::{generate_batch, Style, Vec2};
//!
//! let batch = generate_batch(22, Style::Backend);
//!
//! // Each frame, resolve every particle against the viewport:
//! let viewport = Vec2::new(1920.0, 1080.0);
//! for instance in batch.frame(time.elapsed(), viewport) {
//!     draw_sprite("sakura-petal.png", instance);
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Descriptors
//!
//! [`generate_batch`] samples one immutable [`ParticleDescriptor`] per
//! particle: spawn column, size, fall duration, start delay, sway
//! amplitude, rotation, opacity. A single shared depth draw per particle
//! drives size, speed, opacity and blur jointly, so the field layers into
//! a coherent near/far parallax instead of uncorrelated noise.
//!
//! ### Style profiles
//!
//! A [`Style`] selects the value ranges and pacing. The built-in profiles
//! are deliberately disjoint in tempo:
//!
//! | Profile | Fall | Opacity | Blend hint |
//! |---------|------|---------|------------|
//! | [`Style::Backend`] | 8-14s | 0.30-0.80 | Multiply |
//! | [`Style::Security`] | 15-22s | 0.45-0.95 | Screen |
//!
//! Custom ranges go through [`StyleConfig`] and [`generate_batch_with`],
//! which validates them up front.
//!
//! ### Timelines
//!
//! Each descriptor derives a [`Timeline`]: three closed-form periodic
//! tracks (linear fall, keyframed sway, linear spin) on related but
//! unequal periods. Evaluate at any timestamp with
//! [`Timeline::sample`] - no timers, no loop counters, no drift. The
//! tracks intentionally decohere over time; see the [`timeline`] module
//! docs.
//!
//! ### Fields
//!
//! [`ParticleField`] owns a batch and regenerates it only when its inputs
//! (count, style, sprite) change - the mount/re-mount lifecycle of an
//! embedding UI, minus the UI.
//!
//! ## What fallfield is not
//!
//! No physics, no collisions, no pointer interaction, no persistence, and
//! no cross-run determinism: batches are re-randomized on every
//! generation by design.

mod descriptor;
mod error;
mod field;
mod instance;
mod sample;
pub mod style;
pub mod timeline;

pub use bytemuck;
pub use descriptor::ParticleDescriptor;
pub use error::FieldError;
pub use field::{generate_batch, generate_batch_with, Batch, ParticleField, DEFAULT_COUNT};
pub use glam::Vec2;
pub use instance::FrameInstance;
pub use sample::SampleContext;
pub use style::{BlendMode, Style, StyleConfig};
pub use timeline::{MotionSample, Timeline};

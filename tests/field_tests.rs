//! Integration tests for batch generation.
//!
//! These exercise the public contract end to end: counts, sampled ranges,
//! the pacing difference between the built-in profiles, liveness of the
//! randomness, and the flattened frame output.

use fallfield::{
    generate_batch, generate_batch_with, FieldError, ParticleField, Style, StyleConfig, Vec2,
};

// ============================================================================
// Batch shape
// ============================================================================

#[test]
fn test_batch_returns_exactly_count_descriptors() {
    for count in [0, 1, 7, 12, 20, 100] {
        let batch = generate_batch(count, Style::Backend);
        assert_eq!(batch.len(), count);
    }
}

#[test]
fn test_zero_count_yields_empty_batch() {
    let batch = generate_batch(0, Style::Security);
    assert!(batch.is_empty());
}

#[test]
fn test_ids_unique_and_contiguous() {
    let batch = generate_batch(40, Style::Security);
    let mut seen = vec![false; 40];
    for p in batch.particles() {
        assert!(!seen[p.id as usize], "duplicate id {}", p.id);
        seen[p.id as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

// ============================================================================
// Sampled ranges
// ============================================================================

#[test]
fn test_all_fields_within_declared_ranges() {
    for style in [Style::Backend, Style::Security] {
        let config = style.config();
        let count = 50;
        let delay_cap = config.effective_delay_cap(count);
        let batch = generate_batch(count, style);

        for p in batch.particles() {
            assert!((0.0..100.0).contains(&p.horizontal_position));
            assert!(p.size >= config.size.start && p.size <= config.size.end);
            assert!(
                p.fall_duration >= config.fall_duration.start
                    && p.fall_duration <= config.fall_duration.end
            );
            assert!((0.0..delay_cap).contains(&p.start_delay));
            assert!(p.sway_amplitude.abs() <= config.sway_amplitude);
            assert!((0.0..360.0).contains(&p.initial_rotation));
            assert!(p.opacity >= config.opacity.start && p.opacity <= config.opacity.end);
            assert!((0.0..1.0).contains(&p.depth));
            assert!(p.blur_radius >= 0.0 && p.blur_radius <= config.max_blur);
            assert!(p.depth_layer < config.depth_layers);
        }
    }
}

#[test]
fn test_example_scenario_backend_12() {
    let batch = generate_batch(12, Style::Backend);
    assert_eq!(batch.len(), 12);
    for p in batch.particles() {
        assert!(p.size >= 14.0 && p.size <= 32.0);
        assert!(p.opacity >= 0.3 && p.opacity <= 0.8);
        assert!(p.fall_duration >= 8.0 && p.fall_duration <= 14.0);
    }
}

#[test]
fn test_example_scenario_security_20_opacity_floor() {
    let batch = generate_batch(20, Style::Security);
    assert_eq!(batch.len(), 20);
    for p in batch.particles() {
        assert!(p.opacity >= 0.45, "security opacity floor violated: {}", p.opacity);
    }
}

// ============================================================================
// Pacing contract
// ============================================================================

#[test]
fn test_security_falls_strictly_slower_than_backend() {
    let backend = generate_batch(30, Style::Backend);
    let security = generate_batch(30, Style::Security);

    let backend_max = backend
        .particles()
        .iter()
        .map(|p| p.fall_duration)
        .fold(f32::MIN, f32::max);
    let security_min = security
        .particles()
        .iter()
        .map(|p| p.fall_duration)
        .fold(f32::MAX, f32::min);

    assert!(
        security_min > backend_max,
        "security ({security_min}) must be entirely slower than backend ({backend_max})"
    );
}

// ============================================================================
// Randomness
// ============================================================================

#[test]
fn test_regeneration_is_live_not_memoized() {
    let first = generate_batch(50, Style::Backend);
    let second = generate_batch(50, Style::Backend);

    // Statistical distinctness: at least one of 50 continuous draws must
    // differ. Exact-vector collision has probability ~0.
    let identical = first
        .particles()
        .iter()
        .zip(second.particles())
        .all(|(a, b)| a.depth == b.depth && a.horizontal_position == b.horizontal_position);
    assert!(!identical, "two generations produced identical batches");
}

#[test]
fn test_start_delays_spread_out() {
    // No two vertical loops should start at the same phase unless the
    // continuous delay samples coincide, which they essentially never do.
    let batch = generate_batch(30, Style::Backend);
    let mut delays: Vec<f32> = batch.particles().iter().map(|p| p.start_delay).collect();
    delays.sort_by(f32::total_cmp);
    let coincident = delays.windows(2).filter(|w| w[0] == w[1]).count();
    assert_eq!(coincident, 0);
}

// ============================================================================
// Custom profiles and errors
// ============================================================================

#[test]
fn test_unknown_style_name_is_error() {
    match Style::from_name("neon") {
        Err(FieldError::UnknownStyle(name)) => assert_eq!(name, "neon"),
        other => panic!("expected UnknownStyle, got {:?}", other),
    }
}

#[test]
fn test_custom_profile_roundtrip() {
    let mut config = StyleConfig::backend();
    config.size = 40.0..80.0;
    config.sway_amplitude = 0.0;

    let batch = generate_batch_with(10, &config).unwrap();
    for p in batch.particles() {
        assert!(p.size >= 40.0 && p.size <= 80.0);
        assert_eq!(p.sway_amplitude, 0.0);
    }
}

#[test]
fn test_invalid_custom_profile_rejected_before_sampling() {
    let mut config = StyleConfig::security();
    config.fall_duration = 10.0..5.0;
    match generate_batch_with(10, &config) {
        Err(FieldError::InvalidRange { field, .. }) => assert_eq!(field, "fall_duration"),
        other => panic!("expected InvalidRange, got {:?}", other),
    }
}

// ============================================================================
// Frame output
// ============================================================================

#[test]
fn test_frame_resolves_every_particle() {
    let batch = generate_batch(22, Style::Backend);
    let viewport = Vec2::new(1920.0, 1080.0);
    let frame = batch.frame(5.0, viewport);
    assert_eq!(frame.len(), 22);

    for (p, instance) in batch.particles().iter().zip(&frame) {
        // X stays within the spawn column plus/minus the sway bound.
        let column = p.horizontal_position / 100.0 * viewport.x;
        assert!((instance.position[0] - column).abs() <= p.sway_amplitude.abs() + 1e-3);
        assert_eq!(instance.layer, p.depth_layer);
        if instance.started == 0 {
            assert_eq!(instance.opacity, 0.0);
        } else {
            assert_eq!(instance.opacity, p.opacity);
        }
    }
}

#[test]
fn test_frame_is_pod_uploadable() {
    let batch = generate_batch(8, Style::Security);
    let frame = batch.frame(2.0, Vec2::new(800.0, 600.0));
    let bytes: &[u8] = fallfield::bytemuck::cast_slice(&frame);
    assert_eq!(bytes.len(), frame.len() * std::mem::size_of::<fallfield::FrameInstance>());
}

// ============================================================================
// Field lifecycle
// ============================================================================

#[test]
fn test_field_regenerates_only_on_input_change() {
    let mut field = ParticleField::new(Style::Backend).with_count(15);

    let stable_a: Vec<f32> = field.batch().particles().iter().map(|p| p.depth).collect();
    let stable_b: Vec<f32> = field.batch().particles().iter().map(|p| p.depth).collect();
    assert_eq!(stable_a, stable_b, "unchanged inputs must keep the batch");

    field.set_count(16);
    assert_eq!(field.batch().len(), 16);
}

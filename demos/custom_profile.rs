//! # Custom Profile Demo
//!
//! Builds a "snowfall" profile on top of the backend ranges and shows the
//! validation path rejecting a broken one.
//!
//! Run with: `cargo run --example custom_profile`

use fallfield::{generate_batch_with, BlendMode, StyleConfig};

fn main() {
    // Slow, small, barely swaying, no blur: snow instead of petals.
    let mut snow = StyleConfig::backend();
    snow.size = 4.0..10.0;
    snow.fall_duration = 20.0..35.0;
    snow.opacity = 0.5..0.9;
    snow.sway_amplitude = 15.0;
    snow.max_blur = 0.0;
    snow.blend_mode = BlendMode::Screen;

    match generate_batch_with(40, &snow) {
        Ok(batch) => {
            println!("snowfall: {} flakes", batch.len());
            for p in batch.particles().iter().take(4) {
                println!(
                    "  #{} size {:.1}  fall {:.1}s  sway {:+.1}",
                    p.id, p.size, p.fall_duration, p.sway_amplitude
                );
            }
        }
        Err(e) => eprintln!("generation failed: {}", e),
    }

    // An inverted range never reaches the sampler.
    let mut broken = StyleConfig::security();
    broken.opacity = 0.95..0.45;
    match generate_batch_with(10, &broken) {
        Ok(_) => unreachable!("inverted range must not validate"),
        Err(e) => println!("rejected as expected: {}", e),
    }
}

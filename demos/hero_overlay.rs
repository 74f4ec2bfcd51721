//! # Hero Overlay Demo
//!
//! Generates the hero-banner field (22 petals, backend profile) and prints
//! a few evaluated frames, the way a rendering surface would consume them.
//!
//! Run with: `cargo run --example hero_overlay`

use fallfield::{generate_batch, Style, Vec2};

fn main() {
    let batch = generate_batch(22, Style::Backend);
    let viewport = Vec2::new(1920.0, 1080.0);

    println!("=== Hero overlay: {} particles, style '{}' ===", batch.len(), Style::Backend);
    println!();

    for p in batch.particles().iter().take(5) {
        println!(
            "  #{:<2} column {:>5.1}%  size {:>4.1}  fall {:>4.1}s  delay {:>4.1}s  layer {}",
            p.id, p.horizontal_position, p.size, p.fall_duration, p.start_delay, p.depth_layer
        );
    }
    println!("  ...");
    println!();

    // Sample the field at a few timestamps; this is the whole render loop
    // contract - no incremental state, just evaluate at t.
    for t in [0.0f32, 5.0, 12.5, 60.0] {
        let frame = batch.frame(t, viewport);
        let visible = frame.iter().filter(|i| i.started == 1).count();
        let lead = &frame[0];
        println!(
            "t = {:>5.1}s  visible {:>2}/{}  particle #0 at ({:>7.1}, {:>7.1}) rot {:>6.1}",
            t,
            visible,
            frame.len(),
            lead.position[0],
            lead.position[1],
            lead.rotation,
        );
    }
}

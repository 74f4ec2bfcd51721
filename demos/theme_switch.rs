//! # Theme Switch Demo
//!
//! Shows the memoized field lifecycle: stable inputs keep the batch, a
//! style toggle (backend <-> security) replaces it wholesale, along with
//! the sprite it decorates.
//!
//! Run with: `cargo run --example theme_switch`

use fallfield::{ParticleField, Style};

fn main() {
    let mut field = ParticleField::new(Style::Backend)
        .with_count(22)
        .with_sprite("sakura-petal.png");

    report("mount", &mut field);

    // Re-reading with unchanged inputs: same batch, nothing resampled.
    report("re-render", &mut field);

    // Theme toggle: new pacing, new sprite, fresh batch.
    field.set_style(Style::Security);
    field.set_sprite(Some("maple-leaf.png".to_string()));
    report("toggle to security", &mut field);

    field.set_style(Style::Backend);
    field.set_sprite(Some("sakura-petal.png".to_string()));
    report("toggle back", &mut field);
}

fn report(event: &str, field: &mut ParticleField) {
    let style = field.style();
    let sprite = field.sprite().unwrap_or("-").to_string();
    let batch = field.batch();
    let slowest = batch
        .particles()
        .iter()
        .map(|p| p.fall_duration)
        .fold(f32::MIN, f32::max);

    println!(
        "{:<20} style '{}'  sprite {:<17} particles {}  slowest fall {:.1}s",
        event,
        style,
        sprite,
        batch.len(),
        slowest,
    );
}

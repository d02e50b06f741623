//! Example: Print the bedroom rig, or a rig loaded from JSON.
//!
//! Run with: cargo run --example bedroom_rig -- [rig.json]

use std::env;

use cct_core::{LightRig, TintCell};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let rig = match args.get(1) {
        Some(path) => match LightRig::load(path) {
            Ok(rig) => rig,
            Err(e) => {
                eprintln!("Error loading rig: {}", e);
                return;
            }
        },
        None => LightRig::bedroom(),
    };

    println!("\n=== Rig: {} ===", rig.name);
    for light in &rig.lights {
        let radiance = light.radiance();
        println!(
            "  {:<10} {:?} {:>8.0} K -> {} radiance ({:.3}, {:.3}, {:.3})",
            light.name,
            light.kind,
            light.kelvin,
            light.tint(),
            radiance.x,
            radiance.y,
            radiance.z
        );
    }

    // Simulate a panel dragging the point light from warm to cool
    println!("\n--- Point light sweep ---");
    let cell = TintCell::default();
    for kelvin in [1500.0, 2700.0, 4000.0, 6600.0, 12000.0] {
        cell.set_kelvin(kelvin);
        println!("  {:>6.0} K -> {}", kelvin, cell.rgb());
    }
}

/// Writes the extension's 16/48/128 icons into chrome-extension/icons.
/// Run with: cargo run --bin gen_icons

use extension_icons::{GenerateOptions, default_targets, generate_icons};

fn main() {
    let targets = default_targets();
    let written = match generate_icons(&targets, &GenerateOptions::default()) {
        Ok(written) => written,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    for target in &targets[..written.len()] {
        println!("Created {}", target);
    }

    println!("Icons generated successfully!");
}

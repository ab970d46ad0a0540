//! Generate LAWS.md from the law registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-laws
//! ```
//!
//! The generated file is written to `phys_core/src/laws/LAWS.md`.

use std::fs;
use std::path::Path;

use phys_core::laws::generate_laws_markdown;

fn main() {
    println!("Generating LAWS.md...");

    let markdown = generate_laws_markdown();

    // Relative to workspace root
    let output_path = Path::new("phys_core/src/laws/LAWS.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}

//! Render the page to a file.
//!
//! Run with: `cargo run -p modernsite --example render_page`

use modernsite::{RenderOptions, render_page};

fn main() {
    let html = render_page(&RenderOptions::default());

    let output_path = "modernsite.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}

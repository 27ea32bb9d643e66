//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `masthead_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use masthead_core::{MemoryPressRepository, PressService};

fn main() {
    println!("masthead_core ping={}", masthead_core::ping());
    println!("masthead_core version={}", masthead_core::core_version());

    if let Err(err) = catalog_roundtrip() {
        eprintln!("catalog roundtrip failed: {err}");
        std::process::exit(1);
    }
}

/// One register/launch/publish pass over a throwaway in-memory catalog.
fn catalog_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let mut press = PressService::new(MemoryPressRepository::new());

    let author = press.register_author("Smoke Author")?;
    let magazine = press.launch_magazine("Smoke Weekly", "Diagnostics")?;
    press.publish_article(author, magazine, "Catalog wiring check")?;

    let top = press.top_publisher().ok_or("expected a top publisher")?;
    println!(
        "catalog roundtrip top_publisher={} titles={}",
        top.name(),
        press.article_titles(magazine)?.len()
    );
    Ok(())
}

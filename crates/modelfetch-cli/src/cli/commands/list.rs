//! `modelfetch list` – print the resolved source list.

use anyhow::Result;
use modelfetch_core::config::FetchConfig;
use modelfetch_core::sources::{entries_from_config, filename_collisions};

pub fn run_list(cfg: &FetchConfig) -> Result<()> {
    let entries = entries_from_config(&cfg.sources);
    if entries.is_empty() {
        println!("No sources configured.");
        return Ok(());
    }

    println!("{:<5} {:<36} {}", "#", "FILE", "URL");
    for (i, e) in entries.iter().enumerate() {
        println!("{:<5} {:<36} {}", i + 1, e.filename, e.url);
    }

    let collisions = filename_collisions(&entries);
    if !collisions.is_empty() {
        println!();
        for c in &collisions {
            let positions: Vec<String> = c.indices.iter().map(|i| format!("#{}", i + 1)).collect();
            let kind = if c.duplicate_url {
                "duplicate URL"
            } else if c.case_only {
                "differs only by case"
            } else {
                "same name, different sources"
            };
            println!("collision: {} at {} ({})", c.filename, positions.join(", "), kind);
        }
    }
    println!();
    println!(
        "{} sources, {} name collision(s)",
        entries.len(),
        collisions.len()
    );
    Ok(())
}

//! `modelfetch status` – show manifest entries and whether their files exist.

use anyhow::Result;
use modelfetch_core::config::FetchConfig;
use modelfetch_core::manifest::read_manifest;

pub fn run_status(cfg: &FetchConfig) -> Result<()> {
    if !cfg.manifest_path.exists() {
        println!(
            "No manifest at '{}'. Run `modelfetch fetch` first.",
            cfg.manifest_path.display()
        );
        return Ok(());
    }

    let manifest = read_manifest(&cfg.manifest_path)?;
    if manifest.is_empty() {
        println!("Manifest '{}' lists no models.", cfg.manifest_path.display());
        return Ok(());
    }

    println!("{:<8} {}", "STATE", "FILE");
    let mut missing = 0usize;
    for name in manifest.names() {
        let present = cfg.save_dir.join(name).is_file();
        if !present {
            missing += 1;
        }
        println!("{:<8} {}", if present { "present" } else { "missing" }, name);
    }
    println!();
    println!(
        "{} listed, {} missing from '{}'",
        manifest.len(),
        missing,
        cfg.save_dir.display()
    );
    Ok(())
}

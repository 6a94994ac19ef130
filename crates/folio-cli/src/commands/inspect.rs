//! Inspect command implementation.

use folio_ids::{Minter, MinterFactory};
use folio_model::Manifest;
use serde_json::json;
use std::fs;

pub fn run(manifest_path: String, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let json_text = fs::read_to_string(&manifest_path)
        .map_err(|e| format!("Failed to read manifest: {}", e))?;
    let manifest: Manifest = serde_json::from_str(&json_text)
        .map_err(|e| format!("Failed to parse manifest: {}", e))?;

    let scan = manifest.id_scan();
    let minter = MinterFactory::new().minter_for_document(&scan)?;

    let seeded = minter.size() - minter.remaining();

    if as_json {
        let output = json!({
            "manifest_id": manifest.id().as_ref(),
            "canvases": manifest.canvases().len(),
            "ranges": manifest.ranges().len(),
            "scanned_ids": scan.existing_ids().len(),
            "seeded_ids": seeded,
            "capacity": minter.size(),
            "remaining": minter.remaining(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Manifest:    {}", manifest.id());
        println!("Canvases:    {}", manifest.canvases().len());
        println!("Ranges:      {}", manifest.ranges().len());
        println!("Scanned IDs: {}", scan.existing_ids().len());
        println!("Seeded IDs:  {}", seeded);
        println!("Capacity:    {}", minter.size());
        println!("Remaining:   {}", minter.remaining());
    }

    Ok(())
}

//! Mint command implementation.

use crate::Kind;
use folio_ids::{Minter, MinterFactory};
use folio_model::Manifest;
use std::fs;

pub fn run(
    base: Option<String>,
    kind: Kind,
    count: u32,
    manifest_path: Option<String>,
    canvas: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let factory = MinterFactory::new();

    let minter = match (&manifest_path, &base) {
        (Some(path), _) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read manifest: {}", e))?;
            let manifest: Manifest = serde_json::from_str(&json)
                .map_err(|e| format!("Failed to parse manifest: {}", e))?;
            factory.minter_for_document(&manifest.id_scan())?
        }
        (None, Some(base)) => factory.minter_for_id(base)?,
        (None, None) => return Err("either BASE or --manifest is required".into()),
    };

    for _ in 0..count {
        let id = match kind {
            Kind::Canvas => minter.canvas_id()?,
            Kind::Annotation => minter.annotation_id()?,
            Kind::Range => minter.range_id()?,
            Kind::AnnoPage => {
                let canvas = canvas
                    .as_deref()
                    .ok_or("--canvas is required when minting annotation page IDs")?;
                minter.annotation_page_id(canvas)?
            }
        };
        println!("{}", id);
    }

    Ok(())
}

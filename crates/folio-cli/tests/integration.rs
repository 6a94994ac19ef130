//! Integration tests for CLI commands.

use folio_ids::{DefaultMinter, Minter};
use folio_model::{Canvas, Label, Manifest};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const BASE: &str = "https://example.org/iiif/book1";

fn folio(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(args)
        .output()
        .expect("failed to run folio binary")
}

fn write_manifest(dir: &TempDir, canvas_count: usize) -> String {
    let minter = DefaultMinter::new(BASE);
    let mut manifest = Manifest::new(BASE, Label::new("Test Book"));

    for _ in 0..canvas_count {
        manifest.add_canvas(Canvas::new(minter.canvas_id().unwrap()));
    }

    let path = dir.path().join("manifest.json");
    fs::write(&path, serde_json::to_string(&manifest).unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn mint_produces_sequential_canvas_ids() {
    let output = folio(&["mint", BASE, "--count", "2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<&str> = stdout.lines().collect();
    assert_eq!(ids, vec![
        format!("{BASE}/canvas-0000"),
        format!("{BASE}/canvas-0001"),
    ]);
}

#[test]
fn mint_seeded_from_a_manifest_skips_existing_ids() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, 3);

    let output = folio(&["mint", "--manifest", &path]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), format!("{BASE}/canvas-0003"));
}

#[test]
fn mint_requires_a_base_or_manifest() {
    let output = folio(&["mint"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("either BASE or --manifest"));
}

#[test]
fn anno_page_kind_requires_a_canvas() {
    let output = folio(&["mint", BASE, "--kind", "anno-page"]);
    assert!(!output.status.success());

    let output = folio(&[
        "mint",
        BASE,
        "--kind",
        "anno-page",
        "--canvas",
        "https://example.org/iiif/book1/canvas-0000",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.trim(),
        format!("{BASE}/canvas-0000/anno-page-0000")
    );
}

#[test]
fn skolem_respects_the_well_known_base() {
    let output = folio(&["skolem", "--base", "https://example.org", "--count", "2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let iris: Vec<&str> = stdout.lines().collect();
    assert_eq!(iris.len(), 2);
    for iri in iris {
        assert!(iri.starts_with("https://example.org/.well-known/genid/"));
    }
}

#[test]
fn inspect_reports_capacity_accounting() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, 4);

    let output = folio(&["inspect", &path, "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["manifest_id"], BASE);
    assert_eq!(report["canvases"], 4);
    assert_eq!(report["seeded_ids"], 4);
    assert_eq!(report["capacity"], 1_500_625);
    assert_eq!(report["remaining"], 1_500_621);
}

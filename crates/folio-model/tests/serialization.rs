//! Integration tests for the document model and its minter bridge.

use folio_ids::{DefaultMinter, Minter, SkolemIriFactory};
use folio_model::{
    Annotation, AnnotationPage, Canvas, Label, Manifest, Motivation, Range, TextualBody,
};
use serde_json::Value;

const BASE: &str = "https://example.org/iiif/book1";
const CAPACITY: u32 = 1_500_625;

fn build_manifest() -> Manifest {
    let minter = DefaultMinter::new(BASE);
    let mut manifest = Manifest::new(BASE, Label::new("Book the First"));

    for _ in 0..3 {
        let mut canvas = Canvas::new(minter.canvas_id().unwrap());
        canvas.set_dimensions(1200, 1800);

        let mut page = AnnotationPage::new(minter.annotation_page_id(canvas.id().as_ref()).unwrap());
        page.add_annotation(Annotation::new(
            minter.annotation_id().unwrap(),
            Motivation::Painting,
            canvas.id().clone(),
        ));
        canvas.add_painting_page(page);
        manifest.add_canvas(canvas);
    }

    let mut range = Range::new(minter.range_id().unwrap());
    range.set_label(Label::new("Front matter"));
    range.add_canvas(manifest.canvases()[0].id().clone());
    manifest.add_range(range);

    manifest
}

#[test]
fn manifest_round_trips_through_json() {
    let manifest = build_manifest();
    let json = serde_json::to_string(&manifest).unwrap();
    let parsed: Manifest = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, manifest);
    assert_eq!(parsed.canvases().len(), 3);
    assert_eq!(parsed.ranges().len(), 1);
}

#[test]
fn serialized_manifest_carries_the_exchange_shape() {
    let manifest = build_manifest();
    let value: Value = serde_json::to_value(&manifest).unwrap();

    assert_eq!(
        value["@context"],
        "http://iiif.io/api/presentation/3/context.json"
    );
    assert_eq!(value["type"], "Manifest");
    assert_eq!(value["items"][0]["type"], "Canvas");
    assert_eq!(value["items"][0]["items"][0]["type"], "AnnotationPage");
    assert_eq!(value["structures"][0]["type"], "Range");
}

#[test]
fn id_scan_collects_every_identifier() {
    let manifest = build_manifest();
    let scan = manifest.id_scan();

    // 3 canvases + 3 pages + 3 annotations + 1 range
    assert_eq!(scan.existing_ids().len(), 10);
    assert_eq!(scan.manifest_id(), BASE);
}

#[test]
fn reseeded_minter_skips_a_round_tripped_document() {
    let manifest = build_manifest();
    let json = serde_json::to_string(&manifest).unwrap();
    let parsed: Manifest = serde_json::from_str(&json).unwrap();

    let minter = DefaultMinter::from_scan(&parsed.id_scan());
    assert_eq!(minter.remaining(), CAPACITY - 10);

    let scan = parsed.id_scan();
    let existing = scan.existing_ids();
    for _ in 0..100 {
        let id = minter.canvas_id().unwrap();
        assert!(!existing.contains(&id), "re-issued {id}");
    }
}

#[test]
fn non_serializable_skolem_ids_are_suppressed() {
    let factory = SkolemIriFactory::new();
    factory.create_serializable_ids(false);

    let mut body = TextualBody::with_factory(&factory);
    body.set_value("quidquid latine dictum sit");

    // The internal identifier still exists for equality and references
    assert!(!body.id().is_empty());
    assert!(!body.has_serializable_id());

    let value: Value = serde_json::to_value(&body).unwrap();
    assert!(value.get("id").is_none());
    assert_eq!(value["type"], "TextualBody");
}

#[test]
fn serializable_skolem_ids_are_present() {
    let factory = SkolemIriFactory::new();
    factory
        .set_well_known_base(Some("https://example.org"))
        .create_serializable_ids(true);

    let body = TextualBody::with_factory(&factory);
    let value: Value = serde_json::to_value(&body).unwrap();

    let id = value["id"].as_str().expect("id should be serialized");
    assert!(id.starts_with("https://example.org/.well-known/genid/"));
    assert_eq!(id, body.id());
}

#[test]
fn textual_bodies_compare_by_identifier() {
    let factory = SkolemIriFactory::new();
    let body = TextualBody::with_factory(&factory);
    let clone = body.clone();
    let other = TextualBody::with_factory(&factory);

    assert_eq!(body, clone);
    assert_ne!(body, other);
}

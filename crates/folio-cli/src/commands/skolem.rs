//! Skolem command implementation.

use folio_ids::SkolemIriFactory;

pub fn run(base: Option<String>, count: u32) -> Result<(), Box<dyn std::error::Error>> {
    let factory = SkolemIriFactory::new();
    factory.set_well_known_base(base.as_deref());

    for _ in 0..count {
        println!("{}", factory.skolem_iri());
    }

    Ok(())
}

// src/commands/details.rs

use crate::errors::CliError;
use crate::render;
use crate::store::properties::PropertyStore;

/// The index here is the generation-time store key, not a position in any
/// filtered listing.
pub fn run(store: &PropertyStore, index: u32) -> Result<(), CliError> {
    let listing = store.get(index).ok_or(CliError::UnknownIndex(index))?;
    render::print_details(listing);
    Ok(())
}

// src/commands/list.rs

use crate::errors::CliError;
use crate::render;
use crate::store::properties::PropertyStore;

pub fn run(store: &PropertyStore) -> Result<(), CliError> {
    if store.is_empty() {
        println!("No properties available. Generate some using the generate command.");
        return Ok(());
    }

    render::print_table(store.entries());
    Ok(())
}

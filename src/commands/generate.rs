// src/commands/generate.rs

use crate::errors::CliError;
use crate::render;
use crate::store::properties::PropertyStore;

pub fn run(store: &mut PropertyStore, count: u32) -> Result<(), CliError> {
    if count == 0 {
        return Err(CliError::InvalidCount);
    }

    store.generate(count as usize);
    println!("Generated {count} properties.");
    render::print_table(store.entries());
    Ok(())
}

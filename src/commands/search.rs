// src/commands/search.rs

use clap::Args;

use crate::domain::filter::{parse_comparison_option, LocationFilter, SearchCriteria};
use crate::domain::listing::Listing;
use crate::errors::CliError;
use crate::render::{self, format_currency};
use crate::store::properties::PropertyStore;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Filter by square feet (eq|lt|gt,value)
    #[arg(long = "square-feet", value_name = "OP,VALUE")]
    pub square_feet: Option<String>,

    /// Filter by price (eq|lt|gt,value)
    #[arg(long, value_name = "OP,VALUE")]
    pub price: Option<String>,

    /// Filter by rooms (eq|lt|gt,value)
    #[arg(long, value_name = "OP,VALUE")]
    pub rooms: Option<String>,

    /// Filter by bathrooms (eq|lt|gt,value)
    #[arg(long, value_name = "OP,VALUE")]
    pub bathrooms: Option<String>,

    /// Required amenities (space-separated)
    #[arg(long, num_args = 1.., value_name = "NAME")]
    pub amenities: Option<Vec<String>>,

    /// Text to search for in the description
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Filter by location (latitude,longitude,radiusInKm)
    #[arg(long, value_name = "LAT,LON,RADIUS")]
    pub location: Option<String>,
}

/// Turns the raw option strings into validated criteria. Everything is
/// checked here, before a single record is touched.
fn build_criteria(args: &SearchArgs) -> Result<SearchCriteria, CliError> {
    let criteria = SearchCriteria {
        square_feet: args
            .square_feet
            .as_deref()
            .map(parse_comparison_option)
            .transpose()?,
        price: args.price.as_deref().map(parse_comparison_option).transpose()?,
        rooms: args.rooms.as_deref().map(parse_comparison_option).transpose()?,
        bathrooms: args
            .bathrooms
            .as_deref()
            .map(parse_comparison_option)
            .transpose()?,
        amenities: args.amenities.clone(),
        description: args.description.clone(),
        location: args.location.as_deref().map(LocationFilter::parse).transpose()?,
    };

    criteria.validate()?;
    Ok(criteria)
}

/// Dollar-formats a price threshold. Thresholds are parsed as floats, so
/// thousands grouping only applies when the value really is a
/// non-negative integer; anything else is printed as-is.
fn format_price(value: f64) -> String {
    if value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        format_currency(value as u64)
    } else {
        format!("${value}")
    }
}

fn announce(criteria: &SearchCriteria) {
    if let Some((op, value)) = criteria.square_feet {
        println!("Filtering by square feet {op} {value}");
    }
    if let Some((op, value)) = criteria.price {
        println!("Filtering by price {op} {}", format_price(value));
    }
    if let Some((op, value)) = criteria.rooms {
        println!("Filtering by rooms {op} {value}");
    }
    if let Some((op, value)) = criteria.bathrooms {
        println!("Filtering by bathrooms {op} {value}");
    }
    if let Some(names) = &criteria.amenities {
        println!("Filtering by amenities: {}", names.join(", "));
    }
    if let Some(text) = &criteria.description {
        println!("Filtering by description containing: \"{text}\"");
    }
    if let Some(location) = &criteria.location {
        println!(
            "Filtering by location: {}km radius from [{}, {}]",
            location.radius_km, location.latitude, location.longitude
        );
    }
}

pub fn run(store: &PropertyStore, args: &SearchArgs) -> Result<(), CliError> {
    let criteria = build_criteria(args)?;
    announce(&criteria);

    let matched: Vec<&Listing> = store
        .entries()
        .map(|(_, listing)| listing)
        .filter(|listing| criteria.matches(listing))
        .collect();

    if matched.is_empty() {
        println!("No properties found matching your criteria.");
        return Ok(());
    }

    println!();
    println!("Found {} matching properties:", matched.len());
    // Filtered views are re-indexed by position; the store key is gone.
    render::print_table(
        matched
            .iter()
            .enumerate()
            .map(|(position, listing)| (position as u32, *listing)),
    );
    Ok(())
}

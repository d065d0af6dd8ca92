// src/render.rs
//
// Console presentation: currency formatting, the row table used by
// generate/list/search, and the single-listing details view.

use crate::domain::listing::Listing;

/// Formats an amount as dollars with thousands separators, e.g. `$1,234,567`.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${grouped}")
}

const TABLE_HEADER: [&str; 6] = ["index", "sqft", "price", "rooms", "baths", "lighting"];

fn table_row(index: u32, listing: &Listing) -> [String; 6] {
    [
        index.to_string(),
        listing.square_footage.to_string(),
        format_currency(listing.price),
        listing.rooms.to_string(),
        listing.bathrooms.to_string(),
        listing.lighting.to_string(),
    ]
}

/// Prints listings as an aligned row table. The caller decides what the
/// index column means: store keys for list/generate, positions for
/// filtered search results.
pub fn print_table<'a, I>(rows: I)
where
    I: IntoIterator<Item = (u32, &'a Listing)>,
{
    let rows: Vec<[String; 6]> = rows
        .into_iter()
        .map(|(index, listing)| table_row(index, listing))
        .collect();

    let mut widths: [usize; 6] = TABLE_HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let line = |cells: &[String; 6]| {
        cells
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let header = TABLE_HEADER.map(String::from);
    println!("{}", line(&header));
    println!("{}", "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    for row in &rows {
        println!("{}", line(row));
    }
}

/// Prints every field of one listing, amenities as check/cross lines.
pub fn print_details(listing: &Listing) {
    println!();
    println!("Property Details:");
    println!("----------------");
    println!("Square Footage: {}", listing.square_footage);
    println!("Lighting: {}", listing.lighting);
    println!("Price: {}", format_currency(listing.price));
    println!("Rooms: {}", listing.rooms);
    println!("Bathrooms: {}", listing.bathrooms);
    println!("Location: {}, {}", listing.location[0], listing.location[1]);
    println!("Description: {}", listing.description);
    println!();
    println!("Amenities:");
    for (name, present) in &listing.amenities {
        println!("- {}: {}", name, if *present { "✓" } else { "✗" });
    }
}

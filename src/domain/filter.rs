// src/domain/filter.rs
//
// Predicate functions and the criteria composition used by `search`.
// Every criterion is validated before any record is inspected, so a bad
// option never produces a partially filtered result.

use std::fmt;

use crate::domain::geo::calculate_distance;
use crate::domain::listing::{Listing, AMENITY_TYPES};
use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Eq,
    Lt,
    Gt,
}

impl ComparisonOp {
    fn parse(token: &str) -> Result<Self, CliError> {
        match token {
            "eq" => Ok(ComparisonOp::Eq),
            "lt" => Ok(ComparisonOp::Lt),
            "gt" => Ok(ComparisonOp::Gt),
            _ => Err(CliError::InvalidOperator(token.to_string())),
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonOp::Eq => write!(f, "eq"),
            ComparisonOp::Lt => write!(f, "lt"),
            ComparisonOp::Gt => write!(f, "gt"),
        }
    }
}

/// The numeric listing fields a comparison criterion may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    SquareFootage,
    Price,
    Rooms,
    Bathrooms,
}

impl NumericField {
    fn value_of(self, listing: &Listing) -> f64 {
        match self {
            NumericField::SquareFootage => listing.square_footage as f64,
            NumericField::Price => listing.price as f64,
            NumericField::Rooms => listing.rooms as f64,
            NumericField::Bathrooms => listing.bathrooms as f64,
        }
    }
}

pub fn compare_number(field: NumericField, op: ComparisonOp, value: f64, listing: &Listing) -> bool {
    let actual = field.value_of(listing);
    match op {
        ComparisonOp::Eq => actual == value,
        ComparisonOp::Lt => actual < value,
        ComparisonOp::Gt => actual > value,
    }
}

/// Parses the `operator,value` mini-format used by the numeric search
/// options. A missing comma reads as an operator error, matching how the
/// whole token fails operator validation.
pub fn parse_comparison_option(option: &str) -> Result<(ComparisonOp, f64), CliError> {
    let (op_token, value_token) = match option.split_once(',') {
        Some((op, value)) => (op, value),
        None => (option, ""),
    };

    let op = ComparisonOp::parse(op_token)?;
    let value = value_token
        .trim()
        .parse::<f64>()
        .map_err(|_| CliError::InvalidNumber(value_token.to_string()))?;

    Ok((op, value))
}

pub fn validate_amenities(names: &[String]) -> Result<(), CliError> {
    for name in names {
        if !AMENITY_TYPES.contains(&name.as_str()) {
            return Err(CliError::InvalidAmenity(name.clone()));
        }
    }
    Ok(())
}

/// True only when every required amenity is present and set on the listing.
pub fn has_amenities(required: &[String], listing: &Listing) -> bool {
    required
        .iter()
        .all(|name| listing.amenities.get(name.as_str()).copied().unwrap_or(false))
}

/// Case-insensitive substring match against the description.
pub fn matches_description(text: &str, listing: &Listing) -> bool {
    listing
        .description
        .to_lowercase()
        .contains(&text.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFilter {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

impl LocationFilter {
    /// Parses the `lat,lon,radiusKm` option string.
    pub fn parse(option: &str) -> Result<Self, CliError> {
        let bad = || CliError::InvalidLocation(option.to_string());

        let mut parts = option.split(',').map(|p| p.trim().parse::<f64>());
        let latitude = parts.next().ok_or_else(bad)?.map_err(|_| bad())?;
        let longitude = parts.next().ok_or_else(bad)?.map_err(|_| bad())?;
        let radius_km = parts.next().ok_or_else(bad)?.map_err(|_| bad())?;
        if parts.next().is_some() {
            return Err(bad());
        }

        Ok(LocationFilter {
            latitude,
            longitude,
            radius_km,
        })
    }

    /// True iff the listing lies within `radius_km` of the reference point,
    /// boundary included.
    pub fn contains(&self, listing: &Listing) -> bool {
        let distance = calculate_distance(
            self.latitude,
            self.longitude,
            listing.location[0],
            listing.location[1],
        );
        distance <= self.radius_km
    }
}

/// The set of active search criteria. Absent fields impose no constraint;
/// present ones combine by logical AND.
#[derive(Debug, Default, PartialEq)]
pub struct SearchCriteria {
    pub square_feet: Option<(ComparisonOp, f64)>,
    pub price: Option<(ComparisonOp, f64)>,
    pub rooms: Option<(ComparisonOp, f64)>,
    pub bathrooms: Option<(ComparisonOp, f64)>,
    pub amenities: Option<Vec<String>>,
    pub description: Option<String>,
    pub location: Option<LocationFilter>,
}

impl SearchCriteria {
    /// Rejects criteria that reference unknown amenity names. Operator and
    /// number validation happens earlier, while the option strings are
    /// parsed into this struct.
    pub fn validate(&self) -> Result<(), CliError> {
        if let Some(names) = &self.amenities {
            validate_amenities(names)?;
        }
        Ok(())
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some((op, value)) = self.square_feet {
            if !compare_number(NumericField::SquareFootage, op, value, listing) {
                return false;
            }
        }
        if let Some((op, value)) = self.price {
            if !compare_number(NumericField::Price, op, value, listing) {
                return false;
            }
        }
        if let Some((op, value)) = self.rooms {
            if !compare_number(NumericField::Rooms, op, value, listing) {
                return false;
            }
        }
        if let Some((op, value)) = self.bathrooms {
            if !compare_number(NumericField::Bathrooms, op, value, listing) {
                return false;
            }
        }
        if let Some(required) = &self.amenities {
            if !has_amenities(required, listing) {
                return false;
            }
        }
        if let Some(text) = &self.description {
            if !matches_description(text, listing) {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !location.contains(listing) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::Lighting;
    use std::collections::BTreeMap;

    fn amenities(entries: &[(&str, bool)]) -> BTreeMap<String, bool> {
        entries
            .iter()
            .map(|(name, present)| (name.to_string(), *present))
            .collect()
    }

    fn sample_listing() -> Listing {
        Listing {
            square_footage: 2000,
            lighting: Lighting::Medium,
            price: 300_000,
            rooms: 3,
            bathrooms: 2,
            location: [37.7749, -122.4194],
            description: "A beautiful modern home".to_string(),
            amenities: amenities(&[
                ("yard", true),
                ("garage", true),
                ("pool", false),
                ("patio", true),
                ("fireplace", false),
            ]),
        }
    }

    fn sample_set() -> Vec<Listing> {
        let base = sample_listing();
        let mut spacious = base.clone();
        spacious.square_footage = 3000;
        spacious.price = 500_000;
        spacious.rooms = 4;
        spacious.bathrooms = 3;
        spacious.description = "A spacious family home".to_string();

        let mut small = base.clone();
        small.square_footage = 1500;
        small.price = 250_000;
        small.rooms = 2;
        small.bathrooms = 1;
        small.amenities.insert("pool".to_string(), true);

        vec![base, spacious, small]
    }

    #[test]
    fn compare_number_by_operator() {
        let cheap = Listing {
            price: 250_000,
            ..sample_listing()
        };
        assert!(compare_number(
            NumericField::Price,
            ComparisonOp::Lt,
            300_000.0,
            &cheap
        ));
        assert!(!compare_number(
            NumericField::Bathrooms,
            ComparisonOp::Eq,
            3.0,
            &sample_listing()
        ));
        assert!(compare_number(
            NumericField::SquareFootage,
            ComparisonOp::Gt,
            1500.0,
            &sample_listing()
        ));
    }

    #[test]
    fn parse_comparison_option_accepts_valid_input() {
        assert_eq!(
            parse_comparison_option("gt,2500").unwrap(),
            (ComparisonOp::Gt, 2500.0)
        );
        assert_eq!(
            parse_comparison_option("eq,3").unwrap(),
            (ComparisonOp::Eq, 3.0)
        );
    }

    #[test]
    fn parse_comparison_option_flags_bad_operator() {
        assert_eq!(
            parse_comparison_option("invalid,2500"),
            Err(CliError::InvalidOperator("invalid".to_string()))
        );
        // No comma at all: the whole token fails operator validation.
        assert_eq!(
            parse_comparison_option("2500"),
            Err(CliError::InvalidOperator("2500".to_string()))
        );
    }

    #[test]
    fn parse_comparison_option_flags_bad_number() {
        assert_eq!(
            parse_comparison_option("gt,invalid"),
            Err(CliError::InvalidNumber("invalid".to_string()))
        );
        assert_eq!(
            parse_comparison_option("gt,"),
            Err(CliError::InvalidNumber("".to_string()))
        );
    }

    #[test]
    fn amenity_filter_requires_every_name() {
        let required = vec!["garage".to_string(), "pool".to_string()];
        let matched: Vec<_> = sample_set()
            .into_iter()
            .filter(|l| has_amenities(&required, l))
            .collect();

        // Only the small listing has both garage and pool set.
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].square_footage, 1500);
    }

    #[test]
    fn unknown_amenity_is_rejected_before_filtering() {
        let criteria = SearchCriteria {
            amenities: Some(vec!["garage".to_string(), "helipad".to_string()]),
            ..SearchCriteria::default()
        };
        assert_eq!(
            criteria.validate(),
            Err(CliError::InvalidAmenity("helipad".to_string()))
        );
    }

    #[test]
    fn description_match_is_case_insensitive() {
        let listing = sample_listing();
        assert!(matches_description("MODERN", &listing));
        assert!(matches_description("beautiful modern", &listing));
        assert!(!matches_description("victorian", &listing));
    }

    #[test]
    fn location_filter_parses_and_bounds() {
        let filter = LocationFilter::parse("37.7749,-122.4194,50").unwrap();
        assert_eq!(filter.radius_km, 50.0);

        // San Francisco listing sits at the reference point itself.
        assert!(filter.contains(&sample_listing()));

        let mut far = sample_listing();
        far.location = [34.0522, -118.2437]; // Los Angeles, ~559 km away
        assert!(!filter.contains(&far));
    }

    #[test]
    fn location_filter_includes_the_boundary() {
        let listing = sample_listing(); // San Francisco
        let (lat, lon) = (34.0522, -118.2437); // Los Angeles

        let distance = calculate_distance(lat, lon, listing.location[0], listing.location[1]);
        let exact = LocationFilter {
            latitude: lat,
            longitude: lon,
            radius_km: distance,
        };
        assert!(exact.contains(&listing));

        let just_short = LocationFilter {
            radius_km: distance - 0.001,
            ..exact
        };
        assert!(!just_short.contains(&listing));
    }

    #[test]
    fn location_filter_rejects_malformed_input() {
        for bad in ["37.7,-122.4", "a,b,c", "1,2,3,4", ""] {
            assert_eq!(
                LocationFilter::parse(bad),
                Err(CliError::InvalidLocation(bad.to_string()))
            );
        }
    }

    #[test]
    fn criteria_combine_with_logical_and() {
        let criteria = SearchCriteria {
            square_feet: Some((ComparisonOp::Gt, 1400.0)),
            price: Some((ComparisonOp::Lt, 400_000.0)),
            amenities: Some(vec!["pool".to_string()]),
            ..SearchCriteria::default()
        };
        criteria.validate().unwrap();

        let matched: Vec<_> = sample_set()
            .into_iter()
            .filter(|l| criteria.matches(l))
            .collect();

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].price, 250_000);
    }

    #[test]
    fn empty_criteria_match_everything() {
        let criteria = SearchCriteria::default();
        assert!(sample_set().iter().all(|l| criteria.matches(l)));
    }
}

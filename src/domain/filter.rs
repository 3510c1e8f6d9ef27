// src/domain/filter.rs

use crate::domain::listing::Listing;

/// Listing fields the search form can constrain on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    City,
    State,
    Mls,
    ZipCode,
    Bedrooms,
    Bathrooms,
    SquareFeet,
}

/// One (field, desired value) pair. An empty value never constrains.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub field: FilterField,
    pub value: String,
}

impl Constraint {
    pub fn new(field: FilterField, value: impl Into<String>) -> Self {
        Constraint {
            field,
            value: value.into(),
        }
    }
}

/// Canonical comparable form of one field value. Comparison only ever
/// happens between two values of the same field, so the variants never mix.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// Lower-cased text (City, State, MLS).
    Text(String),
    /// Digits only (Zip Code); punctuation and spacing are ignored.
    Digits(String),
    /// Parsed number; `None` is a sentinel that matches nothing.
    Number(Option<f64>),
}

/// Never fails: absent or malformed values become a form that simply
/// won't match a supplied filter value.
pub fn normalize(field: FilterField, raw: &str) -> Normalized {
    match field {
        FilterField::City | FilterField::State | FilterField::Mls => {
            Normalized::Text(raw.to_lowercase())
        }
        FilterField::ZipCode => {
            Normalized::Digits(raw.chars().filter(|c| c.is_ascii_digit()).collect())
        }
        FilterField::Bedrooms | FilterField::Bathrooms | FilterField::SquareFeet => {
            Normalized::Number(raw.trim().parse().ok())
        }
    }
}

fn field_value(listing: &Listing, field: FilterField) -> &str {
    match field {
        FilterField::City => &listing.city,
        FilterField::State => &listing.state,
        FilterField::Mls => &listing.mls,
        FilterField::ZipCode => &listing.zip_code,
        FilterField::Bedrooms => &listing.bedrooms,
        FilterField::Bathrooms => &listing.bathrooms,
        FilterField::SquareFeet => &listing.square_feet,
    }
}

fn satisfied(listing: &Listing, constraint: &Constraint) -> bool {
    if constraint.value.is_empty() {
        return true;
    }

    let have = normalize(constraint.field, field_value(listing, constraint.field));
    let want = normalize(constraint.field, &constraint.value);
    match (have, want) {
        // The numeric sentinel matches nothing, not even another sentinel.
        (Normalized::Number(a), Normalized::Number(b)) => match (a, b) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
        (a, b) => a == b,
    }
}

/// True iff every supplied constraint is satisfied. Pure conjunction:
/// evaluation order cannot change the answer.
pub fn matches(listing: &Listing, constraints: &[Constraint]) -> bool {
    constraints.iter().all(|c| satisfied(listing, c))
}

/// Stable filter: matching records keep their input order.
pub fn filter_all(listings: &[Listing], constraints: &[Constraint]) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| matches(l, constraints))
        .cloned()
        .collect()
}

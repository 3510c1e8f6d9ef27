// src/domain/listing.rs

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Street2 value standing in for "no second address line".
pub const NO_STREET2: &str = "*";

/// One property listing, shaped exactly like the backend's JSON records.
/// Every scalar is a string on the wire (the backend stores them that way),
/// so numeric comparison happens at filter time, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "MLS", default)]
    pub mls: String,
    #[serde(rename = "Street1", default)]
    pub street1: String,
    #[serde(rename = "Street2", default)]
    pub street2: String,
    #[serde(rename = "City", default)]
    pub city: String,
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "Zip Code", default)]
    pub zip_code: String,
    #[serde(rename = "Neighborhood", default)]
    pub neighborhood: String,
    #[serde(rename = "Sales Price", default)]
    pub sales_price: String,
    #[serde(rename = "Date Listed", default)]
    pub date_listed: String,
    #[serde(rename = "Last Modified", default)]
    pub last_modified: String,
    #[serde(rename = "Bedrooms", default)]
    pub bedrooms: String,
    #[serde(rename = "Bathrooms", default)]
    pub bathrooms: String,
    #[serde(rename = "Square Feet", default)]
    pub square_feet: String,
    #[serde(rename = "Lot Size", default)]
    pub lot_size: String,
    #[serde(rename = "Garage Size", default)]
    pub garage_size: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "List Photo", default)]
    pub list_photo: String,
    #[serde(rename = "Photo Array", default)]
    pub photo_array: Vec<String>,
    #[serde(rename = "User", default)]
    pub user: String,
    #[serde(rename = "deleted", default = "deleted_default")]
    pub deleted: String,
}

fn deleted_default() -> String {
    "false".to_string()
}

impl Default for Listing {
    fn default() -> Self {
        Listing {
            mls: String::new(),
            street1: String::new(),
            street2: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            neighborhood: String::new(),
            sales_price: String::new(),
            date_listed: String::new(),
            last_modified: String::new(),
            bedrooms: String::new(),
            bathrooms: String::new(),
            square_feet: String::new(),
            lot_size: String::new(),
            garage_size: String::new(),
            description: String::new(),
            list_photo: String::new(),
            photo_array: Vec::new(),
            user: String::new(),
            deleted: deleted_default(),
        }
    }
}

impl Listing {
    /// A record is shown to visitors only while `deleted` is the literal
    /// `"false"`.
    pub fn is_live(&self) -> bool {
        self.deleted == "false"
    }

    /// `Last Modified` is epoch milliseconds stored as a string.
    pub fn last_modified_millis(&self) -> Option<i64> {
        self.last_modified.trim().parse().ok()
    }

    /// "Street1, Street2 | City, State Zip", collapsing the second line
    /// when it holds the sentinel.
    pub fn address_line(&self) -> String {
        let street = if self.street2 != NO_STREET2 {
            format!("{}, {} | ", self.street1, self.street2)
        } else {
            format!("{} | ", self.street1)
        };
        format!("{street}{}, {} {}", self.city, self.state, self.zip_code)
    }

    /// Human rendering of `Date Listed`, if it parses as a timestamp.
    pub fn listed_display(&self) -> Option<String> {
        let millis: i64 = self.date_listed.trim().parse().ok()?;
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(|dt| dt.to_rfc2822())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_wire_names() {
        let raw = r#"{
            "MLS": "1234567890",
            "Street1": "123 Real Avenue",
            "Street2": "Apt. 56",
            "City": "Bend",
            "State": "OR",
            "Zip Code": "97701",
            "Neighborhood": "Old Mill",
            "Sales Price": "503,000",
            "Date Listed": "1609459200000",
            "Last Modified": "1609545600000",
            "Bedrooms": "3",
            "Bathrooms": "1",
            "Square Feet": "1200 sqft",
            "Lot Size": "1600 sqft",
            "Garage Size": "2 cars",
            "Description": "A lovely home.",
            "List Photo": "https://files.example.com/media/a@b.com/front.jpg",
            "Photo Array": ["https://files.example.com/media/a@b.com/back.jpg"],
            "User": "a@b.com",
            "deleted": "false"
        }"#;

        let card: Listing = serde_json::from_str(raw).unwrap();
        assert_eq!(card.mls, "1234567890");
        assert_eq!(card.zip_code, "97701");
        assert_eq!(card.sales_price, "503,000");
        assert_eq!(card.photo_array.len(), 1);
        assert!(card.is_live());
    }

    #[test]
    fn serializes_with_wire_names() {
        let card = Listing {
            mls: "9".to_string(),
            zip_code: "97701".to_string(),
            photo_array: vec!["x".to_string()],
            ..Default::default()
        };

        let v = serde_json::to_value(&card).unwrap();
        assert_eq!(v["MLS"], "9");
        assert_eq!(v["Zip Code"], "97701");
        assert_eq!(v["Photo Array"][0], "x");
        assert_eq!(v["deleted"], "false");
    }

    #[test]
    fn missing_deleted_defaults_to_false() {
        let card: Listing = serde_json::from_str(r#"{"MLS": "1"}"#).unwrap();
        assert_eq!(card.deleted, "false");
    }

    #[test]
    fn last_modified_parses_or_none() {
        let mut card = Listing {
            last_modified: "1609545600000".to_string(),
            ..Default::default()
        };
        assert_eq!(card.last_modified_millis(), Some(1609545600000));

        card.last_modified = "not a timestamp".to_string();
        assert_eq!(card.last_modified_millis(), None);

        card.last_modified = String::new();
        assert_eq!(card.last_modified_millis(), None);
    }

    #[test]
    fn address_line_collapses_sentinel_street2() {
        let mut card = Listing {
            street1: "123 Real Avenue".to_string(),
            street2: "Apt. 56".to_string(),
            city: "Bend".to_string(),
            state: "OR".to_string(),
            zip_code: "97701".to_string(),
            ..Default::default()
        };
        assert_eq!(
            card.address_line(),
            "123 Real Avenue, Apt. 56 | Bend, OR 97701"
        );

        card.street2 = NO_STREET2.to_string();
        assert_eq!(card.address_line(), "123 Real Avenue | Bend, OR 97701");
    }
}

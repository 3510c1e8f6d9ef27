// src/domain/editor.rs

use uuid::Uuid;

use crate::domain::listing::{Listing, NO_STREET2};

/// Required fields, checked in this order; the first blank one is reported.
pub const REQUIRED_FIELDS: [&str; 12] = [
    "Bathrooms",
    "Bedrooms",
    "City",
    "Description",
    "Garage Size",
    "Lot Size",
    "Neighborhood",
    "Sales Price",
    "Square Feet",
    "State",
    "Street1",
    "Zip Code",
];

/// A required field was blank after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
}

/// The editor's photo slots: one list photo plus an ordered gallery.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoSet {
    pub list_photo: String,
    pub photos: Vec<String>,
}

impl PhotoSet {
    pub fn from_listing(card: &Listing) -> Self {
        PhotoSet {
            list_photo: card.list_photo.clone(),
            photos: card.photo_array.clone(),
        }
    }

    /// Replaces whatever was in the single-photo slot.
    pub fn attach_list_photo(&mut self, url: &str) {
        self.list_photo = url.to_string();
    }

    /// Clears the slot only when the stored URL matches exactly.
    pub fn remove_list_photo(&mut self, url: &str) {
        if self.list_photo == url {
            self.list_photo.clear();
        }
    }

    /// Appends to the gallery; duplicates are allowed.
    pub fn attach_photo(&mut self, url: &str) {
        self.photos.push(url.to_string());
    }

    /// Deletes the first exact match; absent URLs are a no-op.
    pub fn remove_photo(&mut self, url: &str) {
        if let Some(pos) = self.photos.iter().position(|p| p == url) {
            self.photos.remove(pos);
        }
    }
}

/// Raw editor form fields, exactly as submitted.
#[derive(Debug, Clone, Default)]
pub struct ListingForm {
    pub street1: String,
    pub street2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub neighborhood: String,
    pub sales_price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub square_feet: String,
    pub lot_size: String,
    pub garage_size: String,
    pub description: String,
    pub photos: PhotoSet,
}

impl ListingForm {
    /// Prefills the editor from an existing record; the sentinel shows as an
    /// empty second address line.
    pub fn from_listing(card: &Listing) -> Self {
        ListingForm {
            street1: card.street1.clone(),
            street2: if card.street2 == NO_STREET2 {
                String::new()
            } else {
                card.street2.clone()
            },
            city: card.city.clone(),
            state: card.state.clone(),
            zip_code: card.zip_code.clone(),
            neighborhood: card.neighborhood.clone(),
            sales_price: card.sales_price.clone(),
            bedrooms: card.bedrooms.clone(),
            bathrooms: card.bathrooms.clone(),
            square_feet: card.square_feet.clone(),
            lot_size: card.lot_size.clone(),
            garage_size: card.garage_size.clone(),
            description: card.description.clone(),
            photos: PhotoSet::from_listing(card),
        }
    }
}

fn form_field<'a>(form: &'a ListingForm, name: &str) -> &'a str {
    match name {
        "Bathrooms" => &form.bathrooms,
        "Bedrooms" => &form.bedrooms,
        "City" => &form.city,
        "Description" => &form.description,
        "Garage Size" => &form.garage_size,
        "Lot Size" => &form.lot_size,
        "Neighborhood" => &form.neighborhood,
        "Sales Price" => &form.sales_price,
        "Square Feet" => &form.square_feet,
        "State" => &form.state,
        "Street1" => &form.street1,
        "Zip Code" => &form.zip_code,
        _ => "",
    }
}

/// Builds the record to submit, or reports the first missing required field.
///
/// `existing` carries identity and lifecycle fields over when editing: MLS
/// stays stable, `Date Listed` and `deleted` are preserved. `Last Modified`
/// is always stamped with `now_millis`, and a blank second address line
/// becomes the `"*"` sentinel. The caller sends the result to the backend;
/// nothing here touches the network.
pub fn build_submission(
    form: &ListingForm,
    existing: Option<&Listing>,
    user: &str,
    now_millis: i64,
) -> Result<Listing, ValidationError> {
    for name in REQUIRED_FIELDS {
        if form_field(form, name).trim().is_empty() {
            return Err(ValidationError { field: name });
        }
    }

    let mls = existing
        .map(|c| c.mls.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let date_listed = existing
        .map(|c| c.date_listed.clone())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| now_millis.to_string());
    let deleted = existing
        .map(|c| c.deleted.clone())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "false".to_string());
    let street2 = if form.street2.trim().is_empty() {
        NO_STREET2.to_string()
    } else {
        form.street2.clone()
    };

    Ok(Listing {
        mls,
        street1: form.street1.clone(),
        street2,
        city: form.city.clone(),
        state: form.state.clone(),
        zip_code: form.zip_code.clone(),
        neighborhood: form.neighborhood.clone(),
        sales_price: form.sales_price.clone(),
        date_listed,
        last_modified: now_millis.to_string(),
        bedrooms: form.bedrooms.clone(),
        bathrooms: form.bathrooms.clone(),
        square_feet: form.square_feet.clone(),
        lot_size: form.lot_size.clone(),
        garage_size: form.garage_size.clone(),
        description: form.description.clone(),
        list_photo: form.photos.list_photo.clone(),
        photo_array: form.photos.photos.clone(),
        user: user.to_string(),
        deleted,
    })
}

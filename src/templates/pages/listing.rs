use maud::{html, Markup};

use crate::auth::SessionState;
use crate::domain::listing::Listing;
use crate::templates::components::tile::time_ago;
use crate::templates::desktop_layout;

pub fn listing_page(session: &SessionState, card: &Listing, now_millis: i64) -> Markup {
    let updated = card
        .last_modified_millis()
        .map(|ms| time_ago(now_millis, ms))
        .unwrap_or_else(|| "unknown".to_string());
    let listed = card
        .listed_display()
        .unwrap_or_else(|| "unknown".to_string());

    desktop_layout(
        "Listing",
        session,
        html! {
            main class="listing-page" {
                section class="card" {
                    div class="carousel" {
                        @for photo in &card.photo_array {
                            img src=(photo) alt="";
                        }
                    }
                    h2 { (card.address_line()) }
                    p { (card.description) }
                    ul class="facts" {
                        li { "Price: $" (card.sales_price) }
                        li { "Square Feet: " (card.square_feet) " | Lot Size: " (card.lot_size) }
                        li { "Beds: " (card.bedrooms) " | Baths: " (card.bathrooms) }
                        li { "Garage Size: " (card.garage_size) " | Neighborhood: " (card.neighborhood) }
                        li { "First Listed: " (listed) }
                    }
                    footer { small { "Last updated: " (updated) } }
                }
            }
        },
    )
}

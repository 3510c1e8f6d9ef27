use maud::{html, Markup};

use crate::auth::SessionState;
use crate::domain::listing::Listing;
use crate::templates::{components::tile_deck, desktop_layout};

pub fn my_listings_page(session: &SessionState, cards: &[Listing], now_millis: i64) -> Markup {
    desktop_layout(
        "My Listings",
        session,
        html! {
            main class="deck-page" {
                @if cards.is_empty() {
                    section class="notice" {
                        h3 { "You have no properties listed with us." }
                    }
                } @else {
                    (tile_deck(cards, now_millis, true))
                }
            }
        },
    )
}

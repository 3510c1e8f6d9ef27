// templates/pages/home.rs

use maud::{html, Markup};

use crate::auth::SessionState;
use crate::domain::listing::Listing;
use crate::templates::{components::tile_deck, desktop_layout};

pub fn home_page(session: &SessionState, cards: &[Listing], now_millis: i64) -> Markup {
    desktop_layout(
        "Home",
        session,
        html! {
            main class="deck-page" {
                (tile_deck(cards, now_millis, false))
            }
        },
    )
}

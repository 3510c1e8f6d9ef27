// src/templates/components/tile.rs
use maud::{html, Markup};

use crate::domain::listing::Listing;

/// "3 minutes ago" style rendering of the gap between two epoch-ms instants.
pub fn time_ago(now_millis: i64, then_millis: i64) -> String {
    const MS_PER_MINUTE: i64 = 60 * 1000;
    const MS_PER_HOUR: i64 = MS_PER_MINUTE * 60;
    const MS_PER_DAY: i64 = MS_PER_HOUR * 24;
    const MS_PER_MONTH: i64 = MS_PER_DAY * 30;
    const MS_PER_YEAR: i64 = MS_PER_DAY * 365;

    let elapsed = now_millis - then_millis;
    if elapsed < MS_PER_MINUTE {
        format!("{} seconds ago", round_div(elapsed, 1000))
    } else if elapsed < MS_PER_HOUR {
        format!("{} minutes ago", round_div(elapsed, MS_PER_MINUTE))
    } else if elapsed < MS_PER_DAY {
        format!("{} hours ago", round_div(elapsed, MS_PER_HOUR))
    } else if elapsed < MS_PER_MONTH {
        format!("{} days ago", round_div(elapsed, MS_PER_DAY))
    } else if elapsed < MS_PER_YEAR {
        format!("{} months ago", round_div(elapsed, MS_PER_MONTH))
    } else {
        format!("{} years ago", round_div(elapsed, MS_PER_YEAR))
    }
}

fn round_div(n: i64, d: i64) -> i64 {
    (n as f64 / d as f64).round() as i64
}

fn last_updated(card: &Listing, now_millis: i64) -> String {
    card.last_modified_millis()
        .map(|ms| time_ago(now_millis, ms))
        .unwrap_or_else(|| "unknown".to_string())
}

/// One listing card. `owner_view` adds the edit and publish/remove controls.
pub fn tile(card: &Listing, now_millis: i64, owner_view: bool) -> Markup {
    html! {
        div class="tile" data-mls=(card.mls) {
            a class="tile-link" href={ "/realtor/listing?MLS=" (card.mls) } {
                img class="tile-photo" src=(card.list_photo) alt="";
                h4 { (card.address_line()) }
                p { "Price: $" (card.sales_price) }
                p { "Square Feet: " (card.square_feet) " | Lot Size: " (card.lot_size) }
                p { "Beds: " (card.bedrooms) " | Baths: " (card.bathrooms) }
            }
            @if owner_view {
                div class="tile-actions" {
                    a href={ "/realtor/my-listing?MLS=" (card.mls) } {
                        button type="button" { "Edit Listing" }
                    }
                    form action="/realtor/listing/toggle" method="post" {
                        input type="hidden" name="MLS" value=(card.mls);
                        @if card.is_live() {
                            button type="submit" { "Remove Listing" }
                        } @else {
                            button type="submit" { "Publish Listing" }
                        }
                    }
                }
            }
            footer { small { "Last updated: " (last_updated(card, now_millis)) } }
        }
    }
}

pub fn tile_deck(cards: &[Listing], now_millis: i64, owner_view: bool) -> Markup {
    html! {
        div class="tile-deck" {
            @for card in cards {
                (tile(card, now_millis, owner_view))
            }
        }
    }
}

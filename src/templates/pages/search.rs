use maud::{html, Markup};

use crate::auth::SessionState;
use crate::domain::listing::Listing;
use crate::templates::{components::tile_deck, desktop_layout};

/// Echoes the submitted query back into the form fields.
pub struct SearchVm<'a> {
    pub city: &'a str,
    pub state: &'a str,
    pub zip_code: &'a str,
    pub bedrooms: &'a str,
    pub bathrooms: &'a str,
    pub mls: &'a str,
    pub square_feet: &'a str,
}

pub fn search_page(
    session: &SessionState,
    vm: &SearchVm,
    cards: &[Listing],
    now_millis: i64,
) -> Markup {
    desktop_layout(
        "Search Listings",
        session,
        html! {
            main class="deck-page" {
                section class="card search-form" {
                    form action="/realtor/search" method="get" {
                        div class="form-row" {
                            label { "City"
                                input type="text" name="City" value=(vm.city);
                            }
                            label { "State"
                                input type="text" name="State" value=(vm.state);
                            }
                            label { "Zip Code"
                                input type="text" name="ZipCode" value=(vm.zip_code);
                            }
                        }
                        div class="form-row" {
                            label { "Bedrooms"
                                input type="text" name="Bedrooms" value=(vm.bedrooms);
                            }
                            label { "Bathrooms"
                                input type="text" name="Bathrooms" value=(vm.bathrooms);
                            }
                        }
                        div class="form-row" {
                            label { "MLS"
                                input type="text" name="MLS" value=(vm.mls);
                            }
                            label { "Square Feet"
                                input type="text" name="SquareFeet" value=(vm.square_feet);
                            }
                        }
                        button type="submit" { "Submit" }
                    }
                }
                (tile_deck(cards, now_millis, false))
            }
        },
    )
}

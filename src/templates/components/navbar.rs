use maud::{html, Markup};

use crate::auth::SessionState;

pub fn navbar(session: &SessionState) -> Markup {
    html! {
        header class="topbar" {
            a class="brand" href="/realtor" { "realtor webpage." }
            nav {
                ul {
                    li { a href="/realtor/search" { "Search Listings" } }
                    li { a href="/realtor/new" { "List Your Property" } }
                    @match session {
                        SessionState::SignedIn { email } => {
                            li { a href="/realtor/my-listings" { "View/Modify Listings" } }
                            li { span class="user-email" { (email) } }
                            li { a href="/auth/signout" { "Sign Out" } }
                        }
                        SessionState::SignedOut => {
                            li { a class="login-link" href="/login" { "Sign In" } }
                        }
                    }
                }
            }
        }
    }
}

use maud::{html, Markup};

use crate::auth::SessionState;
use crate::templates::desktop_layout;

/// Renders the Google Identity Services button; the widget posts the
/// credential straight to /auth/google.
pub fn login_page(session: &SessionState, google_client_id: &str) -> Markup {
    desktop_layout(
        "Sign in",
        session,
        html! {
            main class="notice" {
                h1 { "Sign in" }
                p { "Sign in with your Google account to list and manage properties." }

                script defer src="https://accounts.google.com/gsi/client" {}
                div id="g_id_onload"
                    data-client_id=(google_client_id)
                    data-login_uri="/auth/google" {}
                div class="g_id_signin" data-type="standard" {}
            }
        },
    )
}

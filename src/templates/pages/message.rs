use maud::{html, Markup};

use crate::auth::SessionState;
use crate::templates::desktop_layout;

/// Full-page notice, one heading per line. Used for the sign-in prompts.
pub fn notice_page(session: &SessionState, title: &str, lines: &[&str]) -> Markup {
    desktop_layout(
        title,
        session,
        html! {
            main class="notice" {
                @for line in lines {
                    h3 { (line) }
                }
            }
        },
    )
}

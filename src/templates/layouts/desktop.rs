use maud::{html, Markup, DOCTYPE};

use crate::auth::SessionState;
use crate::templates::components::navbar;

pub fn desktop_layout(title: &str, session: &SessionState, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                (navbar(session))
                (content)
            }
        }
    }
}

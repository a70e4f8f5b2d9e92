use dioxus::prelude::*;

use super::{Greeting, StatsRow};
use crate::i18n::{tr, use_lang};
use crate::routes::Route;

/// Family portal view: the parent's own children and school news.
#[component]
pub fn ParentDashboard() -> Element {
    let lang = use_lang();

    rsx! {
        div { class: "dashboard",
            Greeting {}
            StatsRow {
                stats: vec![("stat.children", "children")],
            }
            div { class: "quick-links",
                Link { to: Route::Announcements {}, class: "quick-link", {tr(lang, "nav.announcements")} }
            }
        }
    }
}

use dioxus::prelude::*;

use super::{Greeting, StatsRow};
use crate::i18n::{tr, use_lang};
use crate::routes::Route;

/// Front-desk view: admissions and family records.
#[component]
pub fn ReceptionDashboard() -> Element {
    let lang = use_lang();

    rsx! {
        div { class: "dashboard",
            Greeting {}
            StatsRow {
                stats: vec![
                    ("stat.pending_admissions", "pending_admissions"),
                    ("stat.students", "students"),
                    ("stat.guardians", "guardians"),
                ],
            }
            div { class: "quick-links",
                Link { to: Route::Students {}, class: "quick-link", {tr(lang, "nav.students")} }
                Link { to: Route::Guardians {}, class: "quick-link", {tr(lang, "nav.guardians")} }
            }
        }
    }
}

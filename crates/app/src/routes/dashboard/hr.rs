use dioxus::prelude::*;

use super::{Greeting, StatsRow};
use crate::i18n::{tr, use_lang};
use crate::routes::Route;

/// Staff administration view.
#[component]
pub fn HrDashboard() -> Element {
    let lang = use_lang();

    rsx! {
        div { class: "dashboard",
            Greeting {}
            StatsRow {
                stats: vec![
                    ("stat.employees", "employees"),
                    ("stat.teachers", "teachers"),
                ],
            }
            div { class: "quick-links",
                Link { to: Route::Employees {}, class: "quick-link", {tr(lang, "nav.employees")} }
                Link { to: Route::Announcements {}, class: "quick-link", {tr(lang, "nav.announcements")} }
            }
        }
    }
}

use dioxus::prelude::*;

use super::{Greeting, StatsRow};
use crate::i18n::{tr, use_lang};
use crate::routes::Route;

/// Day-to-day operations view: people and classes first.
#[component]
pub fn ManagerDashboard() -> Element {
    let lang = use_lang();

    rsx! {
        div { class: "dashboard",
            Greeting {}
            StatsRow {
                stats: vec![
                    ("stat.students", "students"),
                    ("stat.teachers", "teachers"),
                    ("stat.classes", "classes"),
                    ("stat.employees", "employees"),
                ],
            }
            div { class: "quick-links",
                Link { to: Route::Classes {}, class: "quick-link", {tr(lang, "nav.classes")} }
                Link { to: Route::Students {}, class: "quick-link", {tr(lang, "nav.students")} }
                Link { to: Route::Employees {}, class: "quick-link", {tr(lang, "nav.employees")} }
                Link { to: Route::Announcements {}, class: "quick-link", {tr(lang, "nav.announcements")} }
            }
        }
    }
}

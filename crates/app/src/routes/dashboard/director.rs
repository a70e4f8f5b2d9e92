use dioxus::prelude::*;

use super::{Greeting, StatsRow};
use crate::i18n::{tr, use_lang};
use crate::routes::Route;

/// Whole-school view: headcounts plus both sides of the ledger.
#[component]
pub fn DirectorDashboard() -> Element {
    let lang = use_lang();

    rsx! {
        div { class: "dashboard",
            Greeting {}
            StatsRow {
                stats: vec![
                    ("stat.students", "students"),
                    ("stat.teachers", "teachers"),
                    ("stat.classes", "classes"),
                    ("stat.payments_month", "payments_month"),
                    ("stat.expenses_month", "expenses_month"),
                ],
            }
            div { class: "quick-links",
                Link { to: Route::Students {}, class: "quick-link", {tr(lang, "nav.students")} }
                Link { to: Route::Teachers {}, class: "quick-link", {tr(lang, "nav.teachers")} }
                Link { to: Route::Payments {}, class: "quick-link", {tr(lang, "nav.payments")} }
                Link { to: Route::Expenses {}, class: "quick-link", {tr(lang, "nav.expenses")} }
            }
        }
    }
}

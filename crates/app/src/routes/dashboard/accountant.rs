use dioxus::prelude::*;

use super::{Greeting, StatsRow};
use crate::i18n::{tr, use_lang};
use crate::routes::Route;

/// Finance view: this month's money in and money out.
#[component]
pub fn AccountantDashboard() -> Element {
    let lang = use_lang();

    rsx! {
        div { class: "dashboard",
            Greeting {}
            StatsRow {
                stats: vec![
                    ("stat.payments_month", "payments_month"),
                    ("stat.expenses_month", "expenses_month"),
                ],
            }
            div { class: "quick-links",
                Link { to: Route::Payments {}, class: "quick-link", {tr(lang, "nav.payments")} }
                Link { to: Route::Expenses {}, class: "quick-link", {tr(lang, "nav.expenses")} }
            }
        }
    }
}

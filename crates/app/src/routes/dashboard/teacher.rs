use dioxus::prelude::*;

use super::{Greeting, StatsRow};
use crate::i18n::{tr, use_lang};
use crate::routes::Route;

/// Classroom view: the teacher's own classes and students.
#[component]
pub fn TeacherDashboard() -> Element {
    let lang = use_lang();

    rsx! {
        div { class: "dashboard",
            Greeting {}
            StatsRow {
                stats: vec![
                    ("stat.my_classes", "my_classes"),
                    ("stat.students", "my_students"),
                ],
            }
            div { class: "quick-links",
                Link { to: Route::Classes {}, class: "quick-link", {tr(lang, "nav.classes")} }
                Link { to: Route::Announcements {}, class: "quick-link", {tr(lang, "nav.announcements")} }
            }
        }
    }
}

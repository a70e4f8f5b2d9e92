pub mod accountant;
pub mod director;
pub mod hr;
pub mod manager;
pub mod parent;
pub mod reception;
pub mod teacher;

use dioxus::prelude::*;
use shared_types::UserRole;
use shared_ui::components::{Card, CardContent, Skeleton};

use crate::auth::{use_auth, use_user_role};
use crate::i18n::{tr, use_lang};

/// Role-adaptive dashboard. Renders the appropriate dashboard for the
/// signed-in user's role.
#[component]
pub fn Dashboard() -> Element {
    let role = use_user_role();

    match role {
        UserRole::Director => rsx! { director::DirectorDashboard {} },
        UserRole::Manager => rsx! { manager::ManagerDashboard {} },
        UserRole::Teacher => rsx! { teacher::TeacherDashboard {} },
        UserRole::Hr => rsx! { hr::HrDashboard {} },
        UserRole::Accountant => rsx! { accountant::AccountantDashboard {} },
        UserRole::Reception => rsx! { reception::ReceptionDashboard {} },
        UserRole::Parent => rsx! { parent::ParentDashboard {} },
        UserRole::Guest => rsx! { GuestDashboard {} },
    }
}

/// Minimal shell for accounts with no recognized role.
#[component]
fn GuestDashboard() -> Element {
    let lang = use_lang();
    rsx! {
        div { class: "dashboard",
            Greeting {}
            Card {
                CardContent {
                    p { {tr(lang, "common.empty")} }
                }
            }
        }
    }
}

/// Shared greeting header with the user's name and today's date.
#[component]
pub(crate) fn Greeting() -> Element {
    let lang = use_lang();
    let auth = use_auth();
    let name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let welcome = format!("{} {}", tr(lang, "dashboard.welcome"), name);

    rsx! {
        div { class: "dashboard-greeting",
            h1 { "{welcome}" }
            p {
                span { {tr(lang, "dashboard.overview")} }
                span { class: "dashboard-date", " {today}" }
            }
        }
    }
}

/// A row of headline counters. `stats` pairs an i18n label key with the
/// counter key in the API's stats payload; counters the API does not
/// report render as zero.
#[component]
pub(crate) fn StatsRow(stats: Vec<(&'static str, &'static str)>) -> Element {
    let lang = use_lang();
    let data = use_resource(|| async move {
        server::api::load_stats().await.unwrap_or_default()
    });

    rsx! {
        div { class: "stats-row",
            match &*data.read() {
                Some(map) => rsx! {
                    for (label_key, stat_key) in stats.iter() {
                        {
                            let value = map.get(*stat_key).copied().unwrap_or(0);
                            let label = tr(lang, label_key);
                            rsx! {
                                Card { key: "{stat_key}",
                                    CardContent {
                                        div { class: "stat-value", "{value}" }
                                        div { class: "stat-label", "{label}" }
                                    }
                                }
                            }
                        }
                    }
                },
                None => rsx! {
                    for (_, stat_key) in stats.iter() {
                        Skeleton { key: "{stat_key}" }
                    }
                },
            }
        }
    }
}

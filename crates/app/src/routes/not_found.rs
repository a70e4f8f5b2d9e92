use dioxus::prelude::*;

use crate::i18n::{tr, use_lang};
use crate::routes::Route;

/// 404 Not Found page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let lang = use_lang();
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }
        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", {tr(lang, "common.not_found")} }
                code { "{path}" }
                Link { to: Route::Home {},
                    class: "not-found-link",
                    {tr(lang, "common.back_home")}
                }
            }
        }
    }
}

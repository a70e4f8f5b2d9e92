use dioxus::prelude::*;
use shared_ui::locale::{Lang, LocaleSeed, LocaleState};

mod auth;
mod data_manager;
mod format_helpers;
mod i18n;
mod routes;

use auth::AuthState;
use i18n::use_persisted_lang;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load();

        let router = dioxus::server::router(App)
            .layer(axum::middleware::from_fn(
                server::auth::middleware::route_gate,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);
    use_context_provider(|| LocaleState {
        lang: Signal::new(Lang::default()),
    });

    // The seed script fixes `dir`/`lang` before paint; this restores the
    // stored choice into the Rust-side signal for the string table.
    use_persisted_lang();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        LocaleSeed {}
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "auth-guard-loading",
                        p { "..." }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}

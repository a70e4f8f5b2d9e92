use dioxus::prelude::*;
use shared_ui::components::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};
use shared_ui::locale::set_lang;

use crate::i18n::{tr, use_lang, LocaleState};
use crate::routes::Route;

/// Public marketing homepage.
#[component]
pub fn Home() -> Element {
    let lang = use_lang();
    let mut locale = use_context::<LocaleState>();
    let other = lang.toggled();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }
        div { class: "home",
            header { class: "home-topbar",
                span { class: "home-brand", "Madaris" }
                div { class: "home-topbar-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            locale.lang.set(other);
                            set_lang(other);
                        },
                        "{other.native_name()}"
                    }
                    Link { to: Route::Dashboard {},
                        Button { variant: ButtonVariant::Primary, {tr(lang, "home.cta_login")} }
                    }
                }
            }

            section { class: "home-hero",
                h1 { {tr(lang, "home.hero_title")} }
                p { {tr(lang, "home.hero_subtitle")} }
                Link { to: Route::Dashboard {},
                    Button { variant: ButtonVariant::Primary, {tr(lang, "home.cta_login")} }
                }
            }

            section { class: "home-features",
                h2 { {tr(lang, "home.features_title")} }
                div { class: "home-feature-grid",
                    FeatureCard {
                        title_key: "home.feature_bilingual_title",
                        body_key: "home.feature_bilingual_body",
                    }
                    FeatureCard {
                        title_key: "home.feature_roles_title",
                        body_key: "home.feature_roles_body",
                    }
                    FeatureCard {
                        title_key: "home.feature_finance_title",
                        body_key: "home.feature_finance_body",
                    }
                }
            }

            section { class: "home-contact",
                h2 { {tr(lang, "home.contact_title")} }
                p { {tr(lang, "home.contact_body")} }
            }

            footer { class: "home-footer",
                span { "Madaris" }
            }
        }
    }
}

#[component]
fn FeatureCard(title_key: &'static str, body_key: &'static str) -> Element {
    let lang = use_lang();
    rsx! {
        Card {
            CardHeader {
                CardTitle { {tr(lang, title_key)} }
            }
            CardContent {
                p { {tr(lang, body_key)} }
            }
        }
    }
}

use dioxus::prelude::*;
use serde_json::Value;
use shared_types::{FilterKind, FilterSpec, OptionsMap, QueryState};
use shared_ui::components::{FormSelect, Input};

use crate::i18n::{tr, use_lang};

/// Filter panel driven by `FilterSpec`s.
///
/// Every change writes straight into the query state (which snaps the page
/// back to 1), so the table refetches immediately. Clearing a select back
/// to "All" removes the filter from the outgoing payload.
#[component]
pub fn FilterPanel(
    filters: Vec<FilterSpec>,
    options: OptionsMap,
    query: Signal<QueryState>,
) -> Element {
    let lang = use_lang();

    if filters.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "filter-panel",
            for filter in filters.iter() {
                {
                    let key = filter.key.clone();
                    let label = tr(lang, &filter.label);
                    let placeholder = filter
                        .placeholder
                        .as_deref()
                        .map(|k| tr(lang, k))
                        .unwrap_or_default();
                    let current = current_value(&query.read(), &key);

                    match &filter.kind {
                        FilterKind::Select { source } => {
                            let items = options.get(source).cloned().unwrap_or_default();
                            let mut query = query;
                            let key_for_change = key.clone();
                            rsx! {
                                FormSelect {
                                    key: "{key}",
                                    label,
                                    value: current,
                                    onchange: move |evt: Event<FormData>| {
                                        query.write().set_filter(
                                            &key_for_change,
                                            Value::String(evt.value().to_string()),
                                        );
                                    },
                                    option { value: "", {tr(lang, "common.all")} }
                                    for item in items {
                                        option { value: "{item.value_key()}", "{item.label}" }
                                    }
                                }
                            }
                        }
                        FilterKind::Date => {
                            let mut query = query;
                            let key_for_change = key.clone();
                            rsx! {
                                Input {
                                    key: "{key}",
                                    label,
                                    input_type: "date".to_string(),
                                    value: current,
                                    on_input: move |evt: FormEvent| {
                                        query.write().set_filter(
                                            &key_for_change,
                                            Value::String(evt.value().to_string()),
                                        );
                                    },
                                }
                            }
                        }
                        FilterKind::Text => {
                            let mut query = query;
                            let key_for_change = key.clone();
                            rsx! {
                                Input {
                                    key: "{key}",
                                    label,
                                    placeholder,
                                    value: current,
                                    on_input: move |evt: FormEvent| {
                                        query.write().set_filter(
                                            &key_for_change,
                                            Value::String(evt.value().to_string()),
                                        );
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn current_value(query: &QueryState, key: &str) -> String {
    match query.filters.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

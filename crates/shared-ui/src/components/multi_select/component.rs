use dioxus::prelude::*;

/// Searchable option picker backed by a side-channel options source.
///
/// `options` is the `(value, label)` list resolved from the source,
/// possibly empty while the source is still loading, which renders an
/// empty picker with zero selections rather than erroring. With
/// `multiple` the field reports an array of values; without it, at most
/// one value.
#[component]
pub fn MultiSelect(
    options: Vec<(String, String)>,
    selected: Vec<String>,
    #[props(default = true)] multiple: bool,
    #[props(default)] label: String,
    #[props(default)] search_placeholder: String,
    #[props(default)] empty_text: String,
    on_change: EventHandler<Vec<String>>,
) -> Element {
    let mut search = use_signal(String::new);

    let query = search.read().clone();
    let visible: Vec<(String, String)> = filter_options(&options, &query);
    let count = selected.len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "multi-select", "data-count": "{count}",
            if !label.is_empty() {
                label { class: "multi-select-label", "{label}" }
            }
            input {
                class: "multi-select-search",
                r#type: "text",
                value: "{query}",
                placeholder: search_placeholder,
                oninput: move |evt| search.set(evt.value().to_string()),
            }
            div { class: "multi-select-options",
                if visible.is_empty() {
                    p { class: "multi-select-empty", "{empty_text}" }
                }
                for (value, option_label) in visible {
                    {
                        let is_selected = selected.contains(&value);
                        let current = selected.clone();
                        let value_for_toggle = value.clone();
                        rsx! {
                            button {
                                key: "{value}",
                                r#type: "button",
                                class: "multi-select-option",
                                "data-selected": if is_selected { "true" } else { "false" },
                                onclick: move |_| {
                                    on_change.call(toggle_value(&current, &value_for_toggle, multiple));
                                },
                                span { class: "multi-select-check",
                                    if is_selected { "\u{2713}" }
                                }
                                "{option_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Case-insensitive label filter over the option list.
fn filter_options(options: &[(String, String)], query: &str) -> Vec<(String, String)> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|(_, label)| label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Apply a click on `value` to the current selection.
///
/// Multi-value fields toggle membership; single-value fields replace the
/// selection (clicking the selected value clears it).
fn toggle_value(selected: &[String], value: &str, multiple: bool) -> Vec<String> {
    if multiple {
        if selected.iter().any(|v| v == value) {
            selected.iter().filter(|v| *v != value).cloned().collect()
        } else {
            let mut next = selected.to_vec();
            next.push(value.to_string());
            next
        }
    } else if selected.len() == 1 && selected[0] == value {
        Vec::new()
    } else {
        vec![value.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn opts() -> Vec<(String, String)> {
        vec![
            ("1".to_string(), "Grade 1 - A".to_string()),
            ("2".to_string(), "Grade 1 - B".to_string()),
            ("3".to_string(), "Grade 2 - A".to_string()),
        ]
    }

    #[test]
    fn filter_matches_case_insensitively() {
        let visible = filter_options(&opts(), "grade 1");
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].1, "Grade 1 - A");
    }

    #[test]
    fn blank_query_shows_everything() {
        assert_eq!(filter_options(&opts(), "  ").len(), 3);
        assert_eq!(filter_options(&[], "").len(), 0);
    }

    #[test]
    fn multiple_toggles_membership() {
        let selected = vec!["1".to_string()];
        let next = toggle_value(&selected, "2", true);
        assert_eq!(next, vec!["1".to_string(), "2".to_string()]);
        let next = toggle_value(&next, "1", true);
        assert_eq!(next, vec!["2".to_string()]);
    }

    #[test]
    fn single_replaces_and_clears() {
        let next = toggle_value(&[], "3", false);
        assert_eq!(next, vec!["3".to_string()]);
        let next = toggle_value(&next, "1", false);
        assert_eq!(next, vec!["1".to_string()]);
        let next = toggle_value(&next, "1", false);
        assert!(next.is_empty());
    }

    #[test]
    fn empty_source_renders_with_zero_selections() {
        let html = dioxus_ssr::render_element(rsx! {
            MultiSelect {
                options: Vec::<(String, String)>::new(),
                selected: Vec::<String>::new(),
                empty_text: "No classes yet".to_string(),
                on_change: |_| {},
            }
        });
        assert!(html.contains(r#"data-count="0""#));
        assert!(html.contains("No classes yet"));
    }
}

use dioxus::prelude::*;
use serde_json::{Map, Value};
use shared_types::{FieldKind, FieldSpec, OptionsMap, Row};
use shared_ui::components::{
    Button, ButtonVariant, Form, FormSelect, Input, MultiSelect, Separator, Switch, SwitchThumb,
};
use std::collections::HashMap;

use crate::i18n::{tr, use_lang};

/// Schema-driven create/edit form.
///
/// Renders one input per `FieldSpec`, entirely from the schema; the form
/// has no idea which entity it is editing. Server-side field errors are
/// shown under their fields; the required check runs client-side before
/// submit. Remount with a new `key` to reset state between rows.
#[component]
pub fn SchemaForm(
    fields: Vec<FieldSpec>,
    initial: Option<Row>,
    options: OptionsMap,
    field_errors: HashMap<String, String>,
    saving: bool,
    on_submit: EventHandler<Value>,
) -> Element {
    let lang = use_lang();

    let fields_for_init = fields.clone();
    let initial_for_init = initial.clone();
    let values: Signal<Map<String, Value>> =
        use_signal(move || initial_values(&fields_for_init, initial_for_init.as_ref()));

    let mut local_errors: Signal<HashMap<String, String>> = use_signal(HashMap::new);

    let fields_for_submit = fields.clone();
    let handle_submit = move |_: FormEvent| {
        let missing = missing_required(&fields_for_submit, &values.read());
        if !missing.is_empty() {
            let mut errors = HashMap::new();
            for name in missing {
                errors.insert(name, tr(lang, "form.required"));
            }
            local_errors.set(errors);
            return;
        }
        local_errors.set(HashMap::new());
        on_submit.call(Value::Object(values.read().clone()));
    };

    rsx! {
        Form {
            onsubmit: handle_submit,
            div { class: "sheet-form",
                for field in fields.iter() {
                    {
                        let error = field_errors
                            .get(&field.name)
                            .cloned()
                            .or_else(|| local_errors.read().get(&field.name).cloned());
                        rsx! {
                            FieldInput {
                                key: "{field.name}",
                                field: field.clone(),
                                values,
                                options: options.clone(),
                                error,
                            }
                        }
                    }
                }
            }
            Separator {}
            div { class: "sheet-footer-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: saving,
                    if saving { {tr(lang, "common.saving")} } else { {tr(lang, "common.save")} }
                }
            }
        }
    }
}

/// One form input, selected by the field kind discriminator.
#[component]
fn FieldInput(
    field: FieldSpec,
    values: Signal<Map<String, Value>>,
    options: OptionsMap,
    error: Option<String>,
) -> Element {
    let lang = use_lang();
    let label = tr(lang, &field.label);
    let placeholder = field
        .placeholder
        .as_deref()
        .map(|key| tr(lang, key))
        .unwrap_or_default();
    let name = field.name.clone();

    let input = match &field.kind {
        FieldKind::Switch => {
            let checked = values.read().get(&name).and_then(Value::as_bool).unwrap_or(false);
            let mut values = values;
            let name_for_change = name.clone();
            rsx! {
                div { class: "switch-field",
                    label { class: "input-label", "{label}" }
                    Switch {
                        checked: Some(checked),
                        on_checked_change: move |val: bool| {
                            values.write().insert(name_for_change.clone(), Value::Bool(val));
                        },
                        SwitchThumb {}
                    }
                }
            }
        }
        FieldKind::Select { source } => {
            let items = options.get(source).cloned().unwrap_or_default();
            let current = string_value(&values.read(), &name);
            let mut values = values;
            let name_for_change = name.clone();
            rsx! {
                FormSelect {
                    label: label.clone(),
                    value: current,
                    onchange: move |evt: Event<FormData>| {
                        values.write().insert(name_for_change.clone(), Value::String(evt.value().to_string()));
                    },
                    option { value: "", {tr(lang, "form.pick_option")} }
                    for item in items {
                        option { value: "{item.value_key()}", "{item.label}" }
                    }
                }
            }
        }
        FieldKind::ClassPicker { source, multiple } => {
            let items = options.get(source).cloned().unwrap_or_default();
            let pairs: Vec<(String, String)> = items
                .iter()
                .map(|item| (item.value_key(), item.label.clone()))
                .collect();
            let selected = selected_values(&values.read(), &name);
            let multiple = *multiple;
            let mut values = values;
            let name_for_change = name.clone();
            rsx! {
                MultiSelect {
                    label: label.clone(),
                    options: pairs,
                    selected,
                    multiple,
                    search_placeholder: tr(lang, "picker.search"),
                    empty_text: tr(lang, "picker.empty"),
                    on_change: move |picked: Vec<String>| {
                        let value = if multiple {
                            Value::Array(picked.into_iter().map(Value::String).collect())
                        } else {
                            picked
                                .into_iter()
                                .next()
                                .map(Value::String)
                                .unwrap_or(Value::Null)
                        };
                        values.write().insert(name_for_change.clone(), value);
                    },
                }
            }
        }
        // Text, Number, Email, Password, Tel, Date, File: native input,
        // the fallback for anything the schema could not classify.
        kind => {
            let current = string_value(&values.read(), &name);
            let mut values = values;
            let name_for_change = name.clone();
            rsx! {
                Input {
                    label: label.clone(),
                    input_type: kind.input_type().to_string(),
                    required: field.required,
                    value: current,
                    placeholder: placeholder.clone(),
                    on_input: move |evt: FormEvent| {
                        values.write().insert(name_for_change.clone(), Value::String(evt.value().to_string()));
                    },
                }
            }
        }
    };

    rsx! {
        {input}
        if let Some(message) = error {
            span { class: "field-error", "{message}" }
        }
    }
}

/// Seed form values: edited rows hydrate from the row, new rows get a
/// type-appropriate empty value per field.
pub(crate) fn initial_values(fields: &[FieldSpec], initial: Option<&Row>) -> Map<String, Value> {
    let mut values = Map::new();
    for field in fields {
        let seeded = initial.and_then(|row| row.get(&field.name).cloned());
        let value = match (&field.kind, seeded) {
            (_, Some(value)) => value,
            (FieldKind::Switch, None) => Value::Bool(false),
            (FieldKind::ClassPicker { multiple: true, .. }, None) => Value::Array(Vec::new()),
            (_, None) => Value::String(String::new()),
        };
        values.insert(field.name.clone(), value);
    }
    values
}

/// Names of required fields whose current value is empty.
pub(crate) fn missing_required(fields: &[FieldSpec], values: &Map<String, Value>) -> Vec<String> {
    fields
        .iter()
        .filter(|field| field.required && is_empty_value(values.get(&field.name)))
        .map(|field| field.name.clone())
        .collect()
}

fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        _ => false,
    }
}

/// Current value as a string for native inputs and selects.
fn string_value(values: &Map<String, Value>, name: &str) -> String {
    match values.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Current selection for the picker: array for multi, singleton otherwise.
fn selected_values(values: &Map<String, Value>, name: &str) -> Vec<String> {
    match values.get(name) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        Some(Value::Number(n)) => vec![n.to_string()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared_types::FieldSpec;

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("name", "field.name", FieldKind::Text).required(),
            FieldSpec::new("active", "field.active", FieldKind::Switch),
            FieldSpec::new(
                "classe_ids",
                "field.classes",
                FieldKind::ClassPicker {
                    source: "classes".to_string(),
                    multiple: true,
                },
            )
            .required(),
        ]
    }

    #[test]
    fn new_rows_seed_type_appropriate_defaults() {
        let values = initial_values(&fields(), None);
        assert_eq!(values["name"], json!(""));
        assert_eq!(values["active"], json!(false));
        assert_eq!(values["classe_ids"], json!([]));
    }

    #[test]
    fn edited_rows_hydrate_from_the_row() {
        let row: Row =
            serde_json::from_value(json!({"id": 1, "name": "Sara", "active": true, "classe_ids": [3]}))
                .unwrap();
        let values = initial_values(&fields(), Some(&row));
        assert_eq!(values["name"], json!("Sara"));
        assert_eq!(values["active"], json!(true));
        assert_eq!(values["classe_ids"], json!([3]));
    }

    #[test]
    fn missing_required_flags_blank_and_empty_values() {
        let mut values = initial_values(&fields(), None);
        assert_eq!(missing_required(&fields(), &values), vec!["name", "classe_ids"]);

        values.insert("name".to_string(), json!("  "));
        assert!(missing_required(&fields(), &values).contains(&"name".to_string()));

        values.insert("name".to_string(), json!("Omar"));
        values.insert("classe_ids".to_string(), json!(["5"]));
        assert!(missing_required(&fields(), &values).is_empty());
    }

    #[test]
    fn selected_values_accepts_scalar_and_array_forms() {
        let mut values = Map::new();
        values.insert("c".to_string(), json!([1, "2b"]));
        assert_eq!(selected_values(&values, "c"), vec!["1", "2b"]);

        values.insert("c".to_string(), json!("7"));
        assert_eq!(selected_values(&values, "c"), vec!["7"]);

        values.insert("c".to_string(), json!(null));
        assert!(selected_values(&values, "c").is_empty());
    }
}

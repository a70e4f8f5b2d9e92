use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Closed set of form input kinds the schema form knows how to render.
///
/// Variants carry only the configuration they need; kinds that offer
/// choices reference a named side-channel options source (see
/// [`OptionsMap`]), never the row being edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Number,
    Email,
    Password,
    Tel,
    Date,
    File,
    Switch,
    Select { source: String },
    /// The pluggable class picker. `multiple` decides whether the field
    /// submits a single value or an array of values.
    ClassPicker { source: String, multiple: bool },
}

impl FieldKind {
    /// Resolve a wire discriminator into a concrete kind.
    ///
    /// Anything outside the closed set, including choice kinds arriving
    /// without an options source, falls back to `Text` so a stale or
    /// malformed schema still renders an editable form.
    pub fn from_wire(kind: &str, source: Option<&str>, multiple: bool) -> Self {
        match (kind, source) {
            ("text", _) => FieldKind::Text,
            ("number", _) => FieldKind::Number,
            ("email", _) => FieldKind::Email,
            ("password", _) => FieldKind::Password,
            ("tel", _) => FieldKind::Tel,
            ("date", _) => FieldKind::Date,
            ("file", _) => FieldKind::File,
            ("switch", _) => FieldKind::Switch,
            ("select", Some(src)) => FieldKind::Select {
                source: src.to_string(),
            },
            ("custom", Some(src)) => FieldKind::ClassPicker {
                source: src.to_string(),
                multiple,
            },
            _ => FieldKind::Text,
        }
    }

    /// The `<input type>` attribute for kinds that render a native input.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Number => "number",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Tel => "tel",
            FieldKind::Date => "date",
            FieldKind::File => "file",
            _ => "text",
        }
    }
}

/// One entry in a create/edit form. `label` and `placeholder` are i18n
/// keys, resolved by the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl FieldSpec {
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            placeholder: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, key: &str) -> Self {
        self.placeholder = Some(key.to_string());
        self
    }
}

/// Input kinds available in the filter panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterKind {
    Text,
    Date,
    Select { source: String },
}

/// One entry in a table's filter panel. `label`/`placeholder` are i18n keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub key: String,
    pub label: String,
    pub kind: FilterKind,
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl FilterSpec {
    pub fn new(key: &str, label: &str, kind: FilterKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind,
            placeholder: None,
        }
    }

    pub fn placeholder(mut self, key: &str) -> Self {
        self.placeholder = Some(key.to_string());
        self
    }
}

/// One selectable choice from an options source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionItem {
    pub value: Value,
    pub label: String,
}

impl OptionItem {
    /// Stable string form of the value, used for `<option>` values and
    /// selection comparisons.
    pub fn value_key(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Named side-channel datasets for select/picker fields, loaded alongside
/// the schema (e.g. `"classes"` → the list of classes).
pub type OptionsMap = HashMap<String, Vec<OptionItem>>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_kinds_in_the_closed_set() {
        assert_eq!(FieldKind::from_wire("email", None, false), FieldKind::Email);
        assert_eq!(
            FieldKind::from_wire("select", Some("levels"), false),
            FieldKind::Select {
                source: "levels".to_string()
            }
        );
        assert_eq!(
            FieldKind::from_wire("custom", Some("classes"), true),
            FieldKind::ClassPicker {
                source: "classes".to_string(),
                multiple: true
            }
        );
    }

    #[test]
    fn unknown_wire_kind_falls_back_to_text() {
        assert_eq!(
            FieldKind::from_wire("richtext", None, false),
            FieldKind::Text
        );
        assert_eq!(FieldKind::from_wire("", None, false), FieldKind::Text);
    }

    #[test]
    fn choice_kind_without_source_falls_back_to_text() {
        assert_eq!(FieldKind::from_wire("select", None, false), FieldKind::Text);
        assert_eq!(FieldKind::from_wire("custom", None, true), FieldKind::Text);
    }

    #[test]
    fn input_type_mapping() {
        assert_eq!(FieldKind::Tel.input_type(), "tel");
        assert_eq!(FieldKind::Switch.input_type(), "text");
    }

    #[test]
    fn option_item_value_key_stringifies_numbers() {
        let opt = OptionItem {
            value: json!(7),
            label: "Grade 1 - A".to_string(),
        };
        assert_eq!(opt.value_key(), "7");

        let opt: OptionItem =
            serde_json::from_value(json!({"value": "7b", "label": "Grade 1 - B"})).unwrap();
        assert_eq!(opt.value_key(), "7b");
    }
}

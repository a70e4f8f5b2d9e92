use dioxus::prelude::*;
use shared_types::{FieldKind, FieldSpec, FilterKind, FilterSpec};

use crate::data_manager::{ColumnSpec, EntitySchema, GenericDataManager};

#[component]
pub fn TeachersPage() -> Element {
    rsx! {
        GenericDataManager { schema: teachers_schema() }
    }
}

fn teachers_schema() -> EntitySchema {
    EntitySchema::new("teacher", "teachers.title")
        .column(ColumnSpec::new("name", "field.name").sortable())
        .column(ColumnSpec::new("email", "field.email"))
        .column(ColumnSpec::new("phone", "field.phone"))
        .column(ColumnSpec::new("subject", "field.subject"))
        .column(ColumnSpec::new("hire_date", "field.hire_date").sortable())
        .field(FieldSpec::new("name", "field.name", FieldKind::Text).required())
        .field(FieldSpec::new("email", "field.email", FieldKind::Email).required())
        .field(FieldSpec::new("phone", "field.phone", FieldKind::Tel))
        .field(FieldSpec::new("subject", "field.subject", FieldKind::Text))
        .field(FieldSpec::new("salary", "field.salary", FieldKind::Number))
        .field(FieldSpec::new("hire_date", "field.hire_date", FieldKind::Date))
        .field(FieldSpec::new(
            "classe_ids",
            "field.classes",
            FieldKind::ClassPicker {
                source: "classes".to_string(),
                multiple: true,
            },
        ))
        .field(FieldSpec::new("photo", "field.photo", FieldKind::File))
        .filter(FilterSpec::new(
            "classe_id",
            "field.classe",
            FilterKind::Select {
                source: "classes".to_string(),
            },
        ))
}

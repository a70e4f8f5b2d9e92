use dioxus::prelude::*;
use shared_types::{FieldKind, FieldSpec, FilterKind, FilterSpec};

use crate::data_manager::{ColumnSpec, EntitySchema, GenericDataManager};

#[component]
pub fn ClassesPage() -> Element {
    rsx! {
        GenericDataManager { schema: classes_schema() }
    }
}

// The API keeps the original French-derived endpoint name `classe`.
fn classes_schema() -> EntitySchema {
    EntitySchema::new("classe", "classes.title")
        .column(ColumnSpec::new("name", "field.name").sortable())
        .column(ColumnSpec::new("level_name", "field.level"))
        .column(ColumnSpec::new("capacity", "field.capacity").sortable())
        .column(ColumnSpec::new("teacher_name", "nav.teachers"))
        .field(FieldSpec::new("name", "field.name", FieldKind::Text).required())
        .field(FieldSpec::new(
            "level_id",
            "field.level",
            FieldKind::Select {
                source: "levels".to_string(),
            },
        ))
        .field(FieldSpec::new("capacity", "field.capacity", FieldKind::Number))
        .field(FieldSpec::new(
            "teacher_id",
            "nav.teachers",
            FieldKind::Select {
                source: "teachers".to_string(),
            },
        ))
        .filter(FilterSpec::new(
            "level_id",
            "field.level",
            FilterKind::Select {
                source: "levels".to_string(),
            },
        ))
}

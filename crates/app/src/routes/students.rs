use dioxus::prelude::*;
use shared_types::{FieldKind, FieldSpec, FilterKind, FilterSpec, Row};
use shared_ui::components::{Badge, BadgeVariant};

use crate::data_manager::{ColumnSpec, EntitySchema, GenericDataManager};

#[component]
pub fn StudentsPage() -> Element {
    rsx! {
        GenericDataManager { schema: students_schema() }
    }
}

/// Table, form, and filters for the `student` endpoint. The grid itself
/// is entirely generic; everything student-specific lives in this schema.
fn students_schema() -> EntitySchema {
    EntitySchema::new("student", "students.title")
        .search_placeholder("students.search_placeholder")
        .column(ColumnSpec::new("name", "field.name").sortable())
        .column(ColumnSpec::new("classe_name", "field.classe"))
        .column(ColumnSpec::new("guardian_name", "field.guardian"))
        .column(ColumnSpec::new("birth_date", "field.birth_date").sortable())
        .column(ColumnSpec::new("active", "field.status").render(active_badge))
        .field(FieldSpec::new("name", "field.name", FieldKind::Text).required())
        .field(FieldSpec::new("birth_date", "field.birth_date", FieldKind::Date))
        .field(FieldSpec::new(
            "gender",
            "field.gender",
            FieldKind::Select {
                source: "genders".to_string(),
            },
        ))
        .field(FieldSpec::new(
            "guardian_id",
            "field.guardian",
            FieldKind::Select {
                source: "guardians".to_string(),
            },
        ))
        .field(
            FieldSpec::new(
                "classe_ids",
                "field.classes",
                FieldKind::ClassPicker {
                    source: "classes".to_string(),
                    multiple: true,
                },
            )
            .required(),
        )
        .field(FieldSpec::new("photo", "field.photo", FieldKind::File))
        .field(FieldSpec::new("active", "field.active", FieldKind::Switch))
        .filter(FilterSpec::new(
            "classe_id",
            "field.classe",
            FilterKind::Select {
                source: "classes".to_string(),
            },
        ))
        .filter(FilterSpec::new(
            "gender",
            "field.gender",
            FilterKind::Select {
                source: "genders".to_string(),
            },
        ))
}

/// Enrollment state badge shared by the students table.
fn active_badge(row: Row) -> Element {
    let active = row.get_bool("active");
    let variant = if active {
        BadgeVariant::Primary
    } else {
        BadgeVariant::Outline
    };
    let label = if active { "\u{2713}" } else { "\u{2715}" };
    rsx! {
        Badge { variant, "{label}" }
    }
}

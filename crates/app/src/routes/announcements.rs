use dioxus::prelude::*;
use shared_types::{FieldKind, FieldSpec, FilterKind, FilterSpec};

use crate::data_manager::{ColumnSpec, EntitySchema, GenericDataManager};

#[component]
pub fn AnnouncementsPage() -> Element {
    rsx! {
        GenericDataManager { schema: announcements_schema() }
    }
}

fn announcements_schema() -> EntitySchema {
    EntitySchema::new("announcement", "announcements.title")
        .column(ColumnSpec::new("title", "field.title").sortable())
        .column(ColumnSpec::new("audience_name", "field.audience"))
        .column(ColumnSpec::new("date", "field.date").sortable())
        .field(FieldSpec::new("title", "field.title", FieldKind::Text).required())
        .field(FieldSpec::new("body", "field.body", FieldKind::Text).required())
        .field(FieldSpec::new(
            "audience_id",
            "field.audience",
            FieldKind::Select {
                source: "audiences".to_string(),
            },
        ))
        .field(FieldSpec::new("date", "field.date", FieldKind::Date))
        .filter(FilterSpec::new(
            "audience_id",
            "field.audience",
            FilterKind::Select {
                source: "audiences".to_string(),
            },
        ))
}

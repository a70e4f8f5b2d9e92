use dioxus::prelude::*;
use shared_types::{FieldKind, FieldSpec};

use crate::data_manager::{ColumnSpec, EntitySchema, GenericDataManager};

#[component]
pub fn GuardiansPage() -> Element {
    rsx! {
        GenericDataManager { schema: guardians_schema() }
    }
}

fn guardians_schema() -> EntitySchema {
    EntitySchema::new("guardian", "guardians.title")
        .column(ColumnSpec::new("name", "field.name").sortable())
        .column(ColumnSpec::new("phone", "field.phone"))
        .column(ColumnSpec::new("email", "field.email"))
        .column(ColumnSpec::new("students_count", "nav.students"))
        .field(FieldSpec::new("name", "field.name", FieldKind::Text).required())
        .field(FieldSpec::new("phone", "field.phone", FieldKind::Tel).required())
        .field(FieldSpec::new("email", "field.email", FieldKind::Email))
        .field(FieldSpec::new("address", "field.address", FieldKind::Text))
        .field(FieldSpec::new("password", "field.password", FieldKind::Password))
}

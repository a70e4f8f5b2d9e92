use dioxus::prelude::*;
use shared_types::{FieldKind, FieldSpec, FilterKind, FilterSpec, Row};

use crate::data_manager::{ColumnSpec, EntitySchema, GenericDataManager};
use crate::format_helpers::format_money;

#[component]
pub fn EmployeesPage() -> Element {
    rsx! {
        GenericDataManager { schema: employees_schema() }
    }
}

fn employees_schema() -> EntitySchema {
    EntitySchema::new("employee", "employees.title")
        .column(ColumnSpec::new("name", "field.name").sortable())
        .column(ColumnSpec::new("role_name", "field.role"))
        .column(ColumnSpec::new("phone", "field.phone"))
        .column(ColumnSpec::new("salary", "field.salary").sortable().render(salary_cell))
        .column(ColumnSpec::new("hire_date", "field.hire_date").sortable())
        .field(FieldSpec::new("name", "field.name", FieldKind::Text).required())
        .field(FieldSpec::new(
            "role_id",
            "field.role",
            FieldKind::Select {
                source: "roles".to_string(),
            },
        ))
        .field(FieldSpec::new("email", "field.email", FieldKind::Email))
        .field(FieldSpec::new("phone", "field.phone", FieldKind::Tel))
        .field(FieldSpec::new("salary", "field.salary", FieldKind::Number))
        .field(FieldSpec::new("hire_date", "field.hire_date", FieldKind::Date))
        .field(FieldSpec::new("active", "field.active", FieldKind::Switch))
        .filter(FilterSpec::new(
            "role_id",
            "field.role",
            FilterKind::Select {
                source: "roles".to_string(),
            },
        ))
}

fn salary_cell(row: Row) -> Element {
    let amount = format_money(row.get("salary"));
    rsx! {
        span { class: "amount", "{amount}" }
    }
}

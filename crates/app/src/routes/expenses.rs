use dioxus::prelude::*;
use shared_types::{FieldKind, FieldSpec, FilterKind, FilterSpec, Row};

use crate::data_manager::{ColumnSpec, EntitySchema, GenericDataManager};
use crate::format_helpers::format_money;

#[component]
pub fn ExpensesPage() -> Element {
    rsx! {
        GenericDataManager { schema: expenses_schema() }
    }
}

fn expenses_schema() -> EntitySchema {
    EntitySchema::new("expense", "expenses.title")
        .column(ColumnSpec::new("title", "field.title").sortable())
        .column(ColumnSpec::new("category_name", "field.category"))
        .column(ColumnSpec::new("amount", "field.amount").sortable().render(amount_cell))
        .column(ColumnSpec::new("date", "field.date").sortable())
        .field(FieldSpec::new("title", "field.title", FieldKind::Text).required())
        .field(FieldSpec::new(
            "category_id",
            "field.category",
            FieldKind::Select {
                source: "expense_categories".to_string(),
            },
        ))
        .field(FieldSpec::new("amount", "field.amount", FieldKind::Number).required())
        .field(FieldSpec::new("date", "field.date", FieldKind::Date).required())
        .field(FieldSpec::new("notes", "field.notes", FieldKind::Text))
        .filter(FilterSpec::new(
            "category_id",
            "field.category",
            FilterKind::Select {
                source: "expense_categories".to_string(),
            },
        ))
        .filter(FilterSpec::new("date", "field.date", FilterKind::Date))
}

fn amount_cell(row: Row) -> Element {
    let amount = format_money(row.get("amount"));
    rsx! {
        span { class: "amount", "{amount}" }
    }
}

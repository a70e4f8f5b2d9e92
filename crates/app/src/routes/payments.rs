use dioxus::prelude::*;
use shared_types::{FieldKind, FieldSpec, FilterKind, FilterSpec, Row};
use shared_ui::components::{Badge, BadgeVariant};

use crate::data_manager::{ColumnSpec, EntitySchema, GenericDataManager};
use crate::format_helpers::format_money;

#[component]
pub fn PaymentsPage() -> Element {
    rsx! {
        GenericDataManager { schema: payments_schema() }
    }
}

fn payments_schema() -> EntitySchema {
    EntitySchema::new("payment", "payments.title")
        .column(ColumnSpec::new("student_name", "field.student").sortable())
        .column(ColumnSpec::new("amount", "field.amount").sortable().render(amount_cell))
        .column(ColumnSpec::new("method_name", "field.method"))
        .column(ColumnSpec::new("paid_at", "field.paid_at").sortable())
        .column(ColumnSpec::new("status", "field.status").render(status_badge))
        .field(
            FieldSpec::new(
                "student_id",
                "field.student",
                FieldKind::Select {
                    source: "students".to_string(),
                },
            )
            .required(),
        )
        .field(FieldSpec::new("amount", "field.amount", FieldKind::Number).required())
        .field(FieldSpec::new(
            "method_id",
            "field.method",
            FieldKind::Select {
                source: "payment_methods".to_string(),
            },
        ))
        .field(FieldSpec::new("paid_at", "field.paid_at", FieldKind::Date))
        .field(FieldSpec::new("notes", "field.notes", FieldKind::Text))
        .filter(FilterSpec::new(
            "method_id",
            "field.method",
            FilterKind::Select {
                source: "payment_methods".to_string(),
            },
        ))
        .filter(FilterSpec::new("paid_at", "field.paid_at", FilterKind::Date))
}

fn amount_cell(row: Row) -> Element {
    let amount = format_money(row.get("amount"));
    rsx! {
        span { class: "amount", "{amount}" }
    }
}

/// Paid/unpaid/partial badge from the API's status string.
fn status_badge(row: Row) -> Element {
    let status = row.display("status");
    let variant = match status.as_str() {
        "paid" => BadgeVariant::Primary,
        "partial" => BadgeVariant::Secondary,
        "unpaid" | "overdue" => BadgeVariant::Destructive,
        _ => BadgeVariant::Outline,
    };
    rsx! {
        Badge { variant, "{status}" }
    }
}

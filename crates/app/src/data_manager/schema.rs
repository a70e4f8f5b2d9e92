use dioxus::prelude::*;
use shared_types::{FieldKind, FieldSpec, FilterKind, FilterSpec, Row};

/// One table column. `label` is an i18n key; `render` is an optional
/// display callback so entity modules can plug in badges, links, or other
/// fragments without the table knowing anything about the entity.
#[derive(Clone, PartialEq)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub render: Option<Callback<Row, Element>>,
}

impl ColumnSpec {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn render(mut self, render: impl Fn(Row) -> Element + 'static) -> Self {
        self.render = Some(Callback::new(render));
        self
    }
}

/// Everything the generic data manager needs to run one entity:
/// the endpoint, the table columns, the form fields, and the filter panel.
/// No entity-specific code path exists outside these specs.
#[derive(Clone, PartialEq)]
pub struct EntitySchema {
    pub endpoint: &'static str,
    pub title: &'static str,
    pub search_placeholder: &'static str,
    pub columns: Vec<ColumnSpec>,
    pub fields: Vec<FieldSpec>,
    pub filters: Vec<FilterSpec>,
}

impl EntitySchema {
    pub fn new(endpoint: &'static str, title: &'static str) -> Self {
        Self {
            endpoint,
            title,
            search_placeholder: "search.placeholder",
            columns: Vec::new(),
            fields: Vec::new(),
            filters: Vec::new(),
        }
    }

    pub fn search_placeholder(mut self, key: &'static str) -> Self {
        self.search_placeholder = key;
        self
    }

    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn filter(mut self, filter: FilterSpec) -> Self {
        self.filters.push(filter);
        self
    }

    /// Names of every side-channel options source referenced by the
    /// schema's fields and filters, deduplicated in first-use order.
    pub fn option_sources(&self) -> Vec<String> {
        let mut sources: Vec<String> = Vec::new();
        let mut push = |name: &str| {
            if !sources.iter().any(|s| s == name) {
                sources.push(name.to_string());
            }
        };

        for field in &self.fields {
            match &field.kind {
                FieldKind::Select { source } => push(source),
                FieldKind::ClassPicker { source, .. } => push(source),
                _ => {}
            }
        }
        for filter in &self.filters {
            if let FilterKind::Select { source } = &filter.kind {
                push(source);
            }
        }
        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{FieldKind, FieldSpec, FilterKind, FilterSpec};

    #[test]
    fn option_sources_deduplicate_across_fields_and_filters() {
        let schema = EntitySchema::new("student", "students.title")
            .field(FieldSpec::new(
                "classe_id",
                "field.classe",
                FieldKind::Select {
                    source: "classes".to_string(),
                },
            ))
            .field(FieldSpec::new(
                "elective_ids",
                "field.classes",
                FieldKind::ClassPicker {
                    source: "classes".to_string(),
                    multiple: true,
                },
            ))
            .filter(FilterSpec::new(
                "classe_id",
                "field.classe",
                FilterKind::Select {
                    source: "classes".to_string(),
                },
            ))
            .filter(FilterSpec::new(
                "level",
                "field.level",
                FilterKind::Select {
                    source: "levels".to_string(),
                },
            ));

        assert_eq!(schema.option_sources(), vec!["classes", "levels"]);
    }

    #[test]
    fn schema_without_choice_fields_needs_no_sources() {
        let schema = EntitySchema::new("expense", "expenses.title")
            .field(FieldSpec::new("label", "field.title", FieldKind::Text));
        assert!(schema.option_sources().is_empty());
    }
}

pub mod filters;
pub mod form;
pub mod schema;

pub use schema::{ColumnSpec, EntitySchema};

use dioxus::prelude::*;
use serde_json::Value;
use shared_types::{AppError, OptionsMap, QueryState, Row, SortDirection};
use shared_ui::components::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Button, ButtonVariant, Card,
    CardContent, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader,
    DataTableRow, Input, PageActions, PageHeader, PageTitle, Pagination, SearchBar, Sheet,
    SheetClose, SheetContent, SheetHeader, SheetTitle, Skeleton,
};
use shared_ui::{use_toast, ToastOptions};
use std::collections::HashMap;

use crate::i18n::{tr, use_lang};
use filters::FilterPanel;
use form::SchemaForm;

/// Schema-driven list + create/edit + delete manager for one entity.
///
/// Everything entity-specific arrives through the `EntitySchema`; this
/// component owns the query state, goes to the network only through the
/// gateway server functions, and refetches the list after every confirmed
/// mutation. A failed mutation leaves the rendered list untouched.
#[component]
pub fn GenericDataManager(schema: EntitySchema) -> Element {
    let lang = use_lang();
    let toast = use_toast();

    let endpoint = schema.endpoint;

    let mut query = use_signal(QueryState::default);
    let mut search_input = use_signal(String::new);

    // Create/edit sheet
    let mut show_sheet = use_signal(|| false);
    let mut editing: Signal<Option<Row>> = use_signal(|| None);
    let mut saving = use_signal(|| false);
    let mut field_errors: Signal<HashMap<String, String>> = use_signal(HashMap::new);

    // Delete confirmation
    let mut pending_delete: Signal<Vec<String>> = use_signal(Vec::new);
    let mut show_delete_confirm = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    // Bulk selection
    let mut selected_ids: Signal<Vec<String>> = use_signal(Vec::new);

    // Side-channel options for select/picker fields and filters. A source
    // that fails to load resolves to an empty list; the pickers tolerate
    // that without erroring.
    let sources = schema.option_sources();
    let options_resource = use_resource(move || {
        let sources = sources.clone();
        async move {
            let mut map = OptionsMap::new();
            for source in sources {
                let items = server::api::load_options(source.clone())
                    .await
                    .unwrap_or_default();
                map.insert(source, items);
            }
            map
        }
    });
    let options: OptionsMap = options_resource.read().clone().unwrap_or_default();

    // The list itself. Reading the query state here subscribes the
    // resource, so every filter/sort/page change triggers a refetch; a
    // refetch racing another resolves to whichever lands last.
    let mut data = use_resource(move || {
        let list_query = query.read().to_list_query();
        async move { server::api::list_rows(endpoint.to_string(), list_query).await }
    });

    let handle_search = move |_| {
        let term = search_input.read().clone();
        query.write().set_search(term);
        selected_ids.set(Vec::new());
    };

    let handle_clear = move |_| {
        search_input.set(String::new());
        query.write().set_search(String::new());
        selected_ids.set(Vec::new());
    };

    let open_create = move |_| {
        editing.set(None);
        field_errors.set(HashMap::new());
        show_sheet.set(true);
    };

    let handle_save = move |payload: Value| {
        if *saving.read() {
            return;
        }
        saving.set(true);
        let editing_row = editing.read().clone();
        spawn(async move {
            let result = match &editing_row {
                Some(row) => {
                    server::api::update_row(endpoint.to_string(), row.id(), payload).await
                }
                None => server::api::create_row(endpoint.to_string(), payload).await,
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    show_sheet.set(false);
                    editing.set(None);
                    field_errors.set(HashMap::new());
                    data.restart();
                    toast.success(tr(lang, "toast.saved"), ToastOptions::new());
                }
                Err(e) => {
                    let err_str = e.to_string();
                    field_errors.set(AppError::parse_field_errors(&err_str));
                    toast.error(AppError::friendly_message(&err_str), ToastOptions::new());
                }
            }
        });
    };

    let handle_delete = move |_| {
        if *deleting.read() {
            return;
        }
        deleting.set(true);
        let ids = pending_delete.read().clone();
        spawn(async move {
            let result = if ids.len() == 1 {
                server::api::delete_row(endpoint.to_string(), ids[0].clone()).await
            } else {
                server::api::delete_rows(endpoint.to_string(), ids).await
            };
            deleting.set(false);
            show_delete_confirm.set(false);
            match result {
                Ok(()) => {
                    selected_ids.set(Vec::new());
                    pending_delete.set(Vec::new());
                    data.restart();
                    toast.success(tr(lang, "toast.deleted"), ToastOptions::new());
                }
                Err(e) => {
                    toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
                }
            }
        });
    };

    let selected_count = selected_ids.read().len();
    let form_key = editing
        .read()
        .as_ref()
        .map(|row| row.id())
        .unwrap_or_else(|| "new".to_string());
    let sheet_title = format!(
        "{} - {}",
        if editing.read().is_some() {
            tr(lang, "common.edit")
        } else {
            tr(lang, "common.add")
        },
        tr(lang, schema.title)
    );
    let bulk_delete_label = format!(
        "{} ({})",
        tr(lang, "common.delete_selected"),
        selected_count
    );

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { {tr(lang, schema.title)} }
                PageActions {
                    if selected_count > 0 {
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: move |_| {
                                pending_delete.set(selected_ids.read().clone());
                                show_delete_confirm.set(true);
                            },
                            "{bulk_delete_label}"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: open_create,
                        {tr(lang, "common.add")}
                    }
                }
            }

            SearchBar {
                Input {
                    value: search_input.read().clone(),
                    placeholder: tr(lang, schema.search_placeholder),
                    on_input: move |evt: FormEvent| search_input.set(evt.value().to_string()),
                }
                Button { onclick: handle_search, {tr(lang, "common.search")} }
                if !query.read().search.is_empty() {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: handle_clear,
                        {tr(lang, "common.clear")}
                    }
                }
            }

            FilterPanel {
                filters: schema.filters.clone(),
                options: options.clone(),
                query,
            }

            match &*data.read() {
                Some(Ok(resp)) => rsx! {
                    if resp.data.is_empty() {
                        Card {
                            CardContent {
                                p { {tr(lang, "common.empty")} }
                            }
                        }
                    } else {
                        SchemaTable {
                            columns: schema.columns.clone(),
                            rows: resp.data.clone(),
                            query,
                            selected_ids,
                            on_edit: move |row: Row| {
                                field_errors.set(HashMap::new());
                                editing.set(Some(row));
                                show_sheet.set(true);
                            },
                            on_delete: move |id: String| {
                                pending_delete.set(vec![id]);
                                show_delete_confirm.set(true);
                            },
                        }
                        Pagination {
                            current_page: resp.meta.current_page,
                            last_page: resp.meta.last_page,
                            range_label: resp.meta.range_label(),
                            on_page: move |page: i64| {
                                query.write().page = page;
                                selected_ids.set(Vec::new());
                            },
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    Card {
                        CardContent {
                            p { class: "list-error", {AppError::friendly_message(&e.to_string())} }
                        }
                    }
                },
                None => rsx! {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }

            Sheet {
                open: show_sheet(),
                on_close: move |_| show_sheet.set(false),
                SheetContent {
                    SheetHeader {
                        SheetTitle { "{sheet_title}" }
                        SheetClose { on_close: move |_| show_sheet.set(false) }
                    }
                    SchemaForm {
                        key: "{form_key}",
                        fields: schema.fields.clone(),
                        initial: editing.read().clone(),
                        options: options.clone(),
                        field_errors: field_errors.read().clone(),
                        saving: saving(),
                        on_submit: handle_save,
                    }
                }
            }

            AlertDialogRoot {
                open: show_delete_confirm(),
                on_open_change: move |open| show_delete_confirm.set(open),
                AlertDialogContent {
                    AlertDialogTitle { {tr(lang, "confirm.delete_title")} }
                    AlertDialogDescription { {tr(lang, "confirm.delete_body")} }
                    AlertDialogActions {
                        AlertDialogCancel { {tr(lang, "common.cancel")} }
                        AlertDialogAction {
                            on_click: handle_delete,
                            if *deleting.read() {
                                {tr(lang, "common.deleting")}
                            } else {
                                {tr(lang, "common.delete")}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The table half of the manager: column headers with sort toggles,
/// selection checkboxes, and per-row edit/delete actions.
#[component]
fn SchemaTable(
    columns: Vec<ColumnSpec>,
    rows: Vec<Row>,
    query: Signal<QueryState>,
    selected_ids: Signal<Vec<String>>,
    on_edit: EventHandler<Row>,
    on_delete: EventHandler<String>,
) -> Element {
    let lang = use_lang();

    let page_ids: Vec<String> = rows.iter().map(|row| row.id()).collect();
    let all_selected = !page_ids.is_empty()
        && page_ids
            .iter()
            .all(|id| selected_ids.read().contains(id));

    let sort_marker = move |key: &str| -> &'static str {
        let state = query.read();
        if state.sort_key.as_deref() == Some(key) {
            match state.direction {
                SortDirection::Asc => " \u{25B2}",
                SortDirection::Desc => " \u{25BC}",
            }
        } else {
            ""
        }
    };

    let toggle_all = {
        let page_ids = page_ids.clone();
        let mut selected_ids = selected_ids;
        move |_: FormEvent| {
            if all_selected {
                selected_ids.set(Vec::new());
            } else {
                selected_ids.set(page_ids.clone());
            }
        }
    };

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn {
                    input {
                        r#type: "checkbox",
                        checked: all_selected,
                        onchange: toggle_all,
                    }
                }
                for column in columns.iter() {
                    {
                        let marker = sort_marker(column.key);
                        let label = tr(lang, column.label);
                        if column.sortable {
                            let key = column.key;
                            let mut query = query;
                            rsx! {
                                DataTableColumn {
                                    onclick: move |_| query.write().toggle_sort(key),
                                    "{label}{marker}"
                                }
                            }
                        } else {
                            rsx! {
                                DataTableColumn { "{label}" }
                            }
                        }
                    }
                }
                DataTableColumn {}
            }
            DataTableBody {
                for row in rows {
                    {
                        let row_key = row.id();
                        rsx! {
                            SchemaRow {
                                key: "{row_key}",
                                columns: columns.clone(),
                                row,
                                selected_ids,
                                on_edit,
                                on_delete,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SchemaRow(
    columns: Vec<ColumnSpec>,
    row: Row,
    selected_ids: Signal<Vec<String>>,
    on_edit: EventHandler<Row>,
    on_delete: EventHandler<String>,
) -> Element {
    let lang = use_lang();
    let id = row.id();
    let is_selected = selected_ids.read().contains(&id);

    let row_for_click = row.clone();
    let row_for_edit = row.clone();
    let id_for_toggle = id.clone();
    let id_for_delete = id.clone();

    rsx! {
        DataTableRow {
            selected: is_selected,
            onclick: move |_| on_edit.call(row_for_click.clone()),
            DataTableCell {
                input {
                    r#type: "checkbox",
                    checked: is_selected,
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    onchange: move |_| {
                        let mut current = selected_ids.read().clone();
                        if let Some(pos) = current.iter().position(|v| v == &id_for_toggle) {
                            current.remove(pos);
                        } else {
                            current.push(id_for_toggle.clone());
                        }
                        selected_ids.set(current);
                    },
                }
            }
            for column in columns.iter() {
                {
                    let cell = match &column.render {
                        Some(render) => render.call(row.clone()),
                        None => {
                            let text = row.display(column.key);
                            rsx! { "{text}" }
                        }
                    };
                    rsx! {
                        DataTableCell { {cell} }
                    }
                }
            }
            DataTableCell {
                div { class: "row-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_edit.call(row_for_edit.clone());
                        },
                        {tr(lang, "common.edit")}
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_delete.call(id_for_delete.clone());
                        },
                        {tr(lang, "common.delete")}
                    }
                }
            }
        }
    }
}

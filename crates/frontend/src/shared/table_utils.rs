//! Утилиты для таблиц: поиск по строкам и сортировка по клику на заголовок.
//!
//! # Использование
//!
//! ```rust,ignore
//! use crate::shared::table_utils::enhance_data_tables;
//!
//! let count = enhance_data_tables(&document, ".data-table");
//! ```
//!
//! В HTML таблицы:
//! ```html
//! <table class="data-table">
//!     <thead><tr><th>Товар</th><th>Остаток</th></tr></thead>
//!     <tbody>
//!         <tr><td>Mesa</td><td>10</td></tr>
//!     </tbody>
//! </table>
//! ```

use crate::shared::dom_utils::{clear_style, listen, query_all, query_document, set_style};
use crate::shared::list_utils::{row_matches, sorted_order};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, Node};

pub const SEARCH_PLACEHOLDER: &str = "Search...";

/// Подключает поиск и сортировку ко всем таблицам, подходящим под `selector`.
///
/// Возвращает количество обработанных таблиц.
pub fn enhance_data_tables(document: &Document, selector: &str) -> usize {
    let tables = query_document(document, selector);
    for table in &tables {
        attach_search(document, table);
        attach_sort(table);
    }
    tables.len()
}

/// Вставляет поле поиска непосредственно перед таблицей.
pub fn attach_search(document: &Document, table: &Element) {
    let Some(parent) = table.parent_node() else {
        return;
    };
    let Some(input) = document
        .create_element("input")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    input.set_type("text");
    input.set_placeholder(SEARCH_PLACEHOLDER);
    input.set_class_name("form-control mb-3");

    let anchor: &Node = table;
    if parent.insert_before(&input, Some(anchor)).is_err() {
        return;
    }

    let table = table.clone();
    let input_ref = input.clone();
    listen(&input, "input", move |_| {
        filter_table(&table, &input_ref.value());
    });
}

/// Скрывает строки `tbody`, текст которых не содержит `term` (без учёта регистра).
pub fn filter_table(table: &Element, term: &str) {
    for row in query_all(table, "tbody tr") {
        let text = row.text_content().unwrap_or_default();
        if row_matches(&text, term) {
            clear_style(&row, "display");
        } else {
            set_style(&row, "display", "none");
        }
    }
}

/// Делает заголовки кликабельными: клик по `th` с индексом `i` сортирует по колонке `i`.
pub fn attach_sort(table: &Element) {
    for (index, header) in query_all(table, "th").into_iter().enumerate() {
        set_style(&header, "cursor", "pointer");
        let table = table.clone();
        listen(&header, "click", move |_| sort_table(&table, index));
    }
}

/// Сортирует строки `tbody` по возрастанию колонки `column_index`.
///
/// Существующие узлы `tr` переставляются через `append_child`, поэтому
/// обработчики событий на строках сохраняются.
pub fn sort_table(table: &Element, column_index: usize) {
    let Ok(Some(tbody)) = table.query_selector("tbody") else {
        return;
    };
    let rows = query_all(&tbody, ":scope > tr");
    if rows.len() < 2 {
        return;
    }

    let column: Vec<String> = rows.iter().map(|row| cell_text(row, column_index)).collect();

    for index in sorted_order(&column) {
        let _ = tbody.append_child(&rows[index]);
    }
}

fn cell_text(row: &Element, column_index: usize) -> String {
    let cells = row.children();
    u32::try_from(column_index)
        .ok()
        .and_then(|i| cells.item(i))
        .and_then(|cell| cell.text_content())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

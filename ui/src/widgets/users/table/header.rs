//! Header row for the employees table.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use employees_business::{SortDirection, SortKey, SortState};

/// Header labels and the sort key each one toggles, if any.
const HEADERS: [(&str, Option<SortKey>); 6] = [
    ("ID", Some(SortKey::Id)),
    ("Image", None),
    ("Name", Some(SortKey::Name)),
    ("Demography", None),
    ("Designation", None),
    ("Location", None),
];

/// Renders the header; returns the sort key whose header was clicked.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, sort: &SortState) -> Option<SortKey> {
    let mut clicked = None;
    for (label, key) in HEADERS {
        header.col(|ui| match key {
            Some(key) => {
                if render_sortable_header_cell(ui, label, sort.direction_of(key)) {
                    clicked = Some(key);
                }
            }
            None => render_header_cell(ui, label),
        });
    }
    clicked
}

/// Header label for the sortable columns, with an arrow on the active one.
pub fn header_text(label: &str, direction: Option<SortDirection>) -> String {
    match direction {
        Some(SortDirection::Ascending) => format!("{label} ⬆"),
        Some(SortDirection::Descending) => format!("{label} ⬇"),
        None => label.to_owned(),
    }
}

#[inline]
fn render_sortable_header_cell(ui: &mut Ui, label: &str, direction: Option<SortDirection>) -> bool {
    let text = RichText::new(header_text(label, direction)).strong();
    ui.add(Button::new(text).frame(false))
        .on_hover_text(format!("Sort by {}", label.to_lowercase()))
        .clicked()
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}

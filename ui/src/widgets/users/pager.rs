//! Page-number buttons under the table.

use egui::{Button, Ui};
use employees_business::UsersPage;

/// One button per page, the current one highlighted. Returns the clicked page.
pub fn render_pager(ui: &mut Ui, page: &UsersPage) -> Option<usize> {
    let mut clicked = None;

    ui.horizontal_wrapped(|ui| {
        for number in page.page_numbers() {
            let button = Button::new(number.to_string()).selected(number == page.current_page);
            if ui.add(button).clicked() {
                clicked = Some(number);
            }
        }
    });

    clicked
}

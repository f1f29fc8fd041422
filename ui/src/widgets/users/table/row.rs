//! Row rendering for the employees table.

use egui_extras::TableRow;
use employees_business::UserRecord;

use super::cells::{render_avatar_cell, render_id_cell, render_text_cell};

#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &UserRecord) {
    row.col(|ui| render_id_cell(ui, user.id));
    row.col(|ui| render_avatar_cell(ui, &user.image, &user.first_name));
    row.col(|ui| render_text_cell(ui, &user.display_name()));
    row.col(|ui| render_text_cell(ui, &user.demography()));
    row.col(|ui| render_text_cell(ui, user.designation()));
    row.col(|ui| render_text_cell(ui, &user.location()));
}

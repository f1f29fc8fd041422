//! Cell rendering functions for the employees table.

use egui::{Image, RichText, Ui, vec2};

use super::columns::AVATAR_SIZE;

#[inline]
pub fn render_id_cell(ui: &mut Ui, id: u64) {
    ui.label(RichText::new(id.to_string()).monospace());
}

/// Avatar loaded from the record's image URL; a dash when there is none.
#[inline]
pub fn render_avatar_cell(ui: &mut Ui, url: &str, alt: &str) {
    if url.is_empty() {
        ui.weak("-");
        return;
    }

    ui.add(Image::new(url).fit_to_exact_size(vec2(AVATAR_SIZE, AVATAR_SIZE)))
        .on_hover_text(alt);
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

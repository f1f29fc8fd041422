//! Country and gender dropdowns above the table.

use egui::{ComboBox, Ui};
use employees_business::{COUNTRY_OPTIONS, FilterState, Gender};
use ustr::Ustr;

/// Filter edits made this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterEdits {
    pub gender: Option<Option<Gender>>,
    pub country: Option<Option<Ustr>>,
}

pub fn render_filters(ui: &mut Ui, filters: &FilterState) -> FilterEdits {
    let mut edits = FilterEdits::default();

    ui.horizontal(|ui| {
        let mut country = filters.country;
        ComboBox::from_id_salt("employees_country_filter")
            .selected_text(country.map_or("Country", |c| c.as_str()))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut country, None, "Country");
                for option in COUNTRY_OPTIONS {
                    ui.selectable_value(&mut country, Some(Ustr::from(option)), option);
                }
            });
        if country != filters.country {
            edits.country = Some(country);
        }

        let mut gender = filters.gender;
        ComboBox::from_id_salt("employees_gender_filter")
            .selected_text(gender.map_or("Gender", gender_label))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut gender, None, "Gender");
                for option in Gender::ALL {
                    ui.selectable_value(&mut gender, Some(option), gender_label(option));
                }
            });
        if gender != filters.gender {
            edits.gender = Some(gender);
        }
    });

    edits
}

fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Male",
        Gender::Female => "Female",
    }
}

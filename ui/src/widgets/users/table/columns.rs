//! Column definitions for the employees table.

use egui_extras::Column;

pub const ID_WIDTH: f32 = 50.0;
pub const IMAGE_WIDTH: f32 = 64.0;
pub const DEMOGRAPHY_WIDTH: f32 = 100.0;
pub const AVATAR_SIZE: f32 = 40.0;
pub const ROW_HEIGHT: f32 = 48.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Columns in order: ID, Image, Name, Demography, Designation, Location.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(ID_WIDTH),
        Column::exact(IMAGE_WIDTH),
        Column::auto().at_least(160.0),
        Column::exact(DEMOGRAPHY_WIDTH),
        Column::auto().at_least(140.0),
        Column::remainder().at_least(140.0),
    ]
}

mod users;

pub use users::{UserTableAction, employees_screen, users_panel};

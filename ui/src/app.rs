use crate::{state::State, widgets};

pub struct EmployeesApp {
    state: State,
}

impl EmployeesApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for EmployeesApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::employees_screen(&mut self.state.ctx, ui);
        });
    }
}

//! Employees screen: filters, status line, table and pager.
//!
//! Widgets only record what the user did. Actions are applied to
//! `UserTableState` after rendering, and `run_users_effect` turns the resulting
//! query change into a fetch at the end of the frame.

use std::time::Duration;

use chrono::Local;
use egui::{Color32, Response, RichText, ScrollArea, Ui};
use egui_extras::TableBuilder;
use employees_business::{
    FetchUsersCommand, Gender, SortKey, UserTableState, UsersPageCompute, retry_users_fetch,
    run_users_effect,
};
use employees_states::StateCtx;
use log::{error, info};
use ustr::Ustr;

use super::filters::render_filters;
use super::pager::render_pager;
use super::table::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use super::table::header::render_table_header;
use super::table::row::render_user_row;

/// What the user asked for during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTableAction {
    SortBy(SortKey),
    Gender(Option<Gender>),
    Country(Option<Ustr>),
    Page(usize),
    Retry,
}

/// Whole employees screen for one frame.
///
/// Commits finished fetches, draws the panel, then lets the fetch effect react
/// to whatever changed.
pub fn employees_screen(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    state_ctx.sync();

    let response = users_panel(state_ctx, ui);

    if let Err(err) = run_users_effect(state_ctx) {
        error!("Failed to run users effect: {err}");
    }

    let loading = state_ctx
        .state::<UsersPageCompute>()
        .is_some_and(UsersPageCompute::is_loading);
    if loading || state_ctx.is_running::<FetchUsersCommand>() {
        ui.ctx().request_repaint_after(Duration::from_millis(50));
    }

    response
}

/// Draws the panel and applies the actions taken in it.
pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let mut actions: Vec<UserTableAction> = Vec::new();

    let response = ui.vertical(|ui| {
        ui.heading("Employees");
        ui.add_space(4.0);

        let Some(table) = state_ctx.state::<UserTableState>() else {
            ui.colored_label(Color32::RED, "Employees table state is missing");
            return;
        };
        let Some(compute) = state_ctx.state::<UsersPageCompute>() else {
            ui.colored_label(Color32::RED, "Employees page state is missing");
            return;
        };

        let edits = render_filters(ui, table.filters());
        if let Some(country) = edits.country {
            actions.push(UserTableAction::Country(country));
        }
        if let Some(gender) = edits.gender {
            actions.push(UserTableAction::Gender(gender));
        }

        ui.add_space(4.0);
        render_status(ui, compute, &mut actions);
        ui.add_space(8.0);

        let page = compute.page();
        if page.is_empty() && !compute.is_loading() && compute.query.is_some() {
            ui.label("No employees match the selected filters.");
        }

        let sort = *table.sort();
        ScrollArea::horizontal().show(ui, |ui| {
            let builder = TableBuilder::new(ui)
                .id_salt("employees_table")
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
            table_columns()
                .into_iter()
                .fold(builder, TableBuilder::column)
                .header(HEADER_HEIGHT, |mut header| {
                    if let Some(key) = render_table_header(&mut header, &sort) {
                        actions.push(UserTableAction::SortBy(key));
                    }
                })
                .body(|mut body| {
                    for user in &page.users {
                        body.row(ROW_HEIGHT, |mut row| render_user_row(&mut row, user));
                    }
                });
        });

        ui.add_space(8.0);
        if let Some(number) = render_pager(ui, page) {
            actions.push(UserTableAction::Page(number));
        }
    });

    for action in actions {
        apply_action(state_ctx, action);
    }

    response.response
}

fn render_status(ui: &mut Ui, compute: &UsersPageCompute, actions: &mut Vec<UserTableAction>) {
    ui.horizontal(|ui| {
        if compute.is_loading() {
            ui.spinner();
            ui.label("Loading...");
        } else if let Some(message) = compute.error_message() {
            ui.colored_label(Color32::RED, format!("Error: {message}"));
            if ui.button("Retry").clicked() {
                actions.push(UserTableAction::Retry);
            }
        } else if let Some(fetched_at) = compute.fetched_at {
            let page = compute.page();
            ui.label(
                RichText::new(format!(
                    "{} employees · Updated {}",
                    page.filtered_count,
                    fetched_at.with_timezone(&Local).format("%H:%M:%S")
                ))
                .weak(),
            );
        }
    });
}

fn apply_action(state_ctx: &mut StateCtx, action: UserTableAction) {
    info!("Employees table action: {action:?}");

    let result = match action {
        UserTableAction::SortBy(key) => {
            state_ctx.update::<UserTableState>(|table| table.click_header(key))
        }
        UserTableAction::Gender(gender) => {
            state_ctx.update::<UserTableState>(|table| table.set_gender(gender))
        }
        UserTableAction::Country(country) => state_ctx
            .update::<UserTableState>(|table| table.set_country(country.as_ref().map(Ustr::as_str))),
        UserTableAction::Page(page) => {
            state_ctx.update::<UserTableState>(|table| table.select_page(page))
        }
        UserTableAction::Retry => retry_users_fetch(state_ctx).map(|_| ()),
    };

    if let Err(err) = result {
        error!("Failed to apply {action:?}: {err}");
    }
}

//! Country and gender dropdowns driven through the screen.

mod common;

use egui::accesskit::Role;
use egui_kittest::Harness;
use employees_business::UserTableState;
use employees_ui::state::State;
use kittest::Queryable;

use crate::common::{TestCtx, full_name};

const COUNTRY_FILTER: usize = 0;
const GENDER_FILTER: usize = 1;

/// Opens the filter combo box at `index` (country first, then gender).
fn open_filter(harness: &mut Harness<'_, State>, index: usize) {
    harness
        .query_all_by_role(Role::ComboBox)
        .nth(index)
        .expect("filter combo box")
        .click();
    harness.step();
    harness.step();
}

fn current_page(harness: &Harness<'_, State>) -> Option<usize> {
    harness
        .state()
        .ctx
        .state::<UserTableState>()
        .map(UserTableState::current_page)
}

/// Loads the screen and moves to page 2.
async fn on_second_page() -> TestCtx<'static> {
    let mut ctx = TestCtx::new().await;
    ctx.settle().await;

    ctx.harness()
        .get_by_role_and_label(Role::Button, "2")
        .click();
    ctx.settle().await;
    assert_eq!(current_page(ctx.harness()), Some(2));

    ctx
}

#[tokio::test]
async fn country_dropdown_offers_usa_and_canada() {
    let mut ctx = TestCtx::new().await;
    ctx.settle().await;

    open_filter(ctx.harness_mut(), COUNTRY_FILTER);

    let harness = ctx.harness();
    assert!(harness.query_by_label("USA").is_some(), "USA option");
    assert!(harness.query_by_label("Canada").is_some(), "Canada option");
    assert!(
        harness.query_all_by_label("Country").count() >= 1,
        "empty option"
    );
}

#[tokio::test]
async fn picking_a_country_filters_rows_and_returns_to_first_page() {
    let mut ctx = on_second_page().await;

    open_filter(ctx.harness_mut(), COUNTRY_FILTER);
    ctx.harness().get_by_label("USA").click();
    ctx.settle().await;

    let harness = ctx.harness();
    assert_eq!(current_page(harness), Some(1));
    // Every third fixture user is in the USA: 3, 6, .., 24.
    for id in (3..=24).step_by(3) {
        assert!(harness.query_by_label(&full_name(id)).is_some(), "row {id}");
    }
    assert!(harness.query_by_label(&full_name(1)).is_none(), "row 1 has no country");
    assert!(harness.query_by_label(&full_name(11)).is_none(), "row 11 has no country");
    assert!(
        harness.query_by_role_and_label(Role::Button, "2").is_none(),
        "8 matches fit on one page"
    );
}

#[tokio::test]
async fn gender_dropdown_offers_male_and_female() {
    let mut ctx = TestCtx::new().await;
    ctx.settle().await;

    open_filter(ctx.harness_mut(), GENDER_FILTER);

    let harness = ctx.harness();
    assert!(harness.query_by_label("Male").is_some(), "Male option");
    assert!(harness.query_by_label("Female").is_some(), "Female option");
    assert!(
        harness.query_all_by_label("Gender").count() >= 1,
        "empty option"
    );
}

#[tokio::test]
async fn picking_a_gender_filters_rows_and_returns_to_first_page() {
    let mut ctx = on_second_page().await;

    open_filter(ctx.harness_mut(), GENDER_FILTER);
    ctx.harness().get_by_label("Female").click();
    ctx.settle().await;

    let harness = ctx.harness();
    assert_eq!(current_page(harness), Some(1));
    assert!(harness.query_by_label_contains("M/").is_none(), "male row shown");
    for id in (2..=20).step_by(2) {
        assert!(harness.query_by_label(&full_name(id)).is_some(), "row {id}");
    }
    assert!(
        harness.query_by_role_and_label(Role::Button, "2").is_some(),
        "12 matches span two pages"
    );
}

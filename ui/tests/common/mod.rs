#![allow(dead_code)]

use egui_kittest::Harness;
use employees_ui::state::State;
use employees_ui::widgets::employees_screen;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Users served by [`TestCtx::new`].
pub const USER_COUNT: u64 = 25;

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// Screen backed by a server that returns [`users_json`].
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_json()))
            .mount(&mock_server)
            .await;
        Self::with_server(mock_server)
    }

    /// Screen backed by a server that answers every request with `status_code`.
    pub async fn with_status(status_code: u16) -> Self {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(status_code))
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_json()))
            .with_priority(2)
            .mount(&mock_server)
            .await;
        Self::with_server(mock_server)
    }

    fn with_server(mock_server: MockServer) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let state = State::test(mock_server.uri());
        // Tall enough for a full page of rows without scrolling.
        let harness = Harness::builder()
            .with_size(egui::vec2(1200.0, 1000.0))
            .build_ui_state(
                |ui, state: &mut State| {
                    employees_screen(&mut state.ctx, ui);
                },
                state,
            );

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, State> {
        &self.harness
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Runs a frame, waits for the fetches it started, then renders their result.
    pub async fn settle(&mut self) {
        self.harness.step();
        self.harness.state_mut().ctx.await_tasks().await;
        self.harness.step();
    }
}

/// `USER_COUNT` users; odd ids male, even ids female. Every third user has a
/// top-level `"USA"` country.
pub fn users_json() -> Value {
    let users: Vec<Value> = (1..=USER_COUNT)
        .map(|id| {
            let mut user = json!({
                "id": id,
                "firstName": format!("First{id:03}"),
                "lastName": format!("Last{id:03}"),
                "maidenName": "",
                "age": 30,
                "gender": if id % 2 == 0 { "female" } else { "male" },
                "image": "",
                "company": { "title": "Engineer" },
                "address": { "state": "Ohio", "country": "United States" }
            });
            if id % 3 == 0 {
                user["country"] = json!("USA");
            }
            user
        })
        .collect();
    json!({ "users": users, "total": USER_COUNT, "skip": 0, "limit": 100 })
}

pub fn full_name(id: u64) -> String {
    format!("First{id:03} Last{id:03}")
}

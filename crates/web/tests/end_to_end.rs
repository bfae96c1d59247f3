//! Drives the view-models against a real server on an ephemeral port,
//! backed by the in-memory store.

use std::sync::{Arc, Mutex};

use courtside_api::config::ServerConfig;
use courtside_api::router::build_app_router;
use courtside_api::state::AppState;
use courtside_core::query::EventFilter;
use courtside_core::schedule::EventType;
use courtside_db::InMemoryScheduleStore;
use courtside_web::admin::{AdminPhase, AdminView, ADDED_MESSAGE, UPDATED_MESSAGE};
use courtside_web::cache::MemoryListCache;
use courtside_web::client::{ClientError, HttpScheduleApi, ScheduleApi};
use courtside_web::navigation::filter_for_href;
use courtside_web::prompt::Prompter;
use courtside_web::public::PublicScheduleView;
use courtside_web::session::{MemorySessionStore, SessionStore};

const PASSWORD: &str = "block-and-dig";

async fn spawn_server() -> String {
    let config = ServerConfig::from_lookup(|key| match key {
        "HOST" => Some("127.0.0.1".into()),
        "ADMIN_PASSWORD" => Some(PASSWORD.into()),
        _ => None,
    });
    let state = AppState {
        store: Arc::new(InMemoryScheduleStore::new()),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[derive(Default)]
struct RecordingPrompter {
    alerts: Mutex<Vec<String>>,
}

impl RecordingPrompter {
    fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Prompter for RecordingPrompter {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

type View = AdminView<HttpScheduleApi, MemorySessionStore, MemoryListCache, RecordingPrompter>;

fn admin_view(base_url: &str, session: &MemorySessionStore) -> View {
    AdminView::new(
        HttpScheduleApi::new(base_url),
        session.clone(),
        MemoryListCache::new(),
        RecordingPrompter::default(),
    )
}

#[tokio::test]
async fn admin_edits_show_up_on_the_public_schedule() {
    let base_url = spawn_server().await;
    let session = MemorySessionStore::new();
    let mut admin = admin_view(&base_url, &session);

    admin.login(PASSWORD).await;
    assert_eq!(admin.phase(), AdminPhase::Idle);

    admin.form.title = "Summer Open Gym".into();
    admin.form.event_type = "open_gym".into();
    admin.form.day_of_week = "Tuesday".into();
    admin.form.is_recurring = true;
    admin.submit().await;

    admin.form.title = "Beach Classic".into();
    admin.form.event_type = "tournament".into();
    admin.form.date = "2024-06-01".into();
    admin.form.start_time = "19:00".into();
    admin.submit().await;

    assert_eq!(admin.prompter().alerts(), [ADDED_MESSAGE, ADDED_MESSAGE]);
    let titles: Vec<_> = admin.events().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Beach Classic", "Summer Open Gym"]);

    let gym = &admin.events()[1];
    assert_eq!(gym.date, None);
    assert_eq!(gym.start_time, None);
    assert_eq!(gym.description, None);

    let mut public = PublicScheduleView::with_filter(filter_for_href("/schedule?event_type=tournament"));
    public.load(&HttpScheduleApi::new(&base_url)).await;

    let cards = public.cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "Beach Classic");
    assert_eq!(cards[0].date.as_deref(), Some("Saturday, June 1, 2024"));
    assert_eq!(cards[0].time.as_deref(), Some("7:00 PM"));

    public.set_filter(EventFilter::All);
    let titles: Vec<_> = public.visible().into_iter().map(|e| e.title).collect();
    assert_eq!(titles, ["Beach Classic", "Summer Open Gym"]);
}

#[tokio::test]
async fn session_survives_a_reload() {
    let base_url = spawn_server().await;
    let session = MemorySessionStore::new();

    let mut first = admin_view(&base_url, &session);
    first.login(PASSWORD).await;
    first.form.title = "League Night".into();
    first.submit().await;

    let mut reloaded = admin_view(&base_url, &session);
    reloaded.open().await;

    assert_eq!(reloaded.phase(), AdminPhase::Idle);
    assert_eq!(reloaded.events().len(), 1);
    assert!(reloaded.prompter().alerts().is_empty());
}

#[tokio::test]
async fn update_then_delete_round_trip() {
    let base_url = spawn_server().await;
    let session = MemorySessionStore::new();
    let mut admin = admin_view(&base_url, &session);
    admin.login(PASSWORD).await;

    admin.form.title = "Tuesday Open Gym".into();
    admin.submit().await;
    let id = admin.events()[0].id;

    assert!(admin.edit(id));
    admin.form.title = "Thursday Open Gym".into();
    admin.form.event_type = "open_gym".into();
    admin.submit().await;

    assert_eq!(admin.prompter().alerts().last().map(String::as_str), Some(UPDATED_MESSAGE));
    assert_eq!(admin.events()[0].title, "Thursday Open Gym");
    assert_eq!(admin.events()[0].event_type, Some(EventType::OpenGym));

    admin.delete(id).await;
    assert!(admin.events().is_empty());
}

#[tokio::test]
async fn server_validation_error_is_alerted() {
    let base_url = spawn_server().await;
    let session = MemorySessionStore::new();
    let mut admin = admin_view(&base_url, &session);
    admin.login(PASSWORD).await;

    admin.form.start_time = "2024-06-01T09:00".into();
    admin.form.title = "Legacy".into();
    admin.submit().await;

    let last = admin.prompter().alerts().pop().unwrap();
    assert!(last.starts_with("Error: Invalid start_time"), "{last}");
    assert_eq!(admin.form.title, "Legacy");
}

#[tokio::test]
async fn forged_session_is_cleared_on_open() {
    let base_url = spawn_server().await;
    let session = MemorySessionStore::new();
    session.set_token("forged".into());

    let mut admin = admin_view(&base_url, &session);
    admin.open().await;

    assert_eq!(admin.phase(), AdminPhase::Unauthenticated);
    assert_eq!(session.token(), None);
}

#[tokio::test]
async fn wrong_password_is_reported() {
    let base_url = spawn_server().await;
    let api = HttpScheduleApi::new(&base_url);

    let err = api.authenticate("spike").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(matches!(err, ClientError::Api { ref message, .. } if message == "Invalid password"));
}

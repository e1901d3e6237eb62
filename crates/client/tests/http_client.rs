//! Drives `HttpNotesApi` and `NoteBoard` against the real API router served
//! on an ephemeral port.

use assert_matches::assert_matches;
use notes_api::config::ServerConfig;
use notes_api::router::build_app_router;
use notes_api::state::AppState;
use notes_client::form::NoteForm;
use notes_client::model::{NewNote, NoteChanges};
use notes_client::view::Tab;
use notes_client::{ClientConfig, ClientError, HttpNotesApi, NoteBoard, NotesApi, Notice};
use notes_core::category::Category;
use reqwest::StatusCode;
use sqlx::PgPool;

/// Serve the API on `127.0.0.1:0` and return a client pointed at it.
async fn spawn_api(pool: PgPool) -> HttpNotesApi {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
    };
    let app = build_app_router(AppState { pool }, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    HttpNotesApi::new(&ClientConfig::with_base_url(format!("http://{addr}"))).unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_list_through_http(pool: PgPool) {
    let api = spawn_api(pool).await;

    let note = api
        .create(&NewNote {
            title: "A".into(),
            content: "B".into(),
            category: Category::Others,
        })
        .await
        .unwrap();
    assert!(!note.archived);
    assert_eq!(note.category, Category::Others);

    let active = api.list_active().await.unwrap();
    assert_eq!(active, vec![note.clone()]);
    assert!(api.list_archived().await.unwrap().is_empty());
    assert_eq!(api.list_by_category(Category::Others).await.unwrap(), vec![note]);
    assert!(api.list_by_category(Category::Work).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn toggle_of_unknown_note_is_none(pool: PgPool) {
    let api = spawn_api(pool).await;
    assert_eq!(api.toggle_archive(123_456).await.unwrap(), None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_of_unknown_note_is_api_error(pool: PgPool) {
    let api = spawn_api(pool).await;
    let changes = NoteChanges {
        title: Some("x".into()),
        ..Default::default()
    };

    let result = api.update(123_456, &changes).await;

    assert_matches!(
        result,
        Err(ClientError::Api { status, message })
            if status == StatusCode::NOT_FOUND && message == "Note with id 123456 not found"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_of_unknown_note_succeeds(pool: PgPool) {
    let api = spawn_api(pool).await;
    api.delete(123_456).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn board_groceries_lifecycle(pool: PgPool) {
    let mut board = NoteBoard::new(spawn_api(pool).await);
    board.reload().await.unwrap();

    board.open_create();
    let notice = board
        .submit(&NoteForm::new("Groceries", "Milk, eggs", Category::Personal))
        .await;
    assert_eq!(notice, Notice::Created);

    board.select_category(Some(Category::Personal));
    let visible = board.visible_notes();
    assert_eq!(visible.len(), 1);
    assert!(!visible[0].archived);
    let id = visible[0].id;

    assert_eq!(board.toggle_archive(id).await, Notice::Archived);
    assert!(board.visible_notes().is_empty());
    board.select_tab(Tab::Archived);
    assert_eq!(board.visible_notes()[0].id, id);

    assert_eq!(board.delete(id, |_| true).await, Notice::Deleted);
    assert!(board.active().is_empty());
    assert!(board.archived().is_empty());
}

pub mod model;

use crate::AppState;
use crate::domain::{Entry, NewEntry};
use axum::{
    Json, Router,
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
};
use model::{AddEntryForm, AddEntryRequest, JsonEntry};
use serde_json::{Value, json};

// page shell is embedded at compile time; only the table rows are built per
// request
const INDEX_TEMPLATE: &str = include_str!("index.html");

// browser-facing routes: the page itself plus the form actions it links to
pub fn waitlist_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/add", post(add_entry_handler))
        .route("/remove/{id}", get(remove_entry_handler))
}

// json routes, nested under /api by main
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/list", get(list_entries_handler))
        .route("/add", post(api_add_entry_handler))
}

async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let entries = state
        .service
        .list()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Html(render_index(&entries)))
}

async fn add_entry_handler(
    State(state): State<AppState>,
    Form(form): Form<AddEntryForm>,
) -> Result<Redirect, StatusCode> {
    // a blank name on the form path is dropped without an error; the
    // receptionist just lands back on the list
    if let Some(new_entry) = NewEntry::parse(form.name, form.phone) {
        state
            .service
            .add(new_entry)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    }

    Ok(Redirect::to("/"))
}

async fn remove_entry_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, StatusCode> {
    match state.service.remove(id).await {
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),

        // removing an id nobody holds is a user-visible 404
        Ok(false) => Err(StatusCode::NOT_FOUND),

        Ok(true) => Ok(Redirect::to("/")),
    }
}

async fn list_entries_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonEntry>>, StatusCode> {
    let entries = state
        .service
        .list()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let json_entries: Vec<JsonEntry> = entries.iter().map(JsonEntry::from).collect();

    Ok(Json(json_entries))
}

async fn api_add_entry_handler(
    State(state): State<AppState>,
    Json(body): Json<AddEntryRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    // unlike the form path, the API reports a missing name back to the caller
    let Some(new_entry) = NewEntry::parse(body.name, body.phone) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "name is required" })),
        ));
    };

    state.service.add(new_entry).await.map_err(|_| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "failed to store entry" })),
        )
    })?;

    Ok(Json(json!({ "message": "added successfully" })))
}

fn render_index(entries: &[Entry]) -> String {
    let mut rows = String::new();

    for entry in entries {
        rows.push_str(&format!(
            "                <tr>\n                    <td>{}</td>\n                    <td>{}</td>\n                    <td>{}</td>\n                    <td><a href=\"/remove/{}\" class=\"btn btn-sm btn-danger\">Remove</a></td>\n                </tr>\n",
            escape_html(&entry.name),
            escape_html(entry.phone.as_deref().unwrap_or("-")),
            escape_html(&entry.status),
            entry.id
        ));
    }

    INDEX_TEMPLATE.replace("{{rows}}", &rows)
}

// minimal escaping for the characters that matter inside table cells
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

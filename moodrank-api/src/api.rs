//! Route dispatch and response bodies.
//!
//! `dispatch` is synchronous and pure: (method, path, body bytes) in,
//! (status, JSON string) out. The async shell in main.rs only collects
//! the request body and writes the response, so everything here is
//! testable without a socket.

use hyper::{Method, StatusCode};
use moodrank_core::{AnalyseRequest, LexiconSentiment};
use serde_json::json;

const WELCOME: &str = "Welcome to the Mood Analyser API!";
const NO_TASKS: &str = "No tasks found for the given mood.";

pub fn dispatch(method: &Method, path: &str, body: &[u8]) -> (StatusCode, String) {
    // Trailing slash is optional on the endpoint.
    let route = path.trim_end_matches('/');

    if method == Method::GET && route == "/mood_analyse" {
        (
            StatusCode::OK,
            json!({"status": "success", "message": WELCOME}).to_string(),
        )
    } else if method == Method::POST && route == "/mood_analyse" {
        analyse(body)
    } else {
        (
            StatusCode::NOT_FOUND,
            json!({"status": "error", "message": "not found"}).to_string(),
        )
    }
}

fn analyse(body: &[u8]) -> (StatusCode, String) {
    let request: AnalyseRequest = match serde_json::from_slice(body) {
        Ok(r) => r,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                json!({"status": "error", "errors": {"request": e.to_string()}})
                    .to_string(),
            );
        }
    };

    if let Err(e) = request.validate() {
        return (
            StatusCode::BAD_REQUEST,
            json!({"status": "error", "errors": {(e.field()): e.to_string()}})
                .to_string(),
        );
    }

    let tasks = request.analyse(&LexiconSentiment);
    if tasks.is_empty() {
        (
            StatusCode::OK,
            json!({"status": "error", "message": NO_TASKS, "tasks": []}).to_string(),
        )
    } else {
        (
            StatusCode::OK,
            json!({"status": "success", "tasks": tasks}).to_string(),
        )
    }
}

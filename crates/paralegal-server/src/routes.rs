use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Html, Json,
    },
    Form,
};
use paralegal_core::types::{FieldSet, ModeKind, RenderResult};
use serde_json::{json, Value};
use tokio::sync::broadcast;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tokio_stream::StreamExt;

use crate::{pages, AppState};

// ── Error helper ──────────────────────────────────────────────────────────

pub(crate) fn internal(e: impl std::fmt::Display) -> StatusCode {
    tracing::error!("internal error: {e}");
    StatusCode::INTERNAL_SERVER_ERROR
}

fn resolve(state: &AppState, name: &str) -> Result<ModeKind, StatusCode> {
    state.dispatcher.resolve(name).ok_or_else(|| {
        tracing::debug!(mode = name, "unknown mode requested");
        StatusCode::NOT_FOUND
    })
}

fn page(
    state: &AppState,
    kind: ModeKind,
    fields: &FieldSet,
    result: Option<&RenderResult>,
) -> Html<String> {
    let modes = state.dispatcher.modes();
    let form = state.dispatcher.form(kind);
    Html(pages::mode_page(
        &state.config.app_title,
        &modes,
        &form,
        fields,
        result,
    ))
}

// ── Pages ─────────────────────────────────────────────────────────────────

/// The first mode in selector order is the landing page.
pub(crate) async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    page(&state, ModeKind::ALL[0], &FieldSet::new(), None)
}

pub(crate) async fn mode_page(
    State(state): State<Arc<AppState>>,
    Path(mode): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let kind = resolve(&state, &mode)?;
    Ok(page(&state, kind, &FieldSet::new(), None))
}

pub(crate) async fn submit_form(
    State(state): State<Arc<AppState>>,
    Path(mode): Path<String>,
    Form(body): Form<HashMap<String, String>>,
) -> Result<Html<String>, StatusCode> {
    let kind = resolve(&state, &mode)?;
    let fields = FieldSet::from(body);
    let result = state.dispatcher.submit_today(kind, &fields);
    Ok(page(&state, kind, &fields, Some(&result)))
}

// ── API ───────────────────────────────────────────────────────────────────

pub(crate) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn status(State(state): State<Arc<AppState>>) -> Json<Value> {
    let modes: Vec<&str> = ModeKind::ALL.iter().map(|k| k.name()).collect();
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_s": state.start_time.elapsed().as_secs(),
        "app_title": state.config.app_title,
        "court": state.dispatcher.court(),
        "modes": modes,
    }))
}

pub(crate) async fn list_modes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, StatusCode> {
    let modes = serde_json::to_value(state.dispatcher.modes()).map_err(internal)?;
    Ok(Json(modes))
}

pub(crate) async fn render_json(
    State(state): State<Arc<AppState>>,
    Path(mode): Path<String>,
    Json(fields): Json<FieldSet>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let kind = resolve(&state, &mode)?;
    match state.dispatcher.submit_today(kind, &fields) {
        RenderResult::Rendered(report) => {
            let markdown = report.to_markdown();
            let report = serde_json::to_value(&report).map_err(internal)?;
            Ok((
                StatusCode::OK,
                Json(json!({
                    "status": "rendered",
                    "markdown": markdown,
                    "report": report,
                })),
            ))
        }
        RenderResult::Notice(notice) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "status": "missing_input",
                "fields": notice.fields,
                "message": notice.message,
            })),
        )),
    }
}

// Log stream SSE

pub(crate) async fn sse_logs(
    State(state): State<Arc<AppState>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<String>();
    // Subscribe before snapshotting the ring so no line falls between them
    let mut live_rx = state.log_tx.subscribe();
    let history: Vec<String> = state
        .log_ring
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .iter()
        .cloned()
        .collect();
    tokio::spawn(async move {
        for line in history {
            if tx.send(line).is_err() {
                return;
            }
        }
        loop {
            match live_rx.recv().await {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        return;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(_) => break,
            }
        }
    });
    let stream = UnboundedReceiverStream::new(rx)
        .map(|data| Ok::<_, std::convert::Infallible>(Event::default().data(data)));
    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(std::time::Duration::from_secs(15))
            .text("ping"),
    )
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use paralegal_core::config::Config;
    use tower::ServiceExt;

    use super::*;

    fn test_app() -> axum::Router {
        let (tx, _) = broadcast::channel(16);
        let ring = Arc::new(Mutex::new(VecDeque::new()));
        crate::app(Arc::new(AppState::new(Config::default(), tx, ring)))
    }

    async fn body_string(resp: axum::response::Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn json_post(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let resp = test_app()
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_list_modes_in_selector_order() {
        let resp = test_app()
            .oneshot(Request::get("/api/modes").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let modes: Value = serde_json::from_str(&body_string(resp).await).unwrap();
        let names: Vec<&str> = modes
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["motion_writer", "contract_analyzer", "case_strategy"]);
    }

    #[tokio::test]
    async fn test_index_shows_motion_form_and_disclaimer() {
        let resp = test_app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_string(resp).await;
        assert!(html.contains(r#"action="/modes/motion_writer""#));
        assert!(html.contains("Generate Motion"));
        assert!(html.contains("Always consult with a qualified legal practitioner"));
    }

    #[tokio::test]
    async fn test_unknown_mode_is_404() {
        let resp = test_app()
            .oneshot(Request::get("/modes/divorce").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_mode_page_accepts_alias() {
        let resp = test_app()
            .oneshot(Request::get("/modes/contract").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_string(resp).await.contains("Analyze Contract"));
    }

    #[tokio::test]
    async fn test_render_contract() {
        let resp = test_app()
            .oneshot(json_post(
                "/api/render/contract_analyzer",
                json!({ "contract_text": "The tenant shall pay rent." }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(body["status"], "rendered");
        assert!(body["markdown"]
            .as_str()
            .unwrap()
            .contains("Analysis Complete!"));
        assert_eq!(body["report"]["mode"], "contract_analyzer");
    }

    #[tokio::test]
    async fn test_render_motion_missing_input_is_422() {
        let resp = test_app()
            .oneshot(json_post(
                "/api/render/motion_writer",
                json!({ "party_names": "Moyo vs Chuma" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(body["status"], "missing_input");
        assert_eq!(body["fields"], json!(["relief_sought"]));
        assert_eq!(
            body["message"],
            "Please provide the party names and the relief sought."
        );
    }

    #[tokio::test]
    async fn test_submit_form_keeps_values_and_shows_result() {
        let req = Request::post("/modes/case_strategy")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(
                "presiding_judge=Justice+Malaba&case_strengths=Signed+lease.+Witness",
            ))
            .unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_string(resp).await;
        assert!(html.contains("Strategy Generated!"));
        assert!(html.contains("Lead with your strongest point: Signed lease"));
        assert!(html.contains(r#"<option value="Justice Malaba" selected>"#));
    }

    #[tokio::test]
    async fn test_submit_form_without_contract_shows_warning() {
        let req = Request::post("/modes/contract_analyzer")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("contract_text="))
            .unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_string(resp).await;
        assert!(html.contains(r#"<div class="alert warning">Please paste contract text to analyze.</div>"#));
        assert!(!html.contains("Analysis Complete!"));
    }
}

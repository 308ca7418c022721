use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};
use crate::config::constants::{API_NAME, API_VERSION, DEFAULT_LIST_LIMIT};
use crate::errors::{QaFlowError, QaFlowResult};
use crate::services::auth::AuthProvider;
use crate::services::badge_renderer;
use crate::services::gate_service::GateService;
use crate::structs::analysis_request::AnalysisRequest;

const MAX_SUBMISSION_BYTES: u64 = 1024 * 1024;

pub struct ApiServer {
    service: Arc<GateService>,
    auth: Arc<dyn AuthProvider>,
    port: Option<u16>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiServer {
    pub fn new(service: Arc<GateService>, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            service,
            auth,
            port: None,
            shutdown_tx: None,
        }
    }

    pub async fn start(&mut self, port: u16) -> QaFlowResult<u16> {
        let routes = routes(Arc::clone(&self.service), Arc::clone(&self.auth));

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let addr: SocketAddr = ([0, 0, 0, 0], port).into();
        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| QaFlowError::system_error("bind server", &e.to_string()))?;

        tokio::spawn(server);
        self.port = Some(bound.port());

        log::info!("🌐 QA Flow API started on port {}", bound.port());
        Ok(bound.port())
    }

    pub async fn run(&mut self, port: u16) -> QaFlowResult<()> {
        self.start(port).await?;

        tokio::signal::ctrl_c()
            .await
            .map_err(|e| QaFlowError::system_error("wait for shutdown signal", &e.to_string()))?;

        self.shutdown().await
    }

    pub async fn shutdown(&mut self) -> QaFlowResult<()> {
        log::info!("🛑 Shutting down QA Flow API...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx
                .send(())
                .map_err(|_| QaFlowError::system_error("shutdown", "Failed to send shutdown signal"))?;
        }

        log::info!("✅ QA Flow API shutdown complete");
        Ok(())
    }
}

/// All routes, with CORS and rejection handling applied. Public routes are
/// the banner and the badge; everything else goes through the bearer-token
/// filter.
pub fn routes(
    service: Arc<GateService>,
    auth: Arc<dyn AuthProvider>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let banner = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::json(&json!({ "message": API_NAME, "version": API_VERSION })));

    let submit_analysis = warp::path!("analyses")
        .and(warp::post())
        .and(with_user(Arc::clone(&auth)))
        .and(warp::body::content_length_limit(MAX_SUBMISSION_BYTES))
        .and(warp::body::json())
        .and(with_service(Arc::clone(&service)))
        .and_then(submit_analysis_handler);

    let list_analyses = warp::path!("analyses")
        .and(warp::get())
        .and(with_user(Arc::clone(&auth)))
        .and(warp::query::<HashMap<String, String>>())
        .and(with_service(Arc::clone(&service)))
        .and_then(list_analyses_handler);

    let quality_gate = warp::path!("quality-gate" / String / String)
        .and(warp::get())
        .and(with_user(Arc::clone(&auth)))
        .and(with_service(Arc::clone(&service)))
        .and_then(quality_gate_handler);

    let badge = warp::path!("badge" / String / String)
        .and(warp::get())
        .and(with_service(Arc::clone(&service)))
        .and_then(badge_handler);

    banner
        .or(submit_analysis)
        .or(list_analyses)
        .or(quality_gate)
        .or(badge)
        .with(
            warp::cors()
                .allow_any_origin()
                .allow_headers(vec!["content-type", "authorization"])
                .allow_methods(vec!["GET", "POST"]),
        )
        .recover(handle_rejection)
}

#[derive(Debug)]
struct Unauthorized;

impl warp::reject::Reject for Unauthorized {}

#[derive(Debug)]
struct ServiceFailure {
    reason: String,
}

impl warp::reject::Reject for ServiceFailure {}

#[derive(Debug)]
struct InvalidRequest {
    reason: String,
}

impl warp::reject::Reject for InvalidRequest {}

/// Validation failures are the caller's fault; everything else is ours.
fn service_failure(error: QaFlowError) -> Rejection {
    match error {
        QaFlowError::ValidationError { .. } => warp::reject::custom(InvalidRequest {
            reason: error.user_message(),
        }),
        _ => warp::reject::custom(ServiceFailure {
            reason: error.to_string(),
        }),
    }
}

fn with_service(
    service: Arc<GateService>,
) -> impl Filter<Extract = (Arc<GateService>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&service))
}

/// Resolves `Authorization: Bearer <token>` to a user id. Missing or unknown
/// tokens reject with 401; token lookup failures surface as 500.
fn with_user(
    auth: Arc<dyn AuthProvider>,
) -> impl Filter<Extract = (String,), Error = Rejection> + Clone {
    warp::header::optional::<String>("authorization").and_then(move |header: Option<String>| {
        let auth = Arc::clone(&auth);
        async move {
            let token = header
                .as_deref()
                .and_then(|h| h.strip_prefix("Bearer "))
                .map(str::trim);

            match token {
                Some(token) => match auth.resolve(token) {
                    Ok(Some(user_id)) => Ok(user_id),
                    Ok(None) => Err(warp::reject::custom(Unauthorized)),
                    Err(e) => Err(service_failure(QaFlowError::auth_error(&e.to_string()))),
                },
                None => Err(warp::reject::custom(Unauthorized)),
            }
        }
    })
}

async fn submit_analysis_handler(
    user_id: String,
    request: AnalysisRequest,
    service: Arc<GateService>,
) -> Result<impl Reply, Rejection> {
    let response = service
        .submit_analysis(&user_id, &request)
        .map_err(service_failure)?;
    Ok(warp::reply::json(&response))
}

async fn list_analyses_handler(
    user_id: String,
    query: HashMap<String, String>,
    service: Arc<GateService>,
) -> Result<impl Reply, Rejection> {
    let limit = query
        .get("limit")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(DEFAULT_LIST_LIMIT);
    let project_id = query.get("project_id").map(String::as_str);

    let responses = service
        .list_analyses(&user_id, project_id, limit)
        .map_err(service_failure)?;
    Ok(warp::reply::json(&responses))
}

async fn quality_gate_handler(
    repository_id: String,
    branch: String,
    _user_id: String,
    service: Arc<GateService>,
) -> Result<impl Reply, Rejection> {
    let result = service
        .quality_gate(&repository_id, &branch)
        .map_err(service_failure)?;
    Ok(warp::reply::json(&result))
}

/// Public badge endpoint: only the three-state text and color ever leave
/// this handler.
async fn badge_handler(
    repository_id: String,
    branch: String,
    service: Arc<GateService>,
) -> Result<impl Reply, Rejection> {
    let status = service
        .badge_status(&repository_id, &branch)
        .map_err(service_failure)?;
    let svg = badge_renderer::render(status);
    Ok(warp::reply::with_header(svg, "content-type", "image/svg+xml"))
}

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if err.find::<Unauthorized>().is_some() {
        (StatusCode::UNAUTHORIZED, "invalid or missing token")
    } else if let Some(invalid) = err.find::<InvalidRequest>() {
        log::warn!("⚠️ Invalid request: {}", invalid.reason);
        (StatusCode::BAD_REQUEST, "invalid request")
    } else if let Some(failure) = err.find::<ServiceFailure>() {
        log::error!("💥 Request failed: {}", failure.reason);
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not found")
    } else if err.find::<warp::filters::body::BodyDeserializeError>().is_some() {
        (StatusCode::BAD_REQUEST, "invalid request body")
    } else {
        (StatusCode::BAD_REQUEST, "bad request")
    };

    let body = warp::reply::json(&json!({ "error": message }));
    Ok(warp::reply::with_status(body, status))
}

//! HTTP service implementation for on-demand permutation streaming.
//!
//! This module defines [`PermService`], the shared state behind the axum
//! router, and the two request handlers:
//!
//! - `POST /api/v1/init` validates a set, registers a job, spawns its
//!   producer task, and returns the job id without waiting for any
//!   permutation to be produced.
//! - `GET /api/v1/next` performs one receive on the job's single-slot
//!   channel, waiting for the producer when the slot is empty.

use crate::server::{
    config::ServerConfig,
    error::ApiError,
    jobs::{
        producer::producer_loop,
        registry::{JobId, JobRegistry, JobStream},
    },
};
use axum::http::HeaderMap;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
};
use bytes::Bytes;
use lexperm::SortedSet;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;

/// Header carrying the job id on retrieval requests.
pub const JOB_ID_HEADER: &str = "x-job-id";

/// Shared state for the permutation streaming service.
///
/// Cloning is cheap: every clone shares the same [`JobRegistry`], so all
/// in-flight requests observe the same jobs.
#[derive(Clone)]
pub struct PermService {
    config: ServerConfig,
    registry: Arc<JobRegistry>,
}

impl PermService {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            registry: Arc::new(JobRegistry::new()),
        }
    }

    /// Builds the HTTP router with the transport limits from the config.
    ///
    /// Unsupported methods on either path are rejected with `405 Method Not
    /// Allowed` and an empty body by the method routers themselves.
    pub fn router(self) -> Router {
        let timeout = TimeoutLayer::new(self.config.request_timeout);
        let body_limit = DefaultBodyLimit::max(self.config.max_body_bytes);

        Router::new()
            .route("/api/v1/init", post(init))
            .route("/api/v1/next", get(next))
            .layer(ServiceBuilder::new().layer(timeout).layer(body_limit))
            .with_state(self)
    }

    /// Registers a new job for `set` and spawns its producer task.
    ///
    /// Returns the freshly allocated id immediately; the producer fills the
    /// channel slot in the background.
    pub fn start_job(&self, set: SortedSet) -> JobId {
        let id = self.registry.allocate_id();

        // Single-slot handoff: the producer parks in `send` until a consumer
        // takes the previous permutation. This is the only flow control and
        // bounds per-job memory to one pending permutation.
        let (tx, rx) = mpsc::channel(1);

        self.registry.register(id.clone(), JobStream::new(rx));
        tokio::spawn(producer_loop(id.clone(), set, tx));

        id
    }
}

#[derive(Debug, Serialize)]
pub struct InitResponse {
    #[serde(rename = "jobID")]
    pub job_id: JobId,
    pub success: bool,
}

/// `POST /api/v1/init`
///
/// Accepts a JSON array of distinct non-negative integers. Decoding is done
/// from the raw body so malformed input maps onto the uniform error shape
/// rather than the extractor's default.
async fn init(
    State(service): State<PermService>,
    body: Bytes,
) -> Result<Json<InitResponse>, ApiError> {
    let values: Vec<i64> = serde_json::from_slice(&body).map_err(ApiError::MalformedInput)?;
    let set = SortedSet::new(values)?;
    let set_size = set.len();

    let job_id = service.start_job(set);
    tracing::info!(%job_id, set_size, "job registered");

    Ok(Json(InitResponse {
        job_id,
        success: true,
    }))
}

/// `GET /api/v1/next`
///
/// Clients must send the `X-JOB-ID` header. A missing header is
/// indistinguishable from an unknown id and yields the same 404.
async fn next(
    State(service): State<PermService>,
    headers: HeaderMap,
) -> Result<Json<Vec<i64>>, ApiError> {
    let job_id = headers
        .get(JOB_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::JobNotFound)?;

    let stream = service
        .registry
        .lookup(job_id)
        .ok_or(ApiError::JobNotFound)?;

    // A closed channel means the successor chain is exhausted. That is a
    // successful terminal state, reported as the empty sequence on this and
    // every later retrieval.
    let seq = stream.recv().await.unwrap_or_default();
    Ok(Json(seq))
}

use axum::{
    extract::{DefaultBodyLimit, Multipart},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::core::roster::Roster;
use crate::core::types::Role;
use crate::matching::engine::{PairingConfig, PairingEngine};
use crate::matching::ScoreWeights;
use crate::parsing::parse_roster_text;
use crate::utils::validation::{validate_upload, MAX_UPLOAD_BYTES};

/// Security configuration constants to prevent `DoS` attacks
pub const MAX_MULTIPART_FIELDS: usize = 10;
pub const MAX_TEXT_FIELD_SIZE: usize = MAX_UPLOAD_BYTES;

/// Error response sent to the client
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Input data extracted from the multipart form
#[derive(Debug, Default)]
struct InputData {
    mentees: Option<String>,
    mentors: Option<String>,
    weights: ScoreWeightsForm,
}

/// Weight overrides accepted from the form, falling back to the defaults
#[derive(Debug, Default)]
struct ScoreWeightsForm {
    experience: Option<i32>,
    field: Option<i32>,
    career_gap: Option<i32>,
    study_gap: Option<i32>,
    objective: Option<i32>,
}

impl ScoreWeightsForm {
    fn resolve(&self) -> ScoreWeights {
        let defaults = ScoreWeights::default();
        ScoreWeights {
            experience: self.experience.unwrap_or(defaults.experience),
            field: self.field.unwrap_or(defaults.field),
            career_gap: self.career_gap.unwrap_or(defaults.career_gap),
            study_gap: self.study_gap.unwrap_or(defaults.study_gap),
            objective: self.objective.unwrap_or(defaults.objective),
        }
    }
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with all routes and middleware configured.
#[allow(clippy::missing_panics_doc)] // Panics only on invalid governor config (constants are valid)
#[must_use]
pub fn create_router() -> Router {
    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10)
        .burst_size(50)
        .finish()
        .unwrap();

    Router::new()
        .route("/", get(index_handler))
        .route("/api/assign", post(assign_handler))
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-xss-protection"),
                    HeaderValue::from_static("1; mode=block"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                // IP-based rate limiting to prevent abuse
                .layer(GovernorLayer {
                    config: Arc::new(governor_conf),
                })
                // Request timeout to prevent slow client attacks
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(30),
                ))
                // Limit concurrent requests
                .layer(ConcurrencyLimitLayer::new(100))
                // Two rosters plus multipart overhead
                .layer(DefaultBodyLimit::max(4 * 1024 * 1024)),
        )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let app = create_router();

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting pair-solver web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Main page handler
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("templates/index.html"))
}

/// API endpoint for pairing two uploaded rosters
async fn assign_handler(mut multipart: Multipart) -> impl IntoResponse {
    let start_time = std::time::Instant::now();

    let input = match extract_request_data(&mut multipart).await {
        Ok(input) => input,
        Err(error_response) => return error_response,
    };

    let mentees = match parse_roster_field(input.mentees.as_deref(), Role::Mentee) {
        Ok(roster) => roster,
        Err(error_response) => return *error_response,
    };
    let mentors = match parse_roster_field(input.mentors.as_deref(), Role::Mentor) {
        Ok(roster) => roster,
        Err(error_response) => return *error_response,
    };

    let weights = input.weights.resolve();
    let engine = PairingEngine::new(
        &mentees,
        &mentors,
        PairingConfig {
            weights: weights.clone(),
        },
    );
    let result = engine.pair();

    let pairs: Vec<serde_json::Value> = result
        .pairs
        .iter()
        .map(|p| {
            serde_json::json!({
                "mentor": { "id": p.mentor.0, "name": p.mentor_name },
                "mentee": { "id": p.mentee.0, "name": p.mentee_name },
                "score": p.score,
            })
        })
        .collect();

    #[allow(clippy::cast_possible_truncation)] // Processing time won't exceed u64
    let processing_time = start_time.elapsed().as_millis() as u64;

    Json(serde_json::json!({
        "pairs": pairs,
        "unmatched_mentees": result
            .unmatched_mentees
            .iter()
            .map(|(id, name)| serde_json::json!({ "id": id.0, "name": name }))
            .collect::<Vec<_>>(),
        "unmatched_mentors": result
            .unmatched_mentors
            .iter()
            .map(|(id, name)| serde_json::json!({ "id": id.0, "name": name }))
            .collect::<Vec<_>>(),
        "processing_info": {
            "mentee_count": mentees.len(),
            "mentor_count": mentors.len(),
            "processing_time_ms": processing_time,
            "weights": weights,
        }
    }))
    .into_response()
}

/// Extract roster text and weight overrides from the multipart form
async fn extract_request_data(multipart: &mut Multipart) -> Result<InputData, Response> {
    let mut input = InputData::default();
    let mut fields_received = 0usize;
    let mut had_parse_error = false;

    loop {
        if fields_received >= MAX_MULTIPART_FIELDS {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Too many form fields".to_string(),
                    error_type: "field_limit_exceeded".to_string(),
                    details: None,
                }),
            )
                .into_response());
        }

        match multipart.next_field().await {
            Ok(Some(field)) => {
                fields_received += 1;
                let name = field.name().unwrap_or_default().to_string();

                match name.as_str() {
                    "mentees" | "mentors" => match field.bytes().await {
                        Ok(bytes) => {
                            if bytes.len() > MAX_TEXT_FIELD_SIZE {
                                return Err((
                                    StatusCode::PAYLOAD_TOO_LARGE,
                                    Json(ErrorResponse {
                                        error: "Roster size exceeds limit".to_string(),
                                        error_type: "roster_too_large".to_string(),
                                        details: None,
                                    }),
                                )
                                    .into_response());
                            }

                            match validate_upload(&bytes) {
                                Ok(text) => {
                                    if name == "mentees" {
                                        input.mentees = Some(text.to_string());
                                    } else {
                                        input.mentors = Some(text.to_string());
                                    }
                                }
                                Err(e) => {
                                    return Err((
                                        StatusCode::BAD_REQUEST,
                                        Json(create_safe_error_response(
                                            "invalid_upload",
                                            "Uploaded roster is empty, too large, or not text",
                                            Some(&e.to_string()),
                                        )),
                                    )
                                        .into_response());
                                }
                            }
                        }
                        Err(_) => had_parse_error = true,
                    },
                    "weight_experience" | "weight_field" | "weight_career"
                    | "weight_studies" | "weight_objective" => {
                        if let Ok(text) = field.text().await {
                            if let Ok(value) = text.parse::<i32>() {
                                let value = value.clamp(0, 100);
                                match name.as_str() {
                                    "weight_experience" => input.weights.experience = Some(value),
                                    "weight_field" => input.weights.field = Some(value),
                                    "weight_career" => input.weights.career_gap = Some(value),
                                    "weight_studies" => input.weights.study_gap = Some(value),
                                    _ => input.weights.objective = Some(value),
                                }
                            }
                        }
                    }
                    _ => {} // Ignore unknown fields
                }
            }
            Ok(None) => break,
            Err(_) => {
                had_parse_error = true;
                break;
            }
        }
    }

    if input.mentees.is_none() || input.mentors.is_none() {
        let error_msg = if had_parse_error {
            "Failed to parse upload. Please check the file format."
        } else if fields_received == 0 {
            "No data received. Please upload both rosters."
        } else {
            "Both a mentee roster and a mentor roster are required."
        };

        return Err((
            StatusCode::BAD_REQUEST,
            Json(create_safe_error_response(
                "missing_input",
                error_msg,
                None,
            )),
        )
            .into_response());
    }

    Ok(input)
}

/// Parse one uploaded roster, mapping parse failures to a client error
fn parse_roster_field(text: Option<&str>, role: Role) -> Result<Roster, Box<Response>> {
    // Presence was checked during extraction
    let Some(text) = text else {
        return Err(Box::new(
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal error: no input data".to_string(),
                    error_type: "internal_error".to_string(),
                    details: None,
                }),
            )
                .into_response(),
        ));
    };

    parse_roster_text(text, role).map_err(|e| {
        Box::new(
            (
                StatusCode::BAD_REQUEST,
                Json(create_safe_error_response(
                    "roster_parse_failed",
                    "Unable to parse the uploaded roster. Please check the column layout.",
                    Some(&e.to_string()),
                )),
            )
                .into_response(),
        )
    })
}

// ============================================================================
// API Router
// Maps method + path + JSON body onto the mixture solver
// ============================================================================

use super::payload::{ComplexMixPayload, ErrorBody, MessageBody, SimpleMixPayload};
use crate::domain::{ComplexMixReport, MixError, MixResult, SimpleMixReport};
use crate::engine::MixtureSolver;
use serde::Serialize;

pub const JSON: &str = "application/json";
pub const TEXT: &str = "text/plain; charset=utf-8";

/// Liveness banner served at `/`
pub const BANNER: &str = "Backend is working!";

/// Transport-agnostic HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl ApiResponse {
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status,
                content_type: JSON,
                body,
            },
            Err(err) => {
                tracing::error!(error = %err, "response serialization failed");
                Self {
                    status: 500,
                    content_type: JSON,
                    body: r#"{"error":"response serialization failed"}"#.to_string(),
                }
            },
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: TEXT,
            body: body.into(),
        }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self::json(
            status,
            &ErrorBody {
                error: message.into(),
            },
        )
    }

    fn from_result<T: Serialize>(result: MixResult<T>) -> Self {
        match result {
            Ok(report) => Self::json(200, &report),
            Err(err) => Self::error(status_for(&err), err.to_string()),
        }
    }
}

/// 400 for anything the caller can fix, 500 otherwise
pub fn status_for(err: &MixError) -> u16 {
    if err.is_user_error() {
        400
    } else {
        500
    }
}

/// JSON front end for a [`MixtureSolver`]
///
/// | Method | Path               | Body                 |
/// |--------|--------------------|----------------------|
/// | GET    | `/`                | plain-text banner    |
/// | GET    | `/test`            | `{ message }`        |
/// | POST   | `/api/mix/simple`  | simple mix report    |
/// | POST   | `/api/mix/complex` | complex mix report   |
pub struct MixApi {
    solver: MixtureSolver,
}

impl MixApi {
    pub fn new(solver: MixtureSolver) -> Self {
        Self { solver }
    }

    pub fn solver(&self) -> &MixtureSolver {
        &self.solver
    }

    /// Route one request. Query strings and trailing slashes are ignored.
    pub fn handle(&self, method: &str, path: &str, body: &str) -> ApiResponse {
        let path = path.split('?').next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        let method = method.to_ascii_uppercase();

        tracing::debug!(method = %method, path, "api request");

        let read_only = matches!(method.as_str(), "GET" | "HEAD");
        match (path, method.as_str()) {
            ("/", _) if read_only => ApiResponse::text(200, BANNER),
            ("/test", _) if read_only => ApiResponse::json(
                200,
                &MessageBody {
                    message: "API is working!".to_string(),
                },
            ),
            ("/api/mix/simple", "POST") => ApiResponse::from_result(self.mix_simple(body)),
            ("/api/mix/complex", "POST") => ApiResponse::from_result(self.mix_complex(body)),
            ("/" | "/test" | "/api/mix/simple" | "/api/mix/complex", _) => {
                ApiResponse::error(405, format!("method {} not allowed on {}", method, path))
            },
            _ => ApiResponse::error(404, format!("no route for {}", path)),
        }
    }

    /// `POST /api/mix/simple`
    pub fn mix_simple(&self, body: &str) -> MixResult<SimpleMixReport> {
        let payload: SimpleMixPayload = parse(body)?;
        let request = payload.into_request()?;
        self.solver.report_simple(&request)
    }

    /// `POST /api/mix/complex`
    pub fn mix_complex(&self, body: &str) -> MixResult<ComplexMixReport> {
        let payload: ComplexMixPayload = parse(body)?;
        let request = payload.into_request(self.solver.config().default_mode)?;
        self.solver.report_complex(&request)
    }
}

fn parse<'a, T: serde::Deserialize<'a>>(body: &'a str) -> MixResult<T> {
    serde_json::from_str(body).map_err(|e| MixError::validation(format!("malformed JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SolverConfig;
    use crate::engine::create_from_config;
    use crate::interfaces::NoOpEventHandler;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn api() -> MixApi {
        MixApi::new(create_from_config(SolverConfig::default(), Arc::new(NoOpEventHandler)).unwrap())
    }

    fn body(response: &ApiResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[test]
    fn test_liveness_routes() {
        let api = api();

        let root = api.handle("GET", "/", "");
        assert_eq!(root.status, 200);
        assert_eq!(root.content_type, TEXT);
        assert_eq!(root.body, BANNER);

        let test = api.handle("get", "/test/", "");
        assert_eq!(test.status, 200);
        assert_eq!(body(&test), json!({ "message": "API is working!" }));
    }

    #[test]
    fn test_simple_route() {
        let response = api().handle(
            "POST",
            "/api/mix/simple",
            r#"{"a1": 70, "a2": 95, "m": 85, "S": 230}"#,
        );
        assert_eq!(response.status, 200);
        assert_eq!(
            body(&response),
            json!({
                "quantities": [92.0, 138.0],
                "quantities_formatted": ["92.00", "138.00"],
                "simplified_ratio": "2 : 3"
            })
        );
    }

    #[test]
    fn test_user_errors_are_400() {
        let api = api();

        let out_of_range = api.handle(
            "POST",
            "/api/mix/simple",
            r#"{"a1": 70, "a2": 95, "m": 100, "S": 230}"#,
        );
        assert_eq!(out_of_range.status, 400);
        assert!(body(&out_of_range)["error"].as_str().unwrap().contains("between"));

        let malformed = api.handle("POST", "/api/mix/simple", "{not json");
        assert_eq!(malformed.status, 400);
        assert!(body(&malformed)["error"].as_str().unwrap().starts_with("invalid input: malformed JSON"));

        let too_few = api.handle(
            "POST",
            "/api/mix/complex",
            r#"{"components": [{"a": 10}, {"a": 90}], "m": 40, "S": 100}"#,
        );
        assert_eq!(too_few.status, 400);
    }

    #[test]
    fn test_unknown_route_and_method() {
        let api = api();
        assert_eq!(api.handle("GET", "/api/mix/unknown", "").status, 404);
        assert_eq!(api.handle("GET", "/api/mix/simple", "").status, 405);
        assert_eq!(api.handle("DELETE", "/test", "").status, 405);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&MixError::validation("x")), 400);
        assert_eq!(status_for(&MixError::infeasible("x")), 400);
        assert_eq!(status_for(&MixError::DegenerateRatio), 400);
        assert_eq!(status_for(&MixError::invariant("x")), 500);
    }
}

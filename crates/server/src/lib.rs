use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};

mod expenses;
mod export;
mod server;
mod statistics;

pub mod types {
    pub mod expense {
        pub use api_types::expense::{
            ExpenseCreated, ExpenseListResponse, ExpenseNew, ExpenseView, ExpensesCleared,
        };
    }

    pub mod stats {
        pub use api_types::stats::Summary;
    }
}

/// Error returned by every handler; wraps the engine error and maps it onto
/// an HTTP status.
pub struct ServerError(EngineError);

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::IndexOutOfRange { .. } => StatusCode::NOT_FOUND,
        EngineError::InvalidAmount(_)
        | EngineError::InvalidDescription(_)
        | EngineError::UnknownCategory(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::Io(_) | EngineError::Csv(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Io(io_err) => {
            tracing::error!("store i/o error: {io_err}");
            "internal server error".to_string()
        }
        EngineError::Csv(csv_err) => {
            tracing::error!("store csv error: {csv_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let status = status_for_engine_error(&self.0);
        let error = message_for_engine_error(self.0);

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_index_maps_to_404() {
        let res = ServerError::from(EngineError::IndexOutOfRange { index: 3, len: 1 })
            .into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_422() {
        let res = ServerError::from(EngineError::InvalidAmount("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let res =
            ServerError::from(EngineError::InvalidDescription("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let res = ServerError::from(EngineError::UnknownCategory("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn io_maps_to_500_with_generic_message() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let res = ServerError::from(EngineError::Io(io)).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! Download endpoint: the current records re-serialized as CSV.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{ServerError, server::ServerState};

pub async fn download(State(state): State<ServerState>) -> Result<Response, ServerError> {
    let ledger = state.ledger.read().await;
    let data = ledger.export_csv()?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"expenses.csv\"",
        ),
    ];

    Ok((headers, data).into_response())
}

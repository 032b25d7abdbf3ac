//! Expense API endpoints

use api_types::expense::{
    ExpenseCreated, ExpenseListResponse, ExpenseNew, ExpenseView, ExpensesCleared,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

pub(crate) fn map_category(category: engine::Category) -> api_types::Category {
    match category {
        engine::Category::Food => api_types::Category::Food,
        engine::Category::Travel => api_types::Category::Travel,
        engine::Category::Bills => api_types::Category::Bills,
        engine::Category::Shopping => api_types::Category::Shopping,
        engine::Category::Entertainment => api_types::Category::Entertainment,
        engine::Category::Other => api_types::Category::Other,
    }
}

fn map_api_category(category: api_types::Category) -> engine::Category {
    match category {
        api_types::Category::Food => engine::Category::Food,
        api_types::Category::Travel => engine::Category::Travel,
        api_types::Category::Bills => engine::Category::Bills,
        api_types::Category::Shopping => engine::Category::Shopping,
        api_types::Category::Entertainment => engine::Category::Entertainment,
        api_types::Category::Other => engine::Category::Other,
    }
}

pub async fn list(State(state): State<ServerState>) -> Json<ExpenseListResponse> {
    let ledger = state.ledger.read().await;

    let expenses = ledger
        .expenses()
        .iter()
        .enumerate()
        .map(|(index, expense)| ExpenseView {
            index,
            date: expense.date,
            category: map_category(expense.category),
            description: expense.description.clone(),
            amount_minor: expense.amount.paise(),
        })
        .collect();

    Json(ExpenseListResponse { expenses })
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<ExpenseCreated>), ServerError> {
    let mut ledger = state.ledger.write().await;

    let index = ledger.add(engine::NewExpense {
        date: payload.date,
        category: map_api_category(payload.category),
        description: payload.description,
        amount: engine::Money::new(payload.amount_minor),
    })?;

    Ok((StatusCode::CREATED, Json(ExpenseCreated { index })))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(index): Path<usize>,
) -> Result<StatusCode, ServerError> {
    let mut ledger = state.ledger.write().await;
    ledger.remove(index)?;

    Ok(StatusCode::OK)
}

pub async fn clear(
    State(state): State<ServerState>,
) -> Result<Json<ExpensesCleared>, ServerError> {
    let mut ledger = state.ledger.write().await;
    let removed = ledger.clear()?;

    Ok(Json(ExpensesCleared { removed }))
}

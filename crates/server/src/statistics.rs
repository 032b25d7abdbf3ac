//! Statistics API endpoints

use api_types::stats::{CategoryTotal, MonthTotal, Summary};
use axum::{Json, extract::State};

use crate::{expenses::map_category, server::ServerState};

/// Handle requests for the dashboard aggregates.
pub async fn get_stats(State(state): State<ServerState>) -> Json<Summary> {
    let ledger = state.ledger.read().await;
    let summary = ledger.summary();

    let by_category = summary
        .by_category
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category: map_category(category),
            amount_minor: amount.paise(),
        })
        .collect();

    let by_month = summary
        .by_month
        .into_iter()
        .map(|(month, amount)| MonthTotal {
            month,
            amount_minor: amount.paise(),
        })
        .collect();

    Json(Summary {
        total_minor: summary.total.paise(),
        count: summary.count,
        average_minor: summary.average.paise(),
        by_category,
        by_month,
    })
}

//! Currency rate and conversion endpoints.
//!
//! All three endpoints validate before the upstream call; a failed check
//! short-circuits and no upstream request is issued. Inputs are forwarded
//! in their original case - uppercasing happens only inside the
//! membership test.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use fxproxy_rates::{validate, ConversionResponse, RatesResponse};
use rust_decimal::Decimal;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(serde::Deserialize)]
struct LatestQuery {
    base: String,
}

async fn latest_rates(
    State(state): State<Arc<AppState>>,
    Query(q): Query<LatestQuery>,
) -> ApiResult<Json<RatesResponse>> {
    validate::currency(&q.base)?;
    let rates = state.fx_client.latest_rates(&q.base).await?;
    Ok(Json(rates))
}

#[derive(serde::Deserialize)]
struct HistoricalQuery {
    base: String,
    date: String,
    symbols: String,
}

async fn historical_rates(
    State(state): State<Arc<AppState>>,
    Query(q): Query<HistoricalQuery>,
) -> ApiResult<Json<RatesResponse>> {
    validate::currency(&q.base)?;
    validate::date(&q.date)?;
    for symbol in q.symbols.split(',') {
        validate::currency(symbol.trim())?;
    }
    let rates = state
        .fx_client
        .historical_rates(&q.base, &q.date, &q.symbols)
        .await?;
    Ok(Json(rates))
}

#[derive(serde::Deserialize)]
struct ConvertQuery {
    from: String,
    to: String,
    amount: Decimal,
}

async fn convert_amount(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ConvertQuery>,
) -> ApiResult<Json<ConversionResponse>> {
    validate::currency(&q.from)?;
    validate::currency(&q.to)?;
    validate::amount(q.amount)?;
    let conversion = state.fx_client.convert(&q.from, &q.to, q.amount).await?;
    Ok(Json(conversion))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/latest", get(latest_rates))
        .route("/historical", get(historical_rates))
        .route("/convert", get(convert_amount))
}

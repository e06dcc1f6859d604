use axum::{body::Bytes, extract::State, Json};

use crate::{
  error::AppError,
  market::{
      model::{PriceRequest, PriceResponse},
      service::MarketService,
  },
  models::parse_body,
};

pub async fn get_prices(
  State(service): State<MarketService>,
  body: Bytes,
) -> Result<Json<PriceResponse>, AppError> {
  let request: PriceRequest = parse_body(&body)?;
  let symbols = request
      .symbols
      .as_ref()
      .and_then(|symbols| symbols.as_array())
      .ok_or_else(|| AppError::ValidationError("Invalid symbols parameter".into()))?;

  tracing::info!(symbol_count = symbols.len(), "Price lookup requested");

  let data = service.get_prices(symbols).await?;
  Ok(Json(PriceResponse::new(data)))
}

use axum::{routing::post, Router};

use crate::market::{handler, service::MarketService};

pub fn market_routes(service: MarketService) -> Router {
  Router::new()
      .route("/crypto-prices", post(handler::get_prices))
      .with_state(service)
}

use axum::Json;

use crate::models::HelloResponse;

pub async fn health_check() -> &'static str {

    "OK"

}

// only reachable once the auth middleware has accepted the request
pub async fn hello() -> Json<HelloResponse> {

    Json(HelloResponse::greeting())

}

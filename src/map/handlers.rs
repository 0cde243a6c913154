use crate::app_context::AppContext;
use crate::map::consts::TRUTH_COLOR;
use crate::map::responses::RegionsResponse;
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn regions(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<RegionsResponse> {
    Json(RegionsResponse {
        regions: app_context.generator.regions().to_vec(),
        truth_color: TRUTH_COLOR.to_string(),
    })
}

//! Handler for the skill category catalog.

use axum::Json;

use skillforge_core::category::{self, CategoryInfo};

use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// GET /categories
// ---------------------------------------------------------------------------

pub async fn list_categories() -> Json<DataResponse<Vec<CategoryInfo>>> {
    Json(DataResponse::new(category::catalog()))
}

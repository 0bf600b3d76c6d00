use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use fareflow_catalog::{compute_dynamic_price, NewInventoryItem};

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Admin item view: includes the cost basis and the effective multiplier.
#[derive(Debug, Serialize)]
pub struct AdminInventoryResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub total_stock: i64,
    pub remaining_stock: i64,
    pub base_price: i64,
    pub dynamic_price: i64,
    pub price_multiplier: f64,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStockRequest {
    pub remaining_stock: i64,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /admin/inventory
pub async fn list_inventory(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminInventoryResponse>>, ApiError> {
    let items = state.inventory.list_items().await?;

    let mut responses = Vec::new();
    for item in &items {
        let dynamic_price =
            compute_dynamic_price(item.base_price, item.remaining_stock, item.total_stock)?;
        let multiplier = if item.base_price > 0 {
            dynamic_price as f64 / item.base_price as f64
        } else {
            1.0
        };

        responses.push(AdminInventoryResponse {
            id: item.id,
            name: item.name.clone(),
            category: item.category.clone(),
            description: item.description.clone(),
            total_stock: item.total_stock,
            remaining_stock: item.remaining_stock,
            base_price: item.base_price,
            dynamic_price,
            price_multiplier: (multiplier * 100.0).round() / 100.0,
        });
    }
    Ok(Json(responses))
}

/// POST /admin/inventory
pub async fn create_inventory(
    State(state): State<AppState>,
    Json(payload): Json<NewInventoryItem>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let item = payload.into_item()?;
    state.inventory.create_item(&item).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: item.id,
            message: "Inventory item created".to_string(),
        }),
    ))
}

/// PATCH /admin/inventory/{id}
/// Updates remaining stock, bounded by the item's total stock.
pub async fn update_remaining_stock(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStockRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let item = state
        .inventory
        .get_item(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("inventory item {id} not found")))?;

    item.validate_stock_update(req.remaining_stock)?;
    state
        .inventory
        .update_remaining_stock(id, req.remaining_stock)
        .await?;

    Ok(Json(json!({
        "id": id,
        "remaining_stock": req.remaining_stock,
    })))
}

/// DELETE /admin/inventory/{id}
pub async fn delete_inventory(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .inventory
        .get_item(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("inventory item {id} not found")))?;

    state.inventory.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

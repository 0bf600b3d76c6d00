use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use fareflow_catalog::{compute_dynamic_price, Availability, InventoryItem};

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

/// Public item view. Opaque pricing: only the total is shown, never the
/// cost basis or the multiplier.
#[derive(Debug, Serialize)]
pub struct InventoryResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub total_stock: i64,
    pub remaining_stock: i64,
    pub dynamic_price: i64,
    pub availability: Availability,
}

fn to_response(item: &InventoryItem) -> Result<InventoryResponse, ApiError> {
    let dynamic_price =
        compute_dynamic_price(item.base_price, item.remaining_stock, item.total_stock)?;

    Ok(InventoryResponse {
        id: item.id,
        name: item.name.clone(),
        category: item.category.clone(),
        description: item.description.clone(),
        total_stock: item.total_stock,
        remaining_stock: item.remaining_stock,
        dynamic_price,
        availability: Availability::for_stock(item.remaining_stock, item.total_stock),
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /inventory
/// Sold-out items are omitted from the public listing.
pub async fn list_inventory(
    State(state): State<AppState>,
) -> Result<Json<Vec<InventoryResponse>>, ApiError> {
    let items = state.inventory.list_items().await?;

    let mut responses = Vec::new();
    for item in items.iter().filter(|item| !item.is_sold_out()) {
        responses.push(to_response(item)?);
    }
    Ok(Json(responses))
}

/// GET /inventory/{id}
pub async fn get_inventory(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InventoryResponse>, ApiError> {
    let item = state
        .inventory
        .get_item(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("inventory item {id} not found")))?;

    Ok(Json(to_response(&item)?))
}

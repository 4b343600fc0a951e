use contracts::domain::a002_order_type::aggregate::{
    OrderType, OrderTypeDto, OrderTypeListResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::system::auth::request_context::RequestContext;

/// Fetch all order types
pub async fn fetch_order_types(ctx: &RequestContext) -> Result<Vec<OrderType>, String> {
    let response = ctx
        .apply(Request::get(&api_url("/order-types")))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch order types: {}", response.status()));
    }

    response
        .json::<OrderTypeListResponse>()
        .await
        .map(OrderTypeListResponse::into_order_types)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Search order types by name
pub async fn search_order_types(
    ctx: &RequestContext,
    query: &str,
) -> Result<Vec<OrderType>, String> {
    let url = api_url(&format!("/order-types?q={}", urlencoding::encode(query)));
    let response = ctx
        .apply(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to search order types: {}",
            response.status()
        ));
    }

    response
        .json::<OrderTypeListResponse>()
        .await
        .map(OrderTypeListResponse::into_order_types)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new order type
pub async fn create_order_type(ctx: &RequestContext, dto: OrderTypeDto) -> Result<(), String> {
    let response = ctx
        .apply(Request::post(&api_url("/order-types")))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create order type: {}", response.status()));
    }

    Ok(())
}

/// Update order type
pub async fn update_order_type(
    ctx: &RequestContext,
    id: &str,
    dto: OrderTypeDto,
) -> Result<(), String> {
    let response = ctx
        .apply(Request::put(&api_url(&format!("/order-types/{}", id))))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update order type: {}", response.status()));
    }

    Ok(())
}

/// Delete order type
pub async fn delete_order_type(ctx: &RequestContext, id: &str) -> Result<(), String> {
    let response = ctx
        .apply(Request::delete(&api_url(&format!("/order-types/{}", id))))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete order type: {}", response.status()));
    }

    Ok(())
}

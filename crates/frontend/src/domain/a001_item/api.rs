use contracts::domain::a001_item::aggregate::{Item, ItemDto, ItemListResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::system::auth::request_context::RequestContext;

/// Fetch all items
pub async fn fetch_items(ctx: &RequestContext) -> Result<Vec<Item>, String> {
    let response = ctx
        .apply(Request::get(&api_url("/items")))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch items: {}", response.status()));
    }

    response
        .json::<ItemListResponse>()
        .await
        .map(ItemListResponse::into_items)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Search items by name
pub async fn search_items(ctx: &RequestContext, query: &str) -> Result<Vec<Item>, String> {
    let url = api_url(&format!("/items?q={}", urlencoding::encode(query)));
    let response = ctx
        .apply(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to search items: {}", response.status()));
    }

    response
        .json::<ItemListResponse>()
        .await
        .map(ItemListResponse::into_items)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new item
pub async fn create_item(ctx: &RequestContext, dto: ItemDto) -> Result<(), String> {
    let response = ctx
        .apply(Request::post(&api_url("/items")))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create item: {}", response.status()));
    }

    Ok(())
}

/// Update item
pub async fn update_item(ctx: &RequestContext, id: &str, dto: ItemDto) -> Result<(), String> {
    let response = ctx
        .apply(Request::put(&api_url(&format!("/items/{}", id))))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update item: {}", response.status()));
    }

    Ok(())
}

/// Delete item
pub async fn delete_item(ctx: &RequestContext, id: &str) -> Result<(), String> {
    let response = ctx
        .apply(Request::delete(&api_url(&format!("/items/{}", id))))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete item: {}", response.status()));
    }

    Ok(())
}

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, State},
    http::request::Parts,
    Json,
};

use common::types::Detail;
use service::item::{Item, ItemInput};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

/// `{id}` path segment. A non-integer id is a validation error (422), not a 400.
pub struct ItemId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| JsonApiError::unprocessable(rejection.body_text()))?;
        Ok(ItemId(id))
    }
}

#[utoipa::path(
    post, path = "/items/", tag = "items",
    request_body = crate::openapi::ItemInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ItemDoc),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn create_item(
    State(state): State<ServerState>,
    Json(input): Json<ItemInput>,
) -> Result<Json<Item>, JsonApiError> {
    Ok(Json(state.items.create(input).await?))
}

#[utoipa::path(
    get, path = "/items/{id}", tag = "items",
    params(("id" = i32, Path, description = "Item ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ItemDoc),
        (status = 404, description = "Item not found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Non-integer id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn read_item(
    State(state): State<ServerState>,
    ItemId(id): ItemId,
) -> Result<Json<Item>, JsonApiError> {
    Ok(Json(state.items.read(id).await?))
}

#[utoipa::path(
    put, path = "/items/{id}", tag = "items",
    params(("id" = i32, Path, description = "Item ID")),
    request_body = crate::openapi::ItemInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ItemDoc),
        (status = 404, description = "Item not found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Malformed body or non-integer id")
    )
)]
pub async fn update_item(
    State(state): State<ServerState>,
    ItemId(id): ItemId,
    Json(input): Json<ItemInput>,
) -> Result<Json<Item>, JsonApiError> {
    Ok(Json(state.items.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/items/{id}", tag = "items",
    params(("id" = i32, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::DetailDoc),
        (status = 404, description = "Item not found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Non-integer id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_item(
    State(state): State<ServerState>,
    ItemId(id): ItemId,
) -> Result<Json<Detail>, JsonApiError> {
    state.items.delete(id).await?;
    Ok(Json(Detail::new("Item deleted")))
}

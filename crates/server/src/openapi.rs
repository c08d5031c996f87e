use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ItemInputDoc { pub name: String, pub description: String }

#[derive(ToSchema)]
pub struct ItemDoc { pub id: i32, pub name: String, pub description: String }

#[derive(ToSchema)]
pub struct DetailDoc { pub detail: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub detail: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::items::create_item,
        crate::routes::items::read_item,
        crate::routes::items::update_item,
        crate::routes::items::delete_item,
    ),
    components(
        schemas(
            HealthResponse,
            ItemInputDoc,
            ItemDoc,
            DetailDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "items")
    )
)]
pub struct ApiDoc;

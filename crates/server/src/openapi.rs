use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct OutletInputDoc {
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    /// Defaults to `true` when omitted.
    pub is_active: Option<bool>,
}

#[derive(ToSchema)]
pub struct OutletDoc {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
}

#[derive(ToSchema)]
pub struct MessageResponseDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorBodyDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::outlets::create_outlet,
        crate::routes::outlets::list_outlets,
        crate::routes::outlets::get_outlet,
        crate::routes::outlets::get_outlet_by_code,
        crate::routes::outlets::update_outlet,
        crate::routes::outlets::delete_outlet,
        crate::routes::pizzas::get_outlet_pizzas,
    ),
    components(
        schemas(
            HealthResponse,
            OutletInputDoc,
            OutletDoc,
            MessageResponseDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "outlet"),
        (name = "pizza")
    )
)]
pub struct ApiDoc;

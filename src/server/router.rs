use axum::{response::Redirect, routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{analytics, auth, customer, health, reservation, room, room_service, transaction},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Concierge",
    description = "Hotel management back-office API: customers, rooms, \
        reservations, billing, room service, and analytics."
))]
struct ApiDoc;

/// Builds the application router.
///
/// All handlers are registered through their `#[utoipa::path]` annotations so
/// the OpenAPI document stays in sync with the routes. Swagger UI is served at
/// `/docs` with the raw document at `/api-docs/openapi.json`; the root path
/// redirects to the UI.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(customer::create_customer, customer::get_customers))
        .routes(routes!(room::create_room, room::get_rooms))
        .routes(routes!(room::update_room))
        .routes(routes!(
            reservation::create_reservation,
            reservation::get_reservations
        ))
        .routes(routes!(reservation::update_reservation))
        .routes(routes!(reservation::get_reservation_bill))
        .routes(routes!(
            transaction::create_transaction,
            transaction::get_transactions
        ))
        .routes(routes!(
            room_service::create_room_service_item,
            room_service::get_room_service_items
        ))
        .routes(routes!(
            room_service::create_room_service_order,
            room_service::get_room_service_orders
        ))
        .routes(routes!(analytics::compute_analytics))
        .routes(routes!(health::health))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .route("/", get(|| async { Redirect::temporary("/docs") }))
        .layer(CorsLayer::permissive())
}

// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;

use crate::web_app::model::*;

#[cfg(feature = "ssr")]
async fn pool() -> Result<sqlx::PgPool, ServerFnError> {
    use crate::web_app::api::db;
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use sqlx::PgPool;

    // First try to get from context (for testing or if manually set)
    if let Some(pool) = use_context::<PgPool>() {
        return Ok(pool);
    }

    // Try global pool (most reliable fallback)
    if let Some(pool) = db::get_db() {
        return Ok(pool);
    }

    match extract().await {
        Ok(req) => {
            let req: HttpRequest = req;
            if let Some(pool_data) = req.app_data::<Data<PgPool>>() {
                return Ok(pool_data.as_ref().clone());
            }
            if let Some(pool) = req.app_data::<PgPool>() {
                return Ok(pool.clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new("Database pool not available"))
}

/// All boats, optionally filtered by type
#[server(GetBoats, "/api")]
pub async fn get_boats(boat_type_id: Option<i32>) -> Result<Vec<Boat>, ServerFnError> {
    use crate::web_app::api::queries;

    tracing::info!("Boat list request: boat_type_id={:?}", boat_type_id);

    let pool = pool().await?;
    let boats = queries::list_boats(&pool, boat_type_id).await;

    match &boats {
        Ok(boats) => tracing::info!("Boat list: {} boats", boats.len()),
        Err(e) => tracing::error!("Boat list failed: {}", e),
    }

    boats.map_err(|e| ServerFnError::new(format!("Boat search failed: {}", e)))
}

/// Single boat record (the record-fetch path behind detail and map views)
#[server(GetBoat, "/api")]
pub async fn get_boat(id: i32) -> Result<Boat, ServerFnError> {
    use crate::web_app::api::queries;

    let pool = pool().await?;
    queries::get_boat(&pool, id)
        .await
        .map_err(|e| ServerFnError::new(format!("Boat lookup failed: {}", e)))
}

/// Boat types for the search form dropdown
#[server(GetBoatTypes, "/api")]
pub async fn get_boat_types() -> Result<Vec<BoatType>, ServerFnError> {
    use crate::web_app::api::queries;

    let pool = pool().await?;
    queries::list_boat_types(&pool)
        .await
        .map_err(|e| ServerFnError::new(format!("Boat type lookup failed: {}", e)))
}

/// The ten closest boats to a position, as a serialized JSON payload.
///
/// The payload is a JSON-encoded `Vec<Boat>`; the near-me view decodes it
/// client-side.
#[server(GetBoatsByLocation, "/api")]
pub async fn get_boats_by_location(
    latitude: f64,
    longitude: f64,
    boat_type_id: Option<i32>,
) -> Result<String, ServerFnError> {
    use crate::web_app::api::queries;

    tracing::info!(
        "Nearby request: lat={}, lon={}, boat_type_id={:?}",
        latitude,
        longitude,
        boat_type_id
    );

    let pool = pool().await?;
    let boats = queries::boats_near(&pool, latitude, longitude, boat_type_id)
        .await
        .map_err(|e| ServerFnError::new(format!("Nearby search failed: {}", e)))?;

    serde_json::to_string(&boats)
        .map_err(|e| ServerFnError::new(format!("Nearby payload encoding failed: {}", e)))
}

/// All reviews for one boat, newest first
#[server(GetAllReviews, "/api")]
pub async fn get_all_reviews(boat_id: i32) -> Result<Vec<Review>, ServerFnError> {
    use crate::web_app::api::queries;

    let pool = pool().await?;
    let reviews = queries::reviews_for_boat(&pool, boat_id).await;

    match &reviews {
        Ok(reviews) => tracing::info!("Reviews for boat {}: {}", boat_id, reviews.len()),
        Err(e) => tracing::error!("Review fetch for boat {} failed: {}", boat_id, e),
    }

    reviews.map_err(|e| ServerFnError::new(format!("Review fetch failed: {}", e)))
}

/// Store a new review and return it
#[server(CreateReview, "/api")]
pub async fn create_review(
    boat_id: i32,
    subject: String,
    comment: String,
    rating: i32,
    reviewer: String,
) -> Result<Review, ServerFnError> {
    use crate::web_app::api::queries;

    let rating = rating.clamp(1, 5);
    let reviewer = if reviewer.trim().is_empty() {
        "Anonymous".to_string()
    } else {
        reviewer
    };

    let pool = pool().await?;
    queries::create_review(&pool, boat_id, &subject, &comment, rating, &reviewer)
        .await
        .map_err(|e| {
            tracing::error!("Review creation for boat {} failed: {}", boat_id, e);
            ServerFnError::new(format!("Review creation failed: {}", e))
        })
}

/// Boats related to the given one by the similarity criterion
#[server(GetSimilarBoats, "/api")]
pub async fn get_similar_boats(
    boat_id: i32,
    similar_by: SimilarBy,
) -> Result<Vec<Boat>, ServerFnError> {
    use crate::web_app::api::queries;

    tracing::info!("Similar request: boat_id={}, similar_by={}", boat_id, similar_by);

    let pool = pool().await?;
    queries::similar_boats(&pool, boat_id, similar_by)
        .await
        .map_err(|e| ServerFnError::new(format!("Similar search failed: {}", e)))
}

/// Apply one staged inline edit
#[server(UpdateBoat, "/api")]
pub async fn update_boat(update: BoatUpdate) -> Result<(), ServerFnError> {
    use crate::web_app::api::queries;

    tracing::info!("Update request for boat {}", update.id);

    let pool = pool().await?;
    queries::update_boat(&pool, &update).await.map_err(|e| {
        tracing::error!("Update for boat {} failed: {}", update.id, e);
        ServerFnError::new(format!("Update failed: {}", e))
    })
}

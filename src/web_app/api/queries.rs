// web_app/api/queries.rs - Database query implementations
//
// Boat, review, and boat-type queries backing the server functions.
//
// Philosophy: pure async functions that take a pool and parameters and
// return typed results. Runtime (non-macro) sqlx queries so no database
// is required at compile time.

use sqlx::{PgPool, Row};
use thiserror::Error;

use crate::web_app::model::{Boat, BoatType, BoatUpdate, Review, SimilarBy};

/// Nearby and similar-boat queries cap their result lists.
pub const RELATED_LIMIT: i64 = 10;

/// Price/length similarity matches within this fraction of the reference value.
pub const SIMILARITY_TOLERANCE: f64 = 0.2;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("boat {0} not found")]
    NotFound(i32),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Helper struct for mapping SQL rows to Boat
#[derive(Clone, sqlx::FromRow)]
struct BoatRow {
    id: i32,
    name: String,
    description: String,
    length: f64,
    price: rust_decimal::Decimal,
    picture: String,
    boat_type_id: i32,
    boat_type: String,
    latitude: f64,
    longitude: f64,
    created_at: chrono::NaiveDateTime,
    updated_at: chrono::NaiveDateTime,
}

impl From<BoatRow> for Boat {
    fn from(row: BoatRow) -> Self {
        Boat {
            id: row.id,
            name: row.name,
            description: row.description,
            length: row.length,
            price: row.price,
            picture: row.picture,
            boat_type_id: row.boat_type_id,
            boat_type: row.boat_type,
            latitude: row.latitude,
            longitude: row.longitude,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Shared SELECT for boat rows, joined with the type name.
const BOAT_SELECT: &str = r#"
    SELECT
        b.id, b.name, b.description, b.length,
        b.price::numeric as price, b.picture,
        b.boat_type_id, t.name as boat_type,
        b.latitude, b.longitude,
        b.created_at, b.updated_at
    FROM boats b
    JOIN boat_types t ON t.id = b.boat_type_id
"#;

/// All boats, optionally restricted to one type.
pub async fn list_boats(pool: &PgPool, boat_type_id: Option<i32>) -> Result<Vec<Boat>, QueryError> {
    let sql = format!(
        "{BOAT_SELECT} WHERE ($1::int4 IS NULL OR b.boat_type_id = $1) ORDER BY b.name"
    );

    let rows: Vec<BoatRow> = sqlx::query_as(&sql).bind(boat_type_id).fetch_all(pool).await?;
    Ok(rows.into_iter().map(Boat::from).collect())
}

/// Single boat by id.
pub async fn get_boat(pool: &PgPool, id: i32) -> Result<Boat, QueryError> {
    let sql = format!("{BOAT_SELECT} WHERE b.id = $1");

    let row: Option<BoatRow> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
    row.map(Boat::from).ok_or(QueryError::NotFound(id))
}

/// All boat types for the search filter dropdown.
pub async fn list_boat_types(pool: &PgPool) -> Result<Vec<BoatType>, QueryError> {
    let rows = sqlx::query("SELECT id, name FROM boat_types ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| BoatType {
            id: row.get("id"),
            name: row.get("name"),
        })
        .collect())
}

/// The closest boats to a position, optionally restricted to one type.
///
/// Planar squared distance is good enough for ranking dealership stock;
/// nobody is browsing boats across an antimeridian.
pub async fn boats_near(
    pool: &PgPool,
    latitude: f64,
    longitude: f64,
    boat_type_id: Option<i32>,
) -> Result<Vec<Boat>, QueryError> {
    let sql = format!(
        "{BOAT_SELECT} \
         WHERE ($3::int4 IS NULL OR b.boat_type_id = $3) \
         ORDER BY (b.latitude - $1) * (b.latitude - $1) \
                + (b.longitude - $2) * (b.longitude - $2) \
         LIMIT {RELATED_LIMIT}"
    );

    let rows: Vec<BoatRow> = sqlx::query_as(&sql)
        .bind(latitude)
        .bind(longitude)
        .bind(boat_type_id)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(Boat::from).collect())
}

/// Inclusive match window around a reference value.
pub fn similarity_bounds(value: f64, tolerance: f64) -> (f64, f64) {
    (value * (1.0 - tolerance), value * (1.0 + tolerance))
}

/// Boats related to `boat_id` by the given criterion.
///
/// The reference boat itself is excluded. Price and length match within
/// [`SIMILARITY_TOLERANCE`] of the reference value; type matches exactly.
pub async fn similar_boats(
    pool: &PgPool,
    boat_id: i32,
    similar_by: SimilarBy,
) -> Result<Vec<Boat>, QueryError> {
    let reference = get_boat(pool, boat_id).await?;

    let rows: Vec<BoatRow> = match similar_by {
        SimilarBy::Type => {
            let sql = format!(
                "{BOAT_SELECT} WHERE b.id <> $1 AND b.boat_type_id = $2 \
                 ORDER BY b.name LIMIT {RELATED_LIMIT}"
            );
            sqlx::query_as(&sql)
                .bind(boat_id)
                .bind(reference.boat_type_id)
                .fetch_all(pool)
                .await?
        }
        SimilarBy::Price => {
            let price: f64 = reference.price.try_into().unwrap_or(0.0);
            let (low, high) = similarity_bounds(price, SIMILARITY_TOLERANCE);
            let sql = format!(
                "{BOAT_SELECT} WHERE b.id <> $1 AND b.price::float8 BETWEEN $2 AND $3 \
                 ORDER BY b.price LIMIT {RELATED_LIMIT}"
            );
            sqlx::query_as(&sql)
                .bind(boat_id)
                .bind(low)
                .bind(high)
                .fetch_all(pool)
                .await?
        }
        SimilarBy::Length => {
            let (low, high) = similarity_bounds(reference.length, SIMILARITY_TOLERANCE);
            let sql = format!(
                "{BOAT_SELECT} WHERE b.id <> $1 AND b.length BETWEEN $2 AND $3 \
                 ORDER BY b.length LIMIT {RELATED_LIMIT}"
            );
            sqlx::query_as(&sql)
                .bind(boat_id)
                .bind(low)
                .bind(high)
                .fetch_all(pool)
                .await?
        }
    };

    Ok(rows.into_iter().map(Boat::from).collect())
}

/// Apply one staged edit. Untouched columns keep their current values.
pub async fn update_boat(pool: &PgPool, update: &BoatUpdate) -> Result<(), QueryError> {
    let result = sqlx::query(
        r#"
        UPDATE boats SET
            name = COALESCE($2, name),
            length = COALESCE($3, length),
            price = COALESCE($4::numeric, price),
            description = COALESCE($5, description),
            updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(update.id)
    .bind(&update.name)
    .bind(update.length)
    .bind(update.price)
    .bind(&update.description)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(QueryError::NotFound(update.id));
    }
    Ok(())
}

/// Reviews for one boat, newest first.
pub async fn reviews_for_boat(pool: &PgPool, boat_id: i32) -> Result<Vec<Review>, QueryError> {
    let rows = sqlx::query(
        r#"
        SELECT id, boat_id, subject, comment, rating, reviewer, created_at
        FROM reviews
        WHERE boat_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(boat_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Review {
            id: row.get("id"),
            boat_id: row.get("boat_id"),
            subject: row.get("subject"),
            comment: row.get("comment"),
            rating: row.get("rating"),
            reviewer: row.get("reviewer"),
            created_at: row.get("created_at"),
        })
        .collect())
}

/// Insert a review and return the stored row.
pub async fn create_review(
    pool: &PgPool,
    boat_id: i32,
    subject: &str,
    comment: &str,
    rating: i32,
    reviewer: &str,
) -> Result<Review, QueryError> {
    let row = sqlx::query(
        r#"
        INSERT INTO reviews (boat_id, subject, comment, rating, reviewer)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, boat_id, subject, comment, rating, reviewer, created_at
        "#,
    )
    .bind(boat_id)
    .bind(subject)
    .bind(comment)
    .bind(rating)
    .bind(reviewer)
    .fetch_one(pool)
    .await?;

    Ok(Review {
        id: row.get("id"),
        boat_id: row.get("boat_id"),
        subject: row.get("subject"),
        comment: row.get("comment"),
        rating: row.get("rating"),
        reviewer: row.get("reviewer"),
        created_at: row.get("created_at"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_bounds() {
        let (low, high) = similarity_bounds(100.0, 0.2);
        assert!((low - 80.0).abs() < f64::EPSILON);
        assert!((high - 120.0).abs() < f64::EPSILON);

        let (low, high) = similarity_bounds(0.0, 0.2);
        assert_eq!(low, 0.0);
        assert_eq!(high, 0.0);
    }

    #[test]
    fn test_similarity_bounds_tolerance() {
        let (low, high) = similarity_bounds(30.0, SIMILARITY_TOLERANCE);
        assert!((low - 24.0).abs() < 1e-9);
        assert!((high - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_boat_select_joins_type_name() {
        assert!(BOAT_SELECT.contains("JOIN boat_types"));
        assert!(BOAT_SELECT.contains("t.name as boat_type"));
        assert!(BOAT_SELECT.contains("price::numeric as price"));
    }

    #[test]
    fn test_related_limit_is_bounded() {
        assert_eq!(RELATED_LIMIT, 10);
    }

    #[test]
    fn test_query_error_display() {
        let err = QueryError::NotFound(42);
        assert_eq!(err.to_string(), "boat 42 not found");
    }
}

//! Repository for the `productions` table.

use sqlx::PgPool;

use callsheet_core::types::DbId;

use crate::models::production::{CreateProduction, Production, UpdateProduction};
use crate::repositories::instantiation::{InstantiationError, InstantiationSummary, Instantiator};
use crate::repositories::CategoryRepo;

const COLUMNS: &str = "id, name, starts_at, description, location, is_published, \
     plan_heading_id, created_at, updated_at";

/// Provides CRUD operations for productions, including atomic creation from
/// a category's templates.
pub struct ProductionRepo;

impl ProductionRepo {
    /// Insert a production with empty demand/plan/check-in collections.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProduction,
    ) -> Result<Production, sqlx::Error> {
        let query = format!(
            "INSERT INTO productions (name, starts_at, description, location) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Production>(&query)
            .bind(&input.name)
            .bind(input.starts_at)
            .bind(&input.description)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// Insert a production and instantiate `category_id`'s templates into it
    /// as one atomic write.
    ///
    /// The production row, demand rows, plan rows, and check-in rows commit
    /// together or not at all: any instantiation failure rolls back the
    /// production itself. The location defaults from the category when the
    /// request did not supply one.
    pub async fn create_with_template(
        pool: &PgPool,
        input: &CreateProduction,
        category_id: DbId,
    ) -> Result<(Production, InstantiationSummary), InstantiationError> {
        let mut tx = pool.begin().await?;

        let category = CategoryRepo::find_by_id(&mut *tx, category_id)
            .await?
            .ok_or(InstantiationError::TemplateNotFound { category_id })?;

        let location = input.location.clone().or(category.default_location);

        let insert_query = format!(
            "INSERT INTO productions (name, starts_at, description, location) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let production = sqlx::query_as::<_, Production>(&insert_query)
            .bind(&input.name)
            .bind(input.starts_at)
            .bind(&input.description)
            .bind(&location)
            .fetch_one(&mut *tx)
            .await?;

        let summary =
            Instantiator::apply(&mut tx, category_id, production.id, production.starts_at).await?;

        tx.commit().await?;
        Ok((production, summary))
    }

    /// Find a production by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Production>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM productions WHERE id = $1");
        sqlx::query_as::<_, Production>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List productions, soonest start first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Production>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM productions ORDER BY starts_at ASC, id ASC");
        sqlx::query_as::<_, Production>(&query).fetch_all(pool).await
    }

    /// Update a production. Only non-`None` fields are applied. Check-in
    /// entries are deliberately not recomputed when `starts_at` changes.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduction,
    ) -> Result<Option<Production>, sqlx::Error> {
        let query = format!(
            "UPDATE productions SET \
                name = COALESCE($2, name), \
                starts_at = COALESCE($3, starts_at), \
                description = COALESCE($4, description), \
                location = COALESCE($5, location), \
                is_published = COALESCE($6, is_published), \
                plan_heading_id = COALESCE($7, plan_heading_id), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Production>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.starts_at)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.is_published)
            .bind(input.plan_heading_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a production by ID. Snapshot collections and assignments
    /// cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM productions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

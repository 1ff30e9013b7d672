//! Project repository
//!
//! A [`ProjectStore`] hands out one [`ProjectConnection`] per request. The
//! connection goes back to the pool when the boxed value is dropped, so every
//! exit path of a caller releases it exactly once.

use async_trait::async_trait;
use sqlx::{pool::PoolConnection, PgPool, Postgres};
use uuid::Uuid;

use crate::{error::AppResult, models::ProjectChanges};

/// Source of scoped project connections
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Acquire a connection for the duration of one request
    async fn acquire(&self) -> AppResult<Box<dyn ProjectConnection>>;
}

/// A connection checked out of a [`ProjectStore`]
#[async_trait]
pub trait ProjectConnection: Send {
    /// Write `changes` to the project identified by `project_id` if, and only
    /// if, it is owned by `owner_id`. Returns the number of affected rows.
    async fn update_owned(
        &mut self,
        project_id: &Uuid,
        owner_id: &Uuid,
        changes: &ProjectChanges,
    ) -> AppResult<u64>;
}

/// Postgres-backed project store
#[derive(Clone)]
pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn acquire(&self) -> AppResult<Box<dyn ProjectConnection>> {
        let conn = self.pool.acquire().await?;
        Ok(Box::new(PgProjectConnection { conn }))
    }
}

/// Pooled Postgres connection
struct PgProjectConnection {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl ProjectConnection for PgProjectConnection {
    async fn update_owned(
        &mut self,
        project_id: &Uuid,
        owner_id: &Uuid,
        changes: &ProjectChanges,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE project
            SET
                title = $1,
                subtitle = $2,
                category = $3,
                ubication = $4,
                image_url = $5,
                video_url = $6,
                prize = $7,
                duration = $8,
                text = $9,
                updated_at = $10
            WHERE id = $11
              AND user_id = $12
            "#,
        )
        .bind(&changes.title)
        .bind(&changes.subtitle)
        .bind(&changes.category)
        .bind(&changes.ubication)
        .bind(changes.image_url.as_deref())
        .bind(changes.video_url.as_deref())
        .bind(changes.prize)
        .bind(changes.duration)
        .bind(&changes.text)
        .bind(changes.updated_at)
        .bind(project_id)
        .bind(owner_id)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::Project, test_utils::containers, utils::now_utc_seconds};
    use chrono::NaiveDate;

    async fn seed(pool: &PgPool, owner: Uuid) -> Uuid {
        let id = Uuid::new_v4();
        let created = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        sqlx::query(
            r#"
            INSERT INTO project (
                id, user_id, title, subtitle, category, ubication,
                prize, duration, text, created_at, updated_at
            )
            VALUES ($1, $2, 'Old', 'Old subtitle', 'art', 'Madrid', 10, 30, 'old text', $3, $3)
            "#,
        )
        .bind(id)
        .bind(owner)
        .bind(created)
        .execute(pool)
        .await
        .unwrap();
        id
    }

    fn changes() -> ProjectChanges {
        ProjectChanges {
            title: "Community garden".to_string(),
            subtitle: "Raised beds for the neighbourhood".to_string(),
            category: "environment".to_string(),
            ubication: "Valencia".to_string(),
            image_url: Some("https://cdn.example.com/garden.png".to_string()),
            video_url: None,
            prize: 2500.0,
            duration: 45.0,
            text: "We are building twelve raised beds.".to_string(),
            updated_at: now_utc_seconds(),
        }
    }

    #[tokio::test]
    #[ignore = "requires Docker for the Postgres container"]
    async fn test_update_is_scoped_to_owner() {
        let (_container, pool) = containers::postgres_pool().await;
        let store = PgProjectStore::new(pool.clone());
        let owner = Uuid::new_v4();
        let id = seed(&pool, owner).await;
        let changes = changes();

        let mut conn = store.acquire().await.unwrap();
        let stranger = Uuid::new_v4();
        assert_eq!(conn.update_owned(&id, &stranger, &changes).await.unwrap(), 0);
        assert_eq!(
            conn.update_owned(&Uuid::new_v4(), &owner, &changes).await.unwrap(),
            0
        );
        assert_eq!(conn.update_owned(&id, &owner, &changes).await.unwrap(), 1);
        drop(conn);

        let stored = sqlx::query_as::<_, Project>("SELECT * FROM project WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(stored.title, changes.title);
        assert_eq!(stored.image_url, changes.image_url);
        assert_eq!(stored.video_url, None);
        assert_eq!(stored.prize, changes.prize);
        assert_eq!(stored.updated_at, changes.updated_at);
        assert!(stored.updated_at > stored.created_at);
    }

    #[tokio::test]
    #[ignore = "requires Docker for the Postgres container"]
    async fn test_repeated_update_still_matches_one_row() {
        let (_container, pool) = containers::postgres_pool().await;
        let store = PgProjectStore::new(pool.clone());
        let owner = Uuid::new_v4();
        let id = seed(&pool, owner).await;
        let changes = changes();

        let mut conn = store.acquire().await.unwrap();
        assert_eq!(conn.update_owned(&id, &owner, &changes).await.unwrap(), 1);
        assert_eq!(conn.update_owned(&id, &owner, &changes).await.unwrap(), 1);
    }
}

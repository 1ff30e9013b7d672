//! Test utilities: an in-memory project store, fixtures, and app builders.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::repositories::{ProjectConnection, ProjectStore},
    error::{AppError, AppResult},
    models::{Project, ProjectChanges},
};

/// Project store backed by a map, counting connection checkouts and returns
#[derive(Clone, Default)]
pub struct InMemoryProjectStore {
    inner: Arc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    rows: Mutex<HashMap<Uuid, Project>>,
    acquired: AtomicUsize,
    released: AtomicUsize,
    failure: Mutex<Option<String>>,
}

impl InMemoryProjectStore {
    pub fn insert(&self, project: Project) -> Project {
        self.inner
            .rows
            .lock()
            .unwrap()
            .insert(project.id, project.clone());
        project
    }

    pub fn get(&self, id: &Uuid) -> Option<Project> {
        self.inner.rows.lock().unwrap().get(id).cloned()
    }

    /// Make every subsequent update fail with `message`
    pub fn fail_updates(&self, message: &str) {
        *self.inner.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn acquired(&self) -> usize {
        self.inner.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.inner.released.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn acquire(&self) -> AppResult<Box<dyn ProjectConnection>> {
        self.inner.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(InMemoryConnection {
            inner: self.inner.clone(),
        }))
    }
}

struct InMemoryConnection {
    inner: Arc<StoreInner>,
}

impl Drop for InMemoryConnection {
    fn drop(&mut self) {
        self.inner.released.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProjectConnection for InMemoryConnection {
    async fn update_owned(
        &mut self,
        project_id: &Uuid,
        owner_id: &Uuid,
        changes: &ProjectChanges,
    ) -> AppResult<u64> {
        if let Some(message) = self.inner.failure.lock().unwrap().clone() {
            return Err(AppError::Database(message));
        }

        let mut rows = self.inner.rows.lock().unwrap();
        match rows.get_mut(project_id) {
            Some(project) if project.user_id == *owner_id => {
                apply_changes(project, changes);
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

fn apply_changes(project: &mut Project, changes: &ProjectChanges) {
    project.title.clone_from(&changes.title);
    project.subtitle.clone_from(&changes.subtitle);
    project.category.clone_from(&changes.category);
    project.ubication.clone_from(&changes.ubication);
    project.image_url.clone_from(&changes.image_url);
    project.video_url.clone_from(&changes.video_url);
    project.prize = changes.prize;
    project.duration = changes.duration;
    project.text.clone_from(&changes.text);
    project.updated_at = changes.updated_at;
}

pub mod fixtures {
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::models::Project;

    /// An existing project last touched on 2020-01-01
    pub fn project(owner: Uuid) -> Project {
        let stamp = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Project {
            id: Uuid::new_v4(),
            user_id: owner,
            title: "Old title".to_string(),
            subtitle: "Old subtitle".to_string(),
            category: "art".to_string(),
            ubication: "Madrid".to_string(),
            image_url: None,
            video_url: None,
            prize: 100.0,
            duration: 30.0,
            text: "Old description".to_string(),
            created_at: stamp,
            updated_at: stamp,
        }
    }

    /// A well-formed update body
    pub fn update_body() -> Value {
        json!({
            "title": "Community garden",
            "subtitle": "Raised beds for the neighbourhood",
            "category": "environment",
            "ubication": "Valencia",
            "image_url": "https://cdn.example.com/garden.png",
            "video_url": "https://video.example.com/garden.mp4",
            "prize": 2500,
            "duration": 45,
            "text": "We are building twelve raised beds for the community.",
            "rewards": [
                { "prize": 5, "title": "Postcard", "month": "May", "year": 2025, "subtitle": "Hand drawn" }
            ]
        })
    }

    /// An update body already merged with caller and project ids
    pub fn merged_payload(owner: Uuid, project: Uuid) -> Value {
        let mut body = update_body();
        body["userId"] = json!(owner.to_string());
        body["projectId"] = json!(project.to_string());
        body
    }
}

pub mod test_app {
    use axum::Router;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    use crate::{
        config::{Config, DatabaseConfig, JwtConfig, ServerConfig},
        db::repositories::ProjectStore,
        middleware::auth::Claims,
        state::AppState,
    };

    pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only";

    pub fn test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
            },
            database: DatabaseConfig {
                url: "postgres://unused".to_string(),
                max_connections: 1,
            },
            jwt: JwtConfig {
                secret: TEST_JWT_SECRET.to_string(),
            },
        }
    }

    /// Build the full router around the given store
    pub fn create_test_app(store: impl ProjectStore + 'static) -> Router {
        crate::create_router(AppState::new(store, test_config()))
    }

    /// `Authorization` header value for `user_id`
    pub fn bearer_token(user_id: &str) -> String {
        let claims = Claims {
            user_id: user_id.to_string(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        )
        .unwrap();
        format!("Bearer {token}")
    }
}

pub mod containers {
    use sqlx::PgPool;
    use testcontainers::{runners::AsyncRunner, ContainerAsync};
    use testcontainers_modules::postgres::Postgres;

    /// Start a throwaway Postgres and return a migrated pool.
    /// Keep the container alive for as long as the pool is used.
    pub async fn postgres_pool() -> (ContainerAsync<Postgres>, PgPool) {
        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start PostgreSQL container");
        let host = container.get_host().await.unwrap();
        let port = container.get_host_port_ipv4(5432).await.unwrap();
        let url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        let pool = PgPool::connect(&url)
            .await
            .expect("Failed to connect to test database");
        crate::db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        (container, pool)
    }
}

//! Application state - shared across all handlers.

use std::sync::Arc;

use blogicum_core::BlogService;
use blogicum_core::domain::Category;
use blogicum_core::ports::BaseRepository;
use blogicum_infra::InMemoryStore;
use blogicum_infra::database::DatabaseConnections;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: BlogService,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state, falling back to the in-memory store when
    /// no database is configured or reachable.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => {
                        if config.run_migrations {
                            run_migrations(&connections).await;
                        }
                        let repos =
                            blogicum_infra::database::postgres_repositories(&connections.main);
                        tracing::info!("Application state initialized (postgres)");
                        return Self {
                            blog: BlogService::new(repos),
                            db: Some(Arc::new(connections)),
                        };
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            if config.database.is_some() {
                tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
            }
        }

        let state = Self::in_memory();
        state.seed_default_category().await;
        tracing::info!("Application state initialized (in-memory)");
        state
    }

    /// Empty in-memory state.
    pub fn in_memory() -> Self {
        Self {
            blog: BlogService::new(InMemoryStore::new().repositories()),
            db: None,
        }
    }

    pub fn storage(&self) -> &'static str {
        if self.db.is_some() { "postgres" } else { "memory" }
    }

    // Categories are managed outside the API; without a database there is no
    // other way to get one.
    async fn seed_default_category(&self) {
        let general = Category::new(
            "General".to_string(),
            "general".to_string(),
            "Everything else".to_string(),
        );
        if let Err(e) = self.blog.repositories().categories.create(general).await {
            tracing::warn!("Could not seed default category: {}", e);
        }
    }
}

#[cfg(feature = "postgres")]
async fn run_migrations(connections: &DatabaseConnections) {
    use migration::{Migrator, MigratorTrait};

    match Migrator::up(&*connections.main, None).await {
        Ok(()) => tracing::info!("Migrations applied"),
        Err(e) => tracing::error!("Failed to apply migrations: {}", e),
    }
}

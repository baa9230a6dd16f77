//! Processor context - dependency injection container

use std::sync::Arc;

use rostering_core::{AvailabilityEventProcessor, VisitRepository};
#[cfg(feature = "sqlite")]
use rostering_domain::Config;
use rostering_domain::{AvailabilityEvent, ProcessorConfig, Result, Visit};

#[cfg(feature = "sqlite")]
use crate::database::{DbManager, SqliteVisitRepository};
use crate::memory::InMemoryVisitRepository;

/// Holds the event processor together with the store it writes to.
pub struct ProcessorContext {
    /// Dispatcher wired to `visits`
    pub processor: AvailabilityEventProcessor,
    /// Store the processor reads and writes
    pub visits: Arc<dyn VisitRepository>,
    #[cfg(feature = "sqlite")]
    /// Pool behind `visits` when it is SQLite-backed
    pub db: Option<Arc<DbManager>>,
}

impl ProcessorContext {
    /// Open the configured SQLite visit store and build a processor over it.
    ///
    /// # Errors
    /// Returns the first configuration or database error encountered.
    #[cfg(feature = "sqlite")]
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        let visits: Arc<dyn VisitRepository> = Arc::new(SqliteVisitRepository::new(Arc::clone(&db)));
        let processor = AvailabilityEventProcessor::new(Arc::clone(&visits))
            .with_lookahead_months(config.processor.lookahead_months);

        tracing::info!(
            db_path = %config.database.path,
            lookahead_months = config.processor.lookahead_months,
            "processor context ready"
        );

        Ok(Self { processor, visits, db: Some(db) })
    }

    /// Build a processor over an in-memory store seeded with `visits`.
    pub fn in_memory(visits: impl IntoIterator<Item = Visit>, config: &ProcessorConfig) -> Self {
        let visits: Arc<dyn VisitRepository> = Arc::new(InMemoryVisitRepository::new(visits));
        let processor = AvailabilityEventProcessor::new(Arc::clone(&visits))
            .with_lookahead_months(config.lookahead_months);

        Self {
            processor,
            visits,
            #[cfg(feature = "sqlite")]
            db: None,
        }
    }

    /// Apply one event through the processor.
    ///
    /// # Errors
    /// Propagates the handler's error unchanged.
    pub async fn process(&self, event: &AvailabilityEvent) -> Result<()> {
        self.processor.process(event).await
    }
}

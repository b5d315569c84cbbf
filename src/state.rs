use crate::{
    config::RuntimeConfiguration,
    data::{StudentStore, mysql::MySqlStudentStore},
    error::MahasiswaResult,
};
use sqlx::mysql::MySqlPoolOptions;
use std::{ops::Deref, sync::Arc};

/// Handed to every handler; owns the store (and so the pool) for the life of the process.
#[derive(Clone, Debug)]
pub struct MahasiswaState {
    store: Arc<dyn StudentStore>,
}

impl MahasiswaState {
    pub async fn new(
        options: MySqlPoolOptions,
        config: &RuntimeConfiguration,
    ) -> MahasiswaResult<Self> {
        let store = MySqlStudentStore::connect(options, &config.db_config()).await?;

        Ok(Self::with_store(Arc::new(store)))
    }

    pub fn with_store(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    pub async fn sensible_shutdown(&self) {
        self.store.close().await;
        info!("Closed database pool");
    }
}

impl Deref for MahasiswaState {
    type Target = dyn StudentStore;

    fn deref(&self) -> &Self::Target {
        self.store.as_ref()
    }
}

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    command,
    config::Config,
    error::AppError,
    service::{
        dispatch::Dispatcher,
        storage::DatabaseStorage,
        temp_storage::FsTempStorage,
    },
};

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date
/// before the bot reads any guild configuration.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the dispatcher with the built-in commands and configured collaborators.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Migrated database connection
///
/// # Returns
/// - `Ok(Dispatcher)` - Dispatcher ready to receive messages
/// - `Err(AppError::InternalError)` - The command registry is inconsistent
pub fn build_dispatcher(
    config: &Config,
    db: sea_orm::DatabaseConnection,
) -> Result<Dispatcher, AppError> {
    let registry = command::registry()?;
    tracing::info!("Registered {} commands", registry.len());

    let storage = DatabaseStorage::new(db, config.default_prefix.clone());

    let mut dispatcher = Dispatcher::new(Arc::new(registry), Arc::new(storage))
        .with_support_url(config.support_url.clone());

    if let Some(temp_storage) = &config.temp_storage {
        tracing::info!(
            "Oversized results go to {} served from {}",
            temp_storage.dir.display(),
            temp_storage.domain
        );
        dispatcher = dispatcher.with_temp_storage(Arc::new(FsTempStorage::new(temp_storage)));
    }

    Ok(dispatcher)
}

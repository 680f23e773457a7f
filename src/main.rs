use commandbot::{bot, config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;
    let dispatcher = startup::build_dispatcher(&config, db)?;

    bot::start::start_bot(&config, dispatcher).await
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but is not a valid URL.
    #[error("Environment variable {name} is not a valid URL: {source}")]
    InvalidUrl {
        /// Name of the offending variable
        name: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },
}

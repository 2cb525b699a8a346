use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    pub fn from_env() -> Self {
        match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string())
            .to_lowercase()
            .as_str()
        {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

/// Initialize tracing subscriber with pretty formatting for development
/// and JSON formatting for production.
///
/// Uses RUST_LOG environment variable for filtering (defaults to "info" if not set).
pub fn setup_logging(environment: Environment) {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    match environment {
        Environment::Production => {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_level(true))
                .init();
        }
        Environment::Development => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty().with_ansi(true))
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_environment_defaults_to_development() {
        unsafe { std::env::remove_var("ENVIRONMENT") };
        assert_eq!(Environment::from_env(), Environment::Development);
    }

    #[test]
    #[serial]
    fn test_environment_recognizes_production_aliases() {
        unsafe { std::env::set_var("ENVIRONMENT", "prod") };
        assert_eq!(Environment::from_env(), Environment::Production);

        unsafe { std::env::set_var("ENVIRONMENT", "PRODUCTION") };
        assert_eq!(Environment::from_env(), Environment::Production);

        unsafe { std::env::remove_var("ENVIRONMENT") };
    }
}

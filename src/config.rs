use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            AppEnvironment::Production
        } else {
            AppEnvironment::Development
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub environment: AppEnvironment,
    /// Running under a serverless host; no listener is bound
    pub serverless: bool,
    pub public_dir: PathBuf,
    pub client_dir: PathBuf,
    pub dist_dir: PathBuf,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(
                    "cannot parse `PORT` value {:?}: {}. defaulting to {}",
                    raw,
                    err,
                    DEFAULT_PORT
                );
                DEFAULT_PORT
            }),
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());

        let environment = lookup("APP_ENV")
            .or_else(|| lookup("NODE_ENV"))
            .map(|value| AppEnvironment::parse(&value))
            .unwrap_or(AppEnvironment::Development);

        let public_dir = lookup("PUBLIC_DIR").map(PathBuf::from).unwrap_or_else(|| {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("public")
        });

        Self {
            port,
            database_url,
            environment,
            serverless: lookup("VERCEL").is_some(),
            public_dir,
            client_dir: lookup("CLIENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("client")),
            dist_dir: lookup("DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("dist/public")),
        }
    }
}

use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub mirror_url: String,
    pub contact_webhook_url: Option<String>,
    pub github_api_base: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn load() -> Self {
        let data_dir = PathBuf::from(try_load::<String>("DATA_DIR", "data"));
        let mirror_url = env::var("MIRROR_DATABASE_URL").unwrap_or_else(|_| {
            format!("sqlite://{}/mirror.db?mode=rwc", data_dir.display())
        });
        let contact_webhook_url = env::var("CONTACT_WEBHOOK_URL").ok();
        if contact_webhook_url.is_none() {
            info!("CONTACT_WEBHOOK_URL not set, contact notifications disabled");
        }

        Self {
            port: try_load("PORT", "8001"),
            data_dir,
            mirror_url,
            contact_webhook_url,
            github_api_base: try_load("GITHUB_API_BASE", "https://api.github.com"),
            request_timeout_secs: try_load("REQUEST_TIMEOUT_SECS", "10"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

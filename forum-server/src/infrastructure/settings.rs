use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) database_url: String,
    pub(crate) http_addr: String,
    pub(crate) cors_origins: Vec<String>,
    pub(crate) log_level: String,
    pub(crate) user_directory_url: String,
    pub(crate) http_request_body_limit_bytes: usize,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => compose_database_url()?,
        };

        let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let port: u16 = port
            .parse()
            .context("Failed to parse PORT, expecting integer")?;
        let http_addr = format!("0.0.0.0:{port}");

        let cors_origins = parse_cors_origins(
            std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());
        let user_directory_url = std::env::var("USER_DIRECTORY_URL")
            .unwrap_or_else(|_| "https://jsonplaceholder.typicode.com".to_string());
        let http_request_body_limit_bytes =
            parse_usize_env("HTTP_REQUEST_BODY_LIMIT_BYTES", 1024 * 1024)?;

        Ok(Self {
            database_url,
            http_addr,
            cors_origins,
            log_level,
            user_directory_url,
            http_request_body_limit_bytes,
        })
    }
}

fn compose_database_url() -> Result<String> {
    let host = get_required("PGHOST")?;
    let port = std::env::var("PGPORT").unwrap_or_else(|_| "5432".to_string());
    let port: u16 = port
        .parse()
        .context("Failed to parse PGPORT, expecting integer")?;
    let user = get_required("PGUSER")?;
    let password = get_required("PGPASSWORD")?;
    let database = get_required("PGDATABASE")?;

    Ok(format!("postgres://{user}:{password}@{host}:{port}/{database}"))
}

fn get_required(key: &str) -> Result<String> {
    let value =
        std::env::var(key).with_context(|| format!("{key} is required (or set DATABASE_URL)"))?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

fn parse_cors_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_usize_env(key: &str, default: usize) -> Result<usize> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<usize>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::parse_cors_origins;

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let origins = parse_cors_origins("http://a.test , http://b.test,,".to_string());
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }
}

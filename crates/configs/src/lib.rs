use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Which `ServiceProvider` backend the server wires up at startup.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Database,
}

impl std::str::FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "database" | "db" => Ok(Self::Database),
            other => Err(anyhow!("unknown storage backend `{other}`; expected memory or database")),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// JSON snapshot file for the memory backend; `None` keeps state in RAM only.
    #[serde(default)]
    pub snapshot_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_page_size")]
    pub default_size: u32,
    #[serde(default = "default_max_page_size")]
    pub max_size: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self { default_size: default_page_size(), max_size: default_max_page_size() }
    }
}

fn default_page_size() -> u32 { 25 }
fn default_max_page_size() -> u32 { 100 }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

/// Parsed file at `path`, or `None` when it does not exist. Read and parse errors propagate.
pub fn load_optional(path: &str) -> Result<Option<AppConfig>> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse(&content).map(Some).map_err(|e| anyhow!("invalid config file {path}: {e}")),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(anyhow!("cannot read config file {path}: {e}")),
    }
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file if present, otherwise environment variables over defaults.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path())
    }

    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let mut cfg = match load_optional(path)? {
            Some(cfg) => cfg,
            None => Self::from_env(),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg.server.worker_threads = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok());
        if let Some(backend) = std::env::var("STORAGE_BACKEND").ok().and_then(|b| b.parse().ok()) {
            cfg.storage.backend = backend;
        }
        cfg.storage.snapshot_path = std::env::var("STORAGE_SNAPSHOT").ok().filter(|p| !p.trim().is_empty());
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.listing.normalize()?;
        if self.storage.backend == StorageBackend::Database {
            self.database.normalize_from_env();
            self.database.validate()?;
        }
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl ListingConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.max_size == 0 {
            return Err(anyhow!("listing.max_size must be >= 1"));
        }
        if self.default_size == 0 || self.default_size > self.max_size {
            self.default_size = self.max_size.min(default_page_size());
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_memory_defaults() -> Result<()> {
        let mut cfg = parse("")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.listing.default_size, 25);
        assert_eq!(cfg.listing.max_size, 100);
        Ok(())
    }

    #[test]
    fn parses_storage_and_listing_sections() -> Result<()> {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [storage]
            backend = "memory"
            snapshot_path = "data/addressbooks.json"

            [listing]
            default_size = 10
            max_size = 50
            "#,
        )?;
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.storage.snapshot_path.as_deref(), Some("data/addressbooks.json"));
        assert_eq!(cfg.listing.default_size, 10);
        assert_eq!(cfg.listing.max_size, 50);
        Ok(())
    }

    #[test]
    fn database_backend_requires_postgres_url() -> Result<()> {
        let mut cfg = parse(
            r#"
            [storage]
            backend = "database"

            [database]
            url = "mysql://localhost/db"
            "#,
        )?;
        assert!(cfg.normalize_and_validate().is_err());
        Ok(())
    }

    #[test]
    fn default_size_is_clamped_to_max() -> Result<()> {
        let mut cfg = parse("[listing]\ndefault_size = 500\nmax_size = 40\n")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.listing.default_size, 25);
        Ok(())
    }

    #[test]
    fn database_section_may_be_omitted() -> Result<()> {
        let mut cfg = parse("[storage]\nbackend = \"database\"\n")?;
        cfg.database.url = "postgres://localhost/addressbooks".into();
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.database.min_connections, 2);
        assert_eq!(cfg.database.max_connections, 10);
        assert_eq!(cfg.database.acquire_timeout_secs, 30);
        Ok(())
    }

    #[test]
    fn default_database_config_passes_validation() {
        let cfg = DatabaseConfig { url: "postgresql://db/addressbooks".into(), ..Default::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_server_section_keeps_defaults() -> Result<()> {
        let cfg = parse("[server]\nhost = \"0.0.0.0\"\n[storage]\nsnapshot_path = \"x.json\"\n")?;
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.storage.snapshot_path.as_deref(), Some("x.json"));
        Ok(())
    }

    fn temp_file(name: &str, content: &str) -> Result<std::path::PathBuf> {
        let path = std::env::temp_dir().join(format!("addressbooks-{}-{name}", std::process::id()));
        std::fs::write(&path, content)?;
        Ok(path)
    }

    #[test]
    fn config_file_wins_over_env() -> Result<()> {
        let path = temp_file("partial.toml", "[server]\nhost = \"0.0.0.0\"\n[storage]\nsnapshot_path = \"x.json\"\n")?;
        let cfg = AppConfig::load_or_env_from(&path.to_string_lossy());
        std::fs::remove_file(&path)?;
        let cfg = cfg?;
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.storage.snapshot_path.as_deref(), Some("x.json"));
        Ok(())
    }

    #[test]
    fn broken_config_file_is_an_error() -> Result<()> {
        let path = temp_file("broken.toml", "[server\nhost = ")?;
        let res = AppConfig::load_or_env_from(&path.to_string_lossy());
        std::fs::remove_file(&path)?;
        assert!(res.is_err());
        Ok(())
    }

    #[test]
    fn missing_config_file_is_not_an_error() -> Result<()> {
        assert!(load_optional("/nonexistent/addressbooks/config.toml")?.is_none());
        Ok(())
    }

    #[test]
    fn backend_from_str() {
        assert_eq!("Memory".parse::<StorageBackend>().ok(), Some(StorageBackend::Memory));
        assert_eq!("db".parse::<StorageBackend>().ok(), Some(StorageBackend::Database));
        assert!("redis".parse::<StorageBackend>().is_err());
    }
}

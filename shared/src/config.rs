use std::str::FromStr;

use anyhow::{bail, Context, Result};

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // 環境変数の代わりに任意の参照関数から設定値を組み立てる
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("STORE_BACKEND") {
            Some(v) => v.parse()?,
            None => StoreBackend::DynamoDb,
        };
        let database = DatabaseConfig {
            backend,
            reservation_table: lookup("RESERVATION_TABLE")
                .unwrap_or_else(|| "reservation".into()),
            reservation_by_property_index: lookup("RESERVATION_BY_PROPERTY_INDEX")
                .unwrap_or_else(|| "reservation-by-property-id".into()),
            property_table: lookup("PROPERTY_TABLE").unwrap_or_else(|| "properties".into()),
            endpoint_url: lookup("DYNAMODB_ENDPOINT_URL"),
            page_size: parse_or("QUERY_PAGE_SIZE", &lookup, 1000)?,
        };
        if database.page_size < 1 {
            bail!("QUERY_PAGE_SIZE must be at least 1");
        }
        let server = ServerConfig {
            port: parse_or("PORT", &lookup, 8080)?,
        };
        Ok(Self { database, server })
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) => v
            .parse()
            .with_context(|| format!("invalid value for {key}: {v}")),
        None => Ok(default),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    DynamoDb,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dynamodb" => Ok(Self::DynamoDb),
            "memory" => Ok(Self::Memory),
            other => bail!("unknown store backend: {other}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    pub reservation_table: String,
    pub reservation_by_property_index: String,
    pub property_table: String,
    pub endpoint_url: Option<String>,
    pub page_size: i32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            reservation_table: "reservation".into(),
            reservation_by_property_index: "reservation-by-property-id".into(),
            property_table: "properties".into(),
            endpoint_url: None,
            page_size: 1000,
        }
    }
}

pub struct ServerConfig {
    pub port: u16,
}

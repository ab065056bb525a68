//! Configuration management for the compliance server

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::docx::DEFAULT_MAX_PART_BYTES;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub link_check: LinkCheckConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Directory for request-scoped staging files
    pub dir: PathBuf,
    /// Request body limit for uploads
    pub max_bytes: usize,
    /// Uncompressed size limit for each part read from the container
    pub max_part_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct LinkCheckConfig {
    pub timeout_secs: u64,
    pub max_redirects: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5001,
            },
            upload: UploadConfig {
                dir: env::temp_dir(),
                max_bytes: 25 * 1024 * 1024,
                max_part_bytes: DEFAULT_MAX_PART_BYTES,
            },
            link_check: LinkCheckConfig {
                timeout_secs: 5,
                max_redirects: 10,
            },
        }
    }
}

impl Config {
    /// Read overrides from the environment, keeping defaults for anything unset
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_var("SERVER_PORT", defaults.server.port),
            },
            upload: UploadConfig {
                dir: env::var("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.upload.dir),
                max_bytes: parse_var("MAX_UPLOAD_BYTES", defaults.upload.max_bytes),
                max_part_bytes: parse_var("MAX_PART_BYTES", defaults.upload.max_part_bytes),
            },
            link_check: LinkCheckConfig {
                timeout_secs: parse_var("LINK_CHECK_TIMEOUT_SECS", defaults.link_check.timeout_secs),
                max_redirects: parse_var(
                    "LINK_CHECK_MAX_REDIRECTS",
                    defaults.link_check.max_redirects,
                ),
            },
        }
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid value for {}: {:?}, using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}

use std::sync::LazyLock;

use crate::utils::env::{parse_env, parse_env_opt};

pub struct MongoConfigs {
    pub uri: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub auth_source: String,
    pub ssl: bool,
    pub ca_file_path: Option<String>,
    pub cert_key_file_path: Option<String>,
    pub allow_invalid_certificates: Option<bool>,
    pub connect_timeout_secs: u64,
}

pub static MONGO_CONFIGS: LazyLock<MongoConfigs> = LazyLock::new(|| MongoConfigs {
    uri: parse_env("MONGO_URI", "mongodb://localhost:27017"),
    username: parse_env_opt("MONGO_USERNAME"),
    password: parse_env_opt("MONGO_PASSWORD"),
    auth_source: parse_env("MONGO_AUTH_SOURCE", "admin"),
    ssl: parse_env("MONGO_SSL", "false"),
    ca_file_path: parse_env_opt("MONGO_TLS_CA_FILE"),
    cert_key_file_path: parse_env_opt("MONGO_TLS_CERT_KEY_FILE"),
    allow_invalid_certificates: parse_env_opt("MONGO_TLS_INSECURE"),
    connect_timeout_secs: parse_env("MONGO_CONNECT_TIMEOUT_SECS", "10"),
});

//! Server configuration. Values come from the environment with defaults
//! suitable for local development; the database path is overridable so
//! tests can point the store at a scratch file.

use std::env;
use std::path::PathBuf;

pub const HOST: &str = "127.0.0.1";
pub const PORT: u16 = 8080;

/// Path of the SQLite database file.
pub fn database_path() -> PathBuf {
    env::var("MATSON_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("matson.sqlite"))
}

/// Credentials of the single company (admin) account.
pub fn company_email() -> String {
    env::var("MATSON_COMPANY_EMAIL").unwrap_or_else(|_| "company@matson.app".to_string())
}

pub fn company_password() -> String {
    env::var("MATSON_COMPANY_PASSWORD").unwrap_or_else(|_| "change-me".to_string())
}

/// Flat price recorded for a template purchase created by the intake flow.
pub const TEMPLATE_PRICE: f64 = 4999.0;

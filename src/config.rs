//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Product name sent in the `User-Agent` header of every request (e.g. `TaskCal/0.1.0`).
/// Feel free to override it when initing this library.
pub static PRODUCT_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("TaskCal".to_string())));

/// The server used when none is explicitly given.
/// Feel free to override it when initing this library.
pub static DEFAULT_SERVER_URL: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("http://localhost:5000/".to_string())));

/// Environment variable that, when set, takes precedence over [`DEFAULT_SERVER_URL`]
pub const SERVER_URL_ENV: &str = "TASKCAL_SERVER_URL";

/// The `User-Agent` header value
pub fn user_agent() -> String {
    let product = match PRODUCT_NAME.lock() {
        Ok(name) => name.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    };
    format!("{}/{}", product, env!("CARGO_PKG_VERSION"))
}

/// The server URL to use: [`SERVER_URL_ENV`] if it is set, [`DEFAULT_SERVER_URL`] otherwise
pub fn server_url() -> String {
    match std::env::var(SERVER_URL_ENV) {
        Ok(url) if url.is_empty() == false => url,
        _ => match DEFAULT_SERVER_URL.lock() {
            Ok(url) => url.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        },
    }
}

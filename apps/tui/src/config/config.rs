use dotenv::dotenv;
use std::env;

/// Base URL of the remote catalog service. Absence of connectivity is a
/// normal operating mode, so nothing here checks reachability.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Initializes the application configuration
/// Returns the remote API base URL
pub fn init_app_config() -> String {
    // Load environment variables from .env file
    dotenv().ok();

    let api_url = api_base_url();
    if debug_enabled() {
        eprintln!("Using API base URL: {api_url}");
    }

    api_url
}

/// Gets the API base URL from the environment, without a trailing slash
pub fn api_base_url() -> String {
    env::var("XENODEX_API_URL")
        .map_or_else(|_| DEFAULT_API_URL.to_string(), |url| url)
        .trim_end_matches('/')
        .to_string()
}

/// Whether diagnostic logging is switched on (`--debug` or `DEBUG=1`)
pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_has_no_trailing_slash() {
        assert!(!DEFAULT_API_URL.ends_with('/'));
    }

    #[test]
    fn base_url_strips_trailing_slash() {
        env::set_var("XENODEX_API_URL", "http://example.test:9000/");
        assert_eq!(api_base_url(), "http://example.test:9000");
        env::remove_var("XENODEX_API_URL");
    }
}

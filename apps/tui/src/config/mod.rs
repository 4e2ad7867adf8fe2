pub mod config;

pub use config::{api_base_url, debug_enabled, init_app_config, DEFAULT_API_URL};

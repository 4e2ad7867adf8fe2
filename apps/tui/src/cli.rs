use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "xenodex", version, about = "Xenodex alien catalog explorer")]
pub struct CliArgs {
    /// Print catalog stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the catalog service base URL
    #[arg(long, value_name = "URL")]
    pub api: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(api) = &self.api {
            std::env::set_var("XENODEX_API_URL", api);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}

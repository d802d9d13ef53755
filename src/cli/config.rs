use clap::Subcommand;
use saltedge_client::Result;
use saltedge_client::config::{Config, SaltEdgeConfig};
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print where the config file is read from
    Path,
    /// Load the config file and print the settings the client will use
    Check,
}

impl ConfigCommand {
    pub async fn execute(&self) -> Result<()> {
        match self {
            ConfigCommand::Path => {
                println!("{}", Config::config_file()?.display());
                Ok(())
            }
            ConfigCommand::Check => {
                let config = Config::load()?;
                info!(path = ?Config::config_file()?, "Config loaded");
                println!("{}", summary(&config.saltedge));
                Ok(())
            }
        }
    }
}

fn summary(config: &SaltEdgeConfig) -> String {
    format!(
        "app_id:   {}\nsecret:   {}\nbase_url: {}",
        config.app_id,
        mask(&config.secret),
        config.api_base_url()
    )
}

// Only the last four characters stay visible
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    match chars.len() {
        0..=4 => "*".repeat(chars.len()),
        n => format!("{}{}", "*".repeat(n - 4), chars[n - 4..].iter().collect::<String>()),
    }
}

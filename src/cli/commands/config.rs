use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd
        && *print_config
    {
        info(format!("Config file: {:?}", Config::config_file()));
        println!("database: {}", cfg.database);
        println!("model: {}", cfg.model);
        println!("weekly_target_hours: {}", cfg.weekly_target_hours);
        println!("quarter_budget_hours: {}", cfg.quarter_budget_hours);

        // never print the secret itself
        match cfg.resolve_api_key() {
            Ok(_) => println!("api_key: ****"),
            Err(_) => warning("api_key: not set (coach and audit are disabled)"),
        }
    }
    Ok(())
}

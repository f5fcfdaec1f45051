//! CLI command handler for configuration

use crate::config::{BalancePaths, Settings};
use crate::error::BalanceResult;
use crate::logging::LOG_ENV;

/// Handle the config command
///
/// With `init`, writes the current settings to disk so they can be edited.
pub fn handle_config_command(
    paths: &BalancePaths,
    settings: &Settings,
    init: bool,
) -> BalanceResult<()> {
    if init {
        settings.save(paths)?;
        println!("Wrote settings to {}", paths.settings_file().display());
        println!();
    }

    println!("envelope-balance Configuration");
    println!("==============================");
    println!("Base directory:      {}", paths.base_dir().display());
    println!("Settings file:       {}", paths.settings_file().display());
    println!("Snapshots directory: {}", paths.snapshots_dir().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:    {}", settings.currency_symbol);
    println!("  Output format:      {}", settings.output_format);
    println!("  Log filter:         {}", settings.log_filter);
    println!("  Fail on unbalanced: {}", settings.fail_on_unbalanced);
    if let Ok(filter) = std::env::var(LOG_ENV) {
        println!("  {} override:  {}", LOG_ENV, filter);
    }

    Ok(())
}

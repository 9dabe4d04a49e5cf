use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = if path.exists() {
        Config::load_from(&path)?
    } else {
        eprintln!("{}", "No config file yet, showing defaults.".dimmed());
        Config::default()
    };

    let settings = config.presentation_settings();
    println!("{} {}", "Config:".bold(), path.display());
    println!();
    print!("{}", config.to_yaml()?);
    println!();
    println!("{}", "Effective defaults".bold());
    println!("  theme      {}", config.theme_name().cyan());
    println!("  mode       {}", settings.mode.display_name().cyan());
    println!("  speed      {}", settings.speed.to_string().cyan());
    println!("  font_size  {}", format!("{}px", settings.font_size).cyan());
    println!("  mirrored   {}", settings.mirrored.to_string().cyan());
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let path = Config::path()?;
    let mut config = if path.exists() {
        Config::load_from(&path)?
    } else {
        Config::default()
    };
    config.set(key, value)?;
    let saved = config.save()?;
    println!("{} {key} = {value}", "Set".green().bold());
    log::debug!("wrote {}", saved.display());
    Ok(())
}

use anyhow::Result;
use calboard_core::config::CalboardConfig;
use owo_colors::OwoColorize;

pub fn run(config: &CalboardConfig) -> Result<()> {
    let config_path = CalboardConfig::config_path()?;

    if !config_path.exists() {
        CalboardConfig::create_default_config(&config_path)?;
        println!("{}", "Created default config".green());
    }

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    match config.events_path() {
        Some(path) => println!("  Events:  {}", path.display()),
        None => println!("  Events:  {}", "(built-in sample)".dimmed()),
    }

    println!();
    println!("{}", "Settings".bold());
    println!(
        "  id_strategy:    {}",
        format!("{:?}", config.id_strategy).to_lowercase()
    );
    println!("  default_color:  {} ({})", config.default_color, config.default_color.label());
    println!("  agenda_days:    {}", config.agenda_days);

    Ok(())
}

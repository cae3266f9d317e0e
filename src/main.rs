use std::process;

use anyhow::{Context, Result};

use shapes_demo::{
    app::{Application, USAGE_HINTS},
    backend::terminal::TerminalPlatform,
    config::AppConfig,
};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let platform = TerminalPlatform::new().with_menu(USAGE_HINTS);
    let mut app = Application::new(platform, AppConfig::default());

    for hint in USAGE_HINTS {
        println!("{hint}");
    }
    app.initialize().context("Failed to start the demo")?;

    let result = app.run();
    app.shutdown();
    result
}

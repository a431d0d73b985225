mod app;
mod cli;
mod clipboard;
mod color;
mod event;
mod feedback;
mod logging;
mod palette;
mod tui;
mod types;
mod ui;

use anyhow::Result;
use clap::Parser;

use clipboard::SystemClipboard;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    logging::init(
        &logging::LoggingConfig {
            debug: cli_opts.debug,
        },
        &logging::default_log_path(),
    )?;

    let mut clipboard = SystemClipboard;
    if let Some(command) = cli_opts.command {
        return cli::run(command, &mut clipboard);
    }

    let mut app = app::App::new(Box::new(clipboard));
    let mut tui = tui::Tui::init()?;
    let result = event::run(&mut app, &mut tui.terminal);
    drop(tui);

    result
}

use anyhow::Result;
use clap::Parser;
use console::style;
use image_sequence_renamer::cli::Cli;
use image_sequence_renamer::component::ImageRenamer;
use image_sequence_renamer::config::{Config, save_settings};
use image_sequence_renamer::init;
use image_sequence_renamer::signal::setup_shutdown_signal;
use log::info;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    init::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("Errore:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let shutdown_signal = setup_shutdown_signal()?;

    let mut config = Config::load(&cli.settings)?;
    cli.apply(&mut config.settings);
    config.settings.validate()?;

    if cli.save_settings {
        save_settings(&config.settings, &cli.settings)?;
        info!("Settings saved to {}", cli.settings.display());
    }

    let renamer = ImageRenamer::new(config.settings, shutdown_signal);
    renamer.run(&mut io::stdout().lock())?.into_result()
}

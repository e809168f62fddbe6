use std::path::PathBuf;

use bevy::prelude::*;

/// Command-line arguments parsed at startup.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct CliArgs {
    /// Rig config file to load instead of the default settings location.
    /// Usage: `cargo run -- --config <path>`
    pub config_path: Option<PathBuf>,

    /// Shake preset file to load instead of the default settings location.
    /// Usage: `cargo run -- --presets <path>`
    pub presets_path: Option<PathBuf>,

    /// Fixed shake noise seed, for reproducible runs.
    /// Usage: `cargo run -- --seed 42`
    pub seed: Option<u32>,

    /// Start with mouse look enabled and the cursor captured.
    pub mouse: bool,
}

impl CliArgs {
    /// Parse the process arguments.
    pub fn parse() -> Self {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parse arguments (without the program name).
    /// Supports:
    /// - `--config <path>`
    /// - `--presets <path>`
    /// - `--seed <u32>`
    /// - `--mouse`
    pub fn parse_from(args: impl IntoIterator<Item = String>) -> Self {
        let args: Vec<String> = args.into_iter().collect();
        let mut cli = CliArgs::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--config" => {
                    if let Some(path) = args.get(i + 1) {
                        cli.config_path = Some(PathBuf::from(path));
                        info!("CLI: Will load rig config from '{}'", path);
                        i += 2;
                    } else {
                        warn!("CLI: --config requires a path argument");
                        i += 1;
                    }
                }
                "--presets" => {
                    if let Some(path) = args.get(i + 1) {
                        cli.presets_path = Some(PathBuf::from(path));
                        info!("CLI: Will load shake presets from '{}'", path);
                        i += 2;
                    } else {
                        warn!("CLI: --presets requires a path argument");
                        i += 1;
                    }
                }
                "--seed" => match args.get(i + 1).map(|s| s.parse::<u32>()) {
                    Some(Ok(seed)) => {
                        cli.seed = Some(seed);
                        info!("CLI: Shake noise seed fixed to {}", seed);
                        i += 2;
                    }
                    Some(Err(_)) => {
                        warn!("CLI: --seed expects an unsigned integer, got '{}'", args[i + 1]);
                        i += 2;
                    }
                    None => {
                        warn!("CLI: --seed requires a value");
                        i += 1;
                    }
                },
                "--mouse" => {
                    cli.mouse = true;
                    i += 1;
                }
                arg => {
                    if arg.starts_with('-') {
                        warn!("CLI: Unknown argument '{}'", arg);
                    }
                    i += 1;
                }
            }
        }

        cli
    }
}

//! Command-line Arguments

use std::path::PathBuf;

use clap::Parser;
use sonareq_core::{Channel, ImportMode, ImportRequest, StoreConfig};

/// Import an EqualizerAPO parametric EQ export into a Sonar preset
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// The name of the preset, that should be created or updated
    #[arg(short, long)]
    pub preset: String,

    /// The path to the config text file, that should be imported (EqualizerAPO ParametricEq format)
    #[arg(short, long)]
    pub eqfile: PathBuf,

    /// The channel the preset is for. Possible values: game, chat, mic, media, aux
    #[arg(short, long)]
    pub channel: String,

    /// Update existing preset
    #[arg(short, long, default_value_t = false)]
    pub update: bool,

    /// Path to Sonar's database.db (defaults to the SteelSeries GG install location)
    #[arg(long, value_name = "PATH")]
    pub database: Option<PathBuf>,
}

impl Args {
    /// Preset targeted by this run; unknown channel names fall back to game
    pub fn import_request(&self) -> ImportRequest {
        ImportRequest {
            name: self.preset.clone(),
            channel: Channel::from_name_or_default(&self.channel),
            mode: if self.update {
                ImportMode::Update
            } else {
                ImportMode::Create
            },
        }
    }

    pub fn store_config(&self) -> StoreConfig {
        self.database
            .as_ref()
            .map(StoreConfig::with_path)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create() {
        let args = Args::try_parse_from(["sonareq", "-p", "HD600", "-e", "eq.txt", "-c", "media"])
            .unwrap();
        let request = args.import_request();
        assert_eq!(request.name, "HD600");
        assert_eq!(request.channel, Channel::Media);
        assert_eq!(request.mode, ImportMode::Create);
        assert_eq!(args.eqfile, PathBuf::from("eq.txt"));
    }

    #[test]
    fn test_parse_update_long_flags() {
        let args = Args::try_parse_from([
            "sonareq",
            "--preset",
            "HD600",
            "--eqfile",
            "eq.txt",
            "--channel",
            "AUX",
            "--update",
            "--database",
            "copy.db",
        ])
        .unwrap();
        let request = args.import_request();
        assert_eq!(request.channel, Channel::Aux);
        assert_eq!(request.mode, ImportMode::Update);
        assert_eq!(args.store_config(), StoreConfig::with_path("copy.db"));
    }

    #[test]
    fn test_unknown_channel_defaults_to_game() {
        let args =
            Args::try_parse_from(["sonareq", "-p", "x", "-e", "eq.txt", "-c", "speakers"]).unwrap();
        assert_eq!(args.import_request().channel, Channel::Game);
    }

    #[test]
    fn test_required_options() {
        assert!(Args::try_parse_from(["sonareq", "-p", "x", "-e", "eq.txt"]).is_err());
        assert!(Args::try_parse_from(["sonareq", "-e", "eq.txt", "-c", "game"]).is_err());
        assert!(Args::try_parse_from(["sonareq", "-p", "x", "-c", "game"]).is_err());
    }

    #[test]
    fn test_default_database() {
        let args = Args::try_parse_from(["sonareq", "-p", "x", "-e", "eq.txt", "-c", "game"]).unwrap();
        assert_eq!(args.store_config(), StoreConfig::default());
    }
}

//! Command line flags
//!
//! - `--config <path>`: load settings from `path` instead of the default
//! - `--theme <path>`: load colors from `path` instead of the default

use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupArgs {
    pub config_path: Option<PathBuf>,
    pub theme_path: Option<PathBuf>,
}

impl StartupArgs {
    /// Parse flags (without the program name); unknown flags are logged and skipped
    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => match args.next() {
                    Some(path) => parsed.config_path = Some(PathBuf::from(path)),
                    None => log::warn!("--config requires a path"),
                },
                "--theme" => match args.next() {
                    Some(path) => parsed.theme_path = Some(PathBuf::from(path)),
                    None => log::warn!("--theme requires a path"),
                },
                other => log::warn!("Ignoring unknown argument '{}'", other),
            }
        }

        parsed
    }
}

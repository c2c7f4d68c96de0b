pub mod interactive;
pub mod reveal;
pub mod tables;

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use ft_core::{FortuneConfig, FortuneSession, Language};

/// Flags shared by every command that reveals fortunes.
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Directory containing the table files
    #[arg(short, long, default_value = "data")]
    pub data: PathBuf,

    /// Display language: zh or en
    #[arg(short, long, default_value = "zh")]
    pub lang: String,

    /// Pause before revealing, in milliseconds
    #[arg(long, default_value = "1200")]
    pub delay_ms: u64,

    /// Length of the score animation, in milliseconds
    #[arg(long, default_value = "1500")]
    pub duration_ms: u64,

    /// Skip the pause and the score animation
    #[arg(long)]
    pub instant: bool,
}

impl SessionArgs {
    /// Build a session configuration from the flags.
    pub fn config(&self) -> Result<FortuneConfig, String> {
        let language = Language::parse(&self.lang)
            .ok_or_else(|| format!("unknown language: \"{}\" (expected zh or en)", self.lang))?;

        let config = FortuneConfig::default()
            .with_data_dir(&self.data)
            .with_language(language)
            .with_reveal_delay(Duration::from_millis(self.delay_ms))
            .with_animation(Duration::from_millis(self.duration_ms));

        Ok(if self.instant { config.instant() } else { config })
    }
}

/// Load the tables and start a session. Load failures are already logged by
/// the session; the message here is for the exit path.
fn open_session(args: &SessionArgs) -> Result<FortuneSession, String> {
    let config = args.config()?;
    FortuneSession::open(config).map_err(|e| e.to_string())
}

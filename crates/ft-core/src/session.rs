//! Fortune session state.
//!
//! `FortuneSession` owns the loaded tables, the selected language and the
//! fortune currently on display. The tables never change after the session
//! is created; language and result change only through the methods below.

use tracing::{debug, error};

use crate::animation::ScoreAnimation;
use crate::config::FortuneConfig;
use crate::error::{FortuneError, FortuneResult};
use crate::lang::Language;
use crate::resolver::{FortuneRecord, ResolvedFortune, resolve, resolve_input};
use crate::tables::FortuneTables;

/// What a line of session input did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Blank input; nothing happened.
    Nothing,
    /// A new fortune is on display.
    Revealed(FortuneRecord),
    /// The language changed; carries the current fortune re-rendered, if any.
    LanguageChanged {
        /// The new language.
        language: Language,
        /// The fortune on display, in the new language.
        record: Option<FortuneRecord>,
    },
    /// The displayed fortune was cleared.
    Reset,
    /// The user asked to leave.
    Quit,
}

/// An interactive fortune-telling session.
pub struct FortuneSession {
    tables: FortuneTables,
    config: FortuneConfig,
    language: Language,
    current: Option<ResolvedFortune>,
}

impl FortuneSession {
    /// Create a session over already loaded tables.
    pub fn new(tables: FortuneTables, config: FortuneConfig) -> Self {
        Self {
            tables,
            language: config.language,
            config,
            current: None,
        }
    }

    /// Load the tables from the configured data directory and start a session.
    pub fn open(config: FortuneConfig) -> FortuneResult<Self> {
        let tables = FortuneTables::load_dir(&config.data_dir).inspect_err(|e| {
            error!(dir = %config.data_dir.display(), error = %e, "failed to load data");
        })?;
        Ok(Self::new(tables, config))
    }

    /// The loaded tables.
    pub fn tables(&self) -> &FortuneTables {
        &self.tables
    }

    /// The session configuration.
    pub fn config(&self) -> &FortuneConfig {
        &self.config
    }

    /// The selected language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The fortune on display, if any.
    pub fn current(&self) -> Option<&ResolvedFortune> {
        self.current.as_ref()
    }

    /// The fortune on display, rendered in the selected language.
    pub fn current_record(&self) -> Option<FortuneRecord> {
        self.current.as_ref().map(|f| f.record(self.language))
    }

    /// Switch language and re-render the fortune on display without a new
    /// lookup.
    pub fn set_language(&mut self, language: Language) -> Option<FortuneRecord> {
        debug!(from = %self.language.code(), to = %language.code(), "language changed");
        self.language = language;
        self.current_record()
    }

    /// Resolve raw input and put the result on display.
    ///
    /// Blank input returns `Ok(None)` and leaves the display as it was, as
    /// does a failed lookup.
    pub fn reveal(&mut self, input: &str) -> FortuneResult<Option<FortuneRecord>> {
        let Some(fortune) = resolve_input(input, &self.tables)? else {
            return Ok(None);
        };
        Ok(Some(self.show(fortune)))
    }

    /// Resolve a number and put the result on display.
    pub fn reveal_number(&mut self, number: i64) -> FortuneResult<FortuneRecord> {
        let fortune = resolve(number, &self.tables)?;
        Ok(self.show(fortune))
    }

    /// Clear the fortune on display.
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Counter animation for a record, using the configured duration.
    pub fn animation_for(&self, record: &FortuneRecord) -> ScoreAnimation {
        ScoreAnimation::new(record.score, self.config.animation)
    }

    /// Process one line of interactive input.
    ///
    /// `:zh` / `:en` (or `lang <code>`) switch language, `reset` clears the
    /// display, `quit` ends the session; anything else is read as a number.
    pub fn process(&mut self, input: &str) -> FortuneResult<SessionEvent> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(SessionEvent::Nothing);
        }

        let lower = trimmed.to_lowercase();
        let parts: Vec<&str> = lower.splitn(2, ' ').collect();
        let cmd = parts[0];
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd {
            "quit" | "exit" | ":q" => Ok(SessionEvent::Quit),
            "reset" | "again" | ":reset" => {
                self.reset();
                Ok(SessionEvent::Reset)
            }
            "lang" | ":lang" => self.do_language(rest),
            _ => {
                if let Some(code) = cmd.strip_prefix(':') {
                    return self.do_language(code);
                }
                match self.reveal(trimmed)? {
                    Some(record) => Ok(SessionEvent::Revealed(record)),
                    None => Ok(SessionEvent::Nothing),
                }
            }
        }
    }

    fn do_language(&mut self, code: &str) -> FortuneResult<SessionEvent> {
        let language = Language::parse(code)
            .ok_or_else(|| FortuneError::UnknownCommand(format!(":{code}")))?;
        let record = self.set_language(language);
        Ok(SessionEvent::LanguageChanged { language, record })
    }

    fn show(&mut self, fortune: ResolvedFortune) -> FortuneRecord {
        let record = fortune.record(self.language);
        self.current = Some(fortune);
        record
    }
}

//! Fortune telling from static lookup tables.
//!
//! A lucky number is mapped to an identifier through one of two number
//! mappings, and the identifier to a fortune text and tier label. The score
//! shown on the result card is read out of the fortune text itself.
//!
//! Tables are loaded once into [`FortuneTables`] and never change afterwards;
//! [`FortuneSession`] adds the mutable display state (language, current
//! result) on top.

/// Score counter animation model.
pub mod animation;
/// Session configuration.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Lenient parsing of the lucky-number field.
pub mod input;
/// Display languages.
pub mod lang;
/// Raw JSON records.
pub mod record;
/// Number-to-fortune resolution.
pub mod resolver;
/// Score extraction from fortune text.
pub mod score;
/// Interactive session state.
pub mod session;
/// Keyed lookup tables.
pub mod tables;

pub use animation::ScoreAnimation;
pub use config::FortuneConfig;
pub use error::{FortuneError, FortuneResult};
pub use lang::Language;
pub use record::{Level, LocalizedEntry, NumberMapping, Solution};
pub use resolver::{FortuneRecord, ResolvedFortune, resolve};
pub use score::extract_score;
pub use session::{FortuneSession, SessionEvent};
pub use tables::{FortuneTables, MappingKind};

//! Number-to-fortune resolution.
//!
//! Resolution is a two-stage lookup: the number selects an identifier from
//! one of the mapping tables, and the identifier selects the fortune text and
//! tier label. Every failure along the way is the same [`FortuneError::NotFound`];
//! the precise cause only shows up in the debug log.

use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::debug;

use crate::error::{FortuneError, FortuneResult};
use crate::input::{LuckyInput, parse_lucky_number};
use crate::lang::Language;
use crate::record::{Level, Solution};
use crate::score::extract_score;
use crate::tables::{FortuneTables, MappingKind};

/// Numbers served by the double mapping.
pub const DOUBLE_RANGE: RangeInclusive<i64> = 0..=99;

/// Numbers accepted at all.
pub const SINGLE_RANGE: RangeInclusive<i64> = 0..=9999;

/// Pick the mapping table for a number.
///
/// The branches are exclusive: 0-99 only ever consults the double mapping,
/// even when the single mapping also has a row for that number.
pub fn mapping_for(number: i64) -> Option<MappingKind> {
    if DOUBLE_RANGE.contains(&number) {
        Some(MappingKind::Double)
    } else if SINGLE_RANGE.contains(&number) {
        Some(MappingKind::Single)
    } else {
        None
    }
}

/// A fortune resolved from the tables, independent of display language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFortune {
    /// The number that was looked up.
    pub number: i64,
    /// The mapping the number went through.
    pub mapping: MappingKind,
    /// Identifier joining the mapping row to its texts.
    pub identifier: String,
    /// Fortune texts.
    pub solution: Solution,
    /// Tier labels.
    pub level: Level,
}

impl ResolvedFortune {
    /// The number as shown on the result card, e.g. `#0042`.
    pub fn display_number(&self) -> String {
        format!("#{:04}", self.number)
    }

    /// Render this fortune in a language.
    pub fn record(&self, language: Language) -> FortuneRecord {
        let fortune_text = self.solution.text(language).to_string();
        FortuneRecord {
            number: self.number,
            display_number: self.display_number(),
            identifier: self.identifier.clone(),
            mapping: self.mapping,
            language,
            level_label: self.level.text(language).to_string(),
            score: extract_score(&fortune_text),
            fortune_text,
        }
    }
}

/// A fortune rendered in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FortuneRecord {
    /// The number that was looked up.
    pub number: i64,
    /// Zero-padded number for display.
    pub display_number: String,
    /// Identifier joining the mapping row to its texts.
    pub identifier: String,
    /// The mapping the number went through.
    pub mapping: MappingKind,
    /// Language of the texts below.
    pub language: Language,
    /// Tier label.
    pub level_label: String,
    /// Fortune text.
    pub fortune_text: String,
    /// Score taken from the fortune text.
    pub score: u32,
}

/// Resolve a number against the tables.
pub fn resolve(number: i64, tables: &FortuneTables) -> FortuneResult<ResolvedFortune> {
    let not_found = || FortuneError::NotFound(number.to_string());

    let Some(mapping) = mapping_for(number) else {
        debug!(number, "number outside accepted range");
        return Err(not_found());
    };

    let Some(identifier) = tables
        .mapping(mapping, number)
        .and_then(|row| row.identifier())
    else {
        debug!(number, %mapping, "no identifier for number");
        return Err(not_found());
    };

    let (Some(solution), Some(level)) = (tables.solution(identifier), tables.level(identifier))
    else {
        debug!(number, identifier, "identifier missing from solutions or levels");
        return Err(not_found());
    };

    debug!(number, %mapping, identifier, "resolved fortune");
    Ok(ResolvedFortune {
        number,
        mapping,
        identifier: identifier.to_string(),
        solution: solution.clone(),
        level: level.clone(),
    })
}

/// Resolve raw user input. Blank input resolves to `None` without error.
pub fn resolve_input(raw: &str, tables: &FortuneTables) -> FortuneResult<Option<ResolvedFortune>> {
    match parse_lucky_number(raw) {
        LuckyInput::Empty => Ok(None),
        LuckyInput::NotANumber => {
            debug!(input = raw, "input is not a number");
            Err(FortuneError::NotFound(raw.to_string()))
        }
        LuckyInput::Number(number) => resolve(number, tables).map(Some),
    }
}

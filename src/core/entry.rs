use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::decades::NDECADES;
use crate::error::{SurferError, SurferResult};

/// Popularity of a name in one decade.
///
/// The database stores `0` for decades where the name did not make the
/// rankings. That value is a sentinel, never a real rank. Other values are
/// kept as loaded, including negative ones and ones past the maximum rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Unranked,
    Ranked(i32),
}

impl Rank {
    /// Raw database value meaning "not ranked".
    pub const SENTINEL: i32 = 0;

    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        if raw == Self::SENTINEL {
            Self::Unranked
        } else {
            Self::Ranked(raw)
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unranked => f.write_str("*"),
            Self::Ranked(rank) => write!(f, "{rank}"),
        }
    }
}

/// One database record: a name and its rank for every stored decade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    name: String,
    ranks: [i32; NDECADES],
}

impl NameEntry {
    pub fn new(name: impl Into<String>, ranks: [i32; NDECADES]) -> SurferResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(SurferError::InvalidData(
                "entry name must not be empty".to_owned(),
            ));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(SurferError::InvalidData(format!(
                "entry name `{name}` must not contain whitespace"
            )));
        }
        Ok(Self { name, ranks })
    }

    /// Parses one database line: a name followed by exactly `NDECADES` ranks.
    ///
    /// `line_number` is 1-based and only used for error reporting.
    pub fn parse_line(line: &str, line_number: usize) -> SurferResult<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().ok_or_else(|| SurferError::MalformedLine {
            line_number,
            reason: "line is empty".to_owned(),
        })?;

        let rank_tokens: Vec<&str> = tokens.collect();
        if rank_tokens.len() != NDECADES {
            return Err(SurferError::MalformedLine {
                line_number,
                reason: format!(
                    "expected {NDECADES} rank values after `{name}`, found {}",
                    rank_tokens.len()
                ),
            });
        }

        let mut ranks = [0_i32; NDECADES];
        for (decade, (slot, token)) in ranks.iter_mut().zip(rank_tokens).enumerate() {
            *slot = token.parse().map_err(|_| SurferError::MalformedLine {
                line_number,
                reason: format!(
                    "rank `{token}` for decade {decade} of `{name}` is not an integer"
                ),
            })?;
        }

        Ok(Self {
            name: name.to_owned(),
            ranks,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn raw_ranks(&self) -> &[i32; NDECADES] {
        &self.ranks
    }

    /// Rank for `decade` (offset from the start decade), `None` past the stored range.
    #[must_use]
    pub fn rank(&self, decade: usize) -> Option<Rank> {
        self.ranks.get(decade).copied().map(Rank::from_raw)
    }

    pub fn ranks(&self) -> impl ExactSizeIterator<Item = Rank> + '_ {
        self.ranks.iter().copied().map(Rank::from_raw)
    }

    /// Label text used next to the plotted point of `rank`.
    #[must_use]
    pub fn point_label(&self, rank: Rank) -> String {
        format!("{} {rank}", self.name)
    }
}

impl fmt::Display for NameEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.name)?;
        for (index, rank) in self.ranks.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{rank}")?;
        }
        f.write_str("]")
    }
}

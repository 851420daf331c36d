use anyhow::{anyhow, Context, Result};
use std::str::FromStr;
use strum::{IntoEnumIterator, ParseError};
use strum_macros::{AsRefStr, EnumIter};

/// The semantics associated with a problem.
///
/// These are the semantics handled by the serialisability-based reasoners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Semantics {
    /// The grounded semantics
    GR,
    /// The complete semantics
    CO,
    /// The preferred semantics
    PR,
    /// The stable semantics
    ST,
    /// The admissible semantics
    ADM,
    /// The unchallenged semantics
    UC,
}

impl FromStr for Semantics {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Semantics::iter()
            .find(|v| v.as_ref().eq_ignore_ascii_case(s))
            .ok_or(ParseError::VariantNotFound)
    }
}

impl TryFrom<&str> for Semantics {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Semantics::from_str(value).map_err(|_| anyhow!(r#"undefined semantics "{}""#, value))
    }
}

/// The semantics associated with an extension ranking problem.
///
/// Each of these semantics orders the sets of arguments of a framework by the lexicographic
/// comparison of a dedicated list of base functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum RankingSemantics {
    /// The conflict-free based ranking
    CF,
    /// The admissibility based ranking
    AD,
    /// The complete based ranking
    CO,
    /// The grounded based ranking
    GR,
    /// The preferred based ranking
    PR,
    /// The semi-stable based ranking
    SST,
}

impl FromStr for RankingSemantics {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RankingSemantics::iter()
            .find(|v| v.as_ref().eq_ignore_ascii_case(s))
            .ok_or(ParseError::VariantNotFound)
    }
}

impl TryFrom<&str> for RankingSemantics {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        RankingSemantics::from_str(value)
            .map_err(|_| anyhow!(r#"undefined ranking semantics "{}""#, value))
    }
}

/// The query to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Query {
    /// Compute a single extension
    SE,
    /// Enumerate all the extensions
    EE,
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
}

impl FromStr for Query {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Query::iter()
            .find(|v| v.as_ref().eq_ignore_ascii_case(s))
            .ok_or(ParseError::VariantNotFound)
    }
}

impl TryFrom<&str> for Query {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Query::from_str(value).map_err(|_| anyhow!(r#"undefined query "{}""#, value))
    }
}

/// Iterates over the problem strings handled by the reasoners, following the `XX-YY`
/// pattern (query, hyphen, semantics).
pub fn iter_problem_strings() -> impl Iterator<Item = String> {
    Query::iter()
        .flat_map(|q| Semantics::iter().map(move |s| format!("{}-{}", q.as_ref(), s.as_ref())))
}

/// Reads a string depicting a problem with an `XX-YY` pattern.
///
/// The string is split at the first hyphen found in it.
/// The substring before this hyphen is considered as the query, while the substring after
/// it is considered as the semantics.
///
/// In case there is no hyphen, or the query or the semantics is undefined, an error is
/// returned.
pub fn read_problem_string(problem: &str) -> Result<(Query, Semantics)> {
    let context = || format!(r#"while parsing problem string "{}""#, problem);
    match problem.find('-') {
        Some(n) => {
            let query = Query::try_from(&problem[0..n]).with_context(context)?;
            let semantics = Semantics::try_from(&problem[1 + n..]).with_context(context)?;
            Ok((query, semantics))
        }
        None => Err(anyhow!("no hyphen in problem string")).with_context(context),
    }
}

//! Result ordering.
//!
//! All orderings are stable: ideas with equal keys keep their prior relative
//! order, in both directions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::core::criteria::UserCriteria;
use crate::core::idea::Idea;
use crate::core::score::calculate_relevance_score;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortBy
{
    /// Keep the filtered catalog order
    #[default]
    Relevance,
    Complexity,
    Budget,
    Alphabetical,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection
{
    Asc,
    #[default]
    Desc,
}

impl SortDirection
{
    fn apply(
        self,
        ord: Ordering,
    ) -> Ordering
    {
        match self
        {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Return a newly ordered copy of `ideas`.
///
/// `Relevance` is a pass-through: the input order is returned as-is and the
/// direction is ignored. Relevance scores are for display; ranking by score
/// is available separately through [`rank_by_score`].
#[instrument(level = "debug", skip(ideas), fields(ideas = ideas.len()))]
pub fn sort_engagement_ideas(
    ideas: &[Idea],
    sort_by: SortBy,
    direction: SortDirection,
) -> Vec<Idea>
{
    let mut sorted = ideas.to_vec();

    match sort_by
    {
        SortBy::Relevance =>
        {}
        SortBy::Complexity =>
        {
            sorted.sort_by(|a, b| {
                direction.apply(
                    a.complexity
                        .ordinal()
                        .cmp(&b.complexity.ordinal()),
                )
            });
        }
        SortBy::Budget =>
        {
            sorted.sort_by(|a, b| {
                direction.apply(
                    a.budget_range
                        .ordinal()
                        .cmp(&b.budget_range.ordinal()),
                )
            });
        }
        SortBy::Alphabetical =>
        {
            sorted.sort_by(|a, b| direction.apply(locale_compare(&a.title, &b.title)));
        }
    }

    sorted
}

/// Order by relevance score, highest first for `Desc`. Ties keep input order.
pub fn rank_by_score(
    ideas: &[Idea],
    criteria: &UserCriteria,
    direction: SortDirection,
) -> Vec<Idea>
{
    let mut scored: Vec<(u8, Idea)> = ideas
        .iter()
        .map(|idea| (calculate_relevance_score(idea, criteria), idea.clone()))
        .collect();

    scored.sort_by(|a, b| direction.apply(a.0.cmp(&b.0)));
    debug!(top = scored.first().map(|(s, _)| *s), "ranked by score");

    scored
        .into_iter()
        .map(|(_, idea)| idea)
        .collect()
}

/// Locale-aware title comparison, in the manner of a root-locale collator.
///
/// Three levels, each consulted only when the previous one ties:
/// base letters with accents and case removed ("Éclair" sorts with
/// "eclair", ahead of "Zebra"), then accents ("cote" before "côte"), then
/// case, lowercase first ("apple" before "Apple").
pub fn locale_compare(
    a: &str,
    b: &str,
) -> Ordering
{
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| case_tiebreak(a, b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_
{
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented(s: &str) -> impl Iterator<Item = char> + '_
{
    s.nfd()
        .flat_map(char::to_lowercase)
}

fn case_tiebreak(
    a: &str,
    b: &str,
) -> Ordering
{
    for (x, y) in a
        .chars()
        .zip(b.chars())
    {
        if x == y
        {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase())
        {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.len()
        .cmp(&b.len())
}

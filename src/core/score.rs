//! Relevance scoring (0-100) of one idea against one set of criteria.
//!
//! Three independent components are summed and capped:
//! budget fit (30), audience coverage (40) and complexity fit (30).

use serde::{Deserialize, Serialize};

use crate::core::criteria::UserCriteria;
use crate::core::idea::{Idea, Level};

pub const MAX_SCORE: u8 = 100;

const BUDGET_WEIGHT: u8 = 30;
const AUDIENCE_WEIGHT: u32 = 40;
const COMPLEXITY_WEIGHT: u8 = 30;

/// Per-component contributions to a relevance score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown
{
    pub budget: u8,
    pub audience: u8,
    pub complexity: u8,
}

impl ScoreBreakdown
{
    /// Sum of the components, clamped to 100
    pub fn total(&self) -> u8
    {
        let sum = self.budget as u16 + self.audience as u16 + self.complexity as u16;
        sum.min(MAX_SCORE as u16) as u8
    }
}

/// Badge shown next to each idea in the results
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchLevel
{
    Basic,
    Fair,
    Good,
    High,
}

impl MatchLevel
{
    pub const fn from_score(score: u8) -> Self
    {
        match score
        {
            80..=u8::MAX => MatchLevel::High,
            60..=79 => MatchLevel::Good,
            40..=59 => MatchLevel::Fair,
            _ => MatchLevel::Basic,
        }
    }

    pub const fn label(self) -> &'static str
    {
        match self
        {
            MatchLevel::High => "High Match",
            MatchLevel::Good => "Good Match",
            MatchLevel::Fair => "Fair Match",
            MatchLevel::Basic => "Basic Match",
        }
    }
}

/// Relevance of `idea` for `criteria`, always within 0..=100
pub fn calculate_relevance_score(
    idea: &Idea,
    criteria: &UserCriteria,
) -> u8
{
    score_breakdown(idea, criteria).total()
}

/// Component-wise relevance, used to explain a score
pub fn score_breakdown(
    idea: &Idea,
    criteria: &UserCriteria,
) -> ScoreBreakdown
{
    ScoreBreakdown {
        budget: criteria
            .budget_range
            .map_or(0, |user| ordinal_fit(user, idea.budget_range, BUDGET_WEIGHT)),
        audience: audience_coverage(&criteria.audience_types, idea),
        complexity: criteria
            .complexity
            .map_or(0, |user| ordinal_fit(user, idea.complexity, COMPLEXITY_WEIGHT)),
    }
}

/// Distance rule shared by budget and complexity.
///
/// Exact match earns the full weight; an idea below what the user tolerates
/// earns 25; one step above earns 15; anything further above earns 5.
fn ordinal_fit(
    user: Level,
    idea: Level,
    full: u8,
) -> u8
{
    let (u, i) = (user.ordinal(), idea.ordinal());
    if u == i
    {
        full
    }
    else if u > i
    {
        25
    }
    else if i - u == 1
    {
        15
    }
    else
    {
        5
    }
}

/// round(40 * matched / wanted), halves rounded up
fn audience_coverage(
    wanted: &[String],
    idea: &Idea,
) -> u8
{
    if wanted.is_empty()
    {
        return 0;
    }

    let total = wanted.len() as u32;
    let matched = wanted
        .iter()
        .filter(|tag| idea.targets(tag))
        .count() as u32;

    // floor(x + 0.5) in integers: (2 * 40 * m + n) / (2 * n)
    ((2 * AUDIENCE_WEIGHT * matched + total) / (2 * total)) as u8
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::core::idea::fixtures::idea;

    fn criteria(
        budget: Option<Level>,
        complexity: Option<Level>,
        audiences: &[&str],
    ) -> UserCriteria
    {
        UserCriteria {
            budget_range: budget,
            complexity,
            audience_types: audiences
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_perfect_triple_match_is_100()
    {
        let i = idea(1, "t", "A", Level::Medium, Level::Low, &["fans", "families"]);
        let c = criteria(Some(Level::Medium), Some(Level::Low), &["fans", "families"]);
        assert_eq!(calculate_relevance_score(&i, &c), 100);
    }

    #[test]
    fn test_absent_criteria_scores_zero()
    {
        let i = idea(1, "t", "A", Level::High, Level::High, &["fans"]);
        assert_eq!(calculate_relevance_score(&i, &UserCriteria::default()), 0);
    }

    #[test]
    fn test_budget_distance_rule()
    {
        let c = criteria(Some(Level::Low), None, &[]);
        let fit = |l| {
            score_breakdown(&idea(1, "t", "A", l, Level::Low, &["x"]), &c).budget
        };
        assert_eq!(fit(Level::Low), 30);
        assert_eq!(fit(Level::Medium), 15);
        assert_eq!(fit(Level::High), 5);

        let high = criteria(Some(Level::High), None, &[]);
        let i = idea(1, "t", "A", Level::Low, Level::Low, &["x"]);
        assert_eq!(score_breakdown(&i, &high).budget, 25);
    }

    #[test]
    fn test_unknown_levels_degrade_to_ordinal_zero()
    {
        // Unknown idea level sits below any real user level
        let c = criteria(Some(Level::Low), Some(Level::Low), &[]);
        let i = idea(1, "t", "A", Level::Unknown, Level::Unknown, &["x"]);
        let b = score_breakdown(&i, &c);
        assert_eq!((b.budget, b.complexity), (25, 25));

        // Unknown user level sits below every real idea level
        let c = criteria(Some(Level::Unknown), None, &[]);
        let one_step = idea(1, "t", "A", Level::Low, Level::Low, &["x"]);
        let far = idea(2, "t", "A", Level::Medium, Level::Low, &["x"]);
        assert_eq!(score_breakdown(&one_step, &c).budget, 15);
        assert_eq!(score_breakdown(&far, &c).budget, 5);
    }

    #[test]
    fn test_audience_rounding()
    {
        let i = idea(1, "t", "A", Level::Low, Level::Low, &["a"]);
        // 1/3 of 40 = 13.33 -> 13
        assert_eq!(score_breakdown(&i, &criteria(None, None, &["a", "b", "c"])).audience, 13);
        // 1/2 of 40 = 20
        assert_eq!(score_breakdown(&i, &criteria(None, None, &["a", "b"])).audience, 20);

        let two = idea(2, "t", "A", Level::Low, Level::Low, &["a", "b"]);
        // 2/3 of 40 = 26.67 -> 27
        assert_eq!(score_breakdown(&two, &criteria(None, None, &["a", "b", "c"])).audience, 27);
        // 3/16 of 40 = 7.5 -> 8
        let wanted: Vec<String> = (0..16)
            .map(|n| format!("t{n}"))
            .collect();
        let three = idea(3, "t", "A", Level::Low, Level::Low, &["t0", "t1", "t2"]);
        let c = UserCriteria { audience_types: wanted, ..Default::default() };
        assert_eq!(score_breakdown(&three, &c).audience, 8);
    }

    #[test]
    fn test_total_is_clamped()
    {
        let b = ScoreBreakdown { budget: 90, audience: 40, complexity: 30 };
        assert_eq!(b.total(), 100);
    }

    #[test]
    fn test_match_levels()
    {
        assert_eq!(MatchLevel::from_score(100), MatchLevel::High);
        assert_eq!(MatchLevel::from_score(80), MatchLevel::High);
        assert_eq!(MatchLevel::from_score(79), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(60), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(59), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_score(40), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_score(39), MatchLevel::Basic);
        assert_eq!(MatchLevel::from_score(0).label(), "Basic Match");
    }
}

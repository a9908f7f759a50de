//! Hard-criteria filtering of the idea catalog.
//!
//! Filtering never reorders: the result is always a subsequence of the input.

use tracing::{debug, instrument};

use crate::core::criteria::UserCriteria;
use crate::core::idea::{Idea, Level};

/// Keep the ideas that satisfy every hard rule in `criteria`.
///
/// With no criteria (or an empty record) the catalog comes back unchanged.
/// Otherwise an idea survives only if it passes the budget ceiling, the
/// complexity ceiling, the audience overlap check and the category check.
#[instrument(level = "debug", skip_all, fields(ideas = ideas.len()))]
pub fn filter_engagement_ideas(
    ideas: &[Idea],
    criteria: Option<&UserCriteria>,
) -> Vec<Idea>
{
    let Some(criteria) = criteria.filter(|c| !c.is_empty())
    else
    {
        return ideas.to_vec();
    };

    let kept: Vec<Idea> = ideas
        .iter()
        .filter(|idea| matches(idea, criteria))
        .cloned()
        .collect();

    debug!(kept = kept.len(), "filtered catalog");
    kept
}

/// Whether a single idea passes all hard rules
pub fn matches(
    idea: &Idea,
    criteria: &UserCriteria,
) -> bool
{
    budget_allows(criteria.budget_range, idea.budget_range)
        && complexity_allows(criteria.complexity, idea.complexity)
        && audience_overlaps(&criteria.audience_types, idea)
        && category_allowed(&criteria.categories, idea)
}

/// Budget ceiling. Low and medium budgets apply the same rule: only
/// high-cost ideas are dropped, so a low-budget user still sees medium ideas.
fn budget_allows(
    user: Option<Level>,
    idea: Level,
) -> bool
{
    match user
    {
        Some(Level::Low | Level::Medium) => idea != Level::High,
        _ => true,
    }
}

fn complexity_allows(
    user: Option<Level>,
    idea: Level,
) -> bool
{
    match user
    {
        Some(Level::Low) => idea == Level::Low,
        Some(Level::Medium) => idea != Level::High,
        _ => true,
    }
}

fn audience_overlaps(
    wanted: &[String],
    idea: &Idea,
) -> bool
{
    wanted.is_empty()
        || wanted
            .iter()
            .any(|tag| idea.targets(tag))
}

fn category_allowed(
    categories: &[String],
    idea: &Idea,
) -> bool
{
    categories.is_empty()
        || categories
            .iter()
            .any(|c| *c == idea.category)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::core::idea::fixtures::idea;

    fn catalog() -> Vec<Idea>
    {
        vec![
            idea(1, "Cheap & easy", "A", Level::Low, Level::Low, &["fans"]),
            idea(2, "Mid & mid", "B", Level::Medium, Level::Medium, &["families"]),
            idea(3, "Pricey & hard", "B", Level::High, Level::High, &["fans", "gamers"]),
            idea(4, "Cheap & hard", "C", Level::Low, Level::High, &["gamers"]),
        ]
    }

    fn ids(ideas: &[Idea]) -> Vec<String>
    {
        ideas
            .iter()
            .map(|i| i.id.to_string())
            .collect()
    }

    #[test]
    fn test_no_criteria_is_identity()
    {
        let all = catalog();
        assert_eq!(filter_engagement_ideas(&all, None), all);
        assert_eq!(filter_engagement_ideas(&all, Some(&UserCriteria::default())), all);
    }

    #[test]
    fn test_low_budget_excludes_only_high()
    {
        let c = UserCriteria { budget_range: Some(Level::Low), ..Default::default() };
        // Medium-budget idea 2 survives a low budget
        assert_eq!(ids(&filter_engagement_ideas(&catalog(), Some(&c))), ["1", "2", "4"]);
    }

    #[test]
    fn test_medium_budget_matches_low_budget_rule()
    {
        let low = UserCriteria { budget_range: Some(Level::Low), ..Default::default() };
        let medium = UserCriteria { budget_range: Some(Level::Medium), ..Default::default() };
        assert_eq!(
            filter_engagement_ideas(&catalog(), Some(&low)),
            filter_engagement_ideas(&catalog(), Some(&medium))
        );
    }

    #[test]
    fn test_high_or_unknown_budget_keeps_everything()
    {
        for level in [Level::High, Level::Unknown]
        {
            let c = UserCriteria { budget_range: Some(level), ..Default::default() };
            assert_eq!(filter_engagement_ideas(&catalog(), Some(&c)).len(), 4);
        }
    }

    #[test]
    fn test_complexity_ceiling()
    {
        let low = UserCriteria { complexity: Some(Level::Low), ..Default::default() };
        assert_eq!(ids(&filter_engagement_ideas(&catalog(), Some(&low))), ["1"]);

        let medium = UserCriteria { complexity: Some(Level::Medium), ..Default::default() };
        assert_eq!(ids(&filter_engagement_ideas(&catalog(), Some(&medium))), ["1", "2"]);

        let high = UserCriteria { complexity: Some(Level::High), ..Default::default() };
        assert_eq!(filter_engagement_ideas(&catalog(), Some(&high)).len(), 4);
    }

    #[test]
    fn test_audience_overlap()
    {
        let c = UserCriteria {
            audience_types: vec!["gamers".into(), "retirees".into()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_engagement_ideas(&catalog(), Some(&c))), ["3", "4"]);
    }

    #[test]
    fn test_category_membership()
    {
        let c = UserCriteria { categories: vec!["B".into()], ..Default::default() };
        assert_eq!(ids(&filter_engagement_ideas(&catalog(), Some(&c))), ["2", "3"]);
    }

    #[test]
    fn test_rules_combine()
    {
        let c = UserCriteria {
            budget_range: Some(Level::Low),
            complexity: Some(Level::Medium),
            audience_types: vec!["fans".into(), "families".into()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_engagement_ideas(&catalog(), Some(&c))), ["1", "2"]);
    }

    #[test]
    fn test_empty_catalog()
    {
        let c = UserCriteria { budget_range: Some(Level::Low), ..Default::default() };
        assert!(filter_engagement_ideas(&[], Some(&c)).is_empty());
        assert!(filter_engagement_ideas(&[], None).is_empty());
    }
}

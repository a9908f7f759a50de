//! `huddle score`: show how one idea's relevance score is put together.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::{AppContext, ScoreArgs};
use crate::core::criteria::UserCriteria;
use crate::core::filter;
use crate::core::idea::Idea;
use crate::core::render::paint;
use crate::core::score::{MAX_SCORE, MatchLevel, ScoreBreakdown, score_breakdown};
use crate::core::suggest::config_or_default;
use crate::infra::catalog::load_catalog;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreExplanation<'a>
{
    pub id: String,
    pub title: &'a str,
    pub breakdown: ScoreBreakdown,
    pub total: u8,
    pub match_level: MatchLevel,
    /// Whether the idea survives the filter for the same criteria
    pub passes_filters: bool,
}

pub fn explain<'a>(
    idea: &'a Idea,
    criteria: &UserCriteria,
) -> ScoreExplanation<'a>
{
    let breakdown = score_breakdown(idea, criteria);
    let total = breakdown.total();
    ScoreExplanation {
        id: idea
            .id
            .to_string(),
        title: &idea.title,
        breakdown,
        total,
        match_level: MatchLevel::from_score(total),
        passes_filters: filter::matches(idea, criteria),
    }
}

/// Scoring takes whatever criteria were given; the form rules only gate
/// `suggest`.
pub fn run(
    args: ScoreArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config = config_or_default();
    let catalog_path = config.catalog_path(
        args.catalog
            .as_deref(),
    );
    let catalog = load_catalog(catalog_path.as_deref())?;
    let criteria = args
        .criteria
        .to_form()
        .into_criteria();

    let Some(idea) = catalog
        .iter()
        .find(|i| {
            i.id
                .matches(&args.id)
        })
    else
    {
        bail!("Idea '{}' not found", args.id);
    };

    let ex = explain(idea, &criteria);

    if args.json
    {
        println!("{}", serde_json::to_string_pretty(&ex)?);
        return Ok(());
    }
    if ctx.quiet
    {
        return Ok(());
    }

    let color = !ctx.no_color;
    let heading = format!("#{} {}", ex.id, ex.title);
    println!("{}", paint(&heading, color, |s| s.bold().to_string()));
    println!("  budget fit      {:>3} / 30", ex.breakdown.budget);
    println!("  audience reach  {:>3} / 40", ex.breakdown.audience);
    println!("  complexity fit  {:>3} / 30", ex.breakdown.complexity);
    println!("  total           {:>3} / {MAX_SCORE}  {}", ex.total, ex.match_level.label());

    let verdict = if ex.passes_filters { "yes" } else { "no" };
    println!("  passes filters  {verdict}");

    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::core::idea::Level;
    use crate::core::idea::fixtures::idea;

    #[test]
    fn test_explanation_totals_breakdown()
    {
        let i = idea(4, "Watch Party", "Community", Level::Medium, Level::High, &["fans"]);
        let c = UserCriteria {
            budget_range: Some(Level::Medium),
            complexity: Some(Level::Low),
            audience_types: vec!["fans".into(), "students".into()],
            ..Default::default()
        };

        let ex = explain(&i, &c);
        assert_eq!(ex.breakdown.budget, 30);
        assert_eq!(ex.breakdown.audience, 20);
        assert_eq!(ex.breakdown.complexity, 5);
        assert_eq!(ex.total, 55);
        assert_eq!(ex.match_level, MatchLevel::Fair);
        // complexity ceiling is low, so the filter drops it
        assert!(!ex.passes_filters);
        assert_eq!(ex.id, "4");
    }
}

//! Result rendering: grouped text, table and JSON views.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::cli::OutputFormat;
use crate::core::criteria::UserCriteria;
use crate::core::idea::Idea;
use crate::core::score::{MatchLevel, calculate_relevance_score};
use crate::core::sort::SortDirection;
use crate::core::suggest::{Recommendation, ResultOrder};

#[derive(Debug, Clone, Default)]
pub struct RenderOptions
{
    pub color: bool,
    pub details: bool,
}

/// An idea with its relevance for the current criteria
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredIdea<'a>
{
    #[serde(flatten)]
    pub idea: &'a Idea,
    pub relevance_score: u8,
    pub match_level: MatchLevel,
}

impl<'a> ScoredIdea<'a>
{
    pub fn new(
        idea: &'a Idea,
        criteria: &UserCriteria,
    ) -> Self
    {
        let relevance_score = calculate_relevance_score(idea, criteria);
        Self { idea, relevance_score, match_level: MatchLevel::from_score(relevance_score) }
    }
}

#[derive(Debug, Serialize)]
pub struct GroupReport<'a>
{
    pub category: &'a str,
    pub count: usize,
    pub ideas: Vec<ScoredIdea<'a>>,
}

/// JSON document for `huddle suggest --format json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionReport<'a>
{
    pub generated_at: DateTime<Utc>,
    pub criteria: &'a UserCriteria,
    pub sort_by: ResultOrder,
    pub direction: SortDirection,
    pub total: usize,
    pub groups: Vec<GroupReport<'a>>,
}

impl<'a> SuggestionReport<'a>
{
    pub fn new(rec: &'a Recommendation) -> Self
    {
        let groups = rec
            .groups
            .iter()
            .map(|(category, ideas)| GroupReport {
                category,
                count: ideas.len(),
                ideas: ideas
                    .iter()
                    .map(|i| ScoredIdea::new(i, &rec.criteria))
                    .collect(),
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            criteria: &rec.criteria,
            sort_by: rec.order,
            direction: rec.direction,
            total: rec
                .ideas
                .len(),
            groups,
        }
    }
}

pub fn render_recommendation(
    rec: &Recommendation,
    format: OutputFormat,
    opts: &RenderOptions,
) -> Result<String>
{
    match format
    {
        OutputFormat::Text => Ok(render_text(rec, opts)),
        OutputFormat::Table => Ok(render_table(rec)),
        OutputFormat::Json => serde_json::to_string_pretty(&SuggestionReport::new(rec))
            .context("Failed to serialize recommendation"),
    }
}

/// Apply `style` only when color output is enabled
pub(crate) fn paint(
    text: &str,
    color: bool,
    style: impl Fn(&str) -> String,
) -> String
{
    if color { style(text) } else { text.to_string() }
}

fn badge(
    level: MatchLevel,
    score: u8,
    color: bool,
) -> String
{
    let text = format!("[{} {score}]", level.label());
    paint(&text, color, |s| match level
    {
        MatchLevel::High => s
            .green()
            .to_string(),
        MatchLevel::Good => s
            .blue()
            .to_string(),
        MatchLevel::Fair => s
            .yellow()
            .to_string(),
        MatchLevel::Basic => s
            .dimmed()
            .to_string(),
    })
}

pub(crate) fn plural(
    n: usize,
    word: &str,
) -> String
{
    if n == 1 { format!("{n} {word}") } else { format!("{n} {word}s") }
}

fn render_text(
    rec: &Recommendation,
    opts: &RenderOptions,
) -> String
{
    let mut out = String::new();

    if rec
        .ideas
        .is_empty()
    {
        out.push_str(&paint("No Ideas Match Your Criteria", opts.color, |s| {
            s.bold()
                .to_string()
        }));
        out.push_str("\nTry adjusting your filters to see more results.");
        return out;
    }

    let heading = format!(
        "{} Found",
        plural(
            rec.ideas
                .len(),
            "Fan Engagement Idea"
        )
    );
    out.push_str(&paint(&heading, opts.color, |s| {
        s.bold()
            .blue()
            .to_string()
    }));
    out.push('\n');

    for (category, ideas) in &rec.groups
    {
        out.push('\n');
        out.push_str(&paint(category, opts.color, |s| {
            s.bold()
                .to_string()
        }));
        out.push_str(&format!(" ({})\n", plural(ideas.len(), "idea")));

        for idea in ideas
        {
            let scored = ScoredIdea::new(idea, &rec.criteria);
            out.push_str(&format!(
                "  - #{} {}  {}\n",
                idea.id,
                idea.title,
                badge(scored.match_level, scored.relevance_score, opts.color)
            ));
            out.push_str(&format!("    {}\n", idea.description));
            out.push_str(&format!(
                "    {} | {}\n",
                idea.budget_range
                    .badge("Budget"),
                idea.complexity
                    .badge("Complexity")
            ));

            if opts.details
            {
                write_details(&mut out, idea);
            }
        }
    }

    out.trim_end()
        .to_string()
}

fn write_details(
    out: &mut String,
    idea: &Idea,
)
{
    out.push_str(&format!("    Implementation: {}\n", idea.implementation));
    if !idea
        .benefits
        .is_empty()
    {
        out.push_str("    Benefits:\n");
        for b in &idea.benefits
        {
            out.push_str(&format!("      * {b}\n"));
        }
    }
    out.push_str(&format!("    Example: {}\n", idea.example));
    if !idea
        .required_resources
        .is_empty()
    {
        out.push_str("    Resources Needed:\n");
        for r in &idea.required_resources
        {
            out.push_str(&format!("      * {r}\n"));
        }
    }
    out.push_str(&format!("    Implementation Time: {}\n", idea.time_to_implement));
    out.push_str(&format!(
        "    Target Audience: {}\n",
        idea.audience_types
            .iter()
            .join(", ")
    ));
}

#[derive(Tabled)]
struct ResultRow
{
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "TITLE")]
    title: String,
    #[tabled(rename = "BUDGET")]
    budget: String,
    #[tabled(rename = "COMPLEXITY")]
    complexity: String,
    #[tabled(rename = "MATCH")]
    matched: String,
    #[tabled(rename = "SCORE")]
    score: u8,
}

fn render_table(rec: &Recommendation) -> String
{
    if rec
        .ideas
        .is_empty()
    {
        return "No Ideas Match Your Criteria".to_string();
    }

    let rows = rec
        .groups
        .values()
        .flatten()
        .map(|idea| {
            let scored = ScoredIdea::new(idea, &rec.criteria);
            ResultRow {
                id: idea
                    .id
                    .to_string(),
                category: idea
                    .category
                    .clone(),
                title: idea
                    .title
                    .clone(),
                budget: idea
                    .budget_range
                    .to_string(),
                complexity: idea
                    .complexity
                    .to_string(),
                matched: scored
                    .match_level
                    .label()
                    .to_string(),
                score: scored.relevance_score,
            }
        });

    Table::new(rows).to_string()
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::core::idea::Level;
    use crate::core::idea::fixtures::idea;
    use crate::core::sort::SortBy;
    use crate::core::suggest::recommend;

    fn sample() -> Recommendation
    {
        let mut cheap = idea(1, "Player Takeover", "Social Media", Level::Low, Level::Low, &[
            "fans", "families",
        ]);
        cheap.benefits = vec!["Authentic content".into()];
        let catalog = vec![
            cheap,
            idea(2, "Fun Zone", "In-Venue", Level::Medium, Level::Medium, &["families"]),
            idea(3, "Hashtag Wall", "Social Media", Level::Low, Level::Low, &["gamers"]),
        ];
        let criteria = UserCriteria {
            budget_range: Some(Level::Low),
            audience_types: vec!["fans".into(), "families".into()],
            ..Default::default()
        };
        recommend(&catalog, criteria, ResultOrder::Key(SortBy::Relevance), SortDirection::Desc)
    }

    #[test]
    fn test_text_without_color()
    {
        let opts = RenderOptions { color: false, details: false };
        let text = render_recommendation(&sample(), OutputFormat::Text, &opts).unwrap();

        assert!(text.starts_with("2 Fan Engagement Ideas Found"));
        assert!(text.contains("Social Media (1 idea)"));
        assert!(text.contains("#1 Player Takeover  [Good Match 70]"));
        assert!(text.contains("#2 Fun Zone  [Basic Match 35]"));
        assert!(text.contains("Low Budget | Low Complexity"));
        assert!(!text.contains("Benefits:"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_details_section()
    {
        let opts = RenderOptions { color: false, details: true };
        let text = render_recommendation(&sample(), OutputFormat::Text, &opts).unwrap();
        assert!(text.contains("Benefits:\n      * Authentic content"));
        assert!(text.contains("Target Audience: fans, families"));
    }

    #[test]
    fn test_empty_results()
    {
        let rec = recommend(
            &[],
            UserCriteria::default(),
            ResultOrder::Key(SortBy::Relevance),
            SortDirection::Desc,
        );
        let text = render_recommendation(&rec, OutputFormat::Text, &RenderOptions::default())
            .unwrap();
        assert_eq!(
            text,
            "No Ideas Match Your Criteria\nTry adjusting your filters to see more results."
        );
    }

    #[test]
    fn test_json_report_shape()
    {
        let rec = sample();
        let json = render_recommendation(&rec, OutputFormat::Json, &RenderOptions::default())
            .unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(v["total"], 2);
        assert_eq!(v["sortBy"], "relevance");
        assert_eq!(v["direction"], "desc");
        assert_eq!(v["groups"][0]["category"], "Social Media");
        assert_eq!(v["groups"][0]["ideas"][0]["relevanceScore"], 70);
        assert_eq!(v["groups"][0]["ideas"][0]["matchLevel"], "Good");
        assert_eq!(v["groups"][0]["ideas"][0]["budgetRange"], "low");
        assert!(v["generatedAt"].is_string());
    }

    #[test]
    fn test_table_lists_every_idea()
    {
        let table = render_recommendation(&sample(), OutputFormat::Table, &RenderOptions::default())
            .unwrap();
        assert!(table.contains("Player Takeover"));
        assert!(table.contains("Fun Zone"));
        assert!(!table.contains("Hashtag Wall"));
        assert!(table.contains("SCORE"));
    }
}

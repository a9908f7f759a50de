//! `huddle catalog`: list the idea catalog without any criteria applied.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tabled::{Table, Tabled};
use tracing::debug;

use crate::cli::{AppContext, CatalogArgs, OutputFormat};
use crate::core::group::{CategoryGroups, group_ideas_by_category};
use crate::core::idea::Idea;
use crate::core::render::{paint, plural};
use crate::core::suggest::config_or_default;
use crate::infra::catalog::load_catalog;

#[derive(Tabled)]
struct CatalogRow
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
    #[tabled(rename = "AUDIENCE")]
    audience: String,
}

impl From<&Idea> for CatalogRow
{
    fn from(idea: &Idea) -> Self
    {
        Self {
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
            audience: idea
                .audience_types
                .join(", "),
        }
    }
}

pub fn catalog_table(ideas: &[Idea]) -> String
{
    Table::new(
        ideas
            .iter()
            .map(CatalogRow::from),
    )
    .to_string()
}

/// Category headings with one line per idea
pub fn grouped_listing(
    groups: &CategoryGroups,
    color: bool,
) -> String
{
    let mut out = String::new();
    for (category, ideas) in groups
    {
        out.push_str(&paint(category, color, |s| {
            s.bold()
                .to_string()
        }));
        out.push_str(&format!(" ({})\n", plural(ideas.len(), "idea")));
        for idea in ideas
        {
            out.push_str(&format!(
                "  #{} {} [{} | {}]\n",
                idea.id,
                idea.title,
                idea.budget_range
                    .badge("Budget"),
                idea.complexity
                    .badge("Complexity")
            ));
        }
        out.push('\n');
    }
    out.trim_end()
        .to_string()
}

pub fn run(
    args: CatalogArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config = config_or_default();
    let catalog_path = config.catalog_path(
        args.catalog
            .as_deref(),
    );
    let ideas = load_catalog(catalog_path.as_deref())?;
    debug!(ideas = ideas.len(), "catalog loaded");

    let format = args
        .format
        .unwrap_or(OutputFormat::Table);

    if format == OutputFormat::Json
    {
        let json = if args.grouped
        {
            serde_json::to_string_pretty(&group_ideas_by_category(&ideas))
        }
        else
        {
            serde_json::to_string_pretty(&ideas)
        }
        .context("Failed to serialize catalog")?;
        println!("{json}");
        return Ok(());
    }

    if ctx.quiet
    {
        return Ok(());
    }

    if args.grouped || format == OutputFormat::Text
    {
        let groups = group_ideas_by_category(&ideas);
        println!("{}", grouped_listing(&groups, !ctx.no_color));
    }
    else
    {
        println!("{}", catalog_table(&ideas));
    }

    Ok(())
}

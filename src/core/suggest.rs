//! The recommendation pipeline: filter, order, group.

use anyhow::Result;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::cli::{AppContext, CriteriaArgs, OutputFormat, SuggestArgs};
use crate::core::criteria::UserCriteria;
use crate::core::filter::filter_engagement_ideas;
use crate::core::group::{CategoryGroups, group_ideas_by_category};
use crate::core::idea::Idea;
use crate::core::render::{RenderOptions, render_recommendation};
use crate::core::sort::{SortBy, SortDirection, rank_by_score, sort_engagement_ideas};
use crate::infra::catalog::load_catalog;
use crate::infra::config::{Config, load_config};

/// How the filtered ideas are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultOrder
{
    /// One of the user-facing sort keys
    Key(SortBy),
    /// Descending/ascending relevance score, requested explicitly
    Score,
}

impl ResultOrder
{
    pub const fn as_str(self) -> &'static str
    {
        match self
        {
            ResultOrder::Key(SortBy::Relevance) => "relevance",
            ResultOrder::Key(SortBy::Complexity) => "complexity",
            ResultOrder::Key(SortBy::Budget) => "budget",
            ResultOrder::Key(SortBy::Alphabetical) => "alphabetical",
            ResultOrder::Score => "score",
        }
    }
}

impl Serialize for ResultOrder
{
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Output of one pipeline run
#[derive(Debug, Clone)]
pub struct Recommendation
{
    pub criteria: UserCriteria,
    pub order: ResultOrder,
    pub direction: SortDirection,
    /// Filtered and ordered ideas
    pub ideas: Vec<Idea>,
    /// Same ideas bucketed by category for display
    pub groups: CategoryGroups,
}

/// Run filter, order and group over `catalog` for one set of criteria
#[instrument(level = "debug", skip(catalog, criteria), fields(ideas = catalog.len()))]
pub fn recommend(
    catalog: &[Idea],
    criteria: UserCriteria,
    order: ResultOrder,
    direction: SortDirection,
) -> Recommendation
{
    let filtered = filter_engagement_ideas(catalog, Some(&criteria));

    let ideas = match order
    {
        ResultOrder::Key(sort_by) => sort_engagement_ideas(&filtered, sort_by, direction),
        ResultOrder::Score => rank_by_score(&filtered, &criteria, direction),
    };

    let groups = group_ideas_by_category(&ideas);

    Recommendation { criteria, order, direction, ideas, groups }
}

/// Turn the criteria flags into criteria, enforcing the form rules unless
/// `--lenient` was given
pub fn criteria_from_args(args: &CriteriaArgs) -> Result<UserCriteria>
{
    let form = args.to_form();
    if args.lenient
    {
        return Ok(form.into_criteria());
    }
    Ok(form.validate()?)
}

/// Config from disk/env; a broken config file falls back to defaults
pub fn config_or_default() -> Config
{
    load_config().unwrap_or_else(|err| {
        warn!("ignoring configuration: {err:#}");
        Config::default()
    })
}

pub fn run(
    args: SuggestArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config = config_or_default();
    let criteria = criteria_from_args(&args.criteria)?;

    let catalog_path = config.catalog_path(
        args.catalog
            .as_deref(),
    );
    let catalog = load_catalog(catalog_path.as_deref())?;

    let order = if args.by_score
    {
        ResultOrder::Score
    }
    else
    {
        ResultOrder::Key(
            args.sort_by
                .unwrap_or(config.results.sort_by),
        )
    };
    let direction = args
        .direction
        .unwrap_or(config.results.direction);
    let format = args
        .format
        .unwrap_or(config.results.format);

    let rec = recommend(&catalog, criteria, order, direction);
    info!(
        matched = rec.ideas.len(),
        categories = rec.groups.len(),
        order = order.as_str(),
        "recommendation ready"
    );

    if ctx.quiet && format != OutputFormat::Json
    {
        return Ok(());
    }

    let opts = RenderOptions {
        color: !ctx.no_color,
        details: args.details || config.results.details,
    };
    println!("{}", render_recommendation(&rec, format, &opts)?);

    Ok(())
}

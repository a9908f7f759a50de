use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::criteria::{CriteriaForm, OrganizationType, Timeframe};
use crate::core::idea::Level;
use crate::core::sort::{SortBy, SortDirection};

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
    pub verbose: bool,  // global --verbose
}

#[derive(Parser)]
#[command(name = "huddle")]
#[command(about = "Recommend fan engagement ideas for your sports organization")]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter, sort and group ideas that fit your criteria
    Suggest(SuggestArgs),

    /// List every idea in the catalog
    Catalog(CatalogArgs),

    /// Explain how one idea scores against your criteria
    Score(ScoreArgs),

    /// Show the values accepted by each criteria flag
    Options(OptionsArgs),

    /// Initialize a huddle.toml config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Grouped listing with match badges
    #[default]
    Text,
    /// One table row per idea
    Table,
    /// Single JSON document
    Json,
}

/// The criteria form, one flag per field
#[derive(Args, Debug, Clone, Default)]
pub struct CriteriaArgs {
    /// Organization type
    #[arg(long = "org", value_enum)]
    pub organization_type: Option<OrganizationType>,

    /// Target audience (repeatable), e.g. "fans", "families"
    #[arg(short, long = "audience", value_name = "TAG")]
    pub audience_types: Vec<String>,

    /// Budget range
    #[arg(short, long = "budget", value_enum)]
    pub budget_range: Option<Level>,

    /// Implementation timeframe
    #[arg(short = 't', long = "timeframe", value_enum)]
    pub implementation_time: Option<Timeframe>,

    /// Engagement goal (repeatable), e.g. "boost_attendance"
    #[arg(short = 'g', long = "goal", value_name = "GOAL")]
    pub engagement_goals: Vec<String>,

    /// Current challenges, free text
    #[arg(long)]
    pub challenges: Option<String>,

    /// Complexity ceiling (not part of the form)
    #[arg(long, value_enum)]
    pub complexity: Option<Level>,

    /// Restrict to these categories (repeatable)
    #[arg(short, long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Accept incomplete criteria instead of enforcing the form rules
    #[arg(long)]
    pub lenient: bool,
}

impl CriteriaArgs {
    pub fn to_form(&self) -> CriteriaForm {
        CriteriaForm {
            organization_type: self.organization_type,
            audience_types: self.audience_types.clone(),
            budget_range: self.budget_range,
            implementation_time: self.implementation_time,
            engagement_goals: self.engagement_goals.clone(),
            current_challenges: self.challenges.clone(),
            complexity: self.complexity,
            categories: self.categories.clone(),
        }
    }
}

#[derive(Parser, Debug)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub criteria: CriteriaArgs,

    /// JSON catalog file (defaults to the bundled catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Sort key [default from config: relevance]
    #[arg(short, long = "sort", value_enum)]
    pub sort_by: Option<SortBy>,

    /// Sort direction [default from config: desc]
    #[arg(short, long, value_enum)]
    pub direction: Option<SortDirection>,

    /// Order by relevance score instead of a sort key
    #[arg(long, conflicts_with = "sort_by")]
    pub by_score: bool,

    /// Output format [default from config: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show implementation details for each idea
    #[arg(long)]
    pub details: bool,
}

#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// JSON catalog file (defaults to the bundled catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Group ideas by category
    #[arg(long)]
    pub grouped: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// Idea id as listed by `huddle catalog`
    pub id: String,

    #[command(flatten)]
    pub criteria: CriteriaArgs,

    /// JSON catalog file (defaults to the bundled catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Emit JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct OptionsArgs {
    /// Emit JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to initialize config in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Output directory; if omitted and --stdout not set, prints error
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print completion script to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

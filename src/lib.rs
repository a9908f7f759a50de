//! **huddle** - fan engagement idea recommender for sports organizations
//!
//! Filters a catalog of engagement ideas against an organization's criteria,
//! orders the survivors and groups them by category for display.

/// Command-line interface with clap integration
pub mod cli;

/// Shell completion generation
pub mod completion;

/// Recommendation engine: pure filter/score/sort/group plus the subcommands
/// built on it
pub mod core {
    /// Idea records and the low/medium/high scale
    pub mod idea;
    pub use idea::{Idea, IdeaId, Level};

    /// User criteria and form validation
    pub mod criteria;
    pub use criteria::{CriteriaError, CriteriaForm, FormErrors, UserCriteria};

    /// Recognized form option values
    pub mod options;

    /// Hard-criteria filtering
    pub mod filter;
    pub use filter::filter_engagement_ideas;

    /// Relevance scoring 0-100
    pub mod score;
    pub use score::{MatchLevel, ScoreBreakdown, calculate_relevance_score};

    /// Ordering by complexity, budget or title
    pub mod sort;
    pub use sort::{SortBy, SortDirection, sort_engagement_ideas};

    /// Category grouping for display
    pub mod group;
    pub use group::{CategoryGroups, group_ideas_by_category};

    /// Filter → order → group pipeline behind `huddle suggest`
    pub mod suggest;
    pub use suggest::{Recommendation, ResultOrder, recommend, run as suggest_run};

    /// Text, table and JSON views of a recommendation
    pub mod render;

    /// Score breakdown for `huddle score`
    pub mod explain;
    pub use explain::run as score_run;

    /// Catalog listing for `huddle catalog`
    pub mod browse;
    pub use browse::run as catalog_run;
}

/// Infrastructure - configuration, catalog loading and logging
pub mod infra {
    /// Configuration with TOML/YAML/JSON files and HUDDLE_* overrides
    pub mod config;
    pub use config::{Config, init as config_init, load_config};

    /// Bundled and on-disk idea catalogs
    pub mod catalog;
    pub use catalog::{CatalogError, load_catalog};

    /// tracing subscriber setup
    pub mod logging;
    pub use logging::init_tracing;
}

// Strategic re-exports for clean CLI interface
pub use cli::{AppContext, Cli, Commands};
pub use core::{catalog_run, score_run, suggest_run};
pub use infra::{Config, load_config};

// Engine entry points for library consumers
pub use core::{
    Idea, Level, SortBy, SortDirection, UserCriteria, calculate_relevance_score,
    filter_engagement_ideas, group_ideas_by_category, sort_engagement_ideas,
};

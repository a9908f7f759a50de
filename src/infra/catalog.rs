//! Idea catalog loading.
//!
//! The catalog is a JSON array of idea records. A default catalog is compiled
//! into the binary; a file on disk can replace it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::core::idea::Idea;

const BUNDLED_CATALOG: &str = include_str!("../../data/engagement_ideas.json");

#[derive(Debug, Error)]
pub enum CatalogError
{
    #[error("failed to read catalog {path}")]
    Read
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog {origin}")]
    Parse
    {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("idea {id} in {origin} has no audience types")]
    NoAudience
    {
        origin: String, id: String
    },

    #[error("duplicate idea id {id} in {origin}")]
    DuplicateId
    {
        origin: String, id: String
    },
}

/// The catalog shipped with the binary
pub fn bundled_catalog() -> Result<Vec<Idea>, CatalogError>
{
    parse_catalog(BUNDLED_CATALOG, "bundled catalog")
}

/// Load from `path`, or the bundled catalog when no path is given
#[instrument(level = "debug")]
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<Idea>, CatalogError>
{
    let Some(path) = path
    else
    {
        return bundled_catalog();
    };

    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_catalog(&text, &path.display().to_string())
}

/// Parse catalog JSON and check the record invariants the engine relies on
pub fn parse_catalog(
    text: &str,
    origin: &str,
) -> Result<Vec<Idea>, CatalogError>
{
    let ideas: Vec<Idea> = serde_json::from_str(text).map_err(|source| CatalogError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    let mut seen = HashSet::with_capacity(ideas.len());
    for idea in &ideas
    {
        if idea
            .audience_types
            .is_empty()
        {
            return Err(CatalogError::NoAudience {
                origin: origin.to_string(),
                id: idea
                    .id
                    .to_string(),
            });
        }
        if !seen.insert(&idea.id)
        {
            return Err(CatalogError::DuplicateId {
                origin: origin.to_string(),
                id: idea
                    .id
                    .to_string(),
            });
        }
    }

    debug!(count = ideas.len(), origin, "catalog loaded");
    Ok(ideas)
}

/// Expand `~` and `$VAR` in a configured catalog path
pub fn expand_path(raw: &str) -> PathBuf
{
    PathBuf::from(
        shellexpand::full(raw)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| raw.to_string()),
    )
}

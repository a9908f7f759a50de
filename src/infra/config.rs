use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::{AppContext, InitArgs, OutputFormat};
use crate::core::sort::{SortBy, SortDirection};
use crate::infra::catalog::expand_path;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config
{
    /// Where ideas come from
    pub catalog: CatalogConfig,

    /// Default presentation of results
    pub results: ResultsConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig
{
    /// JSON catalog file; the bundled catalog is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsConfig
{
    pub sort_by: SortBy,
    pub direction: SortDirection,
    pub format: OutputFormat,
    /// Show implementation details, benefits and resources for every idea
    pub details: bool,
}

impl Default for ResultsConfig
{
    fn default() -> Self
    {
        Self {
            sort_by: SortBy::Relevance,
            direction: SortDirection::Desc,
            format: OutputFormat::Text,
            details: false,
        }
    }
}

impl Config
{
    /// Catalog path from the command line, else from config, `~` expanded
    pub fn catalog_path(
        &self,
        cli: Option<&Path>,
    ) -> Option<PathBuf>
    {
        cli.map(Path::to_path_buf)
            .or_else(|| {
                self.catalog
                    .path
                    .as_deref()
                    .map(expand_path)
            })
    }
}

/// Config file names looked up in the working directory, first match wins
pub const CONFIG_FILES: [&str; 4] = ["huddle.toml", "huddle.yaml", "huddle.json", ".huddle.toml"];

/// Header written above the generated defaults by `huddle init`
const INIT_HEADER: &str = "\
# huddle configuration
# Values here are defaults; command-line flags always win.
# Environment overrides use HUDDLE_<SECTION>__<KEY>, e.g. HUDDLE_RESULTS__SORT_BY=budget

";

/// The config file `dir` would load, if any
pub fn config_file_in(dir: &Path) -> Option<PathBuf>
{
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}

/// Load config from the working directory plus `HUDDLE_*` environment
pub fn load_config() -> Result<Config>
{
    load_config_from(Path::new("."))
}

pub fn load_config_from(dir: &Path) -> Result<Config>
{
    let mut builder = config::Config::builder();

    if let Some(file) = config_file_in(dir)
    {
        debug!(path = %file.display(), "loading config file");
        builder = builder.add_source(config::File::from(file));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("HUDDLE")
            .prefix_separator("_")
            .separator("__"),
    );

    builder
        .build()
        .context("Failed to load configuration")?
        .try_deserialize()
        .context("Failed to parse configuration")
}

/// Write the default config into `dir`, refusing to clobber unless `force`
pub fn write_default_config(
    dir: &Path,
    force: bool,
) -> Result<PathBuf>
{
    let path = dir.join(CONFIG_FILES[0]);
    if path.exists() && !force
    {
        bail!("Config file already exists at {}. Use --force to overwrite.", path.display());
    }

    let body =
        toml::to_string_pretty(&Config::default()).context("Failed to serialize default config")?;
    std::fs::write(&path, format!("{INIT_HEADER}{body}"))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

pub fn init(
    args: InitArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let path = write_default_config(&args.path, args.force)?;

    if !ctx.quiet
    {
        println!("Created config file at {}", path.display());
    }
    Ok(())
}

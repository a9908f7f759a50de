use anyhow::Result;
use clap::Parser;
use huddle::cli::{AppContext, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
        verbose: cli.verbose,
    };
    huddle::infra::init_tracing(&ctx);

    match cli.command {
        Commands::Suggest(args) => huddle::suggest_run(args, &ctx),
        Commands::Catalog(args) => huddle::catalog_run(args, &ctx),
        Commands::Score(args) => huddle::score_run(args, &ctx),
        Commands::Options(args) => huddle::core::options::run(args, &ctx),
        Commands::Init(args) => huddle::infra::config::init(args, &ctx),
        Commands::Completions(args) => huddle::completion::run(args, &ctx),
    }
}

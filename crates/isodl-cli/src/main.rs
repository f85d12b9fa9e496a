//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers, which go through `CliContext` for
//! every collaborator.

use clap::{CommandFactory, Parser};

use isodl_cli::handlers::resolve::ResolveArgs;
use isodl_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig {
        config_base: cli.config,
        remote_url: cli.remote_url,
    };

    if let Err(err) = run(&config, command).await {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            eprintln!("Error: {cli_err}");
            std::process::exit(cli_err.exit_code());
        }
        return Err(err);
    }
    Ok(())
}

async fn run(config: &CliConfig, command: Commands) -> anyhow::Result<()> {
    let ctx = bootstrap(config)?;

    match command {
        Commands::Families => handlers::families::execute(&ctx).await?,
        Commands::Distros { family } => handlers::distros::execute(&ctx, &family).await?,
        Commands::Show { family, distro } => {
            handlers::show::execute(&ctx, &family, &distro).await?;
        }
        Commands::Resolve {
            family,
            distro,
            versions,
            all,
            json,
        } => {
            let args = ResolveArgs {
                family,
                distro,
                versions,
                all,
                json,
            };
            handlers::resolve::execute(&ctx, args).await?;
        }
        Commands::Check => handlers::check::execute(&ctx).await?,
        Commands::Source => handlers::source::execute(&ctx).await?,
    }
    Ok(())
}

use crate::commands::{run_extract, run_project, run_score, ExtractArgs, ProjectArgs, ScoreArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use creditsim::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Score Simulator",
    about = "Score financial profiles and explore what-if scenarios from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a profile and print the factor report
    Score(ScoreArgs),
    /// Show which profile fields a free-text description yields
    Extract(ExtractArgs),
    /// Project the score under the three improvement strategies
    Project(ProjectArgs),
    /// Run an end-to-end walk-through from extraction to projection
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Extract(args) => run_extract(args),
        Command::Project(args) => run_project(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn score_flags_parse_with_defaults() {
        let cli = Cli::try_parse_from([
            "creditsim",
            "score",
            "--credit-usage",
            "8",
            "--today",
            "2025-09-24",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.profile.credit_usage, 8.0);
                assert_eq!(args.profile.income, 50_000.0);
                assert_eq!(args.profile.active_loans, 2);
                assert!(args.today.is_some());
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn missing_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["creditsim"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn malformed_today_is_rejected() {
        let result = Cli::try_parse_from(["creditsim", "score", "--today", "yesterday"]);
        assert!(result.is_err());
    }
}

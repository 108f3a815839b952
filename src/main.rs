mod fetch;
mod output;
mod parser;

use std::collections::HashMap;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing::warn;

#[derive(Parser)]
#[command(name = "gem_search", about = "Search RubyGems from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search RubyGems and list matching gems in ranking order
    Search {
        /// Search terms, joined with '+' into a single query
        #[arg(required = true)]
        terms: Vec<String>,
        /// Keep the record still open when the page ends
        #[arg(long)]
        keep_trailing: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage goes to stdout; only --help/--version are not misuse.
            print!("{}", err.render());
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    match cli.command {
        Commands::Search {
            terms,
            keep_trailing,
        } => search(&terms, keep_trailing),
    }
}

/// Run one search. Never fails: a fetch error degrades to an empty result
/// set and the command still exits 0.
fn search(terms: &[String], keep_trailing: bool) {
    let query = terms.join("+");

    let gems = match fetch::search_page(&query) {
        Ok(body) => parser::extract_gems(&body, keep_trailing),
        Err(err) => {
            warn!("search request failed: {:#}", err);
            println!("ERROR: Failed to reach RubyGems");
            HashMap::new()
        }
    };

    let ordered = output::by_position(gems);
    print!("{}", output::render(&ordered));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_args_rejected() {
        assert!(Cli::try_parse_from(["gem_search"]).is_err());
        assert!(Cli::try_parse_from(["gem_search", "search"]).is_err());
    }

    #[test]
    fn unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["gem_search", "install", "rails"]).is_err());
    }

    #[test]
    fn search_terms_parse() {
        let cli = Cli::try_parse_from(["gem_search", "search", "http", "client"]).unwrap();
        let Commands::Search {
            terms,
            keep_trailing,
        } = cli.command;
        assert_eq!(terms, ["http", "client"]);
        assert!(!keep_trailing);
        assert_eq!(terms.join("+"), "http+client");
    }

    #[test]
    fn keep_trailing_flag() {
        let cli =
            Cli::try_parse_from(["gem_search", "search", "--keep-trailing", "rails"]).unwrap();
        let Commands::Search { keep_trailing, .. } = cli.command;
        assert!(keep_trailing);
    }
}

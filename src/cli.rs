use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snippets")]
#[command(about = "Store and retrieve snippets of text")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Default)]
pub struct GlobalArgs {
    /// Database file (defaults to the platform data directory)
    #[arg(long, global = true, env = "SNIPPETS_DB")]
    pub db: Option<PathBuf>,

    /// Config file (defaults to ~/.config/snippets/config.toml)
    #[arg(long, global = true, env = "SNIPPETS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Diagnostic log file
    #[arg(long, global = true, env = "SNIPPETS_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Store a snippet
    Put(PutArgs),

    /// Retrieve list of keywords
    Catalog(CatalogArgs),

    /// Retrieve list of possible snippet matches
    Search(SearchArgs),

    /// Retrieve a snippet
    Get(GetArgs),
}

#[derive(Parser)]
pub struct PutArgs {
    /// Hide this snippet text from search and catalog
    #[arg(long, default_value_t = false)]
    pub hide: bool,

    /// Name of the snippet
    pub name: String,

    /// Snippet text
    pub snippet: String,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// LIKE pattern matched against snippet text (% and _ are wildcards)
    pub terms: String,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser)]
pub struct GetArgs {
    /// Name of the snippet
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_parses_hide_flag_and_positionals() {
        let cli = Cli::try_parse_from(["snippets", "put", "--hide", "alpha", "hello world"]).unwrap();
        let Command::Put(args) = cli.command else { panic!("expected put") };
        assert!(args.hide);
        assert_eq!(args.name, "alpha");
        assert_eq!(args.snippet, "hello world");
    }

    #[test]
    fn global_db_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["snippets", "get", "alpha", "--db", "/tmp/x.db"]).unwrap();
        assert_eq!(cli.global.db, Some(PathBuf::from("/tmp/x.db")));
        assert!(matches!(cli.command, Command::Get(_)));
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["snippets"]).is_err());
    }

    #[test]
    fn put_requires_snippet_text() {
        assert!(Cli::try_parse_from(["snippets", "put", "alpha"]).is_err());
    }
}

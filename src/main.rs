use clap::Parser;
use snippets::cli::{Cli, Command};
use snippets::config::Config;
use snippets::report::{self, Format};
use snippets::{Result, Store};

fn run(command: Command, store: &mut Store) -> Result<String> {
    match command {
        Command::Put(args) => {
            let stored = store.put(&args.name, &args.snippet, args.hide)?;
            Ok(report::text::stored(&stored))
        }
        Command::Catalog(args) => {
            let keywords = store.catalog()?;
            report::catalog(&keywords, Format::from_json_flag(args.json))
        }
        Command::Search(args) => {
            let matches = store.search(&args.terms)?;
            report::search(&matches, Format::from_json_flag(args.json))
        }
        Command::Get(args) => {
            let message = store.get(&args.name)?;
            Ok(report::text::get(message.as_deref()))
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = snippets::logging::init(&config.log_file) {
        eprintln!("warning: logging disabled: {e}");
    }

    tracing::debug!(path = %config.db_path.display(), "connecting to database");
    let mut store = match Store::open(&config.db_path, config.busy_timeout) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "database unavailable");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    match run(cli.command, &mut store) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

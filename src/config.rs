use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::cli::GlobalArgs;
use crate::error::{Error, Result};
use crate::paths;

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Config {
    pub db_path: PathBuf,
    pub log_file: PathBuf,
    pub busy_timeout: Duration,
}

/// Contents of config.toml. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub database: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub busy_timeout: Option<String>,
}

impl FileConfig {
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads the file at `path`. A missing file is only tolerated when it
    /// was not named explicitly.
    pub fn read(path: &Path, explicit: bool) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(path, &contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => Ok(Self::default()),
            Err(source) => Err(Error::Config {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl Config {
    pub fn load(args: &GlobalArgs) -> Result<Self> {
        let file = match (&args.config, paths::default_config_file()) {
            (Some(path), _) => FileConfig::read(path, true)?,
            (None, Some(path)) => FileConfig::read(&path, false)?,
            (None, None) => FileConfig::default(),
        };

        // only touch the data dir when something actually falls back to it
        let needs_data_dir = (args.db.is_none() && file.database.is_none())
            || (args.log_file.is_none() && file.log_file.is_none());
        let data_dir = if needs_data_dir {
            paths::data_dir()?
        } else {
            PathBuf::new()
        };

        Self::resolve(args, file, &data_dir)
    }

    /// Applies precedence: command line / environment, then file, then defaults under `data_dir`.
    pub fn resolve(args: &GlobalArgs, file: FileConfig, data_dir: &Path) -> Result<Self> {
        let db_path = args
            .db
            .clone()
            .or(file.database)
            .unwrap_or_else(|| data_dir.join(paths::DB_FILE));

        let log_file = args
            .log_file
            .clone()
            .or(file.log_file)
            .unwrap_or_else(|| data_dir.join(paths::LOG_FILE));

        let busy_timeout = match file.busy_timeout {
            Some(value) => humantime::parse_duration(&value)
                .map_err(|source| Error::Duration { value, source })?,
            None => DEFAULT_BUSY_TIMEOUT,
        };

        Ok(Config {
            db_path,
            log_file,
            busy_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<FileConfig> {
        FileConfig::parse(Path::new("config.toml"), contents)
    }

    #[test]
    fn defaults_land_in_data_dir() {
        let config = Config::resolve(&GlobalArgs::default(), FileConfig::default(), Path::new("/data")).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/data/snippets.db"));
        assert_eq!(config.log_file, PathBuf::from("/data/snippets.log"));
        assert_eq!(config.busy_timeout, DEFAULT_BUSY_TIMEOUT);
    }

    #[test]
    fn file_values_override_defaults() {
        let file = parse(
            r#"
            database = "/srv/snips.db"
            log_file = "/var/log/snips.log"
            busy_timeout = "250ms"
            "#,
        )
        .unwrap();

        let config = Config::resolve(&GlobalArgs::default(), file, Path::new("/data")).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/srv/snips.db"));
        assert_eq!(config.log_file, PathBuf::from("/var/log/snips.log"));
        assert_eq!(config.busy_timeout, Duration::from_millis(250));
    }

    #[test]
    fn command_line_overrides_file() {
        let file = parse(r#"database = "/srv/snips.db""#).unwrap();
        let args = GlobalArgs {
            db: Some(PathBuf::from("/tmp/override.db")),
            ..GlobalArgs::default()
        };

        let config = Config::resolve(&args, file, Path::new("/data")).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/override.db"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(parse("colour = true"), Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn bad_duration_is_reported() {
        let file = parse(r#"busy_timeout = "soon""#).unwrap();
        let err = Config::resolve(&GlobalArgs::default(), file, Path::new("/data"))
            .err()
            .unwrap();
        assert!(matches!(err, Error::Duration { ref value, .. } if value == "soon"));
    }

    #[test]
    fn missing_default_file_is_fine_but_explicit_is_not() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("absent.toml");

        assert!(FileConfig::read(&path, false).unwrap().database.is_none());
        assert!(matches!(FileConfig::read(&path, true), Err(Error::Config { .. })));
    }
}

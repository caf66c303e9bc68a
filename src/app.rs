use std::io;

use tracing::debug;

use crate::cli::Cli;
use crate::config::Config;
use crate::data::CityFiles;
use crate::error::AppError;
use crate::session::{Session, SessionOptions};

/// City files from the data directory plus `[files]` overrides from the config
pub(crate) fn city_files(cli: &Cli, config: &Config) -> CityFiles {
    let data_dir = cli.data_dir();
    debug!("Using data directory {}", data_dir.display());
    CityFiles::with_overrides(&data_dir, config.city_overrides())
}

/// Run the interactive session on the process console
pub(crate) fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let files = city_files(cli, config);
    let opts = SessionOptions {
        use_color: cli.use_color(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&files, stdin.lock(), stdout.lock(), opts).run()
}

use std::io;
use std::process;

use tracing::error;

use speedtest::cli::{self, Options};
use speedtest::SimConfig;

fn main() {
    cli::init_logging();

    let options = match Options::parse() {
        Ok(options) => options,
        Err(usage) => {
            // A wrong argument count is not a failure: show usage and stop.
            println!("{}", usage);
            return;
        }
    };

    let config = SimConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = speedtest::run_log(&options.log_path, &config, &mut out) {
        error!(error = ?e, "Run failed");
        eprintln!("speedtest: {}", e);
        process::exit(1);
    }
}

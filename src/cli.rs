use std::path::PathBuf;

use structopt::clap::AppSettings;
use structopt::StructOpt;
use tracing::info;

#[derive(StructOpt, Debug, Clone)]
#[structopt(
    name = "speedtest",
    about = "Estimate car power and drag from a race log and simulate a throttle schedule",
    setting = AppSettings::AllowLeadingHyphen
)]
pub struct Options {
    /// Race log; the second field of lines 2 and 3 holds the travelled distance
    #[structopt(allow_hyphen_values = true)]
    pub log_path: PathBuf,
}

impl Options {
    /// Parse process arguments, or return the usage text on a bad command line.
    pub fn parse() -> Result<Self, String> {
        Self::from_args_safe().map_err(|e| e.message)
    }
}

/// Send `tracing` events to stderr so stdout only carries simulation output.
pub fn init_logging() {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .finish();
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => {
            info!("Logging initialised");
        }
        Err(e) => {
            eprintln!("Failed to init logging. {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_path_argument() {
        let options = Options::from_iter_safe(["speedtest", "race.log"]).unwrap();
        assert_eq!(options.log_path, PathBuf::from("race.log"));
    }

    #[test]
    fn rejects_missing_and_extra_arguments() {
        assert!(Options::from_iter_safe(["speedtest"]).is_err());
        assert!(Options::from_iter_safe(["speedtest", "a.log", "b.log"]).is_err());
    }

    #[test]
    fn path_may_start_with_hyphen() {
        let options = Options::from_iter_safe(["speedtest", "-race.log"]).unwrap();
        assert_eq!(options.log_path, PathBuf::from("-race.log"));
        let options = Options::from_iter_safe(["speedtest", "-"]).unwrap();
        assert_eq!(options.log_path, PathBuf::from("-"));
        assert!(Options::from_iter_safe(["speedtest", "-race.log", "b.log"]).is_err());
    }
}

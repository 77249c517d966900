use std::io;

use clap::Parser;

use kanso::cli::{self, Cli};
use kanso::config::Config;
use kanso::{klog, klog_debug, klog_error, Result};

fn main() -> Result<()> {
    let cli = Cli::parse();

    kanso::log::init_with_debug(cli.debug);
    klog!("kanso started: {:?}", cli.command);
    klog_debug!("Log level {}", kanso::log::get_level().as_str());

    let result = Config::load().and_then(|config| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        cli::run(&cli.command, &config, &mut out)
    });

    if let Err(e) = &result {
        klog_error!("kanso failed: {}", e);
    }
    result
}

//! Headless demo runner (default binary).
//!
//! Plays a seeded session with a greedy placement search and prints the final
//! snapshot as JSON on stdout. Logs go to stderr.

use anyhow::Result;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

use blockfall::demo::{parse_demo_args, run_demo};

fn init_log(level: LevelFilter) -> Result<()> {
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S%.3f)} {l} {t} {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("console", Box::new(console)),
        )
        .build(Root::builder().appender("console").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_demo_args(&args)?;
    init_log(config.log_level)?;

    let game = run_demo(&config)?;
    println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    Ok(())
}

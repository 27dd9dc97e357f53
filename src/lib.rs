pub mod cards;
pub mod client;
pub mod players;
pub mod protocol;
pub mod state;

/// Chip amounts as the engine reports them.
pub type Chips = i32;

/// Initialize logging to the terminal, and also to a timestamped file
/// under `dir` when one is given.
///
/// Standard output carries the protocol, so the terminal logger writes to
/// standard error only.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, dir: Option<&std::path::Path>) -> anyhow::Result<()> {
    use anyhow::Context;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir).context("create log directory")?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .context("time moves slow")?
            .as_secs();
        let path = dir.join(format!("{}.log", time));
        let file = std::fs::File::create(&path)
            .with_context(|| format!("create log file {}", path.display()))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers).context("initialize logger")
}

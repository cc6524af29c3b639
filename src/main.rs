use anyhow::Context;
use ringsum::config::ConfigManager;
use ringsum::engines::report::render;
use ringsum::engines::search::{LogProgressCallback, RestartConfig, RestartEngine};

const USAGE: &str = "usage: ringsum [CONFIG_PATH]

Searches for rings of 1..N whose weakest three-element window reaches the
target sum. Settings come from the optional TOML file and can be overridden
with RINGSUM_<SECTION>__<KEY> environment variables.";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_path = std::env::args().nth(1);
    if matches!(config_path.as_deref(), Some("-h") | Some("--help")) {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut manager = ConfigManager::new();
    manager
        .load_layered(config_path.as_deref())
        .context("could not load configuration")?;
    let config = manager.get();

    let mut engine = RestartEngine::new(RestartConfig::from(&config.search));
    let outcome = engine.run(&mut LogProgressCallback)?;

    if outcome.arrangements.is_empty() {
        eprintln!("no arrangements found");
    } else {
        println!("{}", render(&outcome.arrangements, config.output.format)?);
    }

    Ok(())
}

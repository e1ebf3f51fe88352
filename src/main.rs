use hollywood_mystery::config::{GameConfig, DEFAULT_SAVE_DIR};
use hollywood_mystery::EngineBuilder;

/// Overrides the save directory.
const SAVE_DIR_ENV: &str = "HMM_SAVE_DIR";

fn main() {
    env_logger::init();

    let save_dir = std::env::var(SAVE_DIR_ENV).unwrap_or_else(|_| DEFAULT_SAVE_DIR.to_string());
    let config = GameConfig::default().with_save_dir(save_dir);

    EngineBuilder::new().with_config(config).build().run();
}

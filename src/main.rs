use anyhow::Context;
use still_life::SceneConfig;

/// Usage: `still-life [config.toml]`
fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => SceneConfig::load_from_file(&path)
            .with_context(|| format!("could not read config {}", path))?,
        None => SceneConfig::default(),
    };
    still_life::run(config)
}

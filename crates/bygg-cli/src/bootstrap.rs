use anyhow::Context;
use bygg_config::ByggConfig;

pub fn load_config() -> anyhow::Result<ByggConfig> {
    load_dotenv()?;
    ByggConfig::load().context("failed to load byggkoll configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;

    // A project-local dotenv next to `.byggkoll/` wins over the parent search.
    for env_path in [cwd.join(".byggkoll").join(".env"), cwd.join(".env")] {
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    dotenvy::dotenv().ok();
    Ok(())
}

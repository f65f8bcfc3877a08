use bygg_config::ByggConfig;

const SECTIONS: [&str; 3] = ["GEMINI", "GENERAL", "CATALOG"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &ByggConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ByggConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.gemini.is_configured() && has_env_prefix(&env_keys, "BYGGKOLL_GEMINI") {
        warnings.push(
            "Gemini config has no API key while BYGGKOLL_GEMINI* env vars exist. Use double underscores (example: BYGGKOLL_GEMINI__API_KEY)."
                .to_string(),
        );
    }

    for section in SECTIONS {
        let single = format!("BYGGKOLL_{section}_");
        let double = format!("BYGGKOLL_{section}__");
        if let Some(key) = env_keys
            .iter()
            .find(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            warnings.push(format!(
                "{key} is ignored: sections are separated by double underscores (example: {double}{})",
                &key[single.len()..]
            ));
        }
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

//! Command handlers for CLI operations

use anyhow::Result;
use appforge_core::{ProjectId, RouterConfig, SessionContext};
use appforge_routing::{FeatureCategory, Provider, ProviderCatalog, RequestRouter};
use std::path::PathBuf;

/// Loads configuration from an explicit path or the default location.
///
/// An explicit path must load cleanly; the default location falls back to
/// defaults so a missing or broken user config never blocks routing.
fn load_config(path: Option<PathBuf>) -> Result<RouterConfig> {
    match path {
        Some(path) => Ok(RouterConfig::load_from_file(&path)?),
        None => Ok(RouterConfig::load_or_create().unwrap_or_else(|error| {
            tracing::warn!("Failed to load config from ~/.appforge/config.toml: {error}");
            tracing::warn!("Using default configuration");
            RouterConfig::default()
        })),
    }
}

/// Handle the route command: classify the request and pick a provider
///
/// # Errors
/// Returns an error if the request is empty, the preference names an unknown
/// provider, or an explicit config file cannot be read
pub fn handle_route(
    text: &str,
    project: Option<String>,
    modifications: u32,
    provider: Option<&str>,
    config_path: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let router = RequestRouter::new(&config)?;

    let session = project
        .map_or_else(SessionContext::inactive, |name| {
            SessionContext::active(ProjectId::new(name))
        })
        .with_prior_modifications(modifications);

    let decision = router.route(text, &session, provider)?;

    if json {
        let rendered = serde_json::to_string_pretty(&decision)?;
        // JSON goes to stdout so it can be piped into other tools
        #[allow(clippy::print_stdout, reason = "Machine-readable output")]
        {
            println!("{rendered}");
        }
        return Ok(());
    }

    tracing::info!("Decision:");
    tracing::info!(
        "  Classification: {kind} ({rule})",
        kind = decision.classification.kind,
        rule = decision.classification.rule
    );
    tracing::info!(
        "  Explanation: {explanation}",
        explanation = decision.classification.explanation
    );
    tracing::info!(
        "  Provider: {provider} ({rule})",
        provider = decision.provider.provider,
        rule = decision.provider.rule
    );

    let categories = decision.signal.matched_categories();
    if !categories.is_empty() {
        let labels: Vec<&str> = categories.iter().map(FeatureCategory::label).collect();
        tracing::info!("  Categories: {list}", list = labels.join(", "));
    }
    if !decision.signal.creation_verbs.is_empty() {
        tracing::info!(
            "  Creation verbs: {list}",
            list = decision.signal.creation_verbs.join(", ")
        );
    }
    if !decision.signal.modification_verbs.is_empty() {
        tracing::info!(
            "  Modification verbs: {list}",
            list = decision.signal.modification_verbs.join(", ")
        );
    }
    if let Some(phrase) = &decision.signal.compound_phrase {
        tracing::info!("  Compound phrase: \"{phrase}\"");
    }

    Ok(())
}

/// Output current configuration. If `full` is true, prints full TOML.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized
pub fn handle_config(full: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;

    if full {
        let toml = toml::to_string_pretty(&config)?;
        tracing::info!("{toml}");
    } else {
        tracing::info!("Configuration:");
        tracing::info!(
            "  Default provider: {name}",
            name = config.providers.default_provider
        );
        tracing::info!(
            "  Claude API Key: {status}",
            status = if config.providers.api_keys.claude_api_key.is_some() {
                "Set"
            } else {
                "Not set"
            }
        );
        tracing::info!(
            "  OpenAI API Key: {status}",
            status = if config.providers.api_keys.openai_api_key.is_some() {
                "Set"
            } else {
                "Not set"
            }
        );
        tracing::info!(
            "  xAI API Key: {status}",
            status = if config.providers.api_keys.xai_api_key.is_some() {
                "Set"
            } else {
                "Not set"
            }
        );
    }

    Ok(())
}

/// List providers with their specialties, priority, and fallback order
///
/// # Errors
/// Returns an error if the configuration cannot be loaded
pub fn handle_providers(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    let catalog = ProviderCatalog::new(config);

    tracing::info!("Providers:");
    for provider in Provider::all() {
        let profile = ProviderCatalog::profile(provider);
        let specialties: Vec<&str> = profile
            .specialties
            .iter()
            .map(FeatureCategory::label)
            .collect();
        let status = if catalog.is_configured(provider) {
            "configured"
        } else {
            "missing API key"
        };

        tracing::info!(
            "  {provider} ({name}): specialties [{list}], priority {priority}, {status}",
            name = provider.name(),
            list = specialties.join(", "),
            priority = profile.priority
        );
        if let Some(env_var) = profile.api_key_env {
            tracing::info!("    API key env: {env_var}");
        }
        let fallback: Vec<&str> = ProviderCatalog::fallback_chain(provider)
            .iter()
            .map(Provider::name)
            .collect();
        tracing::info!("    Fallback: {chain}", chain = fallback.join(" -> "));
    }

    Ok(())
}

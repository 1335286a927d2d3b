use crate::services::park_service::AmenityPolicy;
use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use std::env;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub amenity_policy: AmenityPolicy,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Pet park registry API")]
pub struct Args {
    /// Host to bind to (overrides PET_PARK_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides PET_PARK_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database URL (overrides PET_PARK_DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Whether a park save merges or replaces amenities (overrides PET_PARK_AMENITY_POLICY)
    #[arg(long, value_enum)]
    pub amenity_policy: Option<AmenityPolicy>,

    /// Run migrations and exit
    #[arg(long)]
    pub migrate: bool,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig and migrate flag.
    pub fn from_env_and_args() -> Result<(Self, bool)> {
        Self::from_sources(Args::parse(), |key| env::var(key))
    }

    /// Merge parsed CLI args over values looked up with `var`.
    fn from_sources<F>(args: Args, var: F) -> Result<(Self, bool)>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        // --- Environment fallback ---
        let env_host = var("PET_PARK_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = match var("PET_PARK_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing PET_PARK_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 3000,
            Err(err) => return Err(err).context("reading PET_PARK_PORT"),
        };
        let env_db = var("PET_PARK_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://./data/pet_park.db".into());
        let env_policy = match var("PET_PARK_AMENITY_POLICY") {
            Ok(value) => <AmenityPolicy as ValueEnum>::from_str(&value, true)
                .map_err(|err| anyhow!(err))
                .with_context(|| format!("parsing PET_PARK_AMENITY_POLICY value `{}`", value))?,
            Err(env::VarError::NotPresent) => AmenityPolicy::default(),
            Err(err) => return Err(err).context("reading PET_PARK_AMENITY_POLICY"),
        };

        // --- Merge ---
        let cfg = Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            database_url: args.database_url.unwrap_or(env_db),
            amenity_policy: args.amenity_policy.unwrap_or(env_policy),
        };

        Ok((cfg, args.migrate))
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(
        vars: &'static [(&'static str, &'static str)],
    ) -> impl Fn(&str) -> Result<String, env::VarError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned().ok_or(env::VarError::NotPresent)
    }

    #[test]
    fn defaults_apply_without_env_or_flags() {
        let args = Args::parse_from(["pet-park"]);

        let (cfg, migrate) = AppConfig::from_sources(args, lookup(&[])).unwrap();

        assert_eq!(cfg.addr(), "0.0.0.0:3000");
        assert_eq!(cfg.database_url, "sqlite://./data/pet_park.db");
        assert_eq!(cfg.amenity_policy, AmenityPolicy::Merge);
        assert!(!migrate);
    }

    #[test]
    fn flags_override_env() {
        let args = Args::parse_from([
            "pet-park",
            "--port",
            "8080",
            "--amenity-policy",
            "replace",
            "--migrate",
        ]);
        let env = lookup(&[
            ("PET_PARK_HOST", "127.0.0.1"),
            ("PET_PARK_PORT", "9000"),
            ("PET_PARK_AMENITY_POLICY", "merge"),
        ]);

        let (cfg, migrate) = AppConfig::from_sources(args, env).unwrap();

        assert_eq!(cfg.addr(), "127.0.0.1:8080");
        assert_eq!(cfg.amenity_policy, AmenityPolicy::Replace);
        assert!(migrate);
    }

    #[test]
    fn invalid_env_values_are_errors() {
        let args = Args::parse_from(["pet-park"]);
        let err = AppConfig::from_sources(args, lookup(&[("PET_PARK_PORT", "eighty")]))
            .unwrap_err();
        assert!(err.to_string().contains("PET_PARK_PORT"));

        let args = Args::parse_from(["pet-park"]);
        let err = AppConfig::from_sources(args, lookup(&[("PET_PARK_AMENITY_POLICY", "union")]))
            .unwrap_err();
        assert!(err.to_string().contains("PET_PARK_AMENITY_POLICY"));
    }
}

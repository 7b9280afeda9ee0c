//! Bootstrap: dependency check, store and resolver construction, and hook
//! registration.
//!
//! # Design
//! - The dependency check runs once; an unmet manifest leaves the host untouched.
//! - The resolver is shared (`Arc`) between every registered handler.
//! - Writes go straight to the store; already-resolved labels keep their cached value.

use std::sync::Arc;

use relabeler_config::{
    DependencyManifest, DependencyStatus, HostEnvironment, LogSettings, RelabelerConfig,
};
use relabeler_hooks::HookRegistry;
use relabeler_labels::{Capabilities, LabelKey, LabelResolver, Registration, register_hooks};
use relabeler_store::{OptionsStore, SettingsBackend};
use relabeler_telemetry::LoggingConfig;
use tracing::{info, warn};

use crate::backend::{AnyBackend, open_backend};
use crate::error::{AppError, AppResult};

/// Outcome of bootstrapping against a host.
#[derive(Debug)]
pub enum Bootstrap<B> {
    /// The host dependency is unmet; nothing was registered.
    Inactive {
        /// Why activation was skipped.
        reason: DependencyStatus,
    },
    /// Handlers are registered and the resolver is live.
    Active(Relabeler<B>),
}

impl<B> Bootstrap<B> {
    /// The active relabeler, if bootstrap activated.
    #[must_use]
    pub const fn active(&self) -> Option<&Relabeler<B>> {
        match self {
            Self::Active(relabeler) => Some(relabeler),
            Self::Inactive { .. } => None,
        }
    }

    /// Consume into the active relabeler, if any.
    #[must_use]
    pub fn into_active(self) -> Option<Relabeler<B>> {
        match self {
            Self::Active(relabeler) => Some(relabeler),
            Self::Inactive { .. } => None,
        }
    }
}

/// A live relabeler bound to a host registry.
#[derive(Debug)]
pub struct Relabeler<B> {
    resolver: Arc<LabelResolver<B>>,
    registration: Registration,
    capabilities: Capabilities,
}

impl<B: SettingsBackend + 'static> Relabeler<B> {
    /// Check the host dependency and, when met, register every hook.
    ///
    /// Capabilities are the union of the configured flags and what `env`
    /// reports as installed.
    pub fn bootstrap<R>(
        config: &RelabelerConfig,
        env: &HostEnvironment,
        backend: B,
        registry: &mut R,
    ) -> Bootstrap<B>
    where
        R: HookRegistry + ?Sized,
    {
        let status = DependencyManifest::default().check(env);
        if !status.is_satisfied() {
            warn!(reason = %status, "host dependency unmet; relabeler inactive");
            return Bootstrap::Inactive { reason: status };
        }

        let capabilities = Capabilities {
            pro_views: config.capabilities.pro_views || env.capabilities().pro_views,
        };
        let options = OptionsStore::new(backend, config.prefix());
        info!(
            prefix = %options.prefix(),
            backend = options.backend().name(),
            "relabeler activating"
        );
        let resolver = Arc::new(LabelResolver::new(options));
        let registration = register_hooks(
            &resolver,
            registry,
            capabilities,
            Some(config.template_override()),
        );

        Bootstrap::Active(Self {
            resolver,
            registration,
            capabilities,
        })
    }
}

impl<B: SettingsBackend> Relabeler<B> {
    /// Shared resolver backing every handler.
    #[must_use]
    pub const fn resolver(&self) -> &Arc<LabelResolver<B>> {
        &self.resolver
    }

    /// Hooks bound at bootstrap.
    #[must_use]
    pub const fn registration(&self) -> &Registration {
        &self.registration
    }

    /// Capabilities in effect.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Effective text for `key` against its built-in default.
    #[must_use]
    pub fn label(&self, key: LabelKey) -> String {
        self.resolver.resolve_default(key)
    }

    /// Store an override for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] when the backend rejects the write.
    pub fn set_override(&self, key: LabelKey, value: &str) -> AppResult<()> {
        self.resolver
            .store_override(key, value)
            .map_err(|err| AppError::store("options.set", err))
    }

    /// Remove the override for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] when the backend rejects the write.
    pub fn clear_override(&self, key: LabelKey) -> AppResult<()> {
        self.resolver
            .remove_override(key)
            .map_err(|err| AppError::store("options.delete", err))
    }

    /// Store the view-slug rewrite toggle.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] when the backend rejects the write.
    pub fn set_rewrite_view_slugs(&self, enabled: bool) -> AppResult<()> {
        self.resolver
            .store_rewrite_view_slugs(enabled)
            .map_err(|err| AppError::store("options.set", err))
    }
}

/// Install the global subscriber described by `settings`.
///
/// # Errors
///
/// Returns [`AppError::Telemetry`] for an unknown format or when a subscriber
/// is already installed.
pub fn init_logging(settings: &LogSettings) -> AppResult<()> {
    let logging = LoggingConfig::from_parts(&settings.level, settings.format.as_deref())
        .map_err(|err| AppError::telemetry("telemetry.config", err))?;
    relabeler_telemetry::init_logging(&logging)
        .map_err(|err| AppError::telemetry("telemetry.init", err))
}

/// Open the configured backend and bootstrap against `registry`.
#[must_use]
pub fn start<R>(
    config: &RelabelerConfig,
    env: &HostEnvironment,
    registry: &mut R,
) -> Bootstrap<AnyBackend>
where
    R: HookRegistry + ?Sized,
{
    Relabeler::bootstrap(config, env, open_backend(&config.store), registry)
}

/// Load configuration and host versions from the environment, install
/// logging, and bootstrap against `registry`.
///
/// # Errors
///
/// Returns an error when configuration is invalid or logging cannot be installed.
pub fn run_from_env<R>(registry: &mut R) -> AppResult<Bootstrap<AnyBackend>>
where
    R: HookRegistry + ?Sized,
{
    let config =
        RelabelerConfig::from_env().map_err(|err| AppError::config("config.from_env", err))?;
    init_logging(&config.logging)?;
    let env = HostEnvironment::from_env();
    Ok(start(&config, &env, registry))
}

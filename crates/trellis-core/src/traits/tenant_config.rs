use crate::config::TrellisConfig;
use crate::errors::TrellisResult;
use crate::models::SynthesisState;

/// Per-tenant configuration: the synthesis switch plus setting overrides.
pub trait ITenantConfigStore: Send + Sync {
    /// Current synthesis switch for a tenant. `Ok(None)` when the tenant
    /// has no configuration row at all.
    fn synthesis_state(&self, tenant_id: &str) -> TrellisResult<Option<SynthesisState>>;

    /// Persist a new synthesis switch state.
    fn set_synthesis_state(&self, tenant_id: &str, state: SynthesisState) -> TrellisResult<()>;

    /// Tenants with synthesis currently enabled.
    fn enabled_tenants(&self) -> TrellisResult<Vec<String>>;

    /// Per-tenant setting overrides. `Ok(None)` falls back to the global
    /// configuration.
    fn settings(&self, tenant_id: &str) -> TrellisResult<Option<TrellisConfig>>;
}

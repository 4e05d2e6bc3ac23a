//! Tenant configuration fake.

use std::collections::HashMap;
use std::sync::Mutex;

use trellis_core::config::TrellisConfig;
use trellis_core::errors::TrellisResult;
use trellis_core::models::SynthesisState;
use trellis_core::traits::ITenantConfigStore;

/// In-memory tenant configuration: synthesis switches plus per-tenant
/// setting overrides.
#[derive(Default)]
pub struct MemoryTenantConfig {
    states: Mutex<HashMap<String, SynthesisState>>,
    settings: Mutex<HashMap<String, TrellisConfig>>,
}

impl MemoryTenantConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tenant with synthesis enabled.
    pub fn with_enabled_tenant(self, tenant_id: &str) -> Self {
        self.states
            .lock()
            .unwrap()
            .insert(tenant_id.to_string(), SynthesisState::enabled());
        self
    }

    /// Register a tenant with an explicit state.
    pub fn with_state(self, tenant_id: &str, state: SynthesisState) -> Self {
        self.states
            .lock()
            .unwrap()
            .insert(tenant_id.to_string(), state);
        self
    }

    /// Register per-tenant setting overrides.
    pub fn with_settings(self, tenant_id: &str, config: TrellisConfig) -> Self {
        self.settings
            .lock()
            .unwrap()
            .insert(tenant_id.to_string(), config);
        self
    }

    /// Direct state read for assertions.
    pub fn state_of(&self, tenant_id: &str) -> Option<SynthesisState> {
        self.states.lock().unwrap().get(tenant_id).cloned()
    }
}

impl ITenantConfigStore for MemoryTenantConfig {
    fn synthesis_state(&self, tenant_id: &str) -> TrellisResult<Option<SynthesisState>> {
        Ok(self.states.lock().unwrap().get(tenant_id).cloned())
    }

    fn set_synthesis_state(&self, tenant_id: &str, state: SynthesisState) -> TrellisResult<()> {
        self.states
            .lock()
            .unwrap()
            .insert(tenant_id.to_string(), state);
        Ok(())
    }

    fn enabled_tenants(&self) -> TrellisResult<Vec<String>> {
        let mut tenants: Vec<String> = self
            .states
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, state)| state.enabled)
            .map(|(tenant, _)| tenant.clone())
            .collect();
        tenants.sort();
        Ok(tenants)
    }

    fn settings(&self, tenant_id: &str) -> TrellisResult<Option<TrellisConfig>> {
        Ok(self.settings.lock().unwrap().get(tenant_id).cloned())
    }
}

//! Skeleton source fake.

use std::collections::HashMap;

use trellis_core::errors::TrellisResult;
use trellis_core::skeleton::Skeleton;
use trellis_core::traits::ISkeletonSource;

/// Fixed `(tenant, intent) → Skeleton` map.
#[derive(Default)]
pub struct StaticSkeletonSource {
    skeletons: HashMap<(String, String), Skeleton>,
}

impl StaticSkeletonSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a skeleton under its own intent code for one tenant.
    pub fn with_skeleton(mut self, tenant_id: &str, skeleton: Skeleton) -> Self {
        self.skeletons.insert(
            (tenant_id.to_string(), skeleton.intent_code.clone()),
            skeleton,
        );
        self
    }
}

impl ISkeletonSource for StaticSkeletonSource {
    fn build_from_history(
        &self,
        intent_code: &str,
        tenant_id: &str,
    ) -> TrellisResult<Option<Skeleton>> {
        Ok(self
            .skeletons
            .get(&(tenant_id.to_string(), intent_code.to_string()))
            .cloned())
    }

    fn available_intent_codes(&self, tenant_id: &str) -> TrellisResult<Vec<String>> {
        let mut codes: Vec<String> = self
            .skeletons
            .keys()
            .filter(|(tenant, _)| tenant == tenant_id)
            .map(|(_, intent)| intent.clone())
            .collect();
        codes.sort();
        Ok(codes)
    }
}

use crate::errors::TrellisResult;
use crate::skeleton::Skeleton;

/// Mines utterance skeletons from a tenant's real interaction history.
pub trait ISkeletonSource: Send + Sync {
    /// Build a skeleton for one intent from real history.
    /// Returns `Ok(None)` when the tenant has no usable history for it.
    fn build_from_history(
        &self,
        intent_code: &str,
        tenant_id: &str,
    ) -> TrellisResult<Option<Skeleton>>;

    /// Intent codes this tenant has history for, in stable order.
    fn available_intent_codes(&self, tenant_id: &str) -> TrellisResult<Vec<String>>;
}

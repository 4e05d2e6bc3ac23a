pub mod intent_matcher;
pub mod sample_store;
pub mod skeleton_source;
pub mod tenant_config;

pub use intent_matcher::IIntentMatcher;
pub use sample_store::ISampleStore;
pub use skeleton_source::ISkeletonSource;
pub use tenant_config::ITenantConfigStore;

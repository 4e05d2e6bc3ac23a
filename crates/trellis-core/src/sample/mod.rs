pub mod confidence;
pub mod synthetic;
pub mod training;

pub use confidence::Confidence;
pub use synthetic::SyntheticSample;
pub use training::{SampleSource, TrainingSample};

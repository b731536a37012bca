pub mod data_merger;
pub mod integrity_checker;
pub mod pipeline;
pub mod position_normalizer;
pub mod timestamp_resolver;
pub mod weather_normalizer;

pub use data_merger::{DataMerger, Keyed, MergeOutcome};
pub use integrity_checker::{CoordinateViolation, IntegrityChecker, IntegrityReport};
pub use pipeline::{Pipeline, PipelineOutput, PipelineStats};
pub use position_normalizer::PositionNormalizer;
pub use timestamp_resolver::TimestampResolver;
pub use weather_normalizer::WeatherNormalizer;

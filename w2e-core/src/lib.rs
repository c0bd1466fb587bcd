pub mod config;
pub mod layers;

pub use config::{
    ConfigError, ConfigValidationDetail, DbType, EngineOptions, PoolTuning, Settings,
    UnknownDbType,
};
pub use layers::init_tracing;

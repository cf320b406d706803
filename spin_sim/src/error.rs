use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// relaxation constants must be strictly positive (and not NaN) under strict validation
    #[error("invalid parameter {name} = {value}: relaxation time constants must be positive")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse simulation config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("cannot serialize simulation config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no simulation configs found in {0}")]
    NoConfigs(std::path::PathBuf),
}

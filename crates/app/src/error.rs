use lottery_engine::GenerationFault;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Generation(#[from] GenerationFault),
    #[error("\"{input}\": {label}")]
    Rejected { input: String, label: String },
    #[error("{bet_type} is not sold on draw \"{draw}\"")]
    IncompatibleDraw { bet_type: String, draw: String },
    #[error("\"{input}\" expands to {lines} lines, the limit is {cap}")]
    TooManyLines {
        input: String,
        lines: usize,
        cap: usize,
    },
}

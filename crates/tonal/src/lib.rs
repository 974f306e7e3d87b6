use thiserror::Error;

pub mod commands {
    pub mod analyze;
    pub mod contrast;
    pub mod generate;
    pub mod scale;
}

pub mod config;
mod render;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Engine(#[from] scale_engine::Error),
    #[error("Invalid config file: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("Could not write JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    General(String),
}

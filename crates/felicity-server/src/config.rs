use std::path::PathBuf;

/// Runtime configuration, resolved from the environment in `main`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub dataset_path: PathBuf,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            dataset_path: PathBuf::from("data/happiness_data.csv"),
            max_body_bytes: 16 * 1024,
        }
    }
}

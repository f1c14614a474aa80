use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub stores_path: PathBuf,
    pub output_dir: PathBuf,
    /// Primary matcher threshold; the matcher relaxes to 60 on its own.
    pub match_threshold: u8,
    pub fetch_timeout_secs: u64,
    pub fetch_user_agent: String,
    pub fetch_max_retries: u32,
    pub fetch_retry_backoff_base_secs: u64,
}

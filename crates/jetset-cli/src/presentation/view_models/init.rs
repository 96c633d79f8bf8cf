use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConfigOutcome {
    Written,
    /// Config already present and `--force` not given
    KeptExisting,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitResultViewModel {
    pub outcome: ConfigOutcome,
    pub config_path: String,
    pub endpoint: String,
}

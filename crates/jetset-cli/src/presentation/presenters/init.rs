use std::path::Path;

use crate::presentation::view_models::{ConfigOutcome, InitResultViewModel};

pub fn present_init_result(config_path: &Path, endpoint: &str, written: bool) -> InitResultViewModel {
    InitResultViewModel {
        outcome: if written {
            ConfigOutcome::Written
        } else {
            ConfigOutcome::KeptExisting
        },
        config_path: config_path.display().to_string(),
        endpoint: endpoint.to_string(),
    }
}

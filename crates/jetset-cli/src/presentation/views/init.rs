use std::fmt;

use crate::presentation::view_models::{ConfigOutcome, CreateView, InitResultViewModel};

impl CreateView for InitResultViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(InitResultView { data: self })
    }
}

struct InitResultView<'a> {
    data: &'a InitResultViewModel,
}

impl<'a> fmt::Display for InitResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.outcome {
            ConfigOutcome::Written => writeln!(f, "Wrote {}", self.data.config_path)?,
            ConfigOutcome::KeptExisting => {
                writeln!(f, "Config already exists: {}", self.data.config_path)?
            }
        }
        writeln!(f, "Feed endpoint: {}", self.data.endpoint)
    }
}

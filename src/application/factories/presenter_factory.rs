use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where the rendered alert list goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for PresenterType {
    fn from(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) => PresenterType::File(path),
            None => PresenterType::Stdout,
        }
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_presenter_type_from_output_option() {
        assert_eq!(PresenterType::from(None), PresenterType::Stdout);
        assert_eq!(
            PresenterType::from(Some(PathBuf::from("alerts.md"))),
            PresenterType::File(PathBuf::from("alerts.md"))
        );
    }

    #[test]
    fn test_file_presenter_writes_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("alerts.md");
        let presenter = PresenterFactory::create(PresenterType::File(path.clone()));
        presenter.present("# Alerts\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# Alerts\n");
    }
}

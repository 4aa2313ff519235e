use showcase_config::PortfolioConfig;
use showcase_ghapi_interface::types::GhRepository;

const PRIVATE_MARKER: &str = "private";

/// Decides which repositories are worth displaying.
#[derive(Debug, Clone)]
pub struct RepositoryFilter {
    excluded_names: Vec<String>,
}

impl RepositoryFilter {
    pub fn new<I, S>(excluded_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            excluded_names: excluded_names
                .into_iter()
                .map(|name| name.as_ref().trim().to_lowercase())
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }

    pub fn from_config(config: &PortfolioConfig) -> Self {
        Self::new(&config.excluded_repositories)
    }

    /// A repository is displayable when its name is not excluded, does not
    /// look private, and it has a description or at least one topic.
    pub fn is_displayable(&self, repository: &GhRepository) -> bool {
        let name = repository.name.to_lowercase();

        !self.is_excluded_name(&name) && !name.contains(PRIVATE_MARKER) && repository.has_metadata()
    }

    pub fn apply(&self, repositories: Vec<GhRepository>) -> Vec<GhRepository> {
        repositories
            .into_iter()
            .filter(|repository| self.is_displayable(repository))
            .collect()
    }

    fn is_excluded_name(&self, normalized_name: &str) -> bool {
        self.excluded_names
            .iter()
            .any(|excluded| normalized_name == excluded || normalized_name.contains(excluded.as_str()))
    }
}

use showcase_ghapi_interface::types::GhRepository;
use showcase_models::PortfolioEntry;

/// Turn a GitHub repository into a display-ready entry.
pub fn normalize_repository(repository: GhRepository, fallback_description: &str) -> PortfolioEntry {
    let description = repository
        .description()
        .unwrap_or(fallback_description)
        .to_string();
    let demo_url = repository.homepage().map(str::to_string);

    PortfolioEntry {
        id: repository.id,
        name: PortfolioEntry::display_name(&repository.name),
        description,
        url: repository.html_url,
        demo_url,
        topics: repository.topics,
        stars: repository.stargazers_count,
        forks: repository.forks_count,
        updated_at: repository.updated_at,
        language: repository.language,
        owner: repository.owner.login,
        owner_url: repository.owner.html_url,
        owner_avatar: repository.owner.avatar_url,
        is_org: repository.owner.kind.is_organization(),
    }
}

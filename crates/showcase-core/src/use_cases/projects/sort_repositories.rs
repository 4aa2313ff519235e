use showcase_ghapi_interface::types::GhRepository;

/// Sort repositories by last update, most recent first.
///
/// The sort is stable: repositories updated at the same instant keep their
/// fetch order.
pub fn sort_by_most_recent(mut repositories: Vec<GhRepository>) -> Vec<GhRepository> {
    repositories.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    repositories
}

//! GitHub types.

mod account_kind;
mod organization;
mod owner;
mod repository;

pub use account_kind::GhAccountKind;
pub use organization::GhOrganization;
pub use owner::GhOwner;
pub use repository::GhRepository;

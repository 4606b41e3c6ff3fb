pub mod inspiration;
pub mod status_check;

pub use inspiration::Entity as InspirationEntity;
pub use status_check::Entity as StatusCheckEntity;

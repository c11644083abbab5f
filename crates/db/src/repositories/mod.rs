pub mod alert_repo;
pub mod audit_repo;
pub mod data_request_repo;
pub mod policy_repo;
pub mod settings_repo;
pub mod user_repo;

pub use alert_repo::AlertRepo;
pub use audit_repo::AuditRepo;
pub use data_request_repo::DataRequestRepo;
pub use policy_repo::PolicyRepo;
pub use settings_repo::SettingsRepo;
pub use user_repo::UserRepo;

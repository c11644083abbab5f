pub mod alert;
pub mod audit;
pub mod data_request;
pub mod policy;
pub mod settings;
pub mod user;

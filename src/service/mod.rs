pub mod auth;
pub mod event;
pub mod log;
pub mod member;
pub mod pagination;
pub mod presence;
pub mod roles;

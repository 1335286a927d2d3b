pub mod contributor_handlers;
pub mod health_handlers;
pub mod park_handlers;

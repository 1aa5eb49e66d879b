pub mod admin;
pub mod form;
pub mod listing;
pub mod model;
pub mod source;
pub mod summary;
pub mod workflow;

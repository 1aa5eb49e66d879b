pub mod api;
pub mod audit;
pub mod determinism;
pub mod impact;
pub mod keypoints;

pub mod error;

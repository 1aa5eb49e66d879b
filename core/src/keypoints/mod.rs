//! Action key points attached to impact records.
//!
//! The upstream API does not agree with itself on how this field is
//! serialized: sometimes a clean JSON array, sometimes a one-element array
//! holding a quote/comma-joined blob, sometimes a plain comma-separated
//! string. Everything that reads or edits key points goes through
//! [`parser::parse_action_keypoints`] so the two shapes never drift apart.

pub mod form;
pub mod input;
pub mod parser;

pub use input::KeypointsInput;
pub use parser::parse_action_keypoints;

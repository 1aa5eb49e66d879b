//! Round-tripping key points through the admin form's single text field.

use super::input::KeypointsInput;
use super::parser::parse_action_keypoints;

/// Text shown in the "Key Points (comma separated)" field when editing.
/// Points are cleaned first so a stored blob does not leak its quotes into
/// the field.
pub fn keypoints_to_form_text(input: Option<&KeypointsInput>) -> String {
    parse_action_keypoints(input).join(", ")
}

/// Points submitted from the form field. Each becomes its own
/// `actions_keypoints` multipart field.
pub fn form_text_to_keypoints(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|kp| !kp.is_empty())
        .map(str::to_string)
        .collect()
}

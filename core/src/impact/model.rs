use crate::keypoints::{parse_action_keypoints, KeypointsInput};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// One impact story as served by `GET /impact/getAll`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImpactRecord {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub img: Option<String>,
    #[serde(default, deserialize_with = "lenient_keypoints")]
    pub actions_keypoints: Option<KeypointsInput>,
    #[serde(
        default,
        rename = "createdAt",
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(
        default,
        rename = "updatedAt",
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

impl ImpactRecord {
    pub fn keypoints(&self) -> Vec<String> {
        parse_action_keypoints(self.actions_keypoints.as_ref())
    }

    pub fn keypoint_count(&self) -> usize {
        self.keypoints().len()
    }

    pub fn created_at_utc(&self) -> Option<OffsetDateTime> {
        parse_timestamp(self.created_at.as_deref())
    }

    pub fn updated_at_utc(&self) -> Option<OffsetDateTime> {
        parse_timestamp(self.updated_at.as_deref())
    }

    /// Image URL, treating an empty string the same as no image.
    pub fn image_url(&self) -> Option<&str> {
        self.img.as_deref().filter(|s| !s.trim().is_empty())
    }
}

fn parse_timestamp(raw: Option<&str>) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw?.trim(), &Rfc3339).ok()
}

fn id_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "impact id must be a string or number, got {}",
            other
        ))),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_optional_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

// Some records carry epoch milliseconds instead of RFC 3339 text.
fn lenient_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(|ms| {
                OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000).ok()
            })
            .and_then(|t| t.format(&Rfc3339).ok()),
        _ => None,
    })
}

fn lenient_keypoints<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<KeypointsInput>, D::Error> {
    Ok(KeypointsInput::from_json(&Value::deserialize(d)?))
}

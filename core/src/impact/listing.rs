use super::model::ImpactRecord;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkippedImpact {
    pub index: usize,
    pub reason: String,
}

/// Decoded listing. Elements that are not usable records are set aside
/// rather than failing the whole listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImpactListing {
    pub impacts: Vec<ImpactRecord>,
    pub skipped: Vec<SkippedImpact>,
}

/// Decode a `GET /impact/getAll` body. The API answers with either a bare
/// array or `{ "data": [...] }`; any other JSON shape is an empty listing.
/// Only a body that is not JSON at all is an error.
pub fn decode_impact_listing(body: &str) -> CoreResult<ImpactListing> {
    let raw: Value = serde_json::from_str(body)
        .map_err(|e| CoreError::InvalidInput(format!("Failed to parse impact listing: {}", e)))?;

    let items = match raw {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    let mut listing = ImpactListing::default();
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<ImpactRecord>(item) {
            Ok(record) => listing.impacts.push(record),
            Err(e) => listing.skipped.push(SkippedImpact {
                index,
                reason: e.to_string(),
            }),
        }
    }
    Ok(listing)
}

pub fn parse_impact_listing(body: &str) -> CoreResult<Vec<ImpactRecord>> {
    Ok(decode_impact_listing(body)?.impacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_array_and_data_envelope() {
        let bare = parse_impact_listing(r#"[{"id":"1","title":"A"}]"#).unwrap();
        let wrapped = parse_impact_listing(r#"{"data":[{"id":"1","title":"A"}]}"#).unwrap();
        assert_eq!(bare, wrapped);
        assert_eq!(bare.len(), 1);
    }

    #[test]
    fn other_shapes_are_empty() {
        assert!(parse_impact_listing(r#"{"data":{"id":"1"}}"#).unwrap().is_empty());
        assert!(parse_impact_listing(r#"{"message":"ok"}"#).unwrap().is_empty());
        assert!(parse_impact_listing("null").unwrap().is_empty());
    }

    #[test]
    fn non_json_is_an_error() {
        assert!(parse_impact_listing("<html>").is_err());
    }

    #[test]
    fn bad_record_is_skipped_and_good_points_survive() {
        let listing = decode_impact_listing(
            r#"[{"id":"1","actions_keypoints":"Visits, Kits"},{"title":"no id","actions_keypoints":"Lost"},{"id":"3","createdAt":1735689600000}]"#,
        )
        .unwrap();
        assert_eq!(listing.impacts.len(), 2);
        assert_eq!(listing.impacts[0].keypoints(), vec!["Visits", "Kits"]);
        assert_eq!(listing.impacts[1].id, "3");
        assert_eq!(listing.skipped.len(), 1);
        assert_eq!(listing.skipped[0].index, 1);
        assert!(listing.skipped[0].reason.contains("id"));
    }
}

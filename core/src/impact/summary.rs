use super::model::ImpactRecord;
use crate::error::CoreResult;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HIGHLIGHT_LIMIT: usize = 5;

/// Shown on the public impact section when the listing cannot be loaded.
pub const FALLBACK_ACHIEVEMENTS: [&str; 5] = [
    "Conducted door-to-door family visits to assess needs",
    "Provided food, clothing, and school materials",
    "Supported health insurance enrollment for children",
    "Delivered weekly educational and life-skills workshops",
    "Organized annual celebrations for joy and belonging",
];

/// Every parsed point across the listing, in listing order.
pub fn collect_keypoints(impacts: &[ImpactRecord]) -> Vec<String> {
    impacts.iter().flat_map(ImpactRecord::keypoints).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImpactHighlights {
    pub impact_count: usize,
    pub total_keypoints: usize,
    pub points: Vec<String>,
    pub fallback_used: bool,
}

impl ImpactHighlights {
    pub fn from_impacts(impacts: &[ImpactRecord], limit: usize) -> Self {
        let all = collect_keypoints(impacts);
        Self {
            impact_count: impacts.len(),
            total_keypoints: all.len(),
            points: all.into_iter().take(limit).collect(),
            fallback_used: false,
        }
    }

    pub fn fallback(limit: usize) -> Self {
        Self {
            impact_count: 0,
            total_keypoints: FALLBACK_ACHIEVEMENTS.len(),
            points: FALLBACK_ACHIEVEMENTS
                .iter()
                .take(limit)
                .map(|s| s.to_string())
                .collect(),
            fallback_used: true,
        }
    }

    /// A failed fetch never blanks the section; it falls back instead.
    pub fn from_listing(listing: CoreResult<Vec<ImpactRecord>>, limit: usize) -> Self {
        match listing {
            Ok(impacts) => Self::from_impacts(&impacts, limit),
            Err(_) => Self::fallback(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::keypoints::KeypointsInput;

    fn impact(id: &str, points: KeypointsInput) -> ImpactRecord {
        ImpactRecord {
            id: id.to_string(),
            title: format!("Impact {}", id),
            description: String::new(),
            img: None,
            actions_keypoints: Some(points),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn flattens_in_listing_order_and_truncates() {
        let impacts = vec![
            impact("1", KeypointsInput::from("a, b, c")),
            impact(
                "2",
                KeypointsInput::List(vec![r#""d","e","f""#.to_string()]),
            ),
        ];
        assert_eq!(collect_keypoints(&impacts), vec!["a", "b", "c", "d", "e", "f"]);

        let h = ImpactHighlights::from_impacts(&impacts, DEFAULT_HIGHLIGHT_LIMIT);
        assert_eq!(h.points, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(h.total_keypoints, 6);
        assert!(!h.fallback_used);
    }

    #[test]
    fn failed_listing_uses_fallback() {
        let h = ImpactHighlights::from_listing(
            Err(CoreError::InvalidInput("offline".to_string())),
            3,
        );
        assert!(h.fallback_used);
        assert_eq!(h.points.len(), 3);
        assert_eq!(h.points[0], FALLBACK_ACHIEVEMENTS[0]);
    }

    #[test]
    fn empty_listing_is_not_a_failure() {
        let h = ImpactHighlights::from_listing(Ok(vec![]), 5);
        assert!(h.points.is_empty());
        assert!(!h.fallback_used);
    }
}

use super::model::ImpactRecord;
use crate::api::routes::ApiRoute;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;

pub const ITEMS_PER_PAGE: usize = 5;

const NOT_AVAILABLE: &str = "N/A";

/// One line of the impact management table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImpactRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub img: Option<String>,
    pub keypoint_count: usize,
}

impl ImpactRow {
    pub fn from_record(record: &ImpactRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            img: record.image_url().map(str::to_string),
            keypoint_count: record.keypoint_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImpactPage {
    pub page: usize,
    pub total_pages: usize,
    pub total_entries: usize,
    /// 1-based, 0 when the listing is empty.
    pub first_entry: usize,
    pub last_entry: usize,
    pub rows: Vec<ImpactRow>,
}

impl ImpactPage {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn entries_label(&self) -> String {
        format!(
            "Showing {} to {} of {} entries",
            self.first_entry, self.last_entry, self.total_entries
        )
    }
}

/// Slice the listing for the management table. `page` is 1-based and is
/// clamped into range; `per_page` of 0 is treated as 1.
pub fn paginate(impacts: &[ImpactRecord], page: usize, per_page: usize) -> ImpactPage {
    let per_page = per_page.max(1);
    let total_entries = impacts.len();
    let total_pages = total_entries.div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));

    let start = ((page - 1) * per_page).min(total_entries);
    let end = (start + per_page).min(total_entries);
    let rows: Vec<ImpactRow> = impacts[start..end].iter().map(ImpactRow::from_record).collect();

    ImpactPage {
        page,
        total_pages,
        total_entries,
        first_entry: if total_entries > 0 { start + 1 } else { 0 },
        last_entry: end,
        rows,
    }
}

/// Content of the "view impact" dialog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImpactDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub img: Option<String>,
    pub keypoints: Vec<String>,
    pub created: String,
    pub updated: String,
}

impl ImpactDetail {
    pub fn from_record(record: &ImpactRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            img: record.image_url().map(str::to_string),
            keypoints: record.keypoints(),
            created: display_timestamp(record.created_at_utc()),
            updated: display_timestamp(record.updated_at_utc()),
        }
    }
}

fn display_timestamp(ts: Option<OffsetDateTime>) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute] UTC");
    ts.and_then(|t| t.to_offset(time::UtcOffset::UTC).format(&format).ok())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn find_impact<'a>(impacts: &'a [ImpactRecord], id: &str) -> CoreResult<&'a ImpactRecord> {
    impacts
        .iter()
        .find(|i| i.id == id)
        .ok_or_else(|| CoreError::NotFound(format!("impact {}", id)))
}

pub fn delete_route(id: &str) -> ApiRoute {
    ApiRoute::DeleteImpact(id.to_string())
}

use super::admin::delete_route;
use super::form::{FormMode, ImpactDraft, ImpactSubmission};
use super::source::{load_listing, ImpactSource};
use super::summary::ImpactHighlights;
use crate::api::routes::ApiRoute;
use crate::audit::event::{Actor, AuditEvent};
use crate::audit::log::AuditLog;
use crate::error::CoreResult;
use serde_json::json;

/// Load the listing for the public impact section. A failed load is logged
/// and replaced by the fallback achievements; only audit failures surface.
/// Malformed records are dropped individually and their indices logged.
pub fn render_highlights(
    source: &dyn ImpactSource,
    audit: &mut AuditLog,
    session_id: &str,
    ts_utc: &str,
    limit: usize,
) -> CoreResult<ImpactHighlights> {
    let listing = load_listing(source);
    let event = match &listing {
        Ok(listing) => {
            let highlights = ImpactHighlights::from_impacts(&listing.impacts, limit);
            let skipped: Vec<usize> = listing.skipped.iter().map(|s| s.index).collect();
            AuditEvent::new(
                ts_utc,
                "IMPACTS_FETCHED",
                session_id,
                Actor::Visitor,
                json!({
                    "source": source.describe(),
                    "impact_count": highlights.impact_count,
                    "keypoint_count": highlights.total_keypoints,
                    "skipped_indices": skipped
                }),
            )
        }
        Err(e) => AuditEvent::new(
            ts_utc,
            "IMPACTS_FETCH_FAILED",
            session_id,
            Actor::Visitor,
            json!({
                "source": source.describe(),
                "error_message": e.to_string(),
                "fallback_used": true
            }),
        ),
    };
    audit.append(event)?;
    Ok(ImpactHighlights::from_listing(listing.map(|l| l.impacts), limit))
}

pub fn submit_draft(
    draft: &ImpactDraft,
    mode: &FormMode,
    audit: &mut AuditLog,
    session_id: &str,
    ts_utc: &str,
) -> CoreResult<ImpactSubmission> {
    let submission = draft.to_submission(mode)?;
    audit.append(AuditEvent::new(
        ts_utc,
        "IMPACT_SUBMITTED",
        session_id,
        Actor::Admin,
        json!({
            "method": submission.method.as_str(),
            "path": submission.path,
            "keypoint_count": submission.keypoints().len()
        }),
    ))?;
    Ok(submission)
}

pub fn record_deletion(
    impact_id: &str,
    audit: &mut AuditLog,
    session_id: &str,
    ts_utc: &str,
) -> CoreResult<ApiRoute> {
    let route = delete_route(impact_id);
    audit.append(AuditEvent::new(
        ts_utc,
        "IMPACT_DELETED",
        session_id,
        Actor::Admin,
        json!({
            "impact_id": impact_id,
            "path": route.path()
        }),
    ))?;
    Ok(route)
}

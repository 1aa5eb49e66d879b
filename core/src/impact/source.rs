use super::listing::{decode_impact_listing, ImpactListing};
use super::model::ImpactRecord;
use crate::api::session::{response_disposition, ResponseDisposition};
use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Status and body of a `GET /impact/getAll` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingResponse {
    pub status: u16,
    pub body: String,
}

/// Where the listing response comes from. Transports live with the caller;
/// the core only interprets status and body.
pub trait ImpactSource {
    fn describe(&self) -> String;
    fn fetch_listing(&self) -> CoreResult<ListingResponse>;
}

/// A response body saved to disk, served as a 200.
pub struct FileImpactSource {
    path: PathBuf,
}

impl FileImpactSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ImpactSource for FileImpactSource {
    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn fetch_listing(&self) -> CoreResult<ListingResponse> {
        Ok(ListingResponse {
            status: 200,
            body: std::fs::read_to_string(&self.path)?,
        })
    }
}

/// A 401 means the stored admin session is stale and must be cleared.
pub fn decode_response(response: &ListingResponse) -> CoreResult<ImpactListing> {
    match response_disposition(response.status) {
        ResponseDisposition::OK => decode_impact_listing(&response.body),
        ResponseDisposition::CLEAR_SESSION => Err(CoreError::Unauthorized(
            "session expired, sign in again".to_string(),
        )),
        ResponseDisposition::FAILED => Err(CoreError::Upstream(response.status)),
    }
}

pub fn load_listing(source: &dyn ImpactSource) -> CoreResult<ImpactListing> {
    decode_response(&source.fetch_listing()?)
}

pub fn load_impacts(source: &dyn ImpactSource) -> CoreResult<Vec<ImpactRecord>> {
    Ok(load_listing(source)?.impacts)
}

use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
        }
    }
}

/// Impact endpoints of the content API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRoute {
    ListImpacts,
    CreateImpact,
    UpdateImpact(String),
    DeleteImpact(String),
}

impl ApiRoute {
    pub fn method(&self) -> HttpMethod {
        match self {
            ApiRoute::ListImpacts => HttpMethod::GET,
            ApiRoute::CreateImpact => HttpMethod::POST,
            ApiRoute::UpdateImpact(_) => HttpMethod::PUT,
            ApiRoute::DeleteImpact(_) => HttpMethod::DELETE,
        }
    }

    pub fn path(&self) -> String {
        match self {
            ApiRoute::ListImpacts => "/impact/getAll".to_string(),
            ApiRoute::CreateImpact => "/impact/createImpact".to_string(),
            ApiRoute::UpdateImpact(id) => format!("/impact/update/{}", id),
            ApiRoute::DeleteImpact(id) => format!("/impact/delete/{}", id),
        }
    }
}

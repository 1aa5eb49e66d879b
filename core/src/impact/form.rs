use super::model::ImpactRecord;
use crate::api::routes::{ApiRoute, HttpMethod};
use crate::error::{CoreError, CoreResult};
use crate::keypoints::form::{form_text_to_keypoints, keypoints_to_form_text};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// State of the create/edit impact form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImpactDraft {
    pub title: String,
    pub description: String,
    /// Comma-separated, as typed into the form.
    pub actions_keypoints: String,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn route(&self) -> ApiRoute {
        match self {
            FormMode::Create => ApiRoute::CreateImpact,
            FormMode::Edit(id) => ApiRoute::UpdateImpact(id.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum MultipartValue {
    Text(String),
    File(ImageUpload),
}

/// A ready-to-send multipart request. `actions_keypoints` repeats once per
/// point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImpactSubmission {
    pub method: HttpMethod,
    pub path: String,
    pub fields: Vec<(String, MultipartValue)>,
}

impl ImpactSubmission {
    pub fn keypoints(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(name, _)| name == "actions_keypoints")
            .filter_map(|(_, value)| match value {
                MultipartValue::Text(s) => Some(s.as_str()),
                MultipartValue::File(_) => None,
            })
            .collect()
    }
}

impl ImpactDraft {
    /// Prefill for editing an existing record. The stored image stays on the
    /// server unless a new one is attached.
    pub fn from_record(record: &ImpactRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            actions_keypoints: keypoints_to_form_text(record.actions_keypoints.as_ref()),
            image: None,
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::InvalidInput("title is required".to_string()));
        }
        Ok(())
    }

    pub fn to_submission(&self, mode: &FormMode) -> CoreResult<ImpactSubmission> {
        self.validate()?;

        let mut fields = vec![
            ("title".to_string(), MultipartValue::Text(self.title.clone())),
            (
                "description".to_string(),
                MultipartValue::Text(self.description.clone()),
            ),
        ];
        for kp in form_text_to_keypoints(&self.actions_keypoints) {
            fields.push(("actions_keypoints".to_string(), MultipartValue::Text(kp)));
        }
        if let Some(image) = &self.image {
            fields.push(("img".to_string(), MultipartValue::File(image.clone())));
        }

        let route = mode.route();
        Ok(ImpactSubmission {
            method: route.method(),
            path: route.path(),
            fields,
        })
    }
}

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::non_empty;
use super::params::FlyerRequest;

pub const UPLOAD_PREFERENCE: &str = "upload";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    TargetAudience,
    BusinessType,
    ColorScheme,
    FlierSize,
    Orientation,
    UploadedImage,
}

impl FormField {
    pub const REQUIRED: [Self; 5] = [
        Self::TargetAudience,
        Self::BusinessType,
        Self::ColorScheme,
        Self::FlierSize,
        Self::Orientation,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TargetAudience => "targetAudience",
            Self::BusinessType => "businessType",
            Self::ColorScheme => "colorScheme",
            Self::FlierSize => "flierSize",
            Self::Orientation => "orientation",
            Self::UploadedImage => "uploadedImage",
        }
    }
}

/// The flyer questionnaire as the user filled it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyerForm {
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub color_scheme: Option<String>,
    #[serde(default)]
    pub style_preference: Option<String>,
    #[serde(default)]
    pub flier_size: Option<String>,
    #[serde(default)]
    pub orientation: Option<String>,
    #[serde(default)]
    pub image_preference: Option<String>,
    #[serde(default)]
    pub uploaded_image: Option<String>,
}

impl FlyerForm {
    fn value(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::TargetAudience => &self.target_audience,
            FormField::BusinessType => &self.business_type,
            FormField::ColorScheme => &self.color_scheme,
            FormField::FlierSize => &self.flier_size,
            FormField::Orientation => &self.orientation,
            FormField::UploadedImage => &self.uploaded_image,
        };
        non_empty(value.as_deref())
    }

    fn requires_upload(&self) -> bool {
        self.image_preference.as_deref() == Some(UPLOAD_PREFERENCE)
    }

    #[must_use]
    pub fn validate(&self) -> FormErrors {
        let mut fields: BTreeMap<FormField, bool> = FormField::REQUIRED
            .into_iter()
            .map(|field| (field, self.value(field).is_none()))
            .collect();
        if self.requires_upload() {
            fields.insert(
                FormField::UploadedImage,
                self.value(FormField::UploadedImage).is_none(),
            );
        }
        FormErrors { fields }
    }

    /// Carries the styling answers into a generation request.
    #[must_use]
    pub fn to_request(&self, language: Option<&str>) -> FlyerRequest {
        FlyerRequest {
            business_type: self.business_type.clone(),
            target_audience: self.target_audience.clone(),
            color_scheme: self.color_scheme.clone(),
            style_preference: self.style_preference.clone(),
            language: language.map(str::to_string),
            ..FlyerRequest::default()
        }
    }
}

/// Field to "is missing" map for every checked field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors {
    fields: BTreeMap<FormField, bool>,
}

impl FormErrors {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.fields.values().any(|missing| *missing)
    }

    #[must_use]
    pub fn is_missing(&self, field: FormField) -> bool {
        self.fields.get(&field).copied().unwrap_or(false)
    }

    pub fn missing(&self) -> impl Iterator<Item = FormField> + '_ {
        self.fields
            .iter()
            .filter(|(_, missing)| **missing)
            .map(|(field, _)| *field)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.missing().map(FormField::name).collect();
        write!(f, "missing required fields: {}", names.join(", "))
    }
}

/// Tracks whether the user has tried to submit; errors stay hidden until
/// the first attempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormSession {
    submit_attempted: bool,
}

impl FormSession {
    pub fn submit(&mut self, form: &FlyerForm) -> Result<(), FormErrors> {
        self.submit_attempted = true;
        let errors = form.validate();
        if errors.is_valid() { Ok(()) } else { Err(errors) }
    }

    #[must_use]
    pub fn visible_errors(&self, form: &FlyerForm) -> Option<FormErrors> {
        self.submit_attempted.then(|| form.validate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> FlyerForm {
        FlyerForm {
            target_audience: Some("families".to_string()),
            business_type: Some("cafe".to_string()),
            color_scheme: Some("warm".to_string()),
            style_preference: None,
            flier_size: Some("a4".to_string()),
            orientation: Some("portrait".to_string()),
            image_preference: Some("generate".to_string()),
            uploaded_image: None,
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(complete_form().validate().is_valid());
    }

    #[test]
    fn blank_values_count_as_missing() {
        let form = FlyerForm {
            orientation: Some("  ".to_string()),
            ..complete_form()
        };
        let errors = form.validate();
        assert!(!errors.is_valid());
        assert!(errors.is_missing(FormField::Orientation));
        assert_eq!(errors.missing().collect::<Vec<_>>(), vec![FormField::Orientation]);
    }

    #[test]
    fn upload_preference_requires_an_image() {
        let mut form = FlyerForm {
            image_preference: Some(UPLOAD_PREFERENCE.to_string()),
            ..complete_form()
        };
        assert!(form.validate().is_missing(FormField::UploadedImage));

        form.uploaded_image = Some("data:image/png;base64,AAAA".to_string());
        assert!(form.validate().is_valid());
    }

    #[test]
    fn errors_are_hidden_until_first_submit() {
        let form = FlyerForm::default();
        let mut session = FormSession::default();
        assert_eq!(session.visible_errors(&form), None);

        let errors = session.submit(&form).expect_err("empty form must fail");
        assert_eq!(errors.missing().count(), 5);
        assert!(session.visible_errors(&form).is_some());
    }

    #[test]
    fn errors_serialize_as_field_map() {
        let json = serde_json::to_value(FlyerForm::default().validate()).expect("json");
        assert_eq!(json["flierSize"], serde_json::Value::Bool(true));
        assert!(json.get("uploadedImage").is_none());
    }

    #[test]
    fn display_lists_missing_fields() {
        let form = FlyerForm {
            business_type: None,
            ..complete_form()
        };
        assert_eq!(
            form.validate().to_string(),
            "missing required fields: businessType"
        );
    }
}

//! Multipart bodies parsed into explicit forms. Unknown parts are rejected
//! here, before anything reaches the store.

use super::error::ApiError;
use crate::commands::PhotoUpload;
use axum::extract::multipart::Field;
use axum::extract::Multipart;

/// Body of `POST /inventory`.
#[derive(Debug, Default)]
pub struct RegisterForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub photo: Option<PhotoUpload>,
}

impl RegisterForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = RegisterForm::default();
        let mut seen_photo = false;

        while let Some(field) = multipart.next_field().await? {
            let part = field.name().unwrap_or_default().to_string();
            match part.as_str() {
                "name" => form.name = Some(field.text().await?),
                "description" => form.description = Some(field.text().await?),
                "photo" => {
                    if seen_photo {
                        return Err(one_photo_only());
                    }
                    seen_photo = true;
                    form.photo = read_photo(field).await?;
                }
                other => return Err(unexpected(other)),
            }
        }
        Ok(form)
    }
}

/// Body of `PUT /inventory/{id}/photo`.
#[derive(Debug)]
pub struct PhotoForm {
    pub photo: PhotoUpload,
}

impl PhotoForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut photo = None;
        let mut seen_photo = false;

        while let Some(field) = multipart.next_field().await? {
            let part = field.name().unwrap_or_default().to_string();
            match part.as_str() {
                "photo" => {
                    if seen_photo {
                        return Err(one_photo_only());
                    }
                    seen_photo = true;
                    photo = read_photo(field).await?;
                }
                other => return Err(unexpected(other)),
            }
        }

        let photo = photo.ok_or_else(|| ApiError::BadRequest("photo is required".to_string()))?;
        Ok(Self { photo })
    }
}

/// Browsers send an empty, unnamed file part when no file was picked.
async fn read_photo(field: Field<'_>) -> Result<Option<PhotoUpload>, ApiError> {
    let original_name = field.file_name().map(String::from);
    let bytes = field.bytes().await?;
    if bytes.is_empty() && original_name.as_deref().unwrap_or_default().is_empty() {
        return Ok(None);
    }
    Ok(Some(PhotoUpload::new(bytes.to_vec(), original_name.as_deref())))
}

fn one_photo_only() -> ApiError {
    ApiError::BadRequest("only one photo per request".to_string())
}

fn unexpected(part: &str) -> ApiError {
    ApiError::BadRequest(format!("unexpected form field: {:?}", part))
}

//! Multipart form plumbing shared by the resume endpoints.

use axum::extract::Multipart;
use bytes::Bytes;

use crate::analysis::extract::FileKind;
use crate::errors::AppError;

/// Fields collected from a multipart upload. Unknown fields are ignored.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub filename: Option<String>,
    pub file_bytes: Option<Bytes>,
    pub job_description: Option<String>,
}

impl UploadForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
        {
            // `name()` borrows the field, which `bytes()`/`text()` consume.
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("file") => {
                    form.filename = field.file_name().map(str::to_string);
                    form.file_bytes = Some(field.bytes().await.map_err(|e| {
                        AppError::Validation(format!("Failed to read uploaded file: {e}"))
                    })?);
                }
                Some("job_description") => {
                    form.job_description = Some(field.text().await.map_err(|e| {
                        AppError::Validation(format!("Failed to read job description: {e}"))
                    })?);
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Validates the file field: present, named, and a supported kind.
    pub fn require_file(&self) -> Result<(FileKind, &Bytes), AppError> {
        let bytes = self.file_bytes.as_ref().ok_or(AppError::NoFileProvided)?;

        let filename = self.filename.as_deref().unwrap_or("");
        if filename.is_empty() {
            return Err(AppError::EmptyFilename);
        }

        // Mirrors `filename.split('.').last()`: a name without a dot yields
        // the whole name, which then fails the kind check.
        let extension = filename.rsplit('.').next().unwrap_or("");
        let kind = FileKind::from_extension(extension)
            .ok_or_else(|| AppError::UnsupportedFileType(extension.to_string()))?;

        Ok((kind, bytes))
    }

    pub fn require_job_description(&self) -> Result<&str, AppError> {
        match self.job_description.as_deref() {
            Some(jd) if !jd.trim().is_empty() => Ok(jd),
            _ => Err(AppError::Validation(
                "No job description provided".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(filename: Option<&str>, bytes: Option<&[u8]>) -> UploadForm {
        UploadForm {
            filename: filename.map(str::to_string),
            file_bytes: bytes.map(Bytes::copy_from_slice),
            job_description: None,
        }
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let err = form(None, None).require_file().unwrap_err();
        assert!(matches!(err, AppError::NoFileProvided));
    }

    #[test]
    fn test_empty_filename_is_rejected() {
        let err = form(None, Some(b"data")).require_file().unwrap_err();
        assert!(matches!(err, AppError::EmptyFilename));
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let err = form(Some("resume.txt"), Some(b"data"))
            .require_file()
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFileType(ext) if ext == "txt"));
    }

    #[test]
    fn test_filename_without_dot_is_rejected() {
        let err = form(Some("resume"), Some(b"data"))
            .require_file()
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFileType(_)));
    }

    #[test]
    fn test_pdf_upload_is_accepted() {
        let f = form(Some("resume.pdf"), Some(b"data"));
        let (kind, bytes) = f.require_file().unwrap();
        assert_eq!(kind, FileKind::Pdf);
        assert_eq!(bytes.as_ref(), b"data");
    }

    #[test]
    fn test_uppercase_extension_is_accepted() {
        let f = form(Some("Resume.DOCX"), Some(b"data"));
        let (kind, _) = f.require_file().unwrap();
        assert_eq!(kind, FileKind::Docx);
    }

    #[test]
    fn test_missing_job_description_is_rejected() {
        let f = form(Some("resume.pdf"), Some(b"data"));
        assert!(f.require_job_description().is_err());
    }

    #[test]
    fn test_blank_job_description_is_rejected() {
        let mut f = form(Some("resume.pdf"), Some(b"data"));
        f.job_description = Some("   ".to_string());
        assert!(f.require_job_description().is_err());
    }
}

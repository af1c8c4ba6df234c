//! Centralized validation helpers and input limits.

/// Maximum number of data rows allowed in a single roster (DOS protection)
pub const MAX_ROSTER_ROWS: usize = 10_000;

/// Maximum accepted size for an uploaded roster, in bytes
pub const MAX_UPLOAD_BYTES: usize = 1024 * 1024;

/// Check if adding another row would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new row. Returns an
/// error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_roster_limit(count: usize) -> Option<String> {
    if count >= MAX_ROSTER_ROWS {
        Some(format!(
            "Too many rows: adding another would exceed maximum of {MAX_ROSTER_ROWS}"
        ))
    } else {
        None
    }
}

/// Validation error types for uploaded content
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Uploaded roster is empty")]
    EmptyUpload,
    #[error("Uploaded roster exceeds {MAX_UPLOAD_BYTES} bytes")]
    UploadTooLarge,
    #[error("Uploaded roster is not valid UTF-8 text")]
    NotText,
}

/// Validate an uploaded roster body before parsing.
///
/// # Errors
///
/// Returns `ValidationError::EmptyUpload` for blank content,
/// `ValidationError::UploadTooLarge` when the size cap is exceeded, or
/// `ValidationError::NotText` for non-UTF-8 bytes.
pub fn validate_upload(bytes: &[u8]) -> Result<&str, ValidationError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ValidationError::UploadTooLarge);
    }

    let text = std::str::from_utf8(bytes).map_err(|_| ValidationError::NotText)?;

    if text.trim().is_empty() {
        return Err(ValidationError::EmptyUpload);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_limit() {
        assert!(check_roster_limit(0).is_none());
        assert!(check_roster_limit(MAX_ROSTER_ROWS - 1).is_none());
        assert!(check_roster_limit(MAX_ROSTER_ROWS).is_some());
        assert!(check_roster_limit(MAX_ROSTER_ROWS + 1).is_some());
    }

    #[test]
    fn test_validate_upload_ok() {
        let text = validate_upload(b"name,field\nAda,software\n").unwrap();
        assert!(text.starts_with("name"));
    }

    #[test]
    fn test_validate_upload_rejects_empty() {
        assert!(matches!(
            validate_upload(b"   \n  "),
            Err(ValidationError::EmptyUpload)
        ));
    }

    #[test]
    fn test_validate_upload_rejects_oversize() {
        let big = vec![b'a'; MAX_UPLOAD_BYTES + 1];
        assert!(matches!(
            validate_upload(&big),
            Err(ValidationError::UploadTooLarge)
        ));
    }

    #[test]
    fn test_validate_upload_rejects_binary() {
        assert!(matches!(
            validate_upload(&[0xff, 0xfe, 0x00]),
            Err(ValidationError::NotText)
        ));
    }
}

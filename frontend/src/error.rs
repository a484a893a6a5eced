use thiserror::Error;

/// Faults reported by the theme collaborators.
///
/// The controller never surfaces these to the UI: reads degrade to
/// "absent" / light and writes are logged and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("No window object")]
    NoWindow,
    #[error("No localStorage")]
    StorageUnavailable,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("media query error: {0}")]
    MediaQuery(String),
    #[error("document has no root element")]
    NoDocumentElement,
    #[error("class list error: {0}")]
    ClassList(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_collaborator() {
        assert_eq!(ThemeError::StorageUnavailable.to_string(), "No localStorage");
        assert_eq!(
            ThemeError::MediaQuery("unsupported".into()).to_string(),
            "media query error: unsupported"
        );
    }
}

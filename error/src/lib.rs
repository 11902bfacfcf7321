use thiserror::Error;

/// Failures surfaced to HTTP clients.
///
/// `NotFound` is shared by "missing" and "not yours": handlers must never
/// pick a message that tells the two apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InternalServerError(String),
}

impl Error {
    pub fn project_not_found() -> Self {
        Self::NotFound("Project not found".to_owned())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::NotFound(msg)
            | Self::InternalServerError(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_is_the_bare_message() {
        let err = Error::Forbidden("Admin only".to_owned());

        assert_eq!(err.to_string(), "Admin only");
        assert_eq!(err.message(), "Admin only");
    }

    #[test]
    fn project_not_found_is_a_not_found() {
        assert!(matches!(Error::project_not_found(), Error::NotFound(_)));
    }
}

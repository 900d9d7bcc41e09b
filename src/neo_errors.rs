use thiserror::Error;

use crate::constants::ObjectId;

#[derive(Error, Debug)]
pub enum NeoError {
    #[error("Invalid calendar date: {0}")]
    InvalidCalendarDate(String),

    #[error("Invalid miss distance: {0}")]
    InvalidMissDistance(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    #[error("HTTP reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Catalog answered {status} for object {id}")]
    HttpStatus { id: ObjectId, status: u16 },

    #[error("Unable to decode catalog response: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Object not found in catalog: {0}")]
    ObjectNotFound(ObjectId),

    #[error("Retrieval task for object {0} did not complete")]
    RetrievalTaskFailed(ObjectId),
}

impl PartialEq for NeoError {
    fn eq(&self, other: &Self) -> bool {
        use NeoError::*;
        match (self, other) {
            (InvalidCalendarDate(a), InvalidCalendarDate(b)) => a == b,
            (InvalidMissDistance(a), InvalidMissDistance(b)) => a == b,
            (InvalidUrl(a), InvalidUrl(b)) => a == b,
            (InvalidConfig(a), InvalidConfig(b)) => a == b,
            (
                HttpStatus {
                    id: id_a,
                    status: status_a,
                },
                HttpStatus {
                    id: id_b,
                    status: status_b,
                },
            ) => id_a == id_b && status_a == status_b,
            (ObjectNotFound(a), ObjectNotFound(b)) => a == b,
            (RetrievalTaskFailed(a), RetrievalTaskFailed(b)) => a == b,

            // foreign errors are not comparable, same variant is enough
            (ReqwestError(_), ReqwestError(_)) => true,
            (JsonError(_), JsonError(_)) => true,

            _ => false,
        }
    }
}

#[cfg(test)]
mod neo_errors_test {
    use super::*;

    #[test]
    fn test_error_equality() {
        assert_eq!(
            NeoError::InvalidCalendarDate("2020-13-01".into()),
            NeoError::InvalidCalendarDate("2020-13-01".into())
        );
        assert_ne!(
            NeoError::InvalidCalendarDate("2020-13-01".into()),
            NeoError::InvalidUrl("2020-13-01".into())
        );
        assert_eq!(
            NeoError::HttpStatus {
                id: "3542519".into(),
                status: 404
            },
            NeoError::HttpStatus {
                id: "3542519".into(),
                status: 404
            }
        );
        assert_ne!(
            NeoError::HttpStatus {
                id: "3542519".into(),
                status: 404
            },
            NeoError::HttpStatus {
                id: "3542519".into(),
                status: 500
            }
        );
    }

    #[test]
    fn test_json_error_display() {
        let err: NeoError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(err.to_string().starts_with("Unable to decode catalog response"));
    }
}

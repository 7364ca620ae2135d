// Failures surfaced by the JSON request/response helpers.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    // Empty or malformed input, a shape mismatch, or data after the first document.
    #[error("failed to decode JSON body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("body must not be larger than {limit} bytes")]
    BodyTooLarge { limit: usize },

    // Transport failure while buffering the request body.
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    // The value handed to the encoder has no JSON representation.
    #[error("failed to encode JSON response: {0}")]
    Encode(#[source] serde_json::Error),
}

impl JsonError {
    // True when the failure was caused by what the client sent.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, JsonError::Encode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_decode_fails_then_error_is_attributed_to_the_client() {
        let cause = serde_json::from_str::<u32>("").expect_err("empty input should fail");
        let err = JsonError::Decode(cause);

        assert!(err.is_client_error());
        assert!(err.to_string().starts_with("failed to decode JSON body"));
    }

    #[test]
    fn when_encode_fails_then_error_is_not_attributed_to_the_client() {
        let cause = serde_json::to_vec(&std::collections::BTreeMap::from([((1, 2), 3)]))
            .expect_err("tuple keys are not valid JSON object keys");
        let err = JsonError::Encode(cause);

        assert!(!err.is_client_error());
    }

    #[test]
    fn when_body_is_too_large_then_message_names_the_limit() {
        let err = JsonError::BodyTooLarge { limit: 16 };

        assert_eq!(err.to_string(), "body must not be larger than 16 bytes");
        assert!(err.is_client_error());
    }
}

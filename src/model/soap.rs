//! SOAP response DTO and success classification.

/// Response payload decoded from
/// `Envelope/Body/SoapXmlRequestResponse/xmlResponse/AsuSzmInSoapResponseDto`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SoapResponse {
    pub status: String,
    pub error: String,
}

impl SoapResponse {
    /// A response counts as success only when the endpoint both reports
    /// `Status == "true"` (case-insensitive) and embeds the HTTP status
    /// line `"Status code: 200"` in its error text. Any other shape,
    /// including a missing DTO, is failure.
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("true") && self.error.contains("Status code: 200")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: &str, error: &str) -> SoapResponse {
        SoapResponse {
            status: status.to_string(),
            error: error.to_string(),
        }
    }

    #[test]
    fn test_success_requires_both_conditions() {
        assert!(response("true", "Sent. Status code: 200, OK").is_success());
        assert!(!response("true", "Sent. Status code: 500").is_success());
        assert!(!response("false", "Status code: 200").is_success());
        assert!(!response("", "").is_success());
    }

    #[test]
    fn test_status_is_case_insensitive() {
        assert!(response("TRUE", "Status code: 200").is_success());
        assert!(response("True", "Status code: 200").is_success());
    }
}

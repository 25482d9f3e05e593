//! On-demand Run Endpoint

use super::{decode_ack, ApiClient, ApiError, ApiRequest};

pub fn run_request() -> ApiRequest {
    ApiRequest::post("/run", None)
}

pub async fn run_checks(client: &ApiClient) -> Result<(), ApiError> {
    let body = client.execute(&run_request()).await?;
    decode_ack(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpMethod;

    #[test]
    fn test_run_request() {
        let req = run_request();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/run");
        assert_eq!(req.body, None);
        assert!(req.authenticated);
    }
}

use super::*;

pub(super) struct GlooTransport;

#[async_trait(?Send)]
impl LoginStateTransport for GlooTransport {
    async fn fetch_login_state(
        &self,
        encoded_pathname: &str,
    ) -> Result<LoginState, LoginStateError> {
        let path = authenticate_request_path(encoded_pathname);
        let response = Request::get(&path)
            .send()
            .await
            .map_err(|error| LoginStateError::Network(error.to_string()))?;

        let status = response.status();
        if !(200..=299).contains(&status) {
            return Err(LoginStateError::Status {
                status,
                status_text: response.status_text(),
            });
        }

        let raw = response
            .text()
            .await
            .map_err(|error| LoginStateError::Network(error.to_string()))?;
        decode_login_state(&raw)
    }
}

use serde::Deserialize;
use serde_json::Value;

use crate::{
    client::{config::Config, error::Error},
    model::user::UserRole,
};

/// Outcome of a role lookup that reached the API
#[derive(Clone, Debug, PartialEq)]
pub enum RoleLookupResponse {
    /// 2xx response, with the role if the body carried a known one at `data.role`
    Success(Option<UserRole>),
    /// Any other status; the credential is not accepted
    Rejected(u16),
}

impl RoleLookupResponse {
    /// Interprets a role lookup response from its status code and raw body.
    ///
    /// A successful response whose body is JSON of any other shape than
    /// `{"data": {"role": "..."}}` is treated as carrying no role. The body of a rejected
    /// response is never inspected.
    ///
    /// # Returns
    /// - `Ok(RoleLookupResponse::Success)` - 2xx status with a JSON body
    /// - `Ok(RoleLookupResponse::Rejected)` - Non 2xx status
    /// - `Err(Error::ParseError)` - 2xx status but the body is not JSON
    pub fn from_parts(status: u16, body: &str) -> Result<Self, Error> {
        if !(200..300).contains(&status) {
            return Ok(Self::Rejected(status));
        }

        let json: Value = serde_json::from_str(body)
            .map_err(|e| Error::ParseError(format!("role lookup body: {}", e)))?;

        // a body of another shape, or an unknown role, means no role
        let role = serde_json::from_value::<RoleLookupBody>(json)
            .ok()
            .and_then(|body| body.data)
            .and_then(|data| data.role);

        Ok(Self::Success(role))
    }
}

#[derive(Deserialize)]
struct RoleLookupBody {
    data: Option<RoleLookupData>,
}

#[derive(Deserialize)]
struct RoleLookupData {
    role: Option<UserRole>,
}

/// Value of the `Authorization` header sent with a role lookup
pub fn authorization_header(credential: &str) -> String {
    format!("JWT {}", credential)
}

/// Source of the signed in user's role.
#[allow(async_fn_in_trait)]
pub trait RoleLookup {
    /// Asks the API which role the given credential belongs to.
    ///
    /// # Returns
    /// - `Ok(RoleLookupResponse)` - The API answered, whatever the status
    /// - `Err(Error::RequestError)` - The request never completed
    /// - `Err(Error::ParseError)` - 2xx response with a body that is not JSON
    async fn fetch_role(&self, credential: &str) -> Result<RoleLookupResponse, Error>;
}

/// [`RoleLookup`] calling `GET /core/api/user-role/` over HTTP.
#[derive(Clone, Debug)]
pub struct HttpRoleLookup {
    endpoint: String,
}

impl HttpRoleLookup {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.role_endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(feature = "web")]
impl RoleLookup for HttpRoleLookup {
    async fn fetch_role(&self, credential: &str) -> Result<RoleLookupResponse, Error> {
        use reqwasm::http::Request;

        let response = Request::get(&self.endpoint)
            .header("Authorization", &authorization_header(credential))
            .send()
            .await
            .map_err(|e| Error::RequestError(e.to_string()))?;

        let status = response.status();
        if !(200..300).contains(&status) {
            return Ok(RoleLookupResponse::Rejected(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::RequestError(format!("Failed to read response body: {}", e)))?;

        RoleLookupResponse::from_parts(status, &body)
    }
}

#[cfg(not(feature = "web"))]
impl RoleLookup for HttpRoleLookup {
    async fn fetch_role(&self, _credential: &str) -> Result<RoleLookupResponse, Error> {
        Err(Error::RequestError(format!(
            "no HTTP client available to reach {}, enable the web feature",
            self.endpoint
        )))
    }
}

use crate::{app::AppError, config::ConnectConfig, schema::id::Id};
use serde::{Deserialize, Serialize};

/// Path the connect service sends the user back to.
pub const SUCCESS_PATH: &str = "/authenticate-success";

///
/// ConnectRequest
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ConnectRequest {
    pub connect_url: String,
    pub success_url: String,
    pub app_id: Id,
}

impl ConnectRequest {
    /// Build the request for an app served from `origin`.
    #[must_use]
    pub fn new(config: &ConnectConfig, origin: &str) -> Self {
        Self {
            connect_url: config.url.clone(),
            success_url: format!("{}{SUCCESS_PATH}", origin.trim_end_matches('/')),
            app_id: config.app_id,
        }
    }
}

///
/// Authenticator
/// owns the redirect to the connect service and the resulting session
///

pub trait Authenticator {
    fn redirect_to_connect(&mut self, request: &ConnectRequest) -> Result<(), AppError>;
}

/// Start sign-in for an app served from `origin`.
pub fn login<A>(auth: &mut A, config: &ConnectConfig, origin: &str) -> Result<ConnectRequest, AppError>
where
    A: Authenticator + ?Sized,
{
    let request = ConnectRequest::new(config, origin);
    auth.redirect_to_connect(&request)?;

    tracing::info!(
        connect_url = %request.connect_url,
        success_url = %request.success_url,
        "redirected to connect"
    );

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, SessionProvider};

    #[test]
    fn success_url_is_built_from_origin() {
        let config = ConnectConfig::default();

        let request = ConnectRequest::new(&config, "https://fields.example/");

        assert_eq!(request.success_url, "https://fields.example/authenticate-success");
        assert_eq!(request.connect_url, "https://hypergraph-connect.vercel.app/");
        assert_eq!(request.app_id.to_string(), "93bb8907-085a-4a0e-83dd-62b0dc98e793");
    }

    #[test]
    fn login_opens_a_session() {
        let mut store = MemoryStore::new();
        assert!(store.publisher().is_none());

        login(&mut store, &ConnectConfig::default(), "http://localhost:5173").unwrap();

        assert!(store.is_signed_in());
        assert!(store.publisher().is_some());
    }
}

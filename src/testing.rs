use crate::{Authenticator, Client, Config};

/// Create a test client configured to use a wiremock server.
pub fn test_client(service_url: &str) -> Client {
    Client::new(Config {
        service_url: Some(service_url.to_string()),
        authenticator: Some(Authenticator::api_key("test-key")),
        ..Default::default()
    })
    .expect("client")
}

/// Blocking counterpart of [`test_client`].
#[cfg(feature = "blocking")]
pub fn test_blocking_client(service_url: &str) -> crate::BlockingClient {
    crate::BlockingClient::new(crate::BlockingConfig {
        service_url: Some(service_url.to_string()),
        authenticator: Some(Authenticator::api_key("test-key")),
        ..Default::default()
    })
    .expect("blocking client")
}

//! Deletion of data labeled with a customer ID.

use std::sync::Arc;

use reqwest::Method;

use crate::{
    client::ClientInner,
    core::{impl_option_headers, require, ApiRequest, Operation},
    errors::Result,
    http::{DetailedResponse, HeaderList},
};

/// Options for `DELETE /v1/user_data`.
///
/// Only data sent with an `X-Watson-Metadata: customer_id=...` header is labeled.
/// The service accepts the request with `202 Accepted` and deletes asynchronously.
#[derive(Debug, Clone, Default)]
pub struct DeleteUserDataOptions {
    pub customer_id: String,
    pub headers: HeaderList,
}

impl DeleteUserDataOptions {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            ..Default::default()
        }
    }
}

impl Operation for DeleteUserDataOptions {
    type Output = ();
    const NAME: &'static str = "delete_user_data";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<ApiRequest> {
        require("customer_id", &self.customer_id)?;
        Ok(ApiRequest::new(Method::DELETE, ["v1", "user_data"])
            .query("customer_id", &self.customer_id)
            .headers(&self.headers))
    }
}

impl_option_headers!(DeleteUserDataOptions);

#[derive(Clone)]
pub struct UserDataClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl UserDataClient {
    pub async fn delete(&self, opts: &DeleteUserDataOptions) -> Result<DetailedResponse<()>> {
        self.inner.execute(opts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_id_goes_in_query() {
        let req = DeleteUserDataOptions::new("cust-1").build_request().unwrap();
        assert_eq!(*req.method(), Method::DELETE);
        assert_eq!(req.path(), "/v1/user_data");
        assert_eq!(req.query_pairs(), &[("customer_id", "cust-1".to_string())]);
        assert!(req.body().is_none());
    }
}

//! Conversation logs, per workspace or across the whole service instance.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    client::ClientInner,
    core::{impl_option_headers, require, ApiRequest, Operation},
    errors::Result,
    http::{DetailedResponse, HeaderList},
    message::{MessageRequest, MessageResponse},
    types::LogPagination,
    workspaces::workspace_path,
};

/// One logged message exchange.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Log {
    pub request: MessageRequest,
    pub response: MessageResponse,
    pub log_id: String,
    /// Timestamps are kept verbatim; the service does not use RFC 3339 consistently here.
    pub request_timestamp: String,
    pub response_timestamp: String,
    pub workspace_id: String,
    pub language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LogCollection {
    pub logs: Vec<Log>,
    #[serde(default)]
    pub pagination: LogPagination,
}

/// Options for `GET /v1/workspaces/{workspace_id}/logs`.
#[derive(Debug, Clone, Default)]
pub struct ListLogsOptions {
    pub workspace_id: String,
    /// Attribute to sort by; prefix with `-` for descending, e.g. `-request_timestamp`.
    pub sort: Option<String>,
    /// Filter query, e.g. `response.intents:intent::order`.
    pub filter: Option<String>,
    pub page_limit: Option<u32>,
    pub cursor: Option<String>,
    pub headers: HeaderList,
}

impl ListLogsOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = Some(page_limit);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl Operation for ListLogsOptions {
    type Output = LogCollection;
    const NAME: &'static str = "list_logs";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        let mut path = workspace_path(&self.workspace_id);
        path.push("logs".into());
        Ok(ApiRequest::new(Method::GET, path)
            .query_opt("sort", self.sort.as_deref())
            .query_opt("filter", self.filter.as_deref())
            .query_opt("page_limit", self.page_limit)
            .query_opt("cursor", self.cursor.as_deref())
            .headers(&self.headers))
    }
}

/// Options for `GET /v1/logs`.
///
/// The filter must name a workspace or deployment, e.g.
/// `language::en,request.context.metadata.deployment::my_app`.
#[derive(Debug, Clone, Default)]
pub struct ListAllLogsOptions {
    pub filter: String,
    pub sort: Option<String>,
    pub page_limit: Option<u32>,
    pub cursor: Option<String>,
    pub headers: HeaderList,
}

impl ListAllLogsOptions {
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            ..Default::default()
        }
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = Some(page_limit);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl Operation for ListAllLogsOptions {
    type Output = LogCollection;
    const NAME: &'static str = "list_all_logs";

    fn build_request(&self) -> Result<ApiRequest> {
        require("filter", &self.filter)?;
        Ok(ApiRequest::new(Method::GET, ["v1", "logs"])
            .query("filter", &self.filter)
            .query_opt("sort", self.sort.as_deref())
            .query_opt("page_limit", self.page_limit)
            .query_opt("cursor", self.cursor.as_deref())
            .headers(&self.headers))
    }
}

impl_option_headers!(ListLogsOptions, ListAllLogsOptions);

#[derive(Clone)]
pub struct LogsClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl LogsClient {
    /// List the message log of one workspace.
    pub async fn list(&self, opts: &ListLogsOptions) -> Result<DetailedResponse<LogCollection>> {
        self.inner.execute(opts).await
    }

    /// List messages across all workspaces matching the filter.
    pub async fn list_all(
        &self,
        opts: &ListAllLogsOptions,
    ) -> Result<DetailedResponse<LogCollection>> {
        self.inner.execute(opts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_all_requires_filter() {
        let err = ListAllLogsOptions::new(" ").build_request().unwrap_err();
        assert_eq!(err.to_string(), "filter: filter is required");
    }

    #[test]
    fn list_logs_query_order() {
        let req = ListLogsOptions::new("ws")
            .with_sort("-request_timestamp")
            .with_page_limit(5)
            .build_request()
            .unwrap();
        assert_eq!(req.path(), "/v1/workspaces/ws/logs");
        assert_eq!(
            req.query_pairs(),
            &[
                ("sort", "-request_timestamp".to_string()),
                ("page_limit", "5".to_string())
            ]
        );
    }
}

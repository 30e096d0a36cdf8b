use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::sync::Arc;

use super::config::SupabaseConfig;
use super::error::SupabaseError;
use super::transport::{HttpMethod, HttpTransport, PreparedRequest, RawResponse, ReqwestTransport};

const REST_PATH: &str = "/rest/v1";
const OBJECT_ACCEPT: &str = "application/vnd.pgrst.object+json";

/// Shared handle to the backend. Cheap to clone.
#[derive(Clone)]
pub struct SupabaseClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    anon_key: String,
    data_key: String,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> Result<Self, SupabaseError> {
        let transport = ReqwestTransport::new(&config.url, config.request_timeout)
            .map_err(SupabaseError::Transport)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    pub fn with_transport(transport: Arc<dyn HttpTransport>, config: &SupabaseConfig) -> Self {
        Self {
            transport,
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            data_key: config.data_key().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn table(&self, table: &str) -> TableRequest {
        TableRequest {
            client: self.clone(),
            table: table.to_string(),
            select: "*".to_string(),
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        }
    }

    /// Calls a stored procedure with named arguments.
    pub async fn rpc<A, T>(&self, function: &str, args: &A) -> Result<T, SupabaseError>
    where
        A: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .data_request(HttpMethod::Post, format!("{}/rpc/{}", REST_PATH, function))
            .header("Content-Type", "application/json")
            .body(encode(args)?);

        let response = self.execute(request).await?;
        decode(&response)
    }

    /// Like `rpc` for functions whose result is not needed. Void functions
    /// answer with an empty body.
    pub async fn rpc_void<A>(&self, function: &str, args: &A) -> Result<(), SupabaseError>
    where
        A: Serialize + ?Sized,
    {
        let request = self
            .data_request(HttpMethod::Post, format!("{}/rpc/{}", REST_PATH, function))
            .header("Content-Type", "application/json")
            .body(encode(args)?);

        self.execute(request).await.map(|_| ())
    }

    pub(super) fn data_request(&self, method: HttpMethod, path: String) -> PreparedRequest {
        PreparedRequest::new(method, path)
            .header("apikey", self.data_key.clone())
            .header("Authorization", format!("Bearer {}", self.data_key))
    }

    pub(super) fn auth_request(&self, method: HttpMethod, path: &str, bearer: &str) -> PreparedRequest {
        PreparedRequest::new(method, path)
            .header("apikey", self.anon_key.clone())
            .header("Authorization", format!("Bearer {}", bearer))
    }

    pub(super) fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// Sends a request and turns non-2xx answers into `SupabaseError::Api`.
    pub(super) async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, SupabaseError> {
        let path = request.path.clone();
        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(path = %path, error = %e, "Backend request failed");
            SupabaseError::Transport(e)
        })?;

        if response.is_success() {
            Ok(response)
        } else {
            let err = SupabaseError::from_response(&response);
            tracing::debug!(path = %path, status = response.status, error = %err, "Backend returned an error");
            Err(err)
        }
    }
}

/// Builder for one PostgREST table call.
pub struct TableRequest {
    client: SupabaseClient,
    table: String,
    select: String,
    filters: Vec<(String, String)>,
    order: Vec<String>,
    limit: Option<u32>,
}

impl TableRequest {
    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns.to_string();
        self
    }

    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.filters.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    /// `column IN (values)`. Values are quoted so commas inside them are safe.
    pub fn in_list<V: Display>(mut self, column: &str, values: &[V]) -> Self {
        let quoted: Vec<String> = values
            .iter()
            .map(|v| format!("\"{}\"", v.to_string().replace('"', "\\\"")))
            .collect();
        self.filters
            .push((column.to_string(), format!("in.({})", quoted.join(","))));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let dir = if ascending { "asc" } else { "desc" };
        self.order.push(format!("{}.{}", column, dir));
        self
    }

    pub fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    fn path(&self) -> String {
        format!("{}/{}", REST_PATH, self.table)
    }

    fn with_filters(&self, mut request: PreparedRequest) -> PreparedRequest {
        for (column, value) in &self.filters {
            request = request.query_pair(column, value.clone());
        }
        request
    }

    fn read_request(&self) -> PreparedRequest {
        let mut request = self
            .client
            .data_request(HttpMethod::Get, self.path())
            .query_pair("select", self.select.clone());
        request = self.with_filters(request);
        if !self.order.is_empty() {
            request = request.query_pair("order", self.order.join(","));
        }
        if let Some(limit) = self.limit {
            request = request.query_pair("limit", limit.to_string());
        }
        request
    }

    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, SupabaseError> {
        let response = self.client.execute(self.read_request()).await?;
        decode(&response)
    }

    /// One row or `None`.
    pub async fn fetch_single<T: DeserializeOwned>(self) -> Result<Option<T>, SupabaseError> {
        let request = self.read_request().header("Accept", OBJECT_ACCEPT);
        match self.client.execute(request).await {
            Ok(response) => decode(&response).map(Some),
            Err(e) if e.is_no_rows() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Exact row count from the `Content-Range` header.
    pub async fn count(self) -> Result<u64, SupabaseError> {
        let request = self
            .with_filters(
                self.client
                    .data_request(HttpMethod::Get, self.path())
                    .query_pair("select", "*"),
            )
            .query_pair("limit", "1")
            .header("Prefer", "count=exact");

        let response = self.client.execute(request).await?;
        let range = response
            .header("Content-Range")
            .ok_or_else(|| SupabaseError::Decode("Missing Content-Range header".to_string()))?;
        parse_content_range_total(range)
    }

    pub async fn insert<B, T>(self, body: &B) -> Result<T, SupabaseError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .client
            .data_request(HttpMethod::Post, self.path())
            .header("Content-Type", "application/json")
            .header("Accept", OBJECT_ACCEPT)
            .header("Prefer", "return=representation")
            .body(encode(body)?);

        let response = self.client.execute(request).await?;
        decode(&response)
    }

    /// Insert, or merge into the row with the same primary key.
    pub async fn upsert<B, T>(self, body: &B) -> Result<T, SupabaseError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .client
            .data_request(HttpMethod::Post, self.path())
            .header("Content-Type", "application/json")
            .header("Accept", OBJECT_ACCEPT)
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .body(encode(body)?);

        let response = self.client.execute(request).await?;
        decode(&response)
    }

    /// Patches every row matching the filters and returns them.
    pub async fn update<B, T>(self, body: &B) -> Result<Vec<T>, SupabaseError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .with_filters(self.client.data_request(HttpMethod::Patch, self.path()))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .body(encode(body)?);

        let response = self.client.execute(request).await?;
        decode(&response)
    }

    /// Deletes matching rows and reports how many went away.
    pub async fn delete(self) -> Result<usize, SupabaseError> {
        let request = self
            .with_filters(self.client.data_request(HttpMethod::Delete, self.path()))
            .header("Prefer", "return=representation");

        let response = self.client.execute(request).await?;
        let rows: Vec<serde_json::Value> = decode(&response)?;
        Ok(rows.len())
    }
}

pub(super) fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, SupabaseError> {
    serde_json::to_vec(body).map_err(|e| SupabaseError::Decode(e.to_string()))
}

pub(super) fn decode<T: DeserializeOwned>(response: &RawResponse) -> Result<T, SupabaseError> {
    serde_json::from_slice(&response.body).map_err(|e| SupabaseError::Decode(e.to_string()))
}

fn parse_content_range_total(range: &str) -> Result<u64, SupabaseError> {
    range
        .rsplit('/')
        .next()
        .and_then(|total| total.trim().parse::<u64>().ok())
        .ok_or_else(|| SupabaseError::Decode(format!("Unparseable Content-Range: {}", range)))
}

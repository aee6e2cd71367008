use super::error::{RemoteError, RemoteErrorBody};
use super::query::Query;
use crate::shared::config::RemoteConfig;
use crate::shared::error::AppError;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use url::Url;

/// Access token cell shared between the auth flow and the request path.
/// The session forwarder writes it; every request reads it.
#[derive(Clone, Default)]
pub struct BearerToken {
    inner: Arc<RwLock<Option<String>>>,
}

impl BearerToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, token: Option<String>) {
        *self.inner.write().await = token;
    }

    pub async fn get(&self) -> Option<String> {
        self.inner.read().await.clone()
    }
}

/// Thin HTTP wrapper over the three Supabase surfaces (`/rest/v1`,
/// `/auth/v1`, `/storage/v1`). Row mapping lives in the repositories.
pub struct SupabaseClient {
    http: reqwest::Client,
    base: Url,
    anon_key: String,
    bearer: BearerToken,
}

impl SupabaseClient {
    pub fn new(config: &RemoteConfig, bearer: BearerToken) -> Result<Self, AppError> {
        let base = Url::parse(&config.url)
            .map_err(|err| AppError::ConfigurationError(format!("Invalid remote url: {err}")))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|err| {
                AppError::ConfigurationError(format!("Failed to build http client: {err}"))
            })?;
        Ok(Self {
            http,
            base,
            anon_key: config.anon_key.clone(),
            bearer,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, RemoteError> {
        self.base
            .join(path)
            .map_err(|err| RemoteError::InvalidUrl(err.to_string()))
    }

    fn rest(&self, table: &str) -> Result<Url, RemoteError> {
        self.endpoint(&format!("/rest/v1/{table}"))
    }

    /// `{base}/storage/v1/object/public/{bucket}/{path}`, pure string
    /// composition, no request.
    pub fn public_object_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{bucket}/{path}",
            self.base.as_str().trim_end_matches('/')
        )
    }

    async fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = self.bearer.get().await;
        let bearer = token.as_deref().unwrap_or(&self.anon_key);
        builder
            .header("apikey", self.anon_key.clone())
            .header(AUTHORIZATION, format!("Bearer {bearer}"))
    }

    async fn check(response: Response) -> Result<Response, RemoteError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .json::<RemoteErrorBody>()
            .await
            .unwrap_or_default();
        Err(RemoteError::from_status(status.as_u16(), body))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, RemoteError> {
        let response = self.authorize(builder).await.send().await?;
        Self::check(response).await
    }

    // --- /rest/v1 ---

    pub async fn select_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: Query,
    ) -> Result<Vec<T>, RemoteError> {
        let mut url = self.rest(table)?;
        query.apply(&mut url);
        let response = self.send(self.http.get(url)).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|err| RemoteError::Decode(err.to_string()))
    }

    /// Inserts one row and returns the created representation.
    pub async fn insert_returning<T: DeserializeOwned>(
        &self,
        table: &str,
        body: &impl Serialize,
    ) -> Result<T, RemoteError> {
        let url = self.rest(table)?;
        let builder = self
            .http
            .post(url)
            .header("Prefer", "return=representation")
            .json(body);
        let response = self.send(builder).await?;
        let mut rows = response
            .json::<Vec<T>>()
            .await
            .map_err(|err| RemoteError::Decode(err.to_string()))?;
        rows.pop().ok_or_else(|| {
            RemoteError::Decode("insert returned no representation".to_string())
        })
    }

    pub async fn insert(&self, table: &str, body: &impl Serialize) -> Result<(), RemoteError> {
        let url = self.rest(table)?;
        self.send(self.http.post(url).json(body)).await?;
        Ok(())
    }

    pub async fn update(
        &self,
        table: &str,
        query: Query,
        body: &impl Serialize,
    ) -> Result<(), RemoteError> {
        let mut url = self.rest(table)?;
        query.apply(&mut url);
        self.send(self.http.patch(url).json(body)).await?;
        Ok(())
    }

    pub async fn delete(&self, table: &str, query: Query) -> Result<(), RemoteError> {
        let mut url = self.rest(table)?;
        query.apply(&mut url);
        self.send(self.http.delete(url)).await?;
        Ok(())
    }

    /// Row count via a HEAD request with `Prefer: count=exact`; the total
    /// comes back in the `content-range` header.
    pub async fn count(&self, table: &str, query: Query) -> Result<u64, RemoteError> {
        let mut url = self.rest(table)?;
        query.apply(&mut url);
        let builder = self
            .http
            .request(Method::HEAD, url)
            .header("Prefer", "count=exact")
            .header("Range-Unit", "items")
            .header("Range", "0-0");
        let response = self.send(builder).await?;
        let header = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| RemoteError::Decode("missing content-range header".to_string()))?;
        parse_content_range_total(header)
            .ok_or_else(|| RemoteError::Decode(format!("bad content-range: {header}")))
    }

    // --- /auth/v1 ---

    pub async fn auth_post<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &impl Serialize,
    ) -> Result<T, RemoteError> {
        let mut url = self.endpoint(&format!("/auth/v1/{path}"))?;
        for (key, value) in query {
            url.query_pairs_mut().append_pair(key, value);
        }
        let response = self.send(self.http.post(url).json(body)).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| RemoteError::Decode(err.to_string()))
    }

    pub async fn auth_post_empty(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<(), RemoteError> {
        let url = self.endpoint(&format!("/auth/v1/{path}"))?;
        self.send(self.http.post(url).json(body)).await?;
        Ok(())
    }

    /// PUT `/auth/v1/user` with an explicit access token, bypassing the
    /// shared bearer cell.
    pub async fn auth_put_user(
        &self,
        access_token: &str,
        body: &impl Serialize,
    ) -> Result<(), RemoteError> {
        let url = self.endpoint("/auth/v1/user")?;
        let response = self
            .http
            .put(url)
            .header("apikey", self.anon_key.clone())
            .header(AUTHORIZATION, format!("Bearer {access_token}"))
            .json(body)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// POST `/auth/v1/logout` with an explicit access token.
    pub async fn auth_logout(&self, access_token: &str) -> Result<(), RemoteError> {
        let url = self.endpoint("/auth/v1/logout")?;
        let response = self
            .http
            .post(url)
            .header("apikey", self.anon_key.clone())
            .header(AUTHORIZATION, format!("Bearer {access_token}"))
            .send()
            .await?;
        // GoTrue answers 204 here
        match Self::check(response).await {
            Ok(_) => Ok(()),
            Err(err) => Err(err),
        }
    }

    // --- /storage/v1 ---

    pub async fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), RemoteError> {
        let url = self.endpoint(&format!("/storage/v1/object/{bucket}/{path}"))?;
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(content_type)
                .map_err(|err| RemoteError::Decode(err.to_string()))?,
        );
        headers.insert("x-upsert", HeaderValue::from_static("false"));
        let builder = self.http.post(url).headers(headers).body(bytes);
        self.send(builder).await?;
        Ok(())
    }

    pub async fn delete_object(&self, bucket: &str, path: &str) -> Result<(), RemoteError> {
        let url = self.endpoint(&format!("/storage/v1/object/{bucket}/{path}"))?;
        let response = self.send(self.http.delete(url)).await;
        match response {
            Ok(_) => Ok(()),
            Err(RemoteError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

/// `content-range: 0-19/45` or `*/45`; the part after the slash is the total.
fn parse_content_range_total(header: &str) -> Option<u64> {
    header.rsplit('/').next()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_range_total_parses_both_shapes() {
        assert_eq!(parse_content_range_total("0-19/45"), Some(45));
        assert_eq!(parse_content_range_total("*/0"), Some(0));
        assert_eq!(parse_content_range_total("garbage"), None);
    }

    #[test]
    fn public_object_url_composes_without_requests() {
        let config = RemoteConfig {
            url: "https://example.supabase.co".to_string(),
            anon_key: "anon".to_string(),
            request_timeout: 30,
        };
        let client = SupabaseClient::new(&config, BearerToken::new()).unwrap();
        assert_eq!(
            client.public_object_url("uploads", "arts/a1/v2.png"),
            "https://example.supabase.co/storage/v1/object/public/uploads/arts/a1/v2.png"
        );
    }
}

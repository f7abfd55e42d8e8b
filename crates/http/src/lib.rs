use std::future::Future;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Transport seam for the speech-service client.
///
/// Post methods take service-relative paths; `get_bytes` takes an absolute
/// URL, because result audio is served from a CDN host, not the API host.
pub trait HttpClient: Send + Sync {
    fn get_bytes(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;

    fn post_json(
        &self,
        path: &str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;

    /// Multipart form upload: the payload as a `file` part plus plain text
    /// form fields.
    fn post_multipart(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
        fields: &[(&str, &str)],
    ) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;
}

/// `reqwest`-backed [`HttpClient`] carrying a base URL and bearer token.
pub struct BearerClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl BearerClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl HttpClient for BearerClient {
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, Error> {
        let response = self.client.get(url).send().await?;
        let bytes = response.error_for_status()?.bytes().await?;
        Ok(bytes.to_vec())
    }

    async fn post_json(&self, path: &str, body: Vec<u8>) -> Result<Vec<u8>, Error> {
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let bytes = response.error_for_status()?.bytes().await?;
        Ok(bytes.to_vec())
    }

    async fn post_multipart(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
        fields: &[(&str, &str)],
    ) -> Result<Vec<u8>, Error> {
        let mut form = reqwest::multipart::Form::new().part(
            "file",
            reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string()),
        );
        for (name, value) in fields {
            form = form.text(name.to_string(), value.to_string());
        }

        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.token)
            .multipart(form)
            .send()
            .await?;
        let bytes = response.error_for_status()?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

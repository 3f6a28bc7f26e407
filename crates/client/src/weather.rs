use models::weather_v1::{UpdateWeatherRequest, Weather};

use crate::ClientError;

/// Client of the weather HTTP API; works against both server variants.
#[derive(Clone, Debug)]
pub struct WeatherClient {
    base_url: String,
    http: reqwest::Client,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string(), http: reqwest::Client::new() }
    }

    /// `{base}/api/v1/weather/{city}` with the city percent-encoded as one segment.
    fn url(&self, city: &str) -> Result<reqwest::Url, ClientError> {
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| ClientError::BaseUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::BaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["api", "v1", "weather", city]);
        Ok(url)
    }

    async fn decode(resp: reqwest::Response) -> Result<Weather, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<Weather>().await?);
        }
        let message = resp.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            code: status.canonical_reason().unwrap_or("error").to_string(),
            message,
        })
    }

    /// `Ok(None)` when the server has no reading for the city.
    pub async fn get(&self, city: &str) -> Result<Option<Weather>, ClientError> {
        let resp = self.http.get(self.url(city)?).send().await?;
        match Self::decode(resp).await {
            Ok(w) => Ok(Some(w)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn put(&self, city: &str, temperature: f64) -> Result<Weather, ClientError> {
        let resp = self
            .http
            .put(self.url(city)?)
            .json(&UpdateWeatherRequest { temperature })
            .send()
            .await?;
        Self::decode(resp).await
    }
}

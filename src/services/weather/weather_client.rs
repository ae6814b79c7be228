//! 위치 기반 현재 기온 조회
//!
//! OpenWeatherMap 호환 API(`/data/2.5/weather`)를 호출해 섭씨 기온(`main.temp`)을 읽습니다.
//! API 키가 설정되지 않았으면 조회하지 않고 `None`을 반환합니다.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use serde::Deserialize;

use crate::config::WeatherConfig;
use crate::errors::{AppError, AppResult};

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// 위치의 현재 기온(섭씨). 조회가 비활성화되어 있으면 `None`.
    async fn current_temperature(&self, location: &str) -> AppResult<Option<f32>>;
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: MainReading,
}

#[derive(Debug, Deserialize)]
struct MainReading {
    temp: f64,
}

pub struct OpenWeatherClient {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        if config.api_key.is_none() {
            info!("🌤️ WEATHER_API_KEY 미설정 - 기온 자동 조회 비활성화");
        }

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_temperature(&self, location: &str) -> AppResult<Option<f32>> {
        let Some(api_key) = &self.api_key else {
            return Ok(None);
        };

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("q", location), ("appid", api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| AppError::WeatherApiError(format!("날씨 API 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherApiError(format!(
                "날씨 API 응답 오류 ({}): {}",
                status, error_text
            )));
        }

        let weather = response
            .json::<WeatherResponse>()
            .await
            .map_err(|e| AppError::WeatherApiError(format!("날씨 API 응답 파싱 실패: {}", e)))?;

        debug!("{} 현재 기온: {}°C", location, weather.main.temp);
        Ok(Some(weather.main.temp as f32))
    }
}

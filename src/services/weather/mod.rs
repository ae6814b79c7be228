pub mod weather_client;

pub use weather_client::{OpenWeatherClient, WeatherProvider};

#[cfg(test)]
pub mod fixed {
    use async_trait::async_trait;

    use super::WeatherProvider;
    use crate::errors::{AppError, AppResult};

    /// 항상 같은 값을 돌려주는 테스트용 날씨 조회기
    pub struct FixedWeather(pub Option<f32>);

    #[async_trait]
    impl WeatherProvider for FixedWeather {
        async fn current_temperature(&self, _location: &str) -> AppResult<Option<f32>> {
            Ok(self.0)
        }
    }

    pub struct FailingWeather;

    #[async_trait]
    impl WeatherProvider for FailingWeather {
        async fn current_temperature(&self, _location: &str) -> AppResult<Option<f32>> {
            Err(AppError::WeatherApiError("날씨 API 요청 실패".to_string()))
        }
    }
}

//! 외부 서비스 설정
//!
//! 오브젝트 스토리지(S3 호환)와 날씨 API 연결 정보를 관리합니다.
//!
//! ```bash
//! export S3_BUCKET_NAME="social-post-images"
//! export AWS_REGION="ap-northeast-2"
//! export S3_ENDPOINT="http://localhost:9000"          # MinIO 등 (선택)
//! export S3_PUBLIC_BASE_URL="https://cdn.example.com" # 공개 URL 접두사 (선택)
//! export WEATHER_API_KEY="openweathermap-key"          # 없으면 온도 조회 비활성화
//! ```

use std::env;

use super::env_or;

/// S3 업로드 설정
#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    /// S3 호환 스토리지 엔드포인트 (path-style 주소 사용)
    pub endpoint: Option<String>,
    /// 업로드된 객체의 공개 URL 접두사
    pub public_base_url: Option<String>,
    /// 게시글 미디어가 저장되는 디렉터리
    pub upload_dir: String,
    /// 프로필 이미지가 저장되는 디렉터리
    pub profile_dir: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

impl S3Config {
    pub fn from_env() -> Self {
        Self {
            bucket: env::var("S3_BUCKET_NAME").unwrap_or_else(|_| "social-post-images".to_string()),
            region: env::var("AWS_REGION").unwrap_or_else(|_| "ap-northeast-2".to_string()),
            endpoint: non_empty_var("S3_ENDPOINT"),
            public_base_url: non_empty_var("S3_PUBLIC_BASE_URL"),
            upload_dir: env::var("S3_UPLOAD_DIR").unwrap_or_else(|_| "posts".to_string()),
            profile_dir: env::var("S3_PROFILE_DIR").unwrap_or_else(|_| "profiles".to_string()),
            access_key_id: non_empty_var("AWS_ACCESS_KEY_ID"),
            secret_access_key: non_empty_var("AWS_SECRET_ACCESS_KEY"),
        }
    }

    /// 객체 URL의 공통 접두사 (끝 슬래시 없음)
    pub fn public_base(&self) -> String {
        if let Some(base) = &self.public_base_url {
            return base.trim_end_matches('/').to_string();
        }
        match &self.endpoint {
            Some(endpoint) => format!("{}/{}", endpoint.trim_end_matches('/'), self.bucket),
            None => format!("https://{}.s3.{}.amazonaws.com", self.bucket, self.region),
        }
    }

    /// 키에 해당하는 공개 URL. 경로 구분자(`/`)는 인코딩하지 않습니다.
    pub fn object_url(&self, key: &str) -> String {
        let encoded = key
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        format!("{}/{}", self.public_base(), encoded)
    }
}

/// 날씨 API 설정
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// API 키. 없으면 온도 자동 조회를 하지 않습니다.
    pub api_key: Option<String>,
    pub api_url: String,
    pub timeout_secs: u64,
}

impl WeatherConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty_var("WEATHER_API_KEY"),
            api_url: env::var("WEATHER_API_URL")
                .unwrap_or_else(|_| "https://api.openweathermap.org/data/2.5/weather".to_string()),
            timeout_secs: env_or("WEATHER_API_TIMEOUT_SECS", 5),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

//! 회원 요청 DTO
//!
//! 회원 가입, 로그인, 프로필 수정 요청 데이터와 검증 규칙을 정의합니다.
//! 검증 실패 시 필드명과 메시지가 그대로 400 응답의 `fields`에 담깁니다.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::members::{Gender, ProfileChanges};
use crate::utils::string_utils::deserialize_optional_string;

pub const PASSWORD_RULE_MESSAGE: &str =
    "8 ~ 20자, 최소 한개의 특수문자와 숫자, 영문 알파벳을 포함해야 함.";

/// 휴대전화 번호 (010, 011, 016~019). 하이픈은 선택입니다.
pub static PHONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^01(?:0|1|[6-9])-?\d{3,4}-?\d{4}$").expect("phone number regex")
});

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 30, message = "이름은 1-30자 사이여야 합니다"))]
    pub name: String,

    #[validate(email(message = "Invalid Email"))]
    pub email: String,

    #[validate(custom(function = "validate_password"))]
    pub password: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,

    #[validate(length(min = 1, max = 30, message = "닉네임은 1-30자 사이여야 합니다"))]
    pub nickname: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(custom(function = "validate_gender"))]
    pub gender: Option<String>,

    #[validate(regex(path = *PHONE_NUMBER_REGEX, message = "Invalid phone number"))]
    pub phone_number: String,
}

impl SignupRequest {
    pub fn gender(&self) -> Option<Gender> {
        self.gender.as_deref().and_then(Gender::parse)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid Email"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 프로필 수정 요청. 보내지 않은 필드는 바뀌지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateMemberRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 30, message = "이름은 1-30자 사이여야 합니다"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 30, message = "닉네임은 1-30자 사이여야 합니다"))]
    pub nickname: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(regex(path = *PHONE_NUMBER_REGEX, message = "Invalid phone number"))]
    pub phone_number: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(custom(function = "validate_gender"))]
    pub gender: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "상태 메시지는 100자 이하여야 합니다"))]
    pub message: Option<String>,
}

impl From<UpdateMemberRequest> for ProfileChanges {
    fn from(request: UpdateMemberRequest) -> Self {
        let gender = request.gender.as_deref().and_then(Gender::parse);

        ProfileChanges {
            name: request.name,
            nickname: request.nickname,
            address: request.address,
            phone_number: request.phone_number,
            gender,
            message: request.message,
        }
    }
}

/// 8-20자, 영문자/숫자/특수문자 각 1개 이상, 공백 불가
fn validate_password(password: &str) -> Result<(), ValidationError> {
    let length = password.chars().count();
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());
    let has_whitespace = password.chars().any(char::is_whitespace);

    if !(8..=20).contains(&length) || !has_letter || !has_digit || !has_special || has_whitespace {
        return Err(ValidationError::new("invalid_password")
            .with_message(PASSWORD_RULE_MESSAGE.into()));
    }
    Ok(())
}

fn validate_gender(gender: &str) -> Result<(), ValidationError> {
    if Gender::parse(gender).is_none() {
        return Err(ValidationError::new("invalid_gender")
            .with_message("성별은 MALE 또는 FEMALE 이어야 합니다".into()));
    }
    Ok(())
}

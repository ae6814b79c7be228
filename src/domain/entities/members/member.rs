//! Member Entity Implementation
//!
//! 회원 엔티티입니다. `members` 컬렉션의 문서와 1:1로 매핑됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 프로필 이미지를 지정하지 않은 회원에게 설정되는 기본 이미지
pub const DEFAULT_PROFILE_IMAGE_URL: &str =
    "https://meatwiki.nii.ac.jp/confluence/images/icons/profilepics/anonymous.png";

/// 회원 권한
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// 성별
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// 대소문자를 구분하지 않고 `MALE` / `FEMALE`을 해석합니다.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "MALE" => Some(Gender::Male),
            "FEMALE" => Some(Gender::Female),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    /// bcrypt 해시
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub image_url: String,
    /// 프로필 이미지 변경으로 이 서비스가 올린 객체의 키. 가입 시 받은 URL에는 없습니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_key: Option<String>,
    pub nickname: String,
    #[serde(default)]
    pub role: Role,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// 프로필 수정 시 변경할 값들. `None`인 필드는 그대로 둡니다.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<Gender>,
    pub message: Option<String>,
}

impl Member {
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        nickname: String,
        phone_number: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password: password_hash,
            address: None,
            image_url: DEFAULT_PROFILE_IMAGE_URL.to_string(),
            image_key: None,
            nickname,
            role: Role::User,
            phone_number,
            gender: None,
            message: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_address(mut self, address: Option<String>) -> Self {
        self.address = address;
        self
    }

    /// 비어 있으면 기본 프로필 이미지를 유지합니다.
    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        if let Some(url) = image_url.filter(|url| !url.trim().is_empty()) {
            self.image_url = url;
        }
        self
    }

    pub fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn update_profile(&mut self, changes: ProfileChanges) {
        let ProfileChanges {
            name,
            nickname,
            address,
            phone_number,
            gender,
            message,
        } = changes;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(nickname) = nickname {
            self.nickname = nickname;
        }
        if address.is_some() {
            self.address = address;
        }
        if let Some(phone_number) = phone_number {
            self.phone_number = phone_number;
        }
        if gender.is_some() {
            self.gender = gender;
        }
        if message.is_some() {
            self.message = message;
        }
        self.updated_at = DateTime::now();
    }

    /// 업로드한 이미지로 바꾸고, 이전에 업로드했던 객체 키를 돌려줍니다.
    pub fn change_image(&mut self, image_url: String, image_key: String) -> Option<String> {
        self.image_url = image_url;
        self.updated_at = DateTime::now();
        self.image_key.replace(image_key)
    }
}

/// multipart 요청으로 받은 파일 한 개
///
/// 본문 전체를 메모리에 담아 두며, 스토리지로 보낼 때 그대로 사용합니다.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// 클라이언트가 보낸 원본 파일명
    pub original_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(original_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            original_name: original_name.into(),
            content_type,
            bytes,
        }
    }

    /// `image/`로 시작하는 content type인지 확인
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().starts_with("image/"))
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// 객체 키에 쓸 수 있도록 경로 구분자를 제거한 파일명
    pub fn safe_name(&self) -> String {
        let name = self
            .original_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .trim();

        if name.is_empty() {
            "file".to_string()
        } else {
            name.to_string()
        }
    }
}

//! HTTP 요청 핸들러 모듈
//!
//! 핸들러는 요청을 DTO로 꺼내 서비스에 넘기고, 결과를 상태 코드와 함께 JSON으로 돌려줍니다.
//! 서비스는 `web::Data`로 주입됩니다.

pub mod members;
pub mod multipart;
pub mod posts;

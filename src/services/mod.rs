//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 저장소와 외부 연동 객체를 생성자로 주입받으며,
//! 애플리케이션 시작 시 [`AppState`](crate::core::AppState)에서 한 번만 만들어집니다.
//!
//! | 모듈 | 역할 |
//! |------|------|
//! | [`auth`] | JWT 액세스 토큰 발급/검증 |
//! | [`members`] | 회원 가입, 로그인, 프로필 관리 |
//! | [`posts`] | 게시글, 해시태그, 좋아요 |
//! | [`storage`] | S3 이미지 업로드/삭제 |
//! | [`weather`] | 위치 기반 기온 조회 |

pub mod auth;
pub mod members;
pub mod posts;
pub mod storage;
pub mod weather;

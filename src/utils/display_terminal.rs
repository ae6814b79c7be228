//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 과정에서 단계별 진행 상황과 요약을 박스 형태로 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  Server Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    // 박스 내부 50칸
    let border = "═".repeat(50);
    format!("╔{}╗\n║{:^50}║\n╚{}╝", border, title, border)
}

/// 진행 단계 시작을 표시합니다
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 기동 완료 요약
pub fn print_startup_summary(bind_address: &str, workers: usize) {
    println!();
    print_boxed_title("📸 SOCIAL POST BACKEND READY");
    println!("   🌐 Listen:       http://{}", bind_address);
    println!("   📍 Health check: http://{}/health", bind_address);
    println!("   🔧 Workers:      {}", workers);
    println!();
}

//! # Ownership Policy Module
//!
//! 소유권/역할 기반 변경 권한을 판정하는 순수 함수를 제공합니다.
//! 저장소나 HTTP 계층에 의존하지 않으므로 서비스 흐름 어디서든
//! 부작용 없이 호출할 수 있습니다.
//!
//! ## 판정 규칙
//!
//! 문서 소유자 본인이거나 관리자 역할이면 변경을 허용합니다.
//! 거부된 경우 호출자는 저장소를 건드리지 않고 `Forbidden`으로
//! 응답해야 하며, 이는 `NotFound`와 항상 구분됩니다.

use crate::domain::models::auth::Principal;

/// 주체가 해당 소유자의 문서를 변경/삭제할 수 있는지 판정
pub fn can_mutate(principal: &Principal, owner_id: &str) -> bool {
    principal.user_id == owner_id || principal.is_admin()
}

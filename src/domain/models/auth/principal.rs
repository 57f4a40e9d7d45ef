use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

/// 인증 주체의 사용자 ID가 담기는 헤더
pub const USER_ID_HEADER: &str = "X-User-Id";

/// 인증 주체의 역할이 담기는 헤더
pub const USER_ROLE_HEADER: &str = "X-User-Role";

/// 요청 주체의 역할
///
/// 알려진 역할 문자열만 허용합니다. 알 수 없는 값은 주체 구성 단계에서
/// 거부되므로, 이후 권한 검사에서 런타임 캐스팅이 필요 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// 역할 문자열 파싱 (대소문자 구분, 알 수 없는 값은 `None`)
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// 외부 인증 계층에서 검증을 마친 요청 주체
///
/// 게이트웨이가 토큰을 검증한 뒤 채워주는 식별 헤더
/// (`X-User-Id`, `X-User-Role`)에서 추출됩니다. 헤더가 없거나
/// 역할이 알려진 값이 아니면 요청은 401로 거부됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 역할 (admin | user)
    pub role: Role,
}

impl Principal {
    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    /// 식별 헤더 값 쌍에서 주체를 구성
    ///
    /// 사용자 ID가 비어 있거나 역할이 알려진 값이 아니면 `None`.
    pub fn from_header_values(user_id: &str, role: &str) -> Option<Principal> {
        if user_id.is_empty() {
            return None;
        }
        let role = Role::parse(role)?;
        Some(Principal {
            user_id: user_id.to_string(),
            role,
        })
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for Principal {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user_id = req
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok());
        let role = req
            .headers()
            .get(USER_ROLE_HEADER)
            .and_then(|value| value.to_str().ok());

        let principal = match (user_id, role) {
            (Some(user_id), Some(role)) => Principal::from_header_values(user_id, role),
            _ => None,
        };

        match principal {
            Some(principal) => ready(Ok(principal)),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다",
            ))),
        }
    }
}

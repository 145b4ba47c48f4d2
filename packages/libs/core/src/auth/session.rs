//! 클라이언트 세션
//!
//! 전역 가변 토큰 상태 대신 저장소를 소유하는 명시적 세션 객체입니다.
//! API 서비스 생성자에 `Arc<Session>` 으로 전달해 공유합니다.

use std::fmt;

use crate::error::{Error, Result};

use super::claims::Claims;
use super::store::TokenStore;
use super::token::decode_claims;

/// 클라이언트 세션
///
/// 모든 인증 API 호출이 거치는 단일 진입점입니다.
///
/// # 검증 규칙
///
/// - 저장된 토큰이 없으면 [`Error::NotAuthenticated`]
/// - 디코딩 실패는 [`Error::InvalidToken`], 만료는 [`Error::TokenExpired`]
/// - 디코딩/만료 실패 시 저장소의 토큰을 영속적으로 삭제합니다.
///   이후 호출은 재로그인 전까지 일관되게 `NotAuthenticated` 로
///   실패합니다.
pub struct Session {
    store: Box<dyn TokenStore>,
}

impl Session {
    /// 저장소를 감싸는 새 세션
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// 검증된 원본 토큰
    ///
    /// 요청 헤더에 넣을 토큰이 필요할 때 사용합니다. 네트워크 호출 전에
    /// 실패가 확정됩니다.
    pub fn token(&self) -> Result<String> {
        self.validated().map(|(token, _)| token)
    }

    /// 검증된 클레임
    ///
    /// 호출부마다 토큰을 다시 디코딩하지 않도록 클레임 추출은 이 함수
    /// 하나로 모읍니다.
    pub fn claims(&self) -> Result<Claims> {
        self.validated().map(|(_, claims)| claims)
    }

    /// 검증된 토큰과 클레임을 한 번의 검증으로 함께 반환
    ///
    /// 헤더와 쿼리 파라미터 양쪽에 토큰 정보가 필요한 호출에서
    /// 이중 검증을 피할 때 사용합니다.
    pub fn credentials(&self) -> Result<(String, Claims)> {
        self.validated()
    }

    /// 토큰 설치
    ///
    /// 로그인 흐름이 외부에서 받은 토큰을 저장합니다.
    pub fn set_token(&self, token: &str) -> Result<()> {
        self.store.save(token)
    }

    /// 세션 무효화 (저장된 토큰 명시적 삭제)
    pub fn invalidate(&self) -> Result<()> {
        self.store.clear()
    }

    /// 저장된 토큰 존재 여부
    ///
    /// 유효성 검증 없이 존재만 확인합니다.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.store.load(), Ok(Some(_)))
    }

    fn validated(&self) -> Result<(String, Claims)> {
        let Some(token) = self.store.load()? else {
            return Err(Error::NotAuthenticated);
        };

        match validate(&token) {
            Ok(claims) => Ok((token, claims)),
            Err(e) => {
                // 잘못된 토큰은 즉시 지워 같은 토큰으로 재시도하지 않게 한다
                if let Err(purge) = self.store.clear() {
                    tracing::warn!("failed to purge invalid token: {}", purge);
                }
                Err(e)
            }
        }
    }
}

/// 토큰 디코딩 + 만료 검사
fn validate(token: &str) -> Result<Claims> {
    let claims = decode_claims(token)?;
    if claims.is_expired() {
        return Err(Error::TokenExpired);
    }
    Ok(claims)
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose, Engine as _};

    use super::*;
    use crate::auth::store::{FileTokenStore, MemoryTokenStore};

    fn make_token(username: &str, exp: i64) -> String {
        let payload = serde_json::json!({ "username": username, "exp": exp });
        let encoded = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("header.{}.signature", encoded)
    }

    #[test]
    fn test_missing_token_is_not_authenticated() {
        let session = Session::new(MemoryTokenStore::new());

        assert!(matches!(session.token(), Err(Error::NotAuthenticated)));
        assert!(matches!(session.claims(), Err(Error::NotAuthenticated)));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_valid_token_yields_claims() {
        let token = make_token("user1", 4_000_000_000);
        let session = Session::new(MemoryTokenStore::with_token(&token));

        assert_eq!(session.token().unwrap(), token);

        let claims = session.claims().unwrap();
        assert_eq!(claims.username, "user1");
        assert_eq!(claims.exp, 4_000_000_000);

        let (tok, claims2) = session.credentials().unwrap();
        assert_eq!(tok, token);
        assert_eq!(claims2, claims);
    }

    #[test]
    fn test_expired_token_fails_then_purges() {
        let session = Session::new(MemoryTokenStore::with_token(make_token("user1", 1)));

        assert!(matches!(session.claims(), Err(Error::TokenExpired)));

        // 삭제 이후에는 "토큰 없음" 으로 실패 종류가 바뀐다
        assert!(matches!(session.claims(), Err(Error::NotAuthenticated)));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_garbage_token_fails_then_purges() {
        let session = Session::new(MemoryTokenStore::with_token("garbage"));

        assert!(matches!(session.token(), Err(Error::InvalidToken { .. })));
        assert!(matches!(session.token(), Err(Error::NotAuthenticated)));
    }

    #[test]
    fn test_set_token_then_invalidate() {
        let session = Session::new(MemoryTokenStore::new());

        session.set_token(&make_token("user1", 4_000_000_000)).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.claims().unwrap().username, "user1");

        session.invalidate().unwrap();
        assert!(!session.is_authenticated());
        assert!(matches!(session.claims(), Err(Error::NotAuthenticated)));
    }

    #[test]
    fn test_expired_token_purges_persisted_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::at(dir.path().join("credentials.json"));
        store.save(&make_token("user1", 1)).unwrap();
        let path = store.path().to_path_buf();

        let session = Session::new(store);
        assert!(matches!(session.claims(), Err(Error::TokenExpired)));

        // 영속 저장소에서도 지워졌는지 별도 인스턴스로 확인
        let reopened = FileTokenStore::at(path);
        assert_eq!(reopened.load().unwrap(), None);
    }
}

//! 인증 관련 타입 및 로직
//!
//! 로그인 후 받은 액세스 토큰을 보관하고, API 호출 직전에 유효성을
//! 검증하는 계층입니다. 서명 검증은 백엔드의 몫이므로 여기서는 페이로드
//! 디코딩과 만료 판정까지만 수행합니다.

mod claims;
mod session;
mod store;
mod token;

pub use claims::Claims;
pub use session::Session;
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use token::decode_claims;

//! 토큰 저장소
//!
//! 세션이 사용하는 자격증명(액세스 토큰) 영속 계층입니다. 브라우저
//! 클라이언트의 localStorage 에 해당하는 자리이며, 고정 키 `access`
//! 하나만 다룹니다.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 토큰 저장소 인터페이스
///
/// 삭제는 영속 상태까지 지워야 합니다. 메모리 사본만 비우고 저장된
/// 값을 남겨두는 구현은 세션 무효화를 깨뜨립니다.
pub trait TokenStore: Send + Sync {
    /// 저장된 토큰 조회
    fn load(&self) -> Result<Option<String>>;

    /// 토큰 저장 (기존 값 덮어쓰기)
    fn save(&self, token: &str) -> Result<()>;

    /// 저장된 토큰 삭제
    fn clear(&self) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// 메모리 저장소
// ─────────────────────────────────────────────────────────────────────────────

/// 메모리 토큰 저장소
///
/// 테스트 및 영속화를 직접 관리하는 호스트용입니다.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// 빈 저장소
    pub fn new() -> Self {
        Self::default()
    }

    /// 토큰이 들어 있는 저장소
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.read().unwrap().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.write().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.write().unwrap() = None;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// 파일 저장소
// ─────────────────────────────────────────────────────────────────────────────

/// 자격증명 파일 내용 (`{ "access": "<token>" }`)
#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access: Option<String>,
}

/// 파일 토큰 저장소
///
/// 기본 경로는 `~/.ys/credentials.json` 입니다.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// 기본 경로의 저장소
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| Error::Storage {
            message: "cannot find home directory".to_string(),
        })?;
        Ok(Self {
            path: home.join(".ys").join("credentials.json"),
        })
    }

    /// 지정 경로의 저장소
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 자격증명 파일 경로
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<CredentialFile> {
        if !self.path.exists() {
            return Ok(CredentialFile::default());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| Error::Storage {
            message: format!("read {}: {}", self.path.display(), e),
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_file(&self, file: &CredentialFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::Storage {
                message: format!("create {}: {}", parent.display(), e),
            })?;
        }
        let content = serde_json::to_string_pretty(file)?;
        std::fs::write(&self.path, content).map_err(|e| Error::Storage {
            message: format!("write {}: {}", self.path.display(), e),
        })
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.read_file()?.access)
    }

    fn save(&self, token: &str) -> Result<()> {
        let mut file = self.read_file()?;
        file.access = Some(token.to_string());
        self.write_file(&file)
    }

    fn clear(&self) -> Result<()> {
        match self.read_file() {
            Ok(mut file) => {
                if file.access.take().is_some() {
                    self.write_file(&file)?;
                }
                Ok(())
            }
            // 깨진 파일은 빈 상태로 다시 쓴다
            Err(_) => self.write_file(&CredentialFile::default()),
        }
    }
}

//! 설정 파일 관리.
//!
//! `config.json` 하나를 읽어 [`AppConfig`]를 만든다. 파일이 없으면 기본 설정을
//! 써 두어 사용자가 편집할 수 있게 한다. 누락된 필드는 serde 기본값으로 채운다.

use crate::config::AppConfig;
use crate::error::CoreError;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 설정 파일 이름
const CONFIG_FILE_NAME: &str = "config.json";

/// 로드된 설정과 그 출처 파일
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: AppConfig,
    config_path: PathBuf,
}

impl ConfigManager {
    /// 플랫폼 기본 위치의 설정 파일 사용
    ///
    /// Linux에서는 `$XDG_CONFIG_HOME/hostpulse/config.json`
    /// (기본 `~/.config/hostpulse/config.json`).
    pub fn new() -> Result<Self, CoreError> {
        Self::with_path(Self::default_path()?)
    }

    /// 지정된 설정 파일 사용
    pub fn with_path(config_path: PathBuf) -> Result<Self, CoreError> {
        let config = if config_path.is_file() {
            read_config(&config_path)?
        } else {
            let config = AppConfig::default_config();
            write_config(&config_path, &config)?;
            info!("기본 설정 파일 생성: {}", config_path.display());
            config
        };

        Ok(Self {
            config,
            config_path,
        })
    }

    /// 설정 복제본
    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// 설정 파일 경로
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// 플랫폼 기본 설정 파일 경로
    pub fn default_path() -> Result<PathBuf, CoreError> {
        ProjectDirs::from("dev", "hostpulse", "hostpulse")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or_else(|| CoreError::Config("홈 디렉토리를 찾을 수 없습니다".to_string()))
    }
}

fn read_config(path: &Path) -> Result<AppConfig, CoreError> {
    let content = fs::read_to_string(path)
        .map_err(|e| CoreError::Config(format!("{} 읽기 실패: {e}", path.display())))?;
    let config = serde_json::from_str(&content)
        .map_err(|e| CoreError::Config(format!("{} 파싱 실패: {e}", path.display())))?;

    debug!("설정 로드: {}", path.display());
    Ok(config)
}

fn write_config(path: &Path, config: &AppConfig) -> Result<(), CoreError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .map_err(|e| CoreError::Config(format!("{} 생성 실패: {e}", dir.display())))?;
    }

    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)
        .map_err(|e| CoreError::Config(format!("{} 쓰기 실패: {e}", path.display())))
}

//! 라이프사이클 관리.
//!
//! 서버 태스크는 `watch` 수신기로 종료를 감지한다. OS 시그널이 오면
//! 채널 값을 `true`로 바꾼다.

use tokio::sync::watch;
use tracing::info;

/// 종료 신호 송신측
pub struct LifecycleManager {
    shutdown_tx: watch::Sender<bool>,
}

impl LifecycleManager {
    pub fn new() -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self { shutdown_tx }
    }

    /// 서버에 넘길 수신기
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.shutdown_tx.subscribe()
    }

    /// 종료 신호 발송. 수신기가 없어도 값은 남는다.
    pub fn shutdown(&self) {
        if !self.shutdown_tx.send_replace(true) {
            info!("종료 신호 발송");
        }
    }

    /// 종료 시그널을 기다린 뒤 [`Self::shutdown`] 호출
    ///
    /// 시그널 핸들러 등록에 실패하면 에러를 반환하고 종료 신호는 보내지 않는다.
    pub async fn wait_for_signal(&self) -> std::io::Result<()> {
        let name = termination_signal().await?;
        info!("{name} 수신");
        self.shutdown();
        Ok(())
    }
}

impl Default for LifecycleManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
async fn termination_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    let name = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(not(unix))]
async fn termination_signal() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("Ctrl+C")
}

use std::process::{Child, Command};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Player {
    process: Arc<Mutex<Option<Child>>>,
    /// When false (or mpv is absent), streams open in the browser instead.
    use_mpv: bool,
}

impl Player {
    pub fn new(use_mpv: bool) -> Self {
        Self {
            process: Arc::new(Mutex::new(None)),
            use_mpv,
        }
    }

    /// Start playback of a stream URL, replacing whatever was playing.
    pub fn play(&self, url: &str) -> Result<(), anyhow::Error> {
        self.stop();

        if !self.use_mpv {
            webbrowser::open(url)?;
            return Ok(());
        }

        let child = Command::new("mpv")
            .arg(url)
            .arg("--force-window")
            .arg("--cache=yes")
            .arg("--demuxer-max-bytes=128MiB")
            .arg("--demuxer-max-back-bytes=32MiB")
            .arg("--msg-level=all=no")
            .arg("--term-status-msg=no")
            .arg("--hwdec=auto")
            .spawn();

        match child {
            Ok(child) => {
                let mut guard = self
                    .process
                    .lock()
                    .map_err(|e| anyhow::anyhow!("failed to lock process mutex: {}", e))?;
                *guard = Some(child);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("mpv unavailable ({e}), opening in browser");
                webbrowser::open(url)?;
                Ok(())
            }
        }
    }

    /// Whether the mpv process is still alive.
    pub fn is_running(&self) -> bool {
        if let Ok(mut guard) = self.process.lock() {
            if let Some(ref mut child) = *guard {
                // try_wait returns Ok(Some(status)) if exited, Ok(None) if still running
                match child.try_wait() {
                    Ok(Some(_)) => false,
                    Ok(None) => true,
                    Err(_) => false,
                }
            } else {
                // Browser playback has no process to watch; report it as up.
                !self.use_mpv
            }
        } else {
            false
        }
    }

    /// Poll until playback looks confirmed. Returns Ok(true) once the process
    /// has stayed alive past its buffer window, Ok(false) if it died.
    pub async fn wait_for_playback(&self, timeout_ms: u64) -> Result<bool, anyhow::Error> {
        use tokio::time::{sleep, Duration, Instant};

        if !self.use_mpv {
            return Ok(true);
        }

        let start = Instant::now();
        let timeout = Duration::from_millis(timeout_ms);

        sleep(Duration::from_millis(500)).await;

        while start.elapsed() < timeout {
            if !self.is_running() {
                return Ok(false);
            }

            if start.elapsed() > Duration::from_millis(2000) {
                return Ok(true);
            }

            sleep(Duration::from_millis(200)).await;
        }

        Ok(self.is_running())
    }

    pub fn stop(&self) {
        if let Ok(mut guard) = self.process.lock() {
            if let Some(mut child) = guard.take() {
                let _ = child.kill();
                let _ = child.wait();
            }
        }
    }
}

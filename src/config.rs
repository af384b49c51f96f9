use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_TARGET_DIR: &str = "assets/images/flavors";

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Compiled-in settings for a download run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Output directory. Relative paths resolve against the working directory.
    pub target_dir: PathBuf,
    pub request_timeout: Duration,
    /// Pause after every download attempt.
    pub request_delay: Duration,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            request_timeout: Duration::from_secs(10),
            request_delay: Duration::from_secs(1),
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

impl Settings {
    pub fn with_target_dir(mut self, target_dir: impl AsRef<Path>) -> Self {
        self.target_dir = target_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}

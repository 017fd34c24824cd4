use chrono::Utc;

pub(crate) trait Clock: Send + Sync {
    fn now_unix_seconds(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_seconds(&self) -> i64 {
        Utc::now().timestamp()
    }
}

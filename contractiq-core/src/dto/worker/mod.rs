//! Worker status DTO

use serde::{Deserialize, Serialize};

/// Body of `GET /worker/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerStatus {
    /// `running` or `error`
    pub status: String,
    pub redis_connected: bool,
    #[serde(default)]
    pub jobs_in_queue: Option<u64>,
    #[serde(default)]
    pub worker_thread_alive: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl WorkerStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "running" && self.redis_connected && self.worker_thread_alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_body() {
        let status: WorkerStatus = serde_json::from_value(json!({
            "status": "error",
            "redis_connected": false,
            "error": "connection refused",
            "worker_thread_alive": false
        }))
        .unwrap();

        assert!(!status.is_healthy());
        assert_eq!(status.jobs_in_queue, None);
        assert_eq!(status.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_running_body() {
        let status: WorkerStatus = serde_json::from_value(json!({
            "status": "running",
            "redis_connected": true,
            "jobs_in_queue": 3,
            "worker_thread_alive": true
        }))
        .unwrap();

        assert!(status.is_healthy());
        assert_eq!(status.jobs_in_queue, Some(3));
    }
}

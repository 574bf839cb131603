//! Snapshots served by the dashboard's status endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod server;

/// A logged in user, as listed by the active sessions panel
/// - ```since```: rfc3339 login time
/// - ```device```: client description, if the user agent gave one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session
{
    pub user: String,
    pub address: String,
    pub device: Option<String>,
    pub since: String
}

impl Session
{
    /// How long the session has been open at now, None if since is not rfc3339
    pub fn duration(&self, now: DateTime<Utc>) -> Option<chrono::Duration>
    {
        match DateTime::parse_from_rfc3339(&self.since)
        {
            Ok(since) => Some(now - since.to_utc()),
            Err(e) =>
            {
                crate::debug(format!("Session for {} has invalid start {}, {}", self.user, self.since, e), None);
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus
{
    pub name: String,
    pub running: bool
}

/// Server metrics, as shown by the system health panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemHealth
{
    pub cpu_percent: f64,
    pub memory_used_bytes: u64,
    pub memory_total_bytes: u64,
    pub disk_used_bytes: u64,
    pub disk_total_bytes: u64,
    pub uptime_seconds: u64,
    pub services: Vec<ServiceStatus>
}

fn percent(used: u64, total: u64) -> f64
{
    if total == 0 { return 0.0 }
    100.0 * used as f64 / total as f64
}

impl SystemHealth
{
    pub fn memory_percent(&self) -> f64
    {
        percent(self.memory_used_bytes, self.memory_total_bytes)
    }

    pub fn disk_percent(&self) -> f64
    {
        percent(self.disk_used_bytes, self.disk_total_bytes)
    }

    /// All services are running
    pub fn healthy(&self) -> bool
    {
        self.services.iter().all(|s| s.running)
    }
}

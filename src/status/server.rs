use std::{net::{IpAddr, Ipv4Addr, SocketAddr}, sync::Arc, time::Instant};

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use tokio::{net::TcpListener, task::JoinHandle};

use super::{ServiceStatus, Session, SystemHealth};

const GIB: u64 = 1024*1024*1024;

/// Generates plausible status data relative to when the server started
pub struct MockStatus
{
    started: Instant,
    started_utc: DateTime<Utc>
}

impl MockStatus
{
    pub fn new() -> MockStatus
    {
        MockStatus { started: Instant::now(), started_utc: chrono::offset::Utc::now() }
    }

    pub fn sessions(&self) -> Vec<Session>
    {
        let login = |user: &str, address: &str, device: Option<&str>, minutes_before: i64| Session
        {
            user: user.to_string(),
            address: address.to_string(),
            device: device.map(|d| d.to_string()),
            since: (self.started_utc - chrono::Duration::minutes(minutes_before)).to_rfc3339()
        };

        vec!
        [
            login("admin", "10.0.0.2", Some("Firefox on Linux"), 95),
            login("support", "10.0.0.17", Some("Chrome on Windows"), 20),
            login("backup-agent", "10.0.1.4", None, 3)
        ]
    }

    pub fn health(&self) -> SystemHealth
    {
        let uptime = self.started.elapsed().as_secs();
        // a slow sawtooth so consecutive polls differ
        let phase = (uptime % 60) as f64 / 60.0;

        SystemHealth
        {
            cpu_percent: 12.0 + 60.0 * phase,
            memory_used_bytes: 3 * GIB + (phase * GIB as f64) as u64,
            memory_total_bytes: 8 * GIB,
            disk_used_bytes: 120 * GIB,
            disk_total_bytes: 500 * GIB,
            uptime_seconds: uptime,
            services: vec!
            [
                ServiceStatus { name: "api".to_string(), running: true },
                ServiceStatus { name: "backup".to_string(), running: true },
                ServiceStatus { name: "tickets".to_string(), running: true }
            ]
        }
    }
}

async fn sessions(State(state): State<Arc<MockStatus>>) -> Json<Vec<Session>>
{
    crate::debug(format!("Serving sessions"), Some("STATUS"));
    Json(state.sessions())
}

async fn health(State(state): State<Arc<MockStatus>>) -> Json<SystemHealth>
{
    crate::debug(format!("Serving health"), Some("STATUS"));
    Json(state.health())
}

async fn unavailable() -> (StatusCode, &'static str)
{
    (StatusCode::SERVICE_UNAVAILABLE, "status temporarily unavailable")
}

/// Mock status endpoints for developing the dashboard against
///  - ```GET /api/sessions```: [Session]s
///  - ```GET /api/health```: [SystemHealth]
///  - ```GET /api/unavailable```: always 503
pub struct StatusServer
{
    addr: SocketAddr,
    router: Router
}

impl StatusServer
{
    pub fn new
    (
        a: u8,
        b: u8,
        c: u8,
        d: u8,
        port: u16
    )
    -> StatusServer
    {
        let state = Arc::new(MockStatus::new());

        let router = Router::new()
            .route("/api/sessions", get(sessions))
            .route("/api/health", get(health))
            .route("/api/unavailable", get(unavailable))
            .with_state(state);

        StatusServer
        {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(a,b,c,d)), port),
            router
        }
    }

    pub fn get_addr(&self) -> SocketAddr
    {
        self.addr
    }

    pub async fn serve(self) -> Result<(), std::io::Error>
    {
        let listener = TcpListener::bind(self.addr).await?;
        crate::debug(format!("Serving status on {}", listener.local_addr()?), Some("STATUS"));
        axum::serve(listener, self.router).await
    }

    /// Bind and serve in the background, returning the bound address
    ///   (useful with port 0)
    pub async fn spawn(self) -> Result<(SocketAddr, JoinHandle<()>), std::io::Error>
    {
        let listener = TcpListener::bind(self.addr).await?;
        let addr = listener.local_addr()?;
        let router = self.router;

        let handle = tokio::spawn
        (
            async move
            {
                match axum::serve(listener, router).await
                {
                    Ok(()) => (),
                    Err(e) => crate::debug(format!("Status server on {} stopped, {}", addr, e), Some("STATUS"))
                }
            }
        );

        Ok((addr, handle))
    }
}

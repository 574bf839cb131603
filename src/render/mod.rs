//! Text rendering of [PollState]s for dashboard panels

use chrono::{DateTime, Local, Utc};

use crate::{poll::PollState, status::{Session, SystemHealth}};

pub mod terminal;

pub const LOADING: &str = "Loading...";
pub const NO_DATA: &str = "No data yet";

/// A snapshot that can be drawn as a panel body
pub trait Panel
{
    fn render(&self) -> String;
}

/// Draw a panel for state
/// - the title is marked while a refresh is in flight
/// - an error is shown as a banner above the last good data, which is kept
/// - [LOADING] before the first snapshot arrives, [NO_DATA] if there is none
pub fn render_state<T: Panel>(title: &str, state: &PollState<T>) -> String
{
    let mut lines: Vec<String> = vec![];

    match (state.loading, state.data.is_some())
    {
        (true, true) => lines.push(format!("{} (refreshing)", title)),
        _ => lines.push(title.to_string())
    }

    if let Some(why) = &state.error
    {
        lines.push(format!("! {}", why));
    }

    match &state.data
    {
        Some(data) =>
        {
            lines.push(data.render());
            if let Some(t) = state.updated_at
            {
                lines.push(format!("updated {}", format_time(t)));
            }
        },
        None if state.loading => lines.push(LOADING.to_string()),
        None => lines.push(NO_DATA.to_string())
    }

    lines.join("\n")
}

pub fn format_time(t: DateTime<Utc>) -> String
{
    let local: DateTime<Local> = DateTime::from(t);
    local.format("%H:%M:%S").to_string()
}

/// e.g. 3723 seconds is "1h 02m 03s"
pub fn format_uptime(seconds: u64) -> String
{
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if days > 0
    {
        format!("{}d {}h {:0>2}m {:0>2}s", days, hours, minutes, secs)
    }
    else
    {
        format!("{}h {:0>2}m {:0>2}s", hours, minutes, secs)
    }
}

impl Panel for Vec<Session>
{
    fn render(&self) -> String
    {
        if self.is_empty()
        {
            return "No active sessions".to_string()
        }

        let now = chrono::offset::Utc::now();

        self.iter().map
        (
            |s|
            {
                let device = s.device.clone().unwrap_or("unknown device".to_string());
                match s.duration(now)
                {
                    Some(d) => format!("{} @ {}, {}, {}m", s.user, s.address, device, d.num_minutes()),
                    None => format!("{} @ {}, {}", s.user, s.address, device)
                }
            }
        )
        .collect::<Vec<String>>()
        .join("\n")
    }
}

impl Panel for SystemHealth
{
    fn render(&self) -> String
    {
        let services = self.services.iter().map
        (
            |s| format!("{} {}", s.name, if s.running { "ok" } else { "DOWN" })
        )
        .collect::<Vec<String>>()
        .join(", ");

        format!
        (
            "CPU {:.1}% | Memory {:.1}% | Disk {:.1}% | Up {}\nServices: {}",
            self.cpu_percent,
            self.memory_percent(),
            self.disk_percent(),
            format_uptime(self.uptime_seconds),
            services
        )
    }
}

use std::{path::Path, time::Duration};

use serde::{Serialize, Deserialize};

use crate::{filesystem::file::read_file_utf8, poll::DEFAULT_INTERVAL};

pub const CONFIG_PATH: &str = "config.json";

/// Which snapshot a panel's endpoint serves
///  - ```sessions```: a list of [crate::status::Session]
///  - ```health```: a [crate::status::SystemHealth]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind
{
    Sessions,
    Health
}

/// Configure a dashboard panel
/// - ```name```: shown as the panel's title
/// - ```endpoint```: url of the json status endpoint to poll
/// - ```kind```: [PanelKind]
/// - ```interval_millis```: polling interval, [Config::default_interval_millis] if None
/// - ```timeout_millis```: per request timeout, [Config::request_timeout_millis] if None
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig
{
    pub name: String,
    pub endpoint: String,
    pub kind: PanelKind,
    pub interval_millis: Option<u64>,
    pub timeout_millis: Option<u64>
}

impl PanelConfig
{
    pub fn new(name: &str, endpoint: &str, kind: PanelKind) -> PanelConfig
    {
        PanelConfig
        {
            name: name.to_string(),
            endpoint: endpoint.to_string(),
            kind,
            interval_millis: None,
            timeout_millis: None
        }
    }
}

/// Configure the dashboard
/// - ```panels```: the [PanelConfig]s to poll
/// - ```default_interval_millis```: polling interval for panels without their own
/// - ```request_timeout_millis```: request timeout for panels without their own
/// - ```status_port```: port the mock status server listens on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config
{
    pub panels: Vec<PanelConfig>,
    pub default_interval_millis: u64,
    pub request_timeout_millis: u64,
    pub status_port: u16
}

impl Config
{
    pub fn default() -> Config
    {
        Config
        {
            panels: vec!
            [
                PanelConfig::new("Active sessions", "http://127.0.0.1:8080/api/sessions", PanelKind::Sessions),
                PanelConfig::new("System health", "http://127.0.0.1:8080/api/health", PanelKind::Health)
            ],
            default_interval_millis: DEFAULT_INTERVAL.as_millis() as u64,
            request_timeout_millis: 10000,
            status_port: 8080
        }
    }

    pub fn load_or_default(path: &str) -> Config
    {
        match read_config(path)
        {
            Some(c) => c,
            None =>
            {
                Config::default()
            }
        }
    }

    /// The interval the panel is polled at, a zero interval is left for
    ///   [crate::poll::Poller::start] to reject
    pub fn interval(&self, panel: &PanelConfig) -> Duration
    {
        Duration::from_millis(panel.interval_millis.unwrap_or(self.default_interval_millis))
    }

    pub fn timeout(&self, panel: &PanelConfig) -> Duration
    {
        Duration::from_millis(panel.timeout_millis.unwrap_or(self.request_timeout_millis))
    }
}

pub fn read_config(path: &str) -> Option<Config>
{
    if Path::new(&path).exists()
    {
        let data = match read_file_utf8(&path)
        {
            Some(d) => d,
            None =>
            {
                crate::debug(format!("Error reading configuration file {} no data", path), None);
                return None
            }
        };

        let config: Config = match serde_json::from_str(&data)
        {
            Ok(data) => {data},
            Err(why) =>
            {
                crate::debug(format!("Error reading configuration file {}\n{}", path, why), None);
                return None
            }
        };

        Some(config)
    }
    else
    {
        crate::debug(format!("Error configuration file {} does not exist", path), None);
        None
    }
}

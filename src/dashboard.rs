//! Wires configured panels to pollers

use core::fmt;

use indicatif::MultiProgress;
use serde::de::DeserializeOwned;

use crate::{config::{Config, PanelConfig, PanelKind}, fetch::http::HttpFetcher, poll::{pool::{Dispose, PollerPool}, Poller}, render::{terminal::TerminalPanel, Panel}, status::{Session, SystemHealth}};

#[derive(Debug, Clone)]
pub struct PanelError
{
    pub why: String
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.why)
    }
}

/// Poll panel's endpoint as a T, drawing each update to view
pub fn start_panel<T>(panel: &PanelConfig, config: &Config, view: TerminalPanel) -> Result<Box<dyn Dispose + Send>, PanelError>
where T: Panel + DeserializeOwned + Send + 'static
{
    let fetcher = match HttpFetcher::<T>::from_panel(panel, config)
    {
        Ok(f) => f,
        Err(e) => return Err(PanelError { why: format!("{}, creating fetcher for {}", e, panel.name) })
    };

    match Poller::start_named(&panel.name, fetcher, config.interval(panel), move |state| view.update(state))
    {
        Ok(poller) => Ok(Box::new(poller)),
        Err(e) => Err(PanelError { why: format!("{}, starting {}", e, panel.name) })
    }
}

/// Start a poller for every panel in config, panels that fail to start are skipped
pub fn start_dashboard(config: &Config, multi: &MultiProgress) -> (PollerPool, Vec<TerminalPanel>)
{
    let mut pool = PollerPool::new();
    let mut views = vec![];

    for panel in &config.panels
    {
        let view = TerminalPanel::new(&panel.name, multi);

        let started = match panel.kind
        {
            PanelKind::Sessions => start_panel::<Vec<Session>>(panel, config, view.clone()),
            PanelKind::Health => start_panel::<SystemHealth>(panel, config, view.clone())
        };

        match started
        {
            Ok(poller) =>
            {
                pool.add(poller);
                views.push(view);
            },
            Err(e) =>
            {
                crate::debug(format!("Skipping panel: {}", e), None);
                view.finish();
            }
        }
    }

    (pool, views)
}

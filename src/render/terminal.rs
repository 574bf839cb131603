use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar};

use crate::poll::PollState;

use super::{render_state, Panel};

/// A panel drawn as a spinner line, updated from a poller's on_update
#[derive(Clone)]
pub struct TerminalPanel
{
    title: String,
    bar: ProgressBar
}

impl TerminalPanel
{
    pub fn new(title: &str, multi: &MultiProgress) -> TerminalPanel
    {
        let bar = multi.add(ProgressBar::new_spinner());
        bar.enable_steady_tick(Duration::from_millis(100));
        TerminalPanel { title: title.to_string(), bar }
    }

    /// A panel that draws nothing, its message is still kept
    pub fn hidden(title: &str) -> TerminalPanel
    {
        TerminalPanel { title: title.to_string(), bar: ProgressBar::hidden() }
    }

    pub fn update<T: Panel>(&self, state: &PollState<T>)
    {
        self.bar.set_message(render_state(&self.title, state));
    }

    pub fn message(&self) -> String
    {
        self.bar.message()
    }

    pub fn finish(&self)
    {
        self.bar.finish();
    }
}

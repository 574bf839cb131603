use std::collections::HashMap;

use uuid::Uuid;

use super::Poller;

/// A poller of any snapshot type, as held by a [PollerPool]
pub trait Dispose
{
    fn dispose(&self);
    fn is_live(&self) -> bool;
    fn info(&self) -> String;
}

impl<T> Dispose for Poller<T>
{
    fn dispose(&self)
    {
        Poller::dispose(self)
    }

    fn is_live(&self) -> bool
    {
        Poller::is_live(self)
    }

    fn info(&self) -> String
    {
        format!("{} every {}ms", self.name(), self.interval().as_millis())
    }
}

/// The pollers behind a dashboard, one per panel
/// - [Poller]s are added to the pool using [PollerPool::add]
/// - [PollerPool::dispose_all] stops all of them, e.g. on shutdown
pub struct PollerPool
{
    pollers: HashMap<Uuid, Box<dyn Dispose + Send>>
}

impl PollerPool
{
    pub fn new() -> PollerPool
    {
        PollerPool { pollers: HashMap::new() }
    }

    pub fn npollers(&self) -> usize { self.pollers.len() }

    /// How many pollers have not been disposed
    pub fn live(&self) -> usize
    {
        self.pollers.values().filter(|p| p.is_live()).count()
    }

    pub fn add(&mut self, poller: Box<dyn Dispose + Send>) -> Uuid
    {
        let id = Uuid::new_v4();
        crate::debug(format!("Adding poller {}, {}", id, poller.info()), Some("POLL"));
        self.pollers.insert(id, poller);
        id
    }

    /// Dispose and forget the poller id, false if there is none
    pub fn remove(&mut self, id: &Uuid) -> bool
    {
        match self.pollers.remove(id)
        {
            Some(poller) =>
            {
                poller.dispose();
                true
            },
            None => false
        }
    }

    pub fn info(&self) -> Vec<String>
    {
        self.pollers.iter().map(|(id, p)| format!("Poller {}, {}", id, p.info())).collect()
    }

    /// Dispose every poller, they stay in the pool
    pub fn dispose_all(&self)
    {
        for (id, poller) in &self.pollers
        {
            crate::debug(format!("Disposing poller {}, {}", id, poller.info()), Some("POLL"));
            poller.dispose();
        }
    }
}

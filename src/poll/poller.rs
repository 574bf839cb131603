use std::{panic::{catch_unwind, AssertUnwindSafe}, sync::{atomic::{AtomicBool, Ordering}, Arc, Mutex, MutexGuard}, time::Duration};

use tokio::{sync::watch, task::{JoinError, JoinHandle}, time::MissedTickBehavior};

use super::{Fetch, FetchError, Outcome, PollState, StartError};

type OnUpdate<T> = Box<dyn FnMut(&PollState<T>) + Send>;

struct Cycles<T>
{
    state: PollState<T>,
    on_update: OnUpdate<T>,
    // sequence number of the newest cycle whose result was applied
    applied: u64,
    in_flight: usize
}

impl<T> Cycles<T>
{
    /// Hand the state to on_update, a panicking consumer is logged and the
    ///   schedule carries on
    fn emit(&mut self, name: &str)
    {
        let on_update = &mut self.on_update;
        let state = &self.state;
        match catch_unwind(AssertUnwindSafe(|| on_update(state)))
        {
            Ok(()) => (),
            Err(payload) =>
            {
                crate::debug(format!("{} on_update panicked: {}", name, FetchError::from_panic(payload).message()), Some("POLL"));
            }
        }
    }
}

/// Everything a cycle touches. The liveness token is only read with the
///   [Cycles] lock held, so an emission is never concurrent with disposal
struct Shared<T>
{
    live: AtomicBool,
    cycles: Mutex<Cycles<T>>,
    name: String
}

impl<T> Shared<T>
{
    fn lock(&self) -> MutexGuard<'_, Cycles<T>>
    {
        // a panicking consumer must not wedge disposal
        self.cycles.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn is_live(&self) -> bool
    {
        self.live.load(Ordering::SeqCst)
    }

    /// Mark a cycle as started, false if the poller is disposed
    fn begin(&self) -> bool
    {
        let mut cycles = self.lock();

        if !self.is_live() { return false }

        cycles.in_flight += 1;
        cycles.state.loading = true;
        cycles.state.error = None;
        cycles.emit(&self.name);
        true
    }

    /// Apply the outcome of cycle seq
    fn finish(&self, seq: u64, outcome: Outcome<T>)
    {
        let mut cycles = self.lock();

        if !self.is_live()
        {
            crate::debug(format!("{} discarding cycle {} resolved after dispose", self.name, seq), Some("POLL"));
            return
        }

        cycles.in_flight = cycles.in_flight.saturating_sub(1);

        if seq < cycles.applied
        {
            crate::debug(format!("{} dropping cycle {}, cycle {} is newer", self.name, seq, cycles.applied), Some("POLL"));
            if cycles.in_flight == 0 && cycles.state.loading
            {
                cycles.state.loading = false;
                cycles.emit(&self.name);
            }
            return
        }

        cycles.applied = seq;

        match outcome
        {
            Outcome::Ok(data) =>
            {
                cycles.state.data = Some(data);
                cycles.state.error = None;
                cycles.state.updated_at = Some(chrono::offset::Utc::now());
            },
            Outcome::Error(why) =>
            {
                crate::debug(format!("{} cycle {} failed: {}", self.name, seq, why), Some("POLL"));
                cycles.state.error = Some(why);
            }
        }

        cycles.state.loading = cycles.in_flight > 0;
        cycles.emit(&self.name);
    }
}

/// Normalise a fetch run in its own task, a panic is a failure like any other
fn outcome_of<T>(joined: Result<Result<T, FetchError>, JoinError>) -> Outcome<T>
{
    match joined
    {
        Ok(result) => result.into(),
        Err(e) if e.is_panic() => Outcome::Error(FetchError::from_panic(e.into_panic()).message()),
        Err(_) => Outcome::Error(FetchError::opaque().message())
    }
}

async fn run_cycle<F>(shared: Arc<Shared<F::Snapshot>>, fetcher: Arc<F>, seq: u64)
where F: Fetch + 'static
{
    let fetching = tokio::spawn(async move { fetcher.fetch().await });
    shared.finish(seq, outcome_of(fetching.await));
}

/// Polls a [Fetch] at a fixed rate until disposed
/// - The first cycle starts immediately, the next one interval after it *started*,
///     a slow fetch may therefore still be in flight when the next begins
/// - Every transition (begin, success, failure) is passed to on_update
/// - After [Poller::dispose] returns on_update is never called again, results
///     of fetches still in flight are discarded
/// - Dropping the [Poller] disposes it
///
/// on_update runs with the poller's state locked and must not dispose it
pub struct Poller<T>
{
    shared: Arc<Shared<T>>,
    scheduler: JoinHandle<()>,
    interval: Duration
}

impl<T> Poller<T>
where T: Send + 'static
{
    /// Begin polling fetcher every interval, [StartError::NoRuntime] outside a tokio runtime
    pub fn start<F, U>(fetcher: F, interval: Duration, on_update: U) -> Result<Poller<T>, StartError>
    where
        F: Fetch<Snapshot = T> + 'static,
        U: FnMut(&PollState<T>) + Send + 'static
    {
        Poller::start_named("poller", fetcher, interval, on_update)
    }

    /// As [Poller::start], name is used in logs and [Poller::name]
    pub fn start_named<F, U>(name: &str, fetcher: F, interval: Duration, on_update: U) -> Result<Poller<T>, StartError>
    where
        F: Fetch<Snapshot = T> + 'static,
        U: FnMut(&PollState<T>) + Send + 'static
    {
        if interval.is_zero()
        {
            return Err(StartError::ZeroInterval)
        }

        if tokio::runtime::Handle::try_current().is_err()
        {
            return Err(StartError::NoRuntime)
        }

        let shared = Arc::new
        (
            Shared
            {
                live: AtomicBool::new(true),
                cycles: Mutex::new
                (
                    Cycles
                    {
                        state: PollState::new(),
                        on_update: Box::new(on_update),
                        applied: 0,
                        in_flight: 0
                    }
                ),
                name: name.to_string()
            }
        );

        let fetcher = Arc::new(fetcher);
        let scheduled = shared.clone();

        let scheduler = tokio::spawn
        (
            async move
            {
                let mut ticker = tokio::time::interval(interval);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
                let mut seq: u64 = 0;
                loop
                {
                    ticker.tick().await;
                    seq += 1;
                    if !scheduled.begin() { break }
                    tokio::spawn(run_cycle(scheduled.clone(), fetcher.clone(), seq));
                }
            }
        );

        crate::debug(format!("Started {} every {}ms", name, interval.as_millis()), Some("POLL"));

        Ok(Poller { shared, scheduler, interval })
    }
}

impl<T> Poller<T>
{
    /// Stop the timer and flip the liveness token, idempotent
    pub fn dispose(&self)
    {
        if self.shared.live.swap(false, Ordering::SeqCst)
        {
            self.scheduler.abort();
            crate::debug(format!("Disposed {}", self.shared.name), Some("POLL"));
        }
        // wait out an emission that passed its liveness check before the swap
        drop(self.shared.lock());
    }

    pub fn is_live(&self) -> bool
    {
        self.shared.is_live()
    }

    pub fn name(&self) -> String
    {
        self.shared.name.clone()
    }

    pub fn interval(&self) -> Duration
    {
        self.interval
    }
}

impl<T> Poller<T>
where T: Clone
{
    /// A copy of the current [PollState]
    pub fn state(&self) -> PollState<T>
    {
        self.shared.lock().state.clone()
    }
}

impl<T> Drop for Poller<T>
{
    fn drop(&mut self)
    {
        self.dispose();
    }
}

/// Start a [Poller] publishing its [PollState] to a watch channel instead of a callback
pub fn start_watch<F>(fetcher: F, interval: Duration) -> Result<(Poller<F::Snapshot>, watch::Receiver<PollState<F::Snapshot>>), StartError>
where
    F: Fetch + 'static,
    F::Snapshot: Clone + Sync
{
    let (sender, receiver) = watch::channel(PollState::new());

    let poller = Poller::start
    (
        fetcher,
        interval,
        move |state: &PollState<F::Snapshot>| { sender.send_replace(state.clone()); }
    )?;

    Ok((poller, receiver))
}

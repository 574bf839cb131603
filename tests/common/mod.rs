#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use lookout::poll::PollState;

pub const BAD_UTF8: [u8; 2] = [0xC0, 0xC1];

pub type Updates<T> = Arc<Mutex<Vec<PollState<T>>>>;

/// An on_update that keeps every state it is given
pub fn recorder<T: Clone + Send + 'static>() -> (Updates<T>, impl FnMut(&PollState<T>) + Send + 'static)
{
    let updates: Updates<T> = Arc::new(Mutex::new(vec![]));
    let sink = updates.clone();
    (updates, move |state: &PollState<T>| sink.lock().unwrap().push(state.clone()))
}

pub fn snapshot<T: Clone>(updates: &Updates<T>) -> Vec<PollState<T>>
{
    updates.lock().unwrap().clone()
}

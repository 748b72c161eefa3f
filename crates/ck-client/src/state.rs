use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU32, Ordering};

use log::debug;

/// Connection lifecycle as reflected to UI code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Failed,
}

/// Thread-safe connection status container
pub struct ConnectionStatus {
    state: RwLock<ConnectionState>,
}

impl ConnectionStatus {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ConnectionState::Disconnected),
        }
    }

    pub fn get(&self) -> ConnectionState {
        *self.state.read().unwrap()
    }

    pub fn set(&self, next: ConnectionState) {
        let mut state = self.state.write().unwrap();
        if *state != next {
            debug!("Connection state {:?} -> {:?}", *state, next);
            *state = next;
        }
    }

    pub fn is_connected(&self) -> bool {
        self.get() == ConnectionState::Connected
    }
}

impl Default for ConnectionStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// In-flight operation counter backing a loading indicator.
///
/// Each `start()` returns a guard; the indicator shows while any guard is
/// alive.
#[derive(Default)]
pub struct LoadingTracker {
    in_flight: Arc<AtomicU32>,
}

impl LoadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> LoadingGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        LoadingGuard {
            in_flight: self.in_flight.clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight.load(Ordering::SeqCst)
    }
}

/// Releases its slot in the in-flight count when dropped
pub struct LoadingGuard {
    in_flight: Arc<AtomicU32>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

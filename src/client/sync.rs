//! Sync layer: bridges declared intents and the HTTP api.
//!
//! Intents enter through a command queue; each one runs as its own task
//! (so intents of any kind interleave freely, and a rapid double-submit
//! really does issue two concurrent creates). Outcomes travel over a
//! result channel to the single task that owns state application.
//!
//! Successful mutations enqueue a stats refresh, so stats shown to the
//! user are never older than the last completed mutation.

use anyhow::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

use super::api::SongsApi;
use super::state::{SongsState, Transition};
use crate::song_store::{SongInput, SongUpdate};

/// A declared client action, turned into a request by the sync worker.
#[derive(Debug, Clone)]
pub enum Intent {
    FetchSongs,
    FetchStats,
    CreateSong(SongInput),
    UpdateSong { id: String, update: SongUpdate },
    DeleteSong(String),
}

/// Post-condition of a completed intent: mutations are followed by a
/// stats refresh, fetches by nothing. Kept as a standalone function so
/// the derived-refresh rule is testable on its own.
pub fn follow_up(intent: &Intent) -> Option<Intent> {
    match intent {
        Intent::CreateSong(_) | Intent::UpdateSong { .. } | Intent::DeleteSong(_) => {
            Some(Intent::FetchStats)
        }
        Intent::FetchSongs | Intent::FetchStats => None,
    }
}

/// Handle to a running sync worker.
#[derive(Clone)]
pub struct SyncHandle {
    intents: mpsc::UnboundedSender<Intent>,
    state: Arc<Mutex<SongsState>>,
    pending: Arc<AtomicUsize>,
}

impl SyncHandle {
    /// Enqueue an intent. Never blocks; if the worker is gone the intent
    /// is dropped.
    pub fn dispatch(&self, intent: Intent) {
        self.pending.fetch_add(1, Ordering::SeqCst);
        if self.intents.send(intent).is_err() {
            self.pending.fetch_sub(1, Ordering::SeqCst);
        }
    }

    /// Snapshot of the current client state.
    pub fn state(&self) -> SongsState {
        self.state.lock().unwrap().clone()
    }

    /// True when no intent (including chained refreshes) is in flight or
    /// waiting to be applied.
    pub fn is_idle(&self) -> bool {
        self.pending.load(Ordering::SeqCst) == 0
    }

    /// Wait until all dispatched intents, including chained refreshes,
    /// have been applied to the state.
    pub async fn wait_idle(&self) {
        while !self.is_idle() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}

/// Spawn the sync worker and state task, returning a handle for
/// dispatching intents and reading state.
pub fn spawn_sync(api: SongsApi) -> SyncHandle {
    let (intent_tx, mut intent_rx) = mpsc::unbounded_channel::<Intent>();
    let (transition_tx, mut transition_rx) = mpsc::unbounded_channel::<Transition>();

    let state = Arc::new(Mutex::new(SongsState::default()));
    let pending = Arc::new(AtomicUsize::new(0));

    // State task: sole consumer of the result channel. Terminal
    // transitions (everything but RequestStart) settle one intent.
    let task_state = state.clone();
    let task_pending = pending.clone();
    tokio::spawn(async move {
        while let Some(transition) = transition_rx.recv().await {
            let terminal = !matches!(transition, Transition::RequestStart);
            task_state.lock().unwrap().apply(transition);
            if terminal {
                task_pending.fetch_sub(1, Ordering::SeqCst);
            }
        }
    });

    // Worker: drains the command queue, spawning a task per intent. It
    // only holds a weak sender so dropping the handle shuts everything
    // down once in-flight intents finish.
    let weak_intents = intent_tx.downgrade();
    let worker_pending = pending.clone();
    tokio::spawn(async move {
        while let Some(intent) = intent_rx.recv().await {
            debug!("Handling intent {:?}", intent);
            let _ = transition_tx.send(Transition::RequestStart);

            let api = api.clone();
            let transitions = transition_tx.clone();
            let intents = weak_intents.clone();
            let pending = worker_pending.clone();
            tokio::spawn(async move {
                match run_intent(&api, &intent).await {
                    Ok(transition) => {
                        // Enqueue the chained refresh before settling the
                        // current intent, so idleness is never observed
                        // mid-chain.
                        if let Some(next) = follow_up(&intent) {
                            if let Some(intents) = intents.upgrade() {
                                pending.fetch_add(1, Ordering::SeqCst);
                                let _ = intents.send(next);
                            }
                        }
                        let _ = transitions.send(transition);
                    }
                    Err(err) => {
                        let _ = transitions.send(Transition::RequestFailed(err.to_string()));
                    }
                }
            });
        }
    });

    SyncHandle {
        intents: intent_tx,
        state,
        pending,
    }
}

async fn run_intent(api: &SongsApi, intent: &Intent) -> Result<Transition> {
    match intent {
        Intent::FetchSongs => Ok(Transition::SongsLoaded(api.get_all().await?)),
        Intent::FetchStats => Ok(Transition::StatsLoaded(api.stats().await?)),
        Intent::CreateSong(input) => Ok(Transition::SongAdded(api.create(input).await?)),
        Intent::UpdateSong { id, update } => {
            Ok(Transition::SongUpdated(api.update(id, update).await?))
        }
        Intent::DeleteSong(id) => {
            api.remove(id).await?;
            Ok(Transition::SongRemoved(id.clone()))
        }
    }
}

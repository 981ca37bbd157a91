use std::collections::HashMap;

use async_trait::async_trait;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::Mutex;

use crate::{
    config::GameConfig,
    logic::{self, Action, Rejected},
    models::game::GameState,
};

/// Session used by clients that do not send an `X-Session-Id` header.
pub const DEFAULT_SESSION: &str = "default";

/// State after an action, along with whether the action took effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched {
    pub state: GameState,
    pub result: Result<(), Rejected>,
}

/// Holds the games being played. Each action runs to completion against
/// one session before the next one starts.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Current state of `session`, created fresh on first access.
    async fn snapshot(&self, session: &str) -> GameState;

    async fn dispatch(&self, session: &str, action: Action) -> Dispatched;
}

/// Sessions kept alive when no capacity is configured.
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

struct Session {
    state: GameState,
    rng: ChaCha8Rng,
    last_used: u64,
}

impl Session {
    fn new(config: &GameConfig, now: u64) -> Self {
        Self {
            state: GameState::new(config),
            rng: new_rng(config),
            last_used: now,
        }
    }
}

fn new_rng(config: &GameConfig) -> ChaCha8Rng {
    match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

#[derive(Default)]
struct Sessions {
    games: HashMap<String, Session>,
    /// Bumped on every dispatch; orders sessions by last use.
    clock: u64,
}

impl Sessions {
    fn evict_idlest(&mut self) {
        let idlest = self
            .games
            .iter()
            .min_by_key(|(_, s)| s.last_used)
            .map(|(id, _)| id.clone());
        if let Some(id) = idlest {
            debug!("evicting idle session '{id}'");
            self.games.remove(&id);
        }
    }
}

/// In-process store holding at most `max_sessions` games. Reads never create
/// a session; when a new one is needed and the store is full, the session
/// used least recently is dropped.
pub struct MemoryStore {
    config: GameConfig,
    max_sessions: usize,
    sessions: Mutex<Sessions>,
}

impl MemoryStore {
    pub fn new(config: GameConfig) -> Self {
        Self::with_capacity(config, DEFAULT_MAX_SESSIONS)
    }

    pub fn with_capacity(config: GameConfig, max_sessions: usize) -> Self {
        Self {
            config,
            max_sessions: max_sessions.max(1),
            sessions: Mutex::new(Sessions::default()),
        }
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn snapshot(&self, session: &str) -> GameState {
        let sessions = self.sessions.lock().await;
        match sessions.games.get(session) {
            Some(s) => s.state.clone(),
            None => GameState::new(&self.config),
        }
    }

    async fn dispatch(&self, session: &str, action: Action) -> Dispatched {
        let mut sessions = self.sessions.lock().await;
        sessions.clock += 1;
        let now = sessions.clock;
        if !sessions.games.contains_key(session) && sessions.games.len() >= self.max_sessions {
            sessions.evict_idlest();
        }
        let entry = sessions
            .games
            .entry(session.to_string())
            .or_insert_with(|| {
                info!("new session '{session}' ({} mode)", self.config.mode);
                Session::new(&self.config, now)
            });
        entry.last_used = now;

        if action == Action::Reset {
            entry.rng = new_rng(&self.config);
        }
        let result = logic::apply(&mut entry.state, &action, &self.config, &mut entry.rng);
        if let Err(ref rejected) = result {
            debug!("session '{session}': {} rejected: {rejected}", action.name());
        }

        Dispatched {
            state: entry.state.clone(),
            result,
        }
    }
}

//! HTTP session bookkeeping.
//!
//! Each session keeps a bounded log of the events it was sent so a client
//! reconnecting with `Last-Event-ID` can pick up what it missed. Sessions
//! carry no tenant state; the tool context is shared.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use axum::response::sse::Event;
use tokio::sync::{Mutex, RwLock, broadcast};
use tokio::task::JoinHandle;

/// Events retained per session for replay.
pub const REPLAY_CAPACITY: usize = 100;

/// Idle time after which a session is dropped.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(3600);

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

const LIVE_CAPACITY: usize = 64;

/// An SSE event remembered for replay.
#[derive(Clone, Debug)]
pub struct BufferedEvent {
    /// Per-session, monotonically increasing from 1.
    pub id: u64,
    /// SSE event name ("message", "endpoint").
    pub event_type: String,
    /// JSON payload.
    pub data: String,
}

impl BufferedEvent {
    /// Convert to an axum SSE event.
    #[must_use]
    pub fn to_sse_event(&self) -> Event {
        Event::default().id(self.id.to_string()).event(&self.event_type).data(&self.data)
    }
}

/// Id counter, replay ring and live channel. Guarded together so ids are
/// delivered in the order they were assigned.
struct EventLog {
    last_id: u64,
    ring: VecDeque<BufferedEvent>,
    live: broadcast::Sender<BufferedEvent>,
}

impl EventLog {
    fn new() -> Self {
        let (live, _) = broadcast::channel(LIVE_CAPACITY);
        Self { last_id: 0, ring: VecDeque::with_capacity(REPLAY_CAPACITY), live }
    }

    fn append(&mut self, event_type: String, data: String) -> u64 {
        self.last_id += 1;
        let event = BufferedEvent { id: self.last_id, event_type, data };

        if self.ring.len() == REPLAY_CAPACITY {
            self.ring.pop_front();
        }
        self.ring.push_back(event.clone());
        // No receivers is fine; the ring still holds the event.
        let _ = self.live.send(event);

        self.last_id
    }
}

/// One client session.
pub struct Session {
    /// Value of the `Mcp-Session-Id` header.
    pub id: String,
    log: Mutex<EventLog>,
    started: Instant,
    /// Milliseconds after `started` of the last activity.
    active_at_ms: AtomicU64,
}

impl Session {
    /// Create an empty session.
    #[must_use]
    pub fn new(id: String) -> Self {
        Self { id, log: Mutex::new(EventLog::new()), started: Instant::now(), active_at_ms: AtomicU64::new(0) }
    }

    /// Record an event and deliver it to live subscribers. Returns its id.
    pub async fn push_event(&self, event_type: impl Into<String>, data: impl Into<String>) -> u64 {
        let id = self.log.lock().await.append(event_type.into(), data.into());
        self.touch();
        id
    }

    /// Events after `last_event_id` still in the ring, plus a receiver for
    /// everything pushed afterwards. Nothing falls between the two.
    pub async fn replay_from(
        &self,
        last_event_id: u64,
    ) -> (Vec<BufferedEvent>, broadcast::Receiver<BufferedEvent>) {
        let log = self.log.lock().await;
        let missed = log.ring.iter().filter(|e| e.id > last_event_id).cloned().collect();
        (missed, log.live.subscribe())
    }

    /// Whether the session has been idle longer than `timeout`.
    #[must_use]
    pub fn is_idle_for(&self, timeout: Duration) -> bool {
        let active_at = Duration::from_millis(self.active_at_ms.load(Ordering::Relaxed));
        self.started.elapsed().saturating_sub(active_at) > timeout
    }

    /// Mark the session as active.
    pub fn touch(&self) {
        let now = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.active_at_ms.fetch_max(now, Ordering::Relaxed);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("id", &self.id).finish()
    }
}

/// All live sessions.
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<String, Arc<Session>>>>,
    timeout: Duration,
}

impl SessionManager {
    /// Create a manager with the default idle timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(IDLE_TIMEOUT)
    }

    /// Create a manager with a custom idle timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { sessions: Arc::new(RwLock::new(HashMap::new())), timeout }
    }

    /// Start a new session.
    pub async fn create_session(&self) -> Arc<Session> {
        let session = Arc::new(Session::new(uuid::Uuid::new_v4().to_string()));
        self.sessions.write().await.insert(session.id.clone(), Arc::clone(&session));

        tracing::info!(session_id = %session.id, "Session opened");
        session
    }

    /// Look up a session.
    pub async fn get_session(&self, id: &str) -> Option<Arc<Session>> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Resume `id` if it is still live, otherwise start a new session.
    pub async fn get_or_create_session(&self, id: Option<&str>) -> Arc<Session> {
        if let Some(id) = id {
            if let Some(session) = self.get_session(id).await {
                session.touch();
                return session;
            }
            tracing::debug!(session_id = %id, "Unknown session, opening a new one");
        }
        self.create_session().await
    }

    /// End a session. Returns whether it existed.
    pub async fn remove_session(&self, id: &str) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            tracing::info!(session_id = %id, "Session closed");
        }
        removed
    }

    /// Drop sessions idle past the timeout. Returns how many were dropped.
    pub async fn cleanup_stale_sessions(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|id, session| {
            let keep = !session.is_idle_for(self.timeout);
            if !keep {
                tracing::info!(session_id = %id, "Session expired");
            }
            keep
        });
        before - sessions.len()
    }

    /// Number of live sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Sweep idle sessions every minute until the runtime shuts down.
    pub fn start_cleanup_task(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
            loop {
                ticker.tick().await;
                let expired = self.cleanup_stale_sessions().await;
                if expired > 0 {
                    tracing::debug!(expired, "Idle session sweep");
                }
            }
        })
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").field("timeout", &self.timeout).finish()
    }
}

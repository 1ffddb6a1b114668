use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use lib_site::careers::CareersLoader;
use lib_site::content::{HeroContext, SiteContentContext};
use lib_site::forms::{FormGate, FormService};
use tokio::sync::Mutex;

/// Sessions older than this are dropped the next time one is issued.
pub const SESSION_TTL: Duration = Duration::from_secs(2 * 60 * 60);

#[derive(Clone)]
pub struct AppState {
    pub content: SiteContentContext,
    pub hero: HeroContext,
    pub careers: Arc<CareersLoader>,
    pub forms: Arc<FormService>,
    pub sessions: FormSessions,
    /// Body cap for the form posts, in bytes.
    pub upload_limit: usize,
}

/// Form sessions keyed by an opaque token.
///
/// A session starts the minimum-fill clock when the page asks for it and is
/// consumed by the first submission that gets through.
#[derive(Clone)]
pub struct FormSessions {
    gates: Arc<Mutex<HashMap<String, FormGate>>>,
    min_fill: Duration,
    ttl: Duration,
}

impl FormSessions {
    pub fn new(min_fill: Duration, ttl: Duration) -> Self {
        Self {
            gates: Arc::new(Mutex::new(HashMap::new())),
            min_fill,
            ttl,
        }
    }

    pub fn min_fill(&self) -> Duration {
        self.min_fill
    }

    /// Opens a new session starting now.
    pub async fn issue(&self) -> String {
        self.issue_gate(FormGate::open(self.min_fill)).await
    }

    /// Registers `gate` under a fresh token, pruning expired sessions.
    pub async fn issue_gate(&self, gate: FormGate) -> String {
        let token = format!("{:032x}", rand::random::<u128>());
        let mut gates = self.gates.lock().await;
        let ttl = self.ttl;
        gates.retain(|_, g| g.elapsed() < ttl);
        gates.insert(token.clone(), gate);
        token
    }

    /// Removes the session so a concurrent request cannot use it too.
    pub async fn take(&self, token: &str) -> Option<FormGate> {
        self.gates.lock().await.remove(token)
    }

    /// Puts a session back after a submission that did not go through.
    pub async fn restore(&self, token: String, gate: FormGate) {
        self.gates.lock().await.insert(token, gate);
    }

    pub async fn len(&self) -> usize {
        self.gates.lock().await.len()
    }
}

//! Per-team serialization of provisioning requests
//!
//! Concurrent provision/deprovision requests for one organization would race
//! between the existence check and the create. Requests for the same team
//! name take turns; requests for different teams never wait on each other.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::TeamName;

type LockMap = HashMap<TeamName, Arc<AsyncMutex<()>>>;

/// Keyed async mutex over team names
#[derive(Debug, Clone, Default)]
pub struct TeamLocks {
    locks: Arc<Mutex<LockMap>>,
}

/// Held while a team is being provisioned or deprovisioned
#[derive(Debug)]
pub struct TeamLockGuard {
    team: TeamName,
    locks: Arc<Mutex<LockMap>>,
    _guard: OwnedMutexGuard<()>,
}

impl TeamLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until no other request holds `team`
    pub async fn lock(&self, team: &TeamName) -> TeamLockGuard {
        let entry = {
            let mut locks = self.locks.lock().unwrap_or_else(|p| p.into_inner());
            locks.entry(team.clone()).or_default().clone()
        };

        TeamLockGuard {
            team: team.clone(),
            locks: Arc::clone(&self.locks),
            _guard: entry.lock_owned().await,
        }
    }

    /// Number of teams with a lock entry
    pub fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for TeamLockGuard {
    fn drop(&mut self) {
        let mut locks = self.locks.lock().unwrap_or_else(|p| p.into_inner());

        // The map and this guard are the only owners: nobody is waiting.
        let idle = locks
            .get(&self.team)
            .is_some_and(|entry| Arc::strong_count(entry) <= 2);

        if idle {
            locks.remove(&self.team);
        }
    }
}

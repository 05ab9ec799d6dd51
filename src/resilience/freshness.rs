use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshnessState {
    Fresh,
    Stale,
    Expired,
}

/// Age thresholds for cached background candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessPolicy {
    pub stale_after: Duration,
    pub expire_after: Duration,
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self {
            stale_after: Duration::minutes(10),
            expire_after: Duration::minutes(30),
        }
    }
}

impl FreshnessPolicy {
    #[must_use]
    pub fn evaluate(&self, stored_at: DateTime<Utc>, now: DateTime<Utc>) -> FreshnessState {
        let age = now - stored_at;

        if age > self.expire_after {
            FreshnessState::Expired
        } else if age > self.stale_after {
            FreshnessState::Stale
        } else {
            FreshnessState::Fresh
        }
    }
}

#[must_use]
pub fn evaluate_freshness(stored_at: DateTime<Utc>) -> FreshnessState {
    FreshnessPolicy::default().evaluate(stored_at, Utc::now())
}

use super::Account;

use chrono::{DateTime, Utc};

impl Account {
    /// A human-readable balance line,
    /// e.g. "Alice's Balance: $120.00 (just now)".
    ///
    /// The freshness suffix is computed against the wall clock at the moment
    /// of the call, not cached.
    pub fn describe_balance(&self) -> String {
        self.describe_balance_at(Utc::now())
    }

    // The clock is injected, so tests can pin it.
    fn describe_balance_at(&self, now: DateTime<Utc>) -> String {
        format!(
            "{}'s Balance: ${} {}",
            self.name,
            self.balance,
            self.freshness(now)
        )
    }

    // "just now" under a minute, then minutes, then hours.
    // Durations are converted by rounding down.
    fn freshness(&self, now: DateTime<Utc>) -> String {
        let last_update = match self.last_update {
            None => return "(no transactions yet)".to_string(),
            Some(last_update) => last_update,
        };

        let elapsed = now.signed_duration_since(last_update);
        if elapsed.num_minutes() < 1 {
            "(just now)".to_string()
        } else if elapsed.num_hours() < 1 {
            format!("({} minutes ago)", elapsed.num_minutes())
        } else {
            format!("({} hours ago)", elapsed.num_hours())
        }
    }
}

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use actix_web::HttpRequest;

/// Sign-in attempts per client per window.
pub const LOGIN_LIMIT: (usize, Duration) = (5, Duration::from_secs(300));
/// Public submissions (contact, quote, testimonial) per client per window.
pub const SUBMISSION_LIMIT: (usize, Duration) = (5, Duration::from_secs(600));
/// Sign-up and password reset requests per client per window.
pub const ACCOUNT_LIMIT: (usize, Duration) = (5, Duration::from_secs(3600));

/// How often idle keys are swept out of the limiter.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

struct Hits {
    window: Duration,
    times: Vec<Instant>,
}

impl Hits {
    fn prune(&mut self, now: Instant) {
        let window = self.window;
        self.times.retain(|&t| now.saturating_duration_since(t) < window);
    }
}

#[derive(Default)]
struct Counters {
    keys: HashMap<String, Hits>,
    last_sweep: Option<Instant>,
}

/// Sliding-window request counter keyed by `<action>:<client>`.
pub struct RateLimiter {
    counters: Mutex<Counters>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            counters: Mutex::new(Counters::default()),
        }
    }

    /// Records a request and returns false once `limit` requests already
    /// happened inside `window`.
    pub fn allow(&self, key: &str, (limit, window): (usize, Duration)) -> bool {
        self.allow_at(key, limit, window, Instant::now())
    }

    fn allow_at(&self, key: &str, limit: usize, window: Duration, now: Instant) -> bool {
        let mut counters = self
            .counters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let due = counters
            .last_sweep
            .map_or(true, |t| now.saturating_duration_since(t) >= SWEEP_INTERVAL);
        if due {
            counters.keys.retain(|_, hits| {
                hits.prune(now);
                !hits.times.is_empty()
            });
            counters.last_sweep = Some(now);
        }

        let hits = counters.keys.entry(key.to_string()).or_insert_with(|| Hits {
            window,
            times: Vec::new(),
        });
        hits.window = window;
        hits.prune(now);

        if hits.times.len() >= limit {
            return false;
        }
        hits.times.push(now);

        true
    }

    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        self.counters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .keys
            .len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}

pub fn rate_key(action: &str, req: &HttpRequest) -> String {
    format!("{}:{}", action, client_ip(req))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_reached_then_blocked() {
        let limiter = RateLimiter::new();
        let now = Instant::now();
        let window = Duration::from_secs(60);

        for _ in 0..3 {
            assert!(limiter.allow_at("login:1.2.3.4", 3, window, now));
        }
        assert!(!limiter.allow_at("login:1.2.3.4", 3, window, now));
        // Other clients are counted separately
        assert!(limiter.allow_at("login:5.6.7.8", 3, window, now));
    }

    #[test]
    fn test_window_expires() {
        let limiter = RateLimiter::new();
        let start = Instant::now();
        let window = Duration::from_secs(60);

        assert!(limiter.allow_at("contact:x", 1, window, start));
        assert!(!limiter.allow_at("contact:x", 1, window, start + Duration::from_secs(30)));
        assert!(limiter.allow_at("contact:x", 1, window, start + Duration::from_secs(61)));
    }

    #[test]
    fn test_idle_clients_are_forgotten() {
        let limiter = RateLimiter::new();
        let start = Instant::now();
        let window = Duration::from_secs(300);

        for i in 0..1000 {
            assert!(limiter.allow_at(&format!("login:10.0.{}.{}", i / 256, i % 256), 5, window, start));
        }
        assert_eq!(limiter.tracked_keys(), 1000);

        let later = start + Duration::from_secs(3600);
        assert!(limiter.allow_at("login:192.168.1.1", 5, window, later));
        assert_eq!(limiter.tracked_keys(), 1);
    }

    #[test]
    fn test_sweep_keeps_clients_inside_their_window() {
        let limiter = RateLimiter::new();
        let start = Instant::now();
        let long = Duration::from_secs(3600);
        let short = Duration::from_secs(60);

        assert!(limiter.allow_at("signup:a", 1, long, start));
        assert!(limiter.allow_at("login:b", 1, short, start));

        let later = start + Duration::from_secs(120);
        assert!(limiter.allow_at("login:c", 1, short, later));
        assert_eq!(limiter.tracked_keys(), 2);
        assert!(!limiter.allow_at("signup:a", 1, long, later));
    }
}

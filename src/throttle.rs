use std::time::Duration;

/// Fixed-count request throttle.
///
/// The upstream rate-limits by request volume per minute, so after every
/// `limit` requests the caller must pause for `pause` before continuing. The
/// decision is separated from the sleep itself so it can be tested without
/// waiting: [`Throttle::record_request`] only reports when a pause is due.
#[derive(Debug)]
pub(crate) struct Throttle {
    limit: u32,
    pause: Duration,
    since_pause: u32,
}

impl Throttle {
    pub(crate) fn new(limit: u32, pause: Duration) -> Self {
        Self {
            limit,
            pause,
            since_pause: 0,
        }
    }

    /// Count one request. Returns the pause to take before the next request,
    /// if the limit has been reached; the counter resets when it fires.
    pub(crate) fn record_request(&mut self) -> Option<Duration> {
        self.since_pause += 1;
        if self.since_pause >= self.limit {
            self.since_pause = 0;
            Some(self.pause)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pauses_after_every_twentieth_request() {
        let mut throttle = Throttle::new(20, Duration::from_secs(70));
        let pauses: Vec<u32> = (1..=45)
            .filter(|_| throttle.record_request().is_some())
            .collect();
        // 45 requests trigger exactly 2 pauses, after the 20th and the 40th.
        assert_eq!(pauses, vec![20, 40]);
    }

    #[test]
    fn counter_resets_rather_than_decrements() {
        let mut throttle = Throttle::new(3, Duration::from_secs(1));
        assert!(throttle.record_request().is_none());
        assert!(throttle.record_request().is_none());
        assert!(throttle.record_request().is_some());
        // A fresh window starts after the pause.
        assert!(throttle.record_request().is_none());
        assert!(throttle.record_request().is_none());
        assert!(throttle.record_request().is_some());
    }
}

use super::{Reply, Responder};
use crate::knowledge;
use crate::status::StatusReport;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(1000);
const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(3000);

/// Range the simulated "typing" pause is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayPolicy {
    pub min: Duration,
    pub max: Duration,
}

impl DelayPolicy {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn fixed(delay: Duration) -> Self {
        Self::new(delay, delay)
    }

    /// Uniform pick in `min..=max`. A reversed range collapses to `min`.
    pub fn sample(&self) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        let min_ms = self.min.as_millis() as u64;
        let max_ms = self.max.as_millis() as u64;
        Duration::from_millis(rand::thread_rng().gen_range(min_ms..=max_ms))
    }
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DELAY, DEFAULT_MAX_DELAY)
    }
}

#[derive(Clone, Debug, Default)]
pub struct LocalResponder {
    delay: DelayPolicy,
}

impl LocalResponder {
    pub fn new(delay: DelayPolicy) -> Self {
        Self { delay }
    }

    pub fn instant() -> Self {
        Self::new(DelayPolicy::none())
    }

    /// Synchronous lookup without the simulated delay.
    pub fn answer(&self, message: &str) -> String {
        knowledge::answer_for(message)
    }
}

#[async_trait]
impl Responder for LocalResponder {
    async fn respond(&self, message: &str) -> Reply {
        let pause = self.delay.sample();
        if !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
        let topic = knowledge::classify(message).map(|entry| entry.topic);
        tracing::debug!(?topic, delay_ms = pause.as_millis() as u64, "local reply");
        Reply::normal(self.answer(message))
    }

    async fn probe(&self) -> StatusReport {
        StatusReport::ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageKind;

    #[test]
    fn sample_stays_inside_range() {
        let policy = DelayPolicy::new(Duration::from_millis(10), Duration::from_millis(20));
        for _ in 0..200 {
            let pause = policy.sample();
            assert!(pause >= policy.min && pause <= policy.max, "{pause:?}");
        }
    }

    #[test]
    fn degenerate_ranges_return_min() {
        assert_eq!(DelayPolicy::none().sample(), Duration::ZERO);
        let reversed = DelayPolicy::new(Duration::from_millis(50), Duration::from_millis(5));
        assert_eq!(reversed.sample(), Duration::from_millis(50));
    }

    #[tokio::test]
    async fn instant_responder_answers_from_knowledge_base() {
        let reply = LocalResponder::instant().respond("our mission?").await;
        assert_eq!(reply.kind, MessageKind::Normal);
        assert!(reply.content.starts_with("PROJ-BLE's mission"));
        assert!(reply.status.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn reply_waits_for_the_configured_delay() {
        let responder = LocalResponder::new(DelayPolicy::fixed(Duration::from_secs(2)));
        let started = tokio::time::Instant::now();
        responder.respond("hello").await;
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test]
    async fn local_probe_is_always_ready() {
        assert_eq!(
            LocalResponder::instant().probe().await,
            StatusReport::ready()
        );
    }
}

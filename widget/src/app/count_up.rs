//! Count-up animation for the raised amount
//!
//! The display walks from its current value to a new target in at most
//! `steps` increments, one per tick. Exactly one animation task runs per
//! animator: a new target cancels the running task and the next one resumes
//! from whatever value is on screen.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

pub struct CountUpAnimator {
    displayed: Arc<watch::Sender<u64>>,
    task: Mutex<Option<JoinHandle<()>>>,
    tick: Duration,
    steps: u64,
}

impl CountUpAnimator {
    pub fn new(initial: u64, tick: Duration, steps: u64) -> Self {
        let (displayed, _) = watch::channel(initial);
        Self {
            displayed: Arc::new(displayed),
            task: Mutex::new(None),
            tick,
            steps: steps.max(1),
        }
    }

    /// Value currently on screen
    pub fn displayed(&self) -> u64 {
        *self.displayed.borrow()
    }

    /// Receive every displayed value as the animation advances
    #[cfg(test)]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.displayed.subscribe()
    }

    /// Animate the display toward `target`, replacing any running animation
    pub async fn animate_to(&self, target: u64) {
        let mut task = self.task.lock().await;

        if let Some(running) = task.take() {
            running.abort();
            // Wait for the abort so the old task can no longer write
            let _ = running.await;
        }

        let from = self.displayed();
        if target <= from {
            self.displayed.send_replace(target);
            return;
        }

        let step = step_size(from, target, self.steps);
        let displayed = Arc::clone(&self.displayed);
        let tick = self.tick;

        *task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + tick, tick);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            let mut counter = from;
            while counter < target {
                ticker.tick().await;
                counter = counter.saturating_add(step).min(target);
                displayed.send_replace(counter);
            }
        }));
    }

    /// Whether an animation is still in flight
    #[cfg(test)]
    pub async fn is_animating(&self) -> bool {
        self.task
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for CountUpAnimator {
    fn drop(&mut self) {
        if let Some(running) = self.task.get_mut().take() {
            running.abort();
        }
    }
}

/// `ceil(delta / steps)`, never less than one
fn step_size(from: u64, target: u64, steps: u64) -> u64 {
    target.saturating_sub(from).div_ceil(steps.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(50);

    #[test]
    fn step_size_is_ceiling_of_twentieth() {
        assert_eq!(step_size(0, 2_000, 20), 100);
        assert_eq!(step_size(0, 2_001, 20), 101);
        assert_eq!(step_size(100, 105, 20), 1);
        assert_eq!(step_size(5, 5, 20), 1);
        assert_eq!(step_size(0, 10, 0), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn animation_reaches_target_in_twenty_ticks() {
        let animator = CountUpAnimator::new(0, TICK, 20);

        animator.animate_to(2_000).await;
        assert_eq!(animator.displayed(), 0);

        tokio::time::sleep(Duration::from_millis(75)).await;
        assert_eq!(animator.displayed(), 100);

        tokio::time::sleep(Duration::from_millis(50 * 19)).await;
        assert_eq!(animator.displayed(), 2_000);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!animator.is_animating().await);
    }

    #[tokio::test(start_paused = true)]
    async fn small_delta_steps_by_one() {
        let animator = CountUpAnimator::new(1_000, TICK, 20);

        animator.animate_to(1_003).await;

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(animator.displayed(), 1_001);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(animator.displayed(), 1_003);
    }

    #[tokio::test(start_paused = true)]
    async fn new_target_replaces_running_animation() {
        let animator = CountUpAnimator::new(0, TICK, 20);
        let mut updates = animator.subscribe();

        animator.animate_to(2_000).await;
        tokio::time::sleep(Duration::from_millis(125)).await;
        assert_eq!(animator.displayed(), 200);

        // Resumes from 200 with a step of ceil(3_800 / 20)
        animator.animate_to(4_000).await;
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(animator.displayed(), 390);

        let mut last = animator.displayed();
        for _ in 0..250 {
            tokio::time::sleep(Duration::from_millis(10)).await;
            let value = animator.displayed();
            assert!(value >= last, "display went from {last} back to {value}");
            last = value;
        }
        assert_eq!(last, 4_000);
        assert_eq!(*updates.borrow_and_update(), 4_000);
    }

    #[tokio::test(start_paused = true)]
    async fn target_below_display_jumps() {
        let animator = CountUpAnimator::new(500, TICK, 20);

        animator.animate_to(500).await;
        assert_eq!(animator.displayed(), 500);
        assert!(!animator.is_animating().await);

        animator.animate_to(300).await;
        assert_eq!(animator.displayed(), 300);
    }
}

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, info};

use crate::config::CarouselConfig;

use super::rotator::{CardPosition, RotationTick, Rotator};

/// Events emitted by the carousel driver to notify the UI of changes
#[derive(Debug, Clone)]
pub enum CarouselEvent {
    /// The strip advanced; the full slot assignment for the new state
    Rotated {
        current: usize,
        assignments: Vec<CardPosition>,
    },
}

/// Commands the UI can send to the driver
#[derive(Debug, Clone, Copy)]
pub enum CarouselCommand {
    /// Rotate immediately instead of waiting for the next scheduled tick.
    /// Dropped if the previous transition is still settling.
    RotateNow,
}

/// Timer-driven carousel driver.
///
/// Owns a [`Rotator`] and runs its schedule: one rotation after the
/// initial delay, then one per interval, with the settle lock released
/// `settle_ms` after each. The interval is longer than the settle window,
/// so scheduled ticks never collide with the lock; manual
/// [`CarouselCommand::RotateNow`] requests can, and are dropped when they
/// do.
pub struct CarouselService {
    rotator: Rotator,
    config: CarouselConfig,
    event_tx: Option<mpsc::UnboundedSender<CarouselEvent>>,
    command_rx: Option<mpsc::UnboundedReceiver<CarouselCommand>>,
}

impl CarouselService {
    pub fn new(rotator: Rotator, config: CarouselConfig) -> Self {
        Self {
            rotator,
            config,
            event_tx: None,
            command_rx: None,
        }
    }

    /// Set the event sender for UI notifications
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<CarouselEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    /// Set the command receiver for manual rotation requests
    pub fn with_command_receiver(mut self, rx: mpsc::UnboundedReceiver<CarouselCommand>) -> Self {
        self.command_rx = Some(rx);
        self
    }

    fn send_event(&self, event: CarouselEvent) {
        if let Some(ref tx) = self.event_tx {
            if tx.send(event).is_err() {
                debug!("carousel event receiver dropped");
            }
        }
    }

    fn advance(&mut self, positions: &mut Vec<CardPosition>) -> Option<CarouselEvent> {
        match self.rotator.rotate(positions) {
            RotationTick::Advanced => Some(CarouselEvent::Rotated {
                current: self.rotator.current(),
                assignments: positions.clone(),
            }),
            RotationTick::Dropped => {
                debug!("rotation dropped: previous transition still settling");
                None
            }
        }
    }

    /// Run the rotation schedule until the shutdown signal fires
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        if self.rotator.is_empty() {
            info!("Carousel disabled (no cards)");
            let _ = shutdown.changed().await;
            return;
        }

        let initial_delay = Duration::from_millis(self.config.initial_delay_ms);
        let interval_len = Duration::from_millis(self.config.interval_ms.max(1));
        let settle = Duration::from_millis(self.config.settle_ms);

        info!(
            "Carousel started: {} cards, initial={}ms, interval={}ms, settle={}ms",
            self.rotator.len(),
            self.config.initial_delay_ms,
            self.config.interval_ms,
            self.config.settle_ms
        );

        // Head start before the first rotation
        tokio::select! {
            _ = tokio::time::sleep(initial_delay) => {}
            result = shutdown.changed() => {
                if result.is_ok() && *shutdown.borrow() {
                    return;
                }
            }
        }

        // The interval's immediate first tick is the scheduled first rotation
        let mut interval = tokio::time::interval(interval_len);

        // Commands are optional; an open channel that never yields keeps the
        // select arm pending when no receiver was configured
        let (fallback_tx, fallback_rx) = mpsc::unbounded_channel();
        let mut commands = self.command_rx.take().unwrap_or(fallback_rx);
        let _keep_open = fallback_tx;

        let mut positions: Vec<CardPosition> = self.rotator.assignments();

        let settle_timer = tokio::time::sleep(settle);
        tokio::pin!(settle_timer);

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_ok() && *shutdown.borrow() {
                        info!("Carousel received shutdown signal");
                        break;
                    }
                }

                _ = interval.tick() => {
                    if let Some(event) = self.advance(&mut positions) {
                        settle_timer.as_mut().reset(Instant::now() + settle);
                        self.send_event(event);
                    }
                }

                Some(command) = commands.recv() => {
                    match command {
                        CarouselCommand::RotateNow => {
                            if let Some(event) = self.advance(&mut positions) {
                                settle_timer.as_mut().reset(Instant::now() + settle);
                                self.send_event(event);
                            }
                        }
                    }
                }

                _ = settle_timer.as_mut(), if self.rotator.is_settling() => {
                    self.rotator.settle();
                }
            }
        }

        info!("Carousel stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    fn service_with_channels(
        cards: usize,
    ) -> (
        CarouselService,
        mpsc::UnboundedReceiver<CarouselEvent>,
        mpsc::UnboundedSender<CarouselCommand>,
    ) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let service = CarouselService::new(Rotator::new(cards), CarouselConfig::default())
            .with_event_sender(event_tx)
            .with_command_receiver(command_rx);
        (service, event_rx, command_tx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_rotations_advance_in_order() {
        let (service, mut events, _commands) = service_with_channels(6);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(service.run(shutdown_rx));

        for expected in 1..=3usize {
            let CarouselEvent::Rotated {
                current,
                assignments,
            } = events.recv().await.unwrap();
            assert_eq!(current, expected);
            assert_eq!(assignments.len(), 6);
        }

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_rotation_waits_for_initial_delay() {
        let (service, mut events, _commands) = service_with_channels(5);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(service.run(shutdown_rx));

        let early = timeout(Duration::from_millis(999), events.recv()).await;
        assert!(early.is_err(), "nothing may rotate before the head start");

        let CarouselEvent::Rotated { current, .. } = events.recv().await.unwrap();
        assert_eq!(current, 1);

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_strip_schedules_nothing() {
        let (service, mut events, _commands) = service_with_channels(0);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(service.run(shutdown_rx));

        // Well past initial delay + several intervals
        let waited = timeout(Duration::from_secs(30), events.recv()).await;
        assert!(waited.is_err(), "no rotation may fire for an empty strip");

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_rotation_dropped_while_settling() {
        let (service, mut events, commands) = service_with_channels(6);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(service.run(shutdown_rx));

        let CarouselEvent::Rotated { current, .. } = events.recv().await.unwrap();
        assert_eq!(current, 1);

        // Still inside the settle window: the manual tick must be dropped
        commands.send(CarouselCommand::RotateNow).unwrap();
        let waited = timeout(Duration::from_millis(100), events.recv()).await;
        assert!(waited.is_err());

        // The next scheduled tick lands after the lock released
        let CarouselEvent::Rotated { current, .. } = events.recv().await.unwrap();
        assert_eq!(current, 2);

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_rotation_after_settle_advances() {
        let (service, mut events, commands) = service_with_channels(6);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(service.run(shutdown_rx));

        let CarouselEvent::Rotated { current, .. } = events.recv().await.unwrap();
        assert_eq!(current, 1);

        // Let the settle window pass, then rotate manually before the
        // scheduled tick
        tokio::time::sleep(Duration::from_millis(900)).await;
        commands.send(CarouselCommand::RotateNow).unwrap();

        let CarouselEvent::Rotated { current, .. } = events.recv().await.unwrap();
        assert_eq!(current, 2);

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }
}

//! Game Session
//!
//! Drives a [`World`] one tick at a time against its collaborators: an input
//! source, a renderer and a lifecycle handle. The simulation itself never
//! waits; pacing lives here.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::core::hash::StateHash;
use crate::game::config::ConfigError;
use crate::game::events::GameEventData;
use crate::game::input::InputFrame;
use crate::game::tick::{tick, TickResult};
use crate::game::world::World;
use crate::render::{render_world, Renderer};

// =============================================================================
// COLLABORATORS
// =============================================================================

/// Where per-tick input comes from.
pub trait InputSource {
    /// Input for the tick about to run (1-based).
    fn poll(&mut self, tick: u32) -> InputFrame;
}

impl<F> InputSource for F
where
    F: FnMut(u32) -> InputFrame,
{
    fn poll(&mut self, tick: u32) -> InputFrame {
        self(tick)
    }
}

/// Process lifecycle as seen by the loop.
pub trait Lifecycle {
    /// Checked once per tick, before input.
    fn quit_requested(&self) -> bool;

    /// Called once when the loop stops.
    fn shutdown(&mut self);
}

/// Cloneable quit flag, safe to trigger from another task or a signal handler.
#[derive(Clone, Debug, Default)]
pub struct QuitSignal {
    quit: Arc<AtomicBool>,
    shut_down: Arc<AtomicBool>,
}

impl QuitSignal {
    /// New, untriggered signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to stop at the next tick.
    pub fn request(&self) {
        self.quit.store(true, Ordering::SeqCst);
    }

    /// Has a quit been requested?
    pub fn is_requested(&self) -> bool {
        self.quit.load(Ordering::SeqCst)
    }

    /// Has the loop shut down?
    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }
}

impl Lifecycle for QuitSignal {
    fn quit_requested(&self) -> bool {
        self.is_requested()
    }

    fn shutdown(&mut self) {
        self.shut_down.store(true, Ordering::SeqCst);
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Session errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// World config rejected.
    #[error("Invalid session config: {0}")]
    Config(#[from] ConfigError),
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Lifecycle asked to quit.
    QuitRequested,
    /// Configured tick limit reached.
    TickLimit,
}

/// What a finished session did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Ticks simulated
    pub ticks: u32,
    /// Why the loop ended
    pub stop_reason: StopReason,
    /// Bombs placed
    pub bombs_placed: u32,
    /// Bombs detonated
    pub bombs_detonated: u32,
    /// Walls destroyed
    pub walls_destroyed: u32,
    /// Walls left standing
    pub walls_remaining: usize,
    /// State hash after the last tick
    pub final_hash: StateHash,
}

#[derive(Debug, Default)]
struct SessionStats {
    bombs_placed: u32,
    bombs_detonated: u32,
    walls_destroyed: u32,
}

impl SessionStats {
    fn record(&mut self, result: &TickResult) {
        for event in &result.events {
            match event.data {
                GameEventData::BombPlaced { .. } => self.bombs_placed += 1,
                GameEventData::BombDetonated { .. } => self.bombs_detonated += 1,
                GameEventData::WallDestroyed { .. } => self.walls_destroyed += 1,
                GameEventData::ExplosionFinished { .. } => {}
            }
        }
    }
}

/// A running game: world plus collaborators.
pub struct GameSession<I, R, L> {
    world: World,
    input: I,
    renderer: R,
    lifecycle: L,
    max_ticks: Option<u32>,
    record_inputs: bool,
    inputs: Vec<InputFrame>,
    stats: SessionStats,
}

impl<I, R, L> GameSession<I, R, L>
where
    I: InputSource,
    R: Renderer,
    L: Lifecycle,
{
    /// Create a session. The world's config is checked before anything runs.
    pub fn new(world: World, input: I, renderer: R, lifecycle: L) -> Result<Self, SessionError> {
        world.config.validate()?;
        Ok(Self {
            world,
            input,
            renderer,
            lifecycle,
            max_ticks: None,
            record_inputs: true,
            inputs: Vec::new(),
            stats: SessionStats::default(),
        })
    }

    /// Stop after `limit` ticks. `None` runs until quit.
    pub fn with_tick_limit(mut self, limit: Option<u32>) -> Self {
        self.max_ticks = limit;
        self
    }

    /// Keep (or stop keeping) a copy of every applied input frame.
    ///
    /// On by default. The log grows by one frame per tick, so a session with
    /// no tick limit should turn it off unless it means to replay.
    pub fn with_input_recording(mut self, enabled: bool) -> Self {
        self.record_inputs = enabled;
        self
    }

    /// Current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Renderer, e.g. to read back the last frame.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Lifecycle handle.
    pub fn lifecycle(&self) -> &L {
        &self.lifecycle
    }

    /// Every input frame applied so far, in tick order.
    ///
    /// Empty when recording is off.
    pub fn recorded_inputs(&self) -> &[InputFrame] {
        &self.inputs
    }

    /// One loop iteration: quit check, input, tick, render, present.
    ///
    /// Returns `None` without touching the world when a quit was requested.
    pub fn step(&mut self) -> Option<TickResult> {
        if self.lifecycle.quit_requested() {
            return None;
        }

        let input = self.input.poll(self.world.tick + 1);
        if self.record_inputs {
            self.inputs.push(input);
        }

        let result = tick(&mut self.world, &input);
        self.stats.record(&result);

        render_world(&self.world, &mut self.renderer);
        self.renderer.present();

        let tick_rate = self.world.config.tick_rate;
        if self.world.tick % tick_rate == 0 {
            debug!(
                "Tick {}: {} bombs, {} explosions, {} walls",
                self.world.tick,
                self.world.bombs.len(),
                self.world.explosions.len(),
                self.world.walls.len()
            );
        }

        Some(result)
    }

    fn limit_reached(&self) -> bool {
        self.max_ticks.is_some_and(|limit| self.world.tick >= limit)
    }

    /// Run at the configured tick rate until quit or the tick limit.
    pub async fn run(&mut self) -> SessionSummary {
        let period = self.world.config.tick_interval();
        let mut tick_interval = interval(period);
        tick_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            "Session started at {} Hz (limit: {:?})",
            self.world.config.tick_rate, self.max_ticks
        );

        let mut last: Option<Instant> = None;
        let reason = loop {
            if self.limit_reached() {
                break StopReason::TickLimit;
            }

            let scheduled = tick_interval.tick().await;
            if let Some(prev) = last {
                let gap = scheduled.duration_since(prev);
                let skipped = (gap.as_micros() / period.as_micros().max(1)).saturating_sub(1);
                if skipped > 0 {
                    warn!("Tick loop fell behind, skipped {} ticks", skipped);
                }
            }
            last = Some(scheduled);

            if self.step().is_none() {
                break StopReason::QuitRequested;
            }
        };

        self.finish(reason)
    }

    /// Run without waiting between ticks.
    pub fn run_unpaced(&mut self) -> SessionSummary {
        info!("Session started unpaced (limit: {:?})", self.max_ticks);

        let reason = loop {
            if self.limit_reached() {
                break StopReason::TickLimit;
            }
            if self.step().is_none() {
                break StopReason::QuitRequested;
            }
        };

        self.finish(reason)
    }

    fn finish(&mut self, reason: StopReason) -> SessionSummary {
        if reason == StopReason::QuitRequested {
            warn!("Quit requested at tick {}", self.world.tick);
        }

        self.lifecycle.shutdown();

        let summary = SessionSummary {
            ticks: self.world.tick,
            stop_reason: reason,
            bombs_placed: self.stats.bombs_placed,
            bombs_detonated: self.stats.bombs_detonated,
            walls_destroyed: self.stats.walls_destroyed,
            walls_remaining: self.world.walls.len(),
            final_hash: self.world.compute_hash(),
        };

        info!(
            "Session stopped after {} ticks ({:?}): {} bombs, {} walls destroyed",
            summary.ticks, summary.stop_reason, summary.bombs_detonated, summary.walls_destroyed
        );

        summary
    }

    /// Tear down the session, keeping the world.
    pub fn into_world(self) -> World {
        self.world
    }
}

// =============================================================================
// TESTS
// =============================================================================

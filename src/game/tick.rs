//! Simulation Tick
//!
//! One fixed step of the game: input, bombs, explosions. Rendering happens
//! outside, against the world this leaves behind.

use tracing::{debug, info};

use crate::game::events::GameEvent;
use crate::game::input::InputFrame;
use crate::game::world::World;

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick
    pub events: Vec<GameEvent>,
}

/// Run one simulation tick.
///
/// Order:
/// 1. held directions (left, right, up, down), each against the position the
///    previous one left, then bomb placement
/// 2. bombs age; spent bombs detonate and are removed
/// 3. explosions age; finished ones are removed
pub fn tick(world: &mut World, input: &InputFrame) -> TickResult {
    // 0. Advance tick counter
    world.tick += 1;

    #[cfg(feature = "debug-tracing")]
    tracing::trace!(tick = world.tick, input = input.flags, "tick");

    // 1. Apply player input
    apply_input(world, input);

    // 2. Bombs
    update_bombs(world);

    // 3. Explosions
    update_explosions(world);

    TickResult {
        events: world.take_events(),
    }
}

/// Apply one tick of input to the player.
fn apply_input(world: &mut World, input: &InputFrame) {
    let arena = world.config.arena();

    for direction in input.directions() {
        world.player.move_in(direction, &world.walls, &arena);
    }

    if input.bomb_pressed() {
        if world.player.place_bomb(&mut world.bombs, world.config.bomb_fuse_secs) {
            let position = world.player.position;
            info!("Bomb placed at {}", position);
            world.push_event(GameEvent::bomb_placed(world.tick, position));
        } else {
            debug!("Bomb limit reached ({} live)", world.bombs.len());
        }
    }
}

/// Age every bomb and detonate the spent ones, in placement order.
fn update_bombs(world: &mut World) {
    let dt = world.config.tick_duration();
    let blast = world.blast();

    let mut i = 0;
    while i < world.bombs.len() {
        world.bombs[i].update(dt);
        if !world.bombs[i].is_detonating() {
            i += 1;
            continue;
        }

        let bomb = world.bombs.remove(i);
        let detonation = bomb.explode(&mut world.walls, &mut world.explosions, &blast);

        info!("Bomb at {} exploded!", detonation.position);
        world.push_event(GameEvent::bomb_detonated(world.tick, detonation.position));

        for wall in detonation.destroyed {
            info!("Wall at {} destroyed by explosion!", wall.position);
            world.push_event(GameEvent::wall_destroyed(world.tick, wall.id, wall.position));
        }
    }
}

/// Age every explosion and drop the finished ones.
fn update_explosions(world: &mut World) {
    let dt = world.config.tick_duration();
    let tick = world.tick;
    let events = &mut world.pending_events;

    world.explosions.retain_mut(|explosion| {
        explosion.update(dt);
        if explosion.is_finished() {
            debug!("Explosion at {} finished", explosion.position);
            events.push(GameEvent::explosion_finished(tick, explosion.position));
            false
        } else {
            true
        }
    });
}

/// Replay a game from recorded inputs.
///
/// Returns the final world and every event, in order.
pub fn replay(initial: World, inputs: &[InputFrame]) -> (World, Vec<GameEvent>) {
    let mut world = initial;
    let mut all_events = Vec::new();

    for input in inputs {
        let result = tick(&mut world, input);
        all_events.extend(result.events);
    }

    (world, all_events)
}

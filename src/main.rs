//! Bomb Blast
//!
//! Runs a scripted game in the terminal and checks that replaying the
//! recorded inputs lands on the same state hash.

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bomb_blast::{
    VERSION,
    game::{tick::replay, world::World},
    render::AsciiRenderer,
    runtime::{GameSession, QuitSignal, RunSettings, ScriptedInput},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let settings = RunSettings::from_env();
    let config = settings.load_config().context("Failed to load game config")?;

    info!("Bomb Blast v{}", VERSION);
    info!("Tick Rate: {} Hz", config.tick_rate);
    info!("World: {}x{} ({} unit cells)", config.world_width, config.world_height, config.cell_size);
    info!("RNG Seed: {}", settings.seed);

    let world = World::new(config, settings.seed).context("Failed to build world")?;
    info!(
        "Generated {} walls ({} destructible)",
        world.walls.len(),
        world.destructible_wall_count()
    );
    let initial = world.clone();

    let script = ScriptedInput::parse(&settings.script).context("Bad input script")?;

    let quit = QuitSignal::new();
    {
        let quit = quit.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                quit.request();
            }
        });
    }

    let renderer = AsciiRenderer::new(&world.config.arena());
    // Open-ended runs would grow the input log without bound
    let verify = settings.max_ticks.is_some();
    let mut session = GameSession::new(world, script, renderer, quit)?
        .with_tick_limit(settings.max_ticks)
        .with_input_recording(verify);

    let summary = if settings.realtime {
        session.run().await
    } else {
        // Unpaced runs never yield; keep the ctrl-c task's worker free
        tokio::task::block_in_place(|| session.run_unpaced())
    };

    if let Some(frame) = session.renderer().last_frame() {
        println!("{}", frame);
    }

    info!("=== Session Results ===");
    info!("Ticks: {} ({:?})", summary.ticks, summary.stop_reason);
    info!(
        "Bombs: {} placed, {} detonated",
        summary.bombs_placed, summary.bombs_detonated
    );
    info!(
        "Walls: {} destroyed, {} remaining",
        summary.walls_destroyed, summary.walls_remaining
    );
    info!("Final State Hash: {}", hex::encode(summary.final_hash));

    if !verify {
        info!("No tick limit, replay check skipped");
        return Ok(());
    }

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let (replayed, _) = replay(initial, session.recorded_inputs());
    let replay_hash = replayed.compute_hash();
    info!("Replay State Hash: {}", hex::encode(replay_hash));

    if replay_hash == summary.final_hash {
        info!("DETERMINISM VERIFIED: Hashes match!");
    } else {
        warn!("DETERMINISM FAILURE: Hashes differ!");
    }

    Ok(())
}

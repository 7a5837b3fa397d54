use anyhow::{bail, Context};
use glam::{Vec2, Vec3};
use rand::prelude::*;

use follow_core::{
    CameraFollowController, FollowConfig, OrthographicProjection, Regime, DEFAULT_FIXED_STEP,
};

const DEFAULT_SEED: u64 = 42;
const CAMERA_Z: f32 = 10.0; // camera sits above the subject plane looking down -Z
const VIEW_HALF_HEIGHT: f32 = 5.0;
const VIEW_ASPECT: f32 = 16.0 / 9.0;
const JITTER: f32 = 0.05; // max per-step wobble while wandering (world units)

/// One leg of the scripted subject path.
#[derive(Clone, Copy, Debug)]
struct Phase {
    label: &'static str,
    seconds: f32,
    /// World units per second.
    velocity: Vec2,
    jitter: bool,
}

const SCRIPT: [Phase; 5] = [
    Phase {
        label: "walk right",
        seconds: 2.0,
        velocity: Vec2::new(2.0, 0.0),
        jitter: false,
    },
    Phase {
        label: "sprint right",
        seconds: 1.0,
        velocity: Vec2::new(12.0, 0.0),
        jitter: false,
    },
    Phase {
        label: "stand still",
        seconds: 4.5,
        velocity: Vec2::ZERO,
        jitter: false,
    },
    Phase {
        label: "jump",
        seconds: 0.6,
        velocity: Vec2::new(1.0, 7.0),
        jitter: false,
    },
    Phase {
        label: "wander down-left",
        seconds: 2.5,
        velocity: Vec2::new(-3.0, -2.5),
        jitter: true,
    },
];

struct Args {
    seed: u64,
    max_steps: Option<usize>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid seed {s:?}"))?,
        None => DEFAULT_SEED,
    };
    let max_steps = match args.next() {
        Some(s) => Some(s.parse().with_context(|| format!("invalid step count {s:?}"))?),
        None => None,
    };
    if args.next().is_some() {
        bail!("usage: follow-native [seed] [steps]");
    }
    Ok(Args { seed, max_steps })
}

fn regime_index(regime: Regime) -> usize {
    match regime {
        Regime::Idle => 0,
        Regime::Tracking => 1,
        Regime::HardLimit => 2,
        Regime::Recenter => 3,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = parse_args()?;
    let mut rng = StdRng::seed_from_u64(args.seed);
    let projection = OrthographicProjection::new(VIEW_HALF_HEIGHT, VIEW_ASPECT);
    let dt = DEFAULT_FIXED_STEP;

    let mut controller = CameraFollowController::new(FollowConfig::default())
        .context("default follow configuration rejected")?;
    let mut subject = Vec3::ZERO;
    let mut camera = Vec3::new(0.0, 0.0, CAMERA_Z);
    controller.initialize(camera, subject);

    log::info!(
        "[driver] seed={} dt={:.3}s bands: safe=({:.3},{:.3}) hard=({:.3},{:.3})",
        args.seed,
        dt,
        controller.config().bands.safe.x,
        controller.config().bands.safe.y,
        controller.config().bands.hard_limit.x,
        controller.config().bands.hard_limit.y
    );

    let mut regime_steps = [0usize; 4];
    let mut last_regime = controller.regime();
    let mut step_index = 0usize;

    'script: for phase in SCRIPT {
        log::info!("[driver] phase '{}' for {:.1}s", phase.label, phase.seconds);
        let steps = (phase.seconds / dt).round() as usize;
        for _ in 0..steps {
            if args.max_steps.is_some_and(|max| step_index >= max) {
                break 'script;
            }
            let mut movement = phase.velocity * dt;
            if phase.jitter {
                movement += Vec2::new(
                    rng.gen_range(-JITTER..=JITTER),
                    rng.gen_range(-JITTER..=JITTER),
                );
            }
            subject += movement.extend(0.0);

            camera = controller
                .step(subject, dt, &projection)
                .with_context(|| format!("step {step_index} failed"))?;

            let regime = controller.regime();
            regime_steps[regime_index(regime)] += 1;
            if regime != last_regime {
                log::info!(
                    "[driver] step {:>4}: {} -> {} subject=({:.2},{:.2}) camera=({:.2},{:.2})",
                    step_index,
                    last_regime.name(),
                    regime.name(),
                    subject.x,
                    subject.y,
                    camera.x,
                    camera.y
                );
                last_regime = regime;
            }
            step_index += 1;
        }
    }

    let overlay = controller.debug_band_geometry(&projection);
    log::info!(
        "[driver] done after {} steps: idle={} tracking={} hard-limit={} recenter={}; camera=({:.2},{:.2},{:.2}) overlay segments={}",
        step_index,
        regime_steps[0],
        regime_steps[1],
        regime_steps[2],
        regime_steps[3],
        camera.x,
        camera.y,
        camera.z,
        overlay.len()
    );
    Ok(())
}

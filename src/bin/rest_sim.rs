//! Headless rest-cycle simulator
//!
//! Drives the full pipeline without a game host: random skill gains are
//! intercepted by the hook, then a rest event flushes the bank. Useful
//! for eyeballing how settings shape the release curve.

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use restgain::{
    CurveParams, LevelCapped, ProgressionHook, RecordingHost, RestSettings, Session, SkillCurves,
    SkillId,
};

/// Headless rest-cycle simulator
#[derive(Parser, Debug)]
#[command(name = "rest_sim")]
#[command(about = "Simulate skill gains and a rest flush against configurable settings")]
struct Args {
    /// Optional TOML settings file (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Days the character rested
    #[arg(long, default_value_t = 0.33)]
    days_rested: f32,

    /// Whether the rest was interrupted
    #[arg(long)]
    interrupted: bool,

    /// Number of random skill-gain events before the rest
    #[arg(long, default_value_t = 200)]
    events: usize,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Use the experimental level-capped flush policy
    #[arg(long)]
    capped: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => match RestSettings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("failed to load config {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => RestSettings::default(),
    };
    if let Err(e) = settings.validate() {
        eprintln!("invalid config: {e}");
        std::process::exit(1);
    }

    let hook = ProgressionHook::new(settings.percent_exp_requires_rest);
    let mut session = if args.capped {
        let curves = SkillCurves::uniform(
            CurveParams {
                improve_mult: 1.5,
                improve_offset: 25.0,
            },
            1.9,
        );
        Session::with_policy(settings, Box::new(LevelCapped::new(curves)))
    } else {
        Session::new(settings)
    };

    let mut host = RecordingHost::new();
    host.character_level = 5;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for _ in 0..args.events {
        let skill = SkillId::ALL[rng.gen_range(0..SkillId::ALL.len())];
        let points = rng.gen_range(0.5..15.0f32);
        // Always a trainable skill id, so the outcome is never Unhandled.
        let _ = hook.intercept(
            session.buffer_mut(),
            &mut host,
            skill.raw(),
            points,
            false,
            0,
            0,
        );
    }

    println!("--- before rest ---");
    print_state(&session, &host);

    session.flush_rested(&mut host, args.days_rested, args.interrupted);

    println!(
        "--- after rest ({} days, interrupted: {}) ---",
        args.days_rested, args.interrupted
    );
    print_state(&session, &host);
}

fn print_state(session: &Session, host: &RecordingHost) {
    for skill in SkillId::ALL {
        let banked = session.buffer().experience(skill);
        let applied = host.applied_to(skill);
        if banked != 0.0 || applied != 0.0 {
            println!("{:<12} banked {:>8.2}  applied {:>8.2}", skill.name(), banked, applied);
        }
    }
}

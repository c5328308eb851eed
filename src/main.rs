//! Bullet hell headless driver
//!
//! Runs the simulation natively on a 60 Hz manual clock with a simple
//! dodging autopilot, then records the run in the high score table.
//! The browser build uses `web::WebGame` instead.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;
    use glam::Vec2;

    use bullet_hell::HighScores;
    use bullet_hell::hud::hud_text;
    use bullet_hell::persistence::JsonFileStore;
    use bullet_hell::platform::{Clock, ManualClock};
    use bullet_hell::settings::Settings;
    use bullet_hell::sim::geometry::centroid;
    use bullet_hell::sim::{Direction, GameEvent, Intent, Populations, Rect, Simulation};

    /// Autopilot moves at most once every N frames (about key-repeat rate)
    const AUTOPILOT_PERIOD: u64 = 3;
    /// Threats farther than this are ignored
    const THREAT_RANGE: f32 = 120.0;
    /// Keep this much clearance from every wall
    const WALL_CLEARANCE: f32 = 30.0;

    #[derive(Parser, Debug)]
    #[command(author, version, about = "Run the bullet hell simulation headless", long_about = None)]
    struct Args {
        /// Frames to simulate (60 per second)
        #[arg(long, default_value_t = 60 * 180)]
        frames: u64,
        /// RNG seed (overrides settings)
        #[arg(long)]
        seed: Option<u64>,
        /// Settings file
        #[arg(long, default_value = Settings::FILE_NAME)]
        settings: PathBuf,
        /// Directory for high scores and stored variables
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
        /// Start in practice mode (invincible)
        #[arg(long)]
        practice: bool,
        /// Stand still instead of dodging
        #[arg(long)]
        no_autopilot: bool,
    }

    /// Centers of every projectile that can be dodged, plus laser lines
    fn threats(pops: &Populations) -> (Vec<Vec2>, Vec<f32>) {
        let boxes = [
            &pops.top,
            &pops.side,
            &pops.boss,
            &pops.fast,
            &pops.rect,
            &pops.egg,
            &pops.exploding,
        ];
        let mut centers: Vec<Vec2> = boxes
            .into_iter()
            .flatten()
            .map(|b| b.rect.center())
            .collect();
        centers.extend(pops.diagonal.iter().map(|b| b.rect.center()));
        centers.extend(pops.zigzag.iter().map(|b| b.rect.center()));
        centers.extend(pops.fragments.iter().map(|b| b.rect.center()));
        centers.extend(pops.bouncing.iter().map(|b| b.rect.center()));
        centers.extend(pops.star.iter().map(|s| centroid(&s.points)));
        centers.extend(pops.triangle.iter().map(|t| centroid(&t.points)));
        centers.extend(pops.homing.iter().map(|b| b.rect.center()));
        centers.extend(pops.spiral.iter().map(|b| b.rect.center()));
        centers.extend(pops.radial.iter().map(|b| b.rect.center()));
        centers.extend(pops.wave.iter().map(|b| b.rect.center()));
        centers.extend(pops.boomerang.iter().map(|b| b.rect.center()));
        centers.extend(pops.split.iter().map(|b| b.rect.center()));

        let lines = pops
            .laser_indicators
            .iter()
            .map(|l| l.y)
            .chain(pops.lasers.iter().map(|l| l.y))
            .collect();
        (centers, lines)
    }

    fn danger(rect: &Rect, centers: &[Vec2], lines: &[f32]) -> f32 {
        let c = rect.center();
        let near: f32 = centers
            .iter()
            .map(|p| p.distance(c))
            .filter(|d| *d < THREAT_RANGE)
            .map(|d| 1.0 / d.max(1.0).powi(2))
            .sum();
        let beams = lines
            .iter()
            .filter(|y| **y >= rect.y - 5.0 && **y <= rect.bottom() + 5.0)
            .count();
        near + beams as f32
    }

    /// Pick the step (or none) that minimises nearby danger without hugging a wall
    fn autopilot(sim: &Simulation) -> Option<Direction> {
        let (centers, lines) = threats(&sim.populations);
        let step = sim.settings.player_step;
        let arena = sim.arena;
        let current = sim.player.rect();

        let safe = |r: &Rect| {
            r.x >= WALL_CLEARANCE
                && r.y >= WALL_CLEARANCE
                && r.right() <= arena.width - WALL_CLEARANCE
                && r.bottom() <= arena.height - WALL_CLEARANCE
        };

        let mut best: (Option<Direction>, f32) = (None, danger(&current, &centers, &lines));
        for dir in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            let mut moved = current;
            moved.translate(dir.unit() * step);
            if !safe(&moved) {
                continue;
            }
            let score = danger(&moved, &centers, &lines);
            if score < best.1 {
                best = (Some(dir), score);
            }
        }
        best.0
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        let args = Args::parse();
        log::info!("Bullet hell (headless) starting...");

        let mut settings = Settings::load_from(&args.settings);
        if args.practice {
            settings.practice = true;
        }
        let seed = args.seed.or(settings.seed).unwrap_or_else(rand::random);
        log::info!("Seed {}", seed);

        let scores_path = args.data_dir.join(HighScores::FILE_NAME);
        let mut scores = HighScores::load_from(&scores_path);
        let mut store = JsonFileStore::new(args.data_dir.join(JsonFileStore::FILE_NAME));

        let mut clock = ManualClock::new(0.0);
        let mut sim = Simulation::new(settings, seed, clock.now_ms());

        let mut finished = None;
        'frames: for frame in 0..args.frames {
            let now = clock.step_frame();
            if !args.no_autopilot && frame % AUTOPILOT_PERIOD == 0 {
                if let Some(dir) = autopilot(&sim) {
                    sim.apply_intent(Intent::Move(dir), now);
                }
            }
            for event in sim.tick(now) {
                match event {
                    GameEvent::GameOver(run) => {
                        finished = Some(run);
                        break 'frames;
                    }
                    GameEvent::Exploded { at } => log::debug!("Burst at {:?}", at),
                    GameEvent::LaserFired { y } => log::debug!("Laser fired at y={}", y),
                    GameEvent::DialogChanged(line) => log::debug!("Dialog: {}", line),
                    _ => {}
                }
            }
        }

        let hud = hud_text(&sim.snapshot(clock.now_ms()));
        match finished {
            Some(run) => {
                log::info!("{} | {} | difficulty {}", hud.score, hud.time, run.difficulty);
                let timestamp = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_secs_f64() * 1000.0)
                    .unwrap_or(0.0);
                if let Some(rank) = scores.add_score(&run, timestamp) {
                    log::info!("New high score, rank {}", rank);
                    if let Err(e) = scores.save_to(&scores_path) {
                        log::warn!("Could not save high scores: {}", e);
                    }
                }
            }
            None => log::info!("Still alive after {} frames: {} | {}", args.frames, hud.score, hud.time),
        }
        if let Some(best) = scores.sync_remote(&mut store) {
            log::info!("Best score on record: {}", best);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}

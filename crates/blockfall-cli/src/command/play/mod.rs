use std::time::Duration;

use blockfall_engine::{PieceSampler, PieceSeed};

use crate::{command::play::app::PlayApp, tui::Tui};

mod app;
mod screen;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Milliseconds between gravity steps
    #[clap(long, default_value_t = 1000)]
    drop_interval_ms: u64,
    /// Seed for the piece sequence (random if omitted)
    #[clap(long)]
    seed: Option<u64>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        drop_interval_ms,
        seed,
    } = arg;

    let sampler = match seed {
        Some(seed) => PieceSampler::with_seed(PieceSeed::from(*seed)),
        None => PieceSampler::new(),
    };
    let mut app = PlayApp::new(Duration::from_millis(*drop_interval_ms), sampler);

    Tui::new().run(&mut app)
}

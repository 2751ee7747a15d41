use std::{io, thread, time::Duration};

use anyhow::Context;
use log::info;

use gridlife::{
    engine::{Boundary, Engine},
    render, seed,
};

const ROWS: usize = 20;
const COLS: usize = 20;
const TICK: Duration = Duration::from_millis(500);
const BOUNDARY: Boundary = Boundary::Toroidal;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut out = io::stdout();
    render::clear(&mut out).context("failed to clear display")?;

    let stdin = io::stdin();
    let cells = seed::interactive(&mut stdin.lock(), &mut out, ROWS, COLS)
        .context("interactive seeding failed")?;
    let live = cells.iter().flatten().filter(|&&a| a).count();
    info!("starting: {ROWS}x{COLS} grid, {BOUNDARY:?} boundary, {live} live cells");

    let mut engine = Engine::from_cells(cells, BOUNDARY);
    loop {
        render::draw(&mut out, &engine).context("failed to draw frame")?;
        engine.step();
        thread::sleep(TICK);
    }
}

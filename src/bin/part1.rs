use anyhow::{Context, Result};
use cart_madness::{CLIArgs, StopPolicy};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let mut sim = cart_madness::read_track(&args.input_path, StopPolicy::FirstCrash)
        .with_context(|| {
            format!(
                "Failed to read track from given file({}).",
                args.input_path.display()
            )
        })?;

    let crash_pos = sim
        .run(args.max_ticks)
        .context("Failed to simulate carts until the first crash.")?;
    println!(
        "The first crash happens at {} after {} tick(s).",
        crash_pos,
        sim.tick_count()
    );
    if args.show_track {
        print!("{}", sim);
    }

    Ok(())
}

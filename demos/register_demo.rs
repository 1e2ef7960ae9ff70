//! Step a register from a seed and report its period.
//!
//! ```text
//! RUST_LOG=debug cargo run --example register_demo -- 101101001 --steps 12
//! ```

use clap::Parser;
use lfsr::Register;

#[derive(Parser, Debug)]
#[command(author, version, about = "Linear feedback shift register demo")]
struct Args {
    /// Seed as a string of '0'/'1' characters
    #[arg(default_value = "101101001")]
    seed: String,

    /// Number of steps to run before printing
    #[arg(short, long, default_value_t = 8)]
    steps: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut reg = Register::new(&args.seed)?;
    println!("{}\n", reg);

    for _ in 0..args.steps {
        reg.step();
    }
    println!("after {} steps:\n{}\n", args.steps, reg);

    let cycle = reg.cycle();
    println!(
        "cycle: transient {}, length {}",
        cycle.transient, cycle.length
    );

    // period() resets the register
    let period = reg.period();
    println!("period: {} (state back to {})", period, reg.state_as_bitstring());

    Ok(())
}

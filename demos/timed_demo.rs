use anyhow::{bail, Result};
use std::{thread, time::Duration};
use timed::{timed, TimedOptions};

fn fetch() -> Result<u8> {
    timed("fetch", |_| bail!("connection refused"))
}

// Exercises the stdout entry points, one report line per session.
fn main() -> Result<()> {
    timed::telemetry::init(None)?;

    timed!("load", thread::sleep(Duration::from_millis(100)));

    timed(TimedOptions::default(), |_| ());

    let sum: u64 = timed!("sum", 8, (1..=10u64).sum());
    println!("sum={sum}");

    if let Err(e) = fetch() {
        println!("error={e}");
    }

    Ok(())
}

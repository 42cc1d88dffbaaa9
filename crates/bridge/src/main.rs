use anyhow::Result;
use diff_bridge::{parse_args, serve, USAGE};
use line_diff::LineDiffer;
use log::info;
use std::io;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays JSON only
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(options) = parse_args(std::env::args().skip(1))? else {
        println!("{}", USAGE);
        return Ok(());
    };

    info!("Starting diff bridge with {:?}", options);
    let differ = LineDiffer::with_options(options);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let handled = serve(stdin.lock(), stdout.lock(), &differ)?;

    info!("Input closed after {} requests", handled);
    Ok(())
}

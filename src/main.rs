use clap::Parser;
use ipcview::cli::Args;
use ipcview::run;

fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let args = Args::parse();
    let rendered = run(&args)?;
    print!("{}", rendered);

    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use xshell::{cmd, Shell};

#[derive(Debug, Parser)]
struct XTask {
    #[clap(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Format, build, lint, and test across every feature combination.
    Ci,
    /// Format the code.
    Format,
    /// Build the crate with and without std.
    Build,
    /// Run clippy over every target.
    Clippy,
    /// Run the tests, including the C entry points.
    Test,
    /// Run the tests under Miri to check the FFI layer's pointer handling.
    Miri,
    /// Run the benchmarks.
    Bench {
        /// Additional arguments to pass to the benchmarks.
        #[clap(allow_hyphen_values = true, trailing_var_arg = true)]
        args: Vec<String>,
    },
}

fn main() -> Result<()> {
    let xtask = XTask::parse();

    let sh = Shell::new()?;
    sh.change_dir(project_root());

    match xtask.cmd.unwrap_or(Command::Ci) {
        Command::Ci => ci(&sh),
        Command::Format => format(&sh),
        Command::Build => build(&sh),
        Command::Clippy => clippy(&sh),
        Command::Test => test(&sh),
        Command::Miri => miri(&sh),
        Command::Bench { args } => bench(&sh, args),
    }
}

fn ci(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo fmt --check").run()?;
    build(sh)?;
    clippy(sh)?;
    test(sh)
}

fn format(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo fmt --all").run()?;
    Ok(())
}

fn build(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo build --no-default-features").run()?;
    cmd!(sh, "cargo build --all-targets --all-features").run()?;
    Ok(())
}

fn clippy(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo clippy --all-features --tests --benches").run()?;
    cmd!(sh, "cargo clippy --no-default-features").run()?;
    Ok(())
}

fn test(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo test --all-features").run()?;
    cmd!(sh, "cargo test --no-default-features --lib").run()?;
    Ok(())
}

fn miri(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo +nightly miri test --all-features --lib").env("PROPTEST_CASES", "16").run()?;
    Ok(())
}

fn bench(sh: &Shell, args: Vec<String>) -> Result<()> {
    cmd!(sh, "cargo bench --bench benchmarks -- {args...}").run()?;
    Ok(())
}

fn project_root() -> std::path::PathBuf {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap_or(manifest_dir).to_path_buf()
}

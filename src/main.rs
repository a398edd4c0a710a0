use anyhow::Context;
use binocalc::config::Config;
use binocalc::session::{self, Session};
use binocalc::term_frontend;
use clap::Parser;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Expand (x+1)^n with Pascal's triangle and evaluate it exactly")]
pub struct Args {
    /// Degree n, prompted for when omitted
    #[arg(allow_negative_numbers = true)]
    n: Option<String>,
    /// Value of x, prompted for when omitted
    #[arg(allow_negative_numbers = true)]
    x: Option<String>,
    /// Always write the report, to this path
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Skip the term by term trace
    #[arg(long)]
    no_trace: bool,
    /// Read configuration from this file instead of the user config dir
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load(),
    };
    if args.no_trace {
        config.show_trace = false;
    }

    let mut session = Session::new(config);
    session.out_path = args.out;

    let mut input = stdin().lock();
    let mut out = stdout().lock();
    term_frontend::print_banner(&mut out)?;

    let n = match &args.n {
        Some(text) => session::parse_degree(text).context("reading n")?,
        None => term_frontend::prompt_degree(&mut input, &mut out)?,
    };
    let x = match &args.x {
        Some(text) => session::parse_base(text).context("reading x")?,
        None => term_frontend::prompt_base(&mut input, &mut out)?,
    };

    let outcome = session.run(n, x)?;
    term_frontend::print_outcome(&mut out, &outcome, &session.config)?;

    if let Some(path) = session
        .persist(&outcome)
        .with_context(|| format!("writing report to {}", session.report_path().display()))?
    {
        writeln!(out, "timings and result written to '{}'", path.display())?;
    }
    Ok(())
}

//!
//! This is the Knuckleball server.
//!
#![warn(missing_docs)]

use std::sync::{Arc, Mutex};

use anyhow::Context as _;
use clap::Parser;
#[cfg(feature = "jemalloc")]
use jemallocator::Jemalloc;
use tokio::net::TcpListener;

mod shell;

use knuckleball_interpreter::logger::Logger;
use knuckleball_interpreter::server;
use knuckleball_interpreter::{Context, Settings};

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Debug, Clone, PartialEq, clap::Parser)]
#[clap(about, author, version)]
struct Options {
    /// Address to listen on.
    #[clap(long, default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on.
    #[clap(short, long, required_unless_present = "shell")]
    port: Option<u16>,

    /// Password clients must authenticate with (none if empty).
    #[clap(long, default_value = "")]
    password: String,

    /// File the statement log is appended to (standard output if empty).
    #[clap(long, default_value = "")]
    logfile: String,

    /// Number of digits printed after the decimal point of floats.
    #[clap(long = "floatprecision", default_value = "3", allow_hyphen_values(true))]
    float_precision: i32,

    /// Tolerance used when comparing floats.
    #[clap(
        long = "floatcomparisontolerance",
        default_value = "0.0000001",
        allow_hyphen_values(true)
    )]
    float_comparison_tolerance: f32,

    /// Run an interactive shell instead of the server.
    #[clap(long)]
    shell: bool,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

fn main() -> anyhow::Result<()> {
    let opts: Options = Options::parse();
    init_tracing();

    println!("Running Knuckleball {}", env!("CARGO_PKG_VERSION"));
    println!("PID: {}", std::process::id());
    println!();

    let settings = Settings::new(opts.float_precision, opts.float_comparison_tolerance)
        .context("invalid float precision or comparison tolerance")?;
    let logger = Logger::from_path(&opts.logfile)
        .with_context(|| format!("could not open the log file `{}`", opts.logfile))?;
    let mut context = Context::new(settings, logger);

    if opts.shell {
        return shell::interactive(&mut context);
    }

    let port = opts
        .port
        .context("a port is required to run the server")?;
    let runtime = tokio::runtime::Runtime::new().context("could not start the async runtime")?;

    runtime.block_on(async move {
        let listener = TcpListener::bind((opts.bind.as_str(), port))
            .await
            .with_context(|| format!("could not listen on {}:{}", opts.bind, port))?;
        tracing::info!(bind = opts.bind.as_str(), port, "server listening");

        server::serve(listener, Arc::new(Mutex::new(context)), opts.password)
            .await
            .context("the server stopped accepting connections")
    })
}

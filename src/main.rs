use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{arg, ArgMatches, Command};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use parcel_dispatch::input::InputReader;
use parcel_dispatch::offers::OfferTable;
use parcel_dispatch::problem::Problem;

fn cli() -> Command {
    Command::new("parcel-dispatch")
        .about("Estimates parcel delivery costs and delivery times for a limited fleet")
        .arg(
            arg!(--problem <KEY> "Problem to solve (1: cost estimation, 2: delivery time estimation); shows a menu when omitted")
                .value_parser(["1", "2"])
                .required(false),
        )
        .arg(
            arg!(--input <PATH> "Read the batch from a file instead of stdin")
                .value_parser(clap::value_parser!(PathBuf))
                .required(false),
        )
        .arg(
            arg!(--offers <PATH> "JSON offer table replacing the built-in offers")
                .value_parser(clap::value_parser!(PathBuf))
                .required(false),
        )
        .arg(
            arg!(--format <FORMAT> "Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
}

/// Logs go to stderr so that stdout carries only the report.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let offers = match matches.get_one::<PathBuf>("offers") {
        Some(path) => OfferTable::from_path(path)?,
        None => OfferTable::default(),
    };
    info!("using {} offers", offers.offers().len());

    let source: Box<dyn BufRead> = match matches.get_one::<PathBuf>("input") {
        Some(path) => Box::new(BufReader::new(
            File::open(path).map_err(|err| format!("cannot open input file '{}': '{}'", path.display(), err))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let mut reader = InputReader::new(source, io::stderr());

    let problem = match matches.get_one::<String>("problem") {
        Some(key) => Problem::from_key(key)?,
        None => reader.pick_problem()?,
    };

    let batch = reader.read_batch(problem)?;
    let report = problem.solve(&batch, &offers)?;

    let (_, mut prompt) = reader.into_inner();
    writeln!(prompt, "<----------- Output ----------->")?;

    let mut out = BufWriter::new(io::stdout().lock());
    match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => writeln!(out, "{}", report.to_json()?)?,
        _ => {
            for line in report.lines() {
                writeln!(out, "{}", line)?;
            }
        }
    }
    out.flush()?;

    Ok(())
}

fn main() {
    init_tracing();

    let matches = cli().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

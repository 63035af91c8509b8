use clap::{crate_name, crate_version, error::ErrorKind, App, AppSettings, Arg, ArgMatches};
use indoc::indoc;
use owo_colors::OwoColorize;
use std::process;

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod utils;
use utils::{
    config::{parse_count, parse_seed, Config},
    error::{Result, SampleError},
    sample::sample,
    sampler::ShuffleMode,
};

fn app() -> App<'static> {
    App::new(crate_name!())
        .version(crate_version!())
        .about("Randomly subsample the same records from one or more FASTA/Q files")
        .override_usage(concat!(
            env!("CARGO_PKG_NAME"),
            " -w <int> [-t <int>] [-s <int>] -i <in1> -o <out1> [-i <in2> -o <out2>]..."
        ))
        .after_help(indoc! {"
            Inputs may be gzip compressed, outputs are always plain text. FASTQ records
            are written with '@' and '+', FASTA records with '>' and no quality block.
            If more than one input is given, the same record positions are taken from
            each file, as needed for paired-end reads. All files are assumed to hold the
            same number of records in the same order."
        })
        .global_setting(AppSettings::ArgRequiredElseHelp)
        .global_setting(AppSettings::DeriveDisplayOrder)
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("input FASTA/Q file, '-' for stdin, repeat for paired files")
                .multiple_occurrences(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("output file, overwritten if present, one per input in the same order")
                .multiple_occurrences(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("want")
                .short('w')
                .long("want")
                .value_name("int[G|M|K]")
                .help("number of records to keep, must be less than the total")
                .takes_value(true),
        )
        .arg(
            Arg::new("total")
                .short('t')
                .long("total")
                .value_name("int[G|M|K]")
                .help(indoc! {"
                    total number of records in each file, counted from the first
                    input when omitted (setting it avoids reading the file twice)"
                })
                .takes_value(true),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("INT")
                .help("random number generator seed, derived from the clock when omitted")
                .takes_value(true),
        )
        .arg(
            Arg::new("uniform")
                .short('u')
                .long("uniform")
                .help("draw swap partners from [0, l] instead of the historical [0, l)"),
        )
}

fn values(args: &ArgMatches, name: &str) -> Vec<String> {
    args.get_many::<String>(name)
        .map_or_else(Vec::new, |v| v.cloned().collect())
}

fn build_config(args: &ArgMatches) -> Result<Config> {
    let keep = match args.get_one::<String>("want") {
        Some(v) => parse_count("number of records to keep", v)?,
        None => 0,
    };
    let total = args
        .get_one::<String>("total")
        .map(|v| parse_count("total number of records", v))
        .transpose()?;
    let seed = args
        .get_one::<String>("seed")
        .map(|v| parse_seed(v))
        .transpose()?;
    let mode = if args.is_present("uniform") {
        ShuffleMode::Inclusive
    } else {
        ShuffleMode::Exclusive
    };
    Config::new(
        values(args, "input"),
        values(args, "output"),
        seed,
        total,
        keep,
        mode,
    )
}

fn report(err: &SampleError) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{} {err}", "Error:".red().bold());
    } else {
        eprintln!("Error: {err}");
    }
    if err.is_config() {
        eprintln!("\n{}", app().render_usage());
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = match app().try_get_matches() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            let _ = e.print();
            process::exit(1);
        }
        Err(e) => e.exit(),
    };

    if let Err(e) = build_config(&args).and_then(|config| sample(&config)) {
        report(&e);
        process::exit(1);
    }
}

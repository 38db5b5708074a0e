use majority::gen_sequences::{
    gen_random_sequence, gen_shuffled_majority_sequence, gen_simple_sequence, gen_tied_sequence,
};
use majority::utils::init_tracing;
use majority::{FindMajority, MajorityFinder, MajorityFinderNaive, Outcome};

use anyhow::ensure;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

const DEFAULT_N: usize = 1_000_000;
const MAX_RANDOM_VALUE: usize = 100_000;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Half of the input size: every case has `2n` elements.
    #[arg(short, long, default_value_t = DEFAULT_N)]
    n: usize,
    /// Seed of the random generator. Random if omitted.
    #[arg(short, long, env = "MAJORITY_SEED")]
    seed: Option<u64>,
    /// Use the quadratic finder instead of the linear one.
    #[arg(long)]
    naive: bool,
    /// Print one JSON object per case.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    case: &'a str,
    finder: &'static str,
    input_size: usize,
    expected: Option<usize>,
    outcome: Outcome<'a, usize>,
}

fn run_case<F: FindMajority>(
    finder: &F,
    case: &str,
    expected: Option<usize>,
    v: &[usize],
    json: bool,
) -> anyhow::Result<()> {
    let outcome = finder.find(v)?;
    if json {
        let report = Report {
            case,
            finder: finder.name(),
            input_size: v.len(),
            expected,
            outcome,
        };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    let (result, comparisons, additions) = outcome.into_triple();
    println!("{case}\nexpected result is {expected:?}");
    println!("result: {result:?}\ncomparisons: {comparisons}\nadditions: {additions}\n");
    Ok(())
}

fn run<F: FindMajority>(finder: &F, args: &Args, rng: &mut StdRng) -> anyhow::Result<()> {
    let n = args.n;

    let v = gen_simple_sequence(n);
    run_case(finder, "simple case", Some(1), &v, args.json)?;

    let v = gen_shuffled_majority_sequence(n, rng);
    run_case(finder, "scrambled case", Some(1), &v, args.json)?;

    let v = gen_tied_sequence(n, rng);
    run_case(finder, "scrambled tied case", None, &v, args.json)?;

    let v = gen_random_sequence(2 * n, MAX_RANDOM_VALUE, rng);
    run_case(finder, "complete random case", None, &v, args.json)
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    ensure!(args.n > 0, "n must be positive");

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);

    if !args.json {
        println!("input size: {}, seed: {}\n", 2 * args.n, seed);
    }

    if args.naive {
        run(&MajorityFinderNaive, &args, &mut rng)
    } else {
        run(&MajorityFinder, &args, &mut rng)
    }
}

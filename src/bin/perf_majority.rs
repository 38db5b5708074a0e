use majority::gen_sequences::{
    gen_adversarial_sequence, gen_random_sequence, gen_shuffled_majority_sequence,
    gen_simple_sequence, gen_tied_sequence,
};
use majority::utils::{init_tracing, type_of, TimingQueries};
use majority::{FindMajority, MajorityFinder, MajorityFinderNaive};

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

const N_RUNS: usize = 5;
const DEFAULT_SEED: u64 = 42;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Case {
    Simple,
    Shuffled,
    Tied,
    Random,
    Adversarial,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long)]
    n: usize,
    #[arg(short, long, value_enum, default_value_t = Case::Shuffled)]
    case: Case,
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Also time the quadratic finder. Slow on the simple and adversarial cases.
    #[arg(long)]
    naive: bool,
}

fn test_find<F: FindMajority>(finder: &F, v: &[usize]) -> anyhow::Result<()> {
    let n = v.len();
    let mut t = TimingQueries::new(N_RUNS, n);
    let mut outcome = finder.find(v)?;

    for _ in 0..N_RUNS {
        t.start();
        outcome = black_box(finder.find(black_box(v))?);
        t.stop();
    }

    let (t_min, t_max, t_avg) = t.get_float();
    let counts = outcome.counts();
    println!(
        "FIND: [ds_name: {}, n: {}, min_time (ns): {:.2}, max_time (ns): {:.2}, avg_time (ns): {:.2}, comparisons: {}, additions: {}, marker_writes: {}, num_runs: {}]",
        type_of(finder),
        n,
        t_min,
        t_max,
        t_avg,
        counts.comparisons,
        counts.additions,
        counts.marker_writes,
        N_RUNS
    );
    println!("IGNORE: {:?}", outcome.majority());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    anyhow::ensure!(args.n > 0, "n must be positive");

    let mut rng = StdRng::seed_from_u64(args.seed);
    let n = args.n;
    let v = match args.case {
        Case::Simple => gen_simple_sequence(n),
        Case::Shuffled => gen_shuffled_majority_sequence(n, &mut rng),
        Case::Tied => gen_tied_sequence(n, &mut rng),
        Case::Random => gen_random_sequence(2 * n, 100_000, &mut rng),
        Case::Adversarial => gen_adversarial_sequence(n),
    };
    println!("n = {}, case = {:?}", v.len(), args.case);

    test_find(&MajorityFinder, &v)?;
    if args.naive {
        test_find(&MajorityFinderNaive, &v)?;
    }
    Ok(())
}

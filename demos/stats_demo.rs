use clap::Parser;
use probe_lab::HashVariant;
use probe_lab::ProbingScheme;
use probe_lab::Table;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "capacity", default_value_t = 10_000)]
    capacity: usize,

    #[arg(short = 'l', long = "load_factor", default_value_t = 0.8)]
    load_factor: f64,

    #[arg(long = "hash", default_value = "md5")]
    hash: HashVariant,

    #[arg(long = "seed", default_value_t = 0)]
    seed: u64,
}

fn main() {
    let args = Args::parse();
    let num_keys = (args.capacity as f64 * args.load_factor) as usize;

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let keys: Vec<u64> = (0..num_keys)
        .map(|_| rng.random_range(0..1_000_000))
        .collect();

    println!(
        "Filling tables of capacity {} with {} keys ({} hashing)",
        args.capacity, num_keys, args.hash
    );

    for scheme in ProbingScheme::ALL {
        let mut table: Table<u64> = match Table::new(args.capacity, scheme, args.hash) {
            Ok(table) => table,
            Err(err) => {
                eprintln!("{err}");
                return;
            }
        };

        let mut num_failures = 0;
        for &key in &keys {
            if table.insert(key).is_err() {
                num_failures += 1;
            }
        }

        println!();
        println!("--- {scheme} probing ---");
        println!(
            "Final load factor: {:.2}%",
            table.load_factor() * 100.0
        );
        table.print_probe_histogram();
        table.debug_stats().print();
        println!(
            "Number of failed inserts: {} ({:.02}%)",
            num_failures,
            num_failures as f64 / num_keys.max(1) as f64 * 100.0
        );
    }
}

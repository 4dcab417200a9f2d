use bitwidth_fixtures::emit;

use std::io::{self, BufWriter};
use std::{env, process};

use getopts::Options;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

//-----------------------------------------------------------------------------

fn main() {
    let config = Config::new();

    let mut rng: Box<dyn RngCore> = match config.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    if let Err(f) = emit::write_fixtures(&mut output, rng.as_mut(), config.count) {
        eprintln!("Cannot write fixtures: {}", f);
        process::exit(1);
    }
}

//-----------------------------------------------------------------------------

pub struct Config {
    pub count: usize,
    pub seed: Option<u64>,
}

impl Config {
    pub fn new() -> Config {
        let args: Vec<String> = env::args().collect();
        let program = args[0].clone();

        let mut opts = Options::new();
        opts.optopt("n", "count", "number of fixtures (default 256)", "INT");
        opts.optopt("s", "seed", "seed the generator for a reproducible run", "INT");
        opts.optflag("h", "help", "print this help");
        let matches = match opts.parse(&args[1..]) {
            Ok(m) => m,
            Err(f) => {
                eprintln!("{}", f.to_string());
                process::exit(1);
            }
        };

        let mut config = Config {
            count: emit::DEFAULT_COUNT,
            seed: None,
        };
        if matches.opt_present("h") {
            let header = format!("Usage: {} [options]", program);
            print!("{}", opts.usage(&header));
            process::exit(0);
        }
        if let Some(s) = matches.opt_str("n") {
            match s.parse::<usize>() {
                Ok(n) => {
                    config.count = n;
                },
                Err(f) => {
                    eprintln!("--count: {}", f.to_string());
                    process::exit(1);
                },
            }
        }
        if let Some(s) = matches.opt_str("s") {
            match s.parse::<u64>() {
                Ok(n) => {
                    config.seed = Some(n);
                },
                Err(f) => {
                    eprintln!("--seed: {}", f.to_string());
                    process::exit(1);
                },
            }
        }
        if !matches.free.is_empty() {
            eprintln!("Unexpected arguments: {}", matches.free.join(" "));
            process::exit(1);
        }

        config
    }
}

//-----------------------------------------------------------------------------

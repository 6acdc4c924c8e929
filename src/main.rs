// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The benchmark driver: it sweeps an ordered list of capacities and an
//! ordered list of item counts, builds (or loads) one instance per
//! combination, runs the solver subset appropriate to that size, and reports
//! per solver total value, total weight, selection size, and wall clock time.

use std::time::Instant;

use clap::Parser;
use serde::Serialize;

use knapbench::instance::{read_instance, GeneratorBuilder};
use knapbench::{Backtracking, DynProg, Exhaustive, Greedy, Instance, Solver};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Sweeps the four knapsack solvers over increasing item counts and
/// capacities and reports one timed measure per (capacity, size, solver)
/// combination. Beyond the configurable exponential limit, only the
/// polynomial solvers (dynamic programming and greedy) are run.
struct Args {
    /// Path to a csv instance substituted for generated data at the size
    /// given by --fname-size
    #[clap(short, long)]
    fname: Option<String>,
    /// The sweep size at which the csv instance (if any) is used
    #[clap(long, default_value = "1000")]
    fname_size: usize,
    /// Comma separated list of item counts to sweep
    #[clap(
        short,
        long,
        value_delimiter = ',',
        default_value = "15,1000,2000,5000,10000,20000,40000,80000,160000,320000"
    )]
    nb_items: Vec<usize>,
    /// Comma separated list of capacities to sweep
    #[clap(short, long, value_delimiter = ',', default_value = "10000,100000,1000000")]
    capacities: Vec<usize>,
    /// The seed of the synthetic instance generator
    #[clap(short, long, default_value = "20100")]
    seed: u64,
    /// The item count above which the exponential solvers are skipped
    #[clap(long, default_value = "20")]
    exponential_limit: usize,
    /// Print one json record per measure instead of plain text
    #[clap(short, long)]
    json: bool,
}

/// One timed measure, as serialized by the --json output mode.
#[derive(Debug, Serialize)]
struct Measure<'a> {
    capacity: usize,
    nb_items: usize,
    solver: &'a str,
    exact: bool,
    total_value: f64,
    total_weight: usize,
    nb_selected: usize,
    duration_ms: f64,
}

fn main() {
    let args = Args::parse();

    let generator = GeneratorBuilder::default()
        .seed(args.seed)
        .build()
        .unwrap();

    for &capacity in &args.capacities {
        if !args.json {
            println!("==== capacity: {capacity} ====");
        }
        for &nb_items in &args.nb_items {
            let instance = match &args.fname {
                Some(fname) if nb_items == args.fname_size => load_or_die(fname),
                _ => generator.generate(nb_items),
            };
            if !args.json {
                println!("---- items: {nb_items} ----");
            }

            // the exponential solvers are only invoked on the small sizes
            let solvers: Vec<Box<dyn Solver>> = if nb_items <= args.exponential_limit {
                vec![
                    Box::new(Exhaustive),
                    Box::new(DynProg),
                    Box::new(Greedy),
                    Box::new(Backtracking),
                ]
            } else {
                vec![Box::new(DynProg), Box::new(Greedy)]
            };

            for solver in &solvers {
                run_one(solver.as_ref(), &instance, capacity, nb_items, args.json);
            }
        }
    }
}

fn run_one(solver: &dyn Solver, instance: &Instance, capacity: usize, nb_items: usize, json: bool) {
    let start = Instant::now();
    let solution = solver.solve(instance, capacity);
    let duration = start.elapsed();

    let solution = match solution {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("{} failed: {e}", solver.name());
            std::process::exit(1);
        }
    };

    if json {
        let measure = Measure {
            capacity,
            nb_items,
            solver: solver.name(),
            exact: solver.is_exact(),
            total_value: solution.total_value,
            total_weight: solution.total_weight,
            nb_selected: solution.nb_selected(),
            duration_ms: duration.as_secs_f64() * 1000.0,
        };
        println!("{}", serde_json::to_string(&measure).unwrap());
    } else {
        println!("[{}]", solver.name());
        println!(
            "total value: {:.2}, total weight: {}",
            solution.total_value, solution.total_weight
        );
        println!("selected items: {}", solution.nb_selected());
        println!(
            "{} took {:.3} ms",
            solver.name(),
            duration.as_secs_f64() * 1000.0
        );
        println!();
    }
}

fn load_or_die(fname: &str) -> Instance {
    match read_instance(fname) {
        Ok(instance) => instance,
        Err(e) => {
            eprintln!("cannot load {fname}: {e}");
            std::process::exit(1);
        }
    }
}

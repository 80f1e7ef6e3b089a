use std::error::Error;
use std::io::{self, Read};
use std::process;

use clap::{App, Arg};
use log::debug;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use sokoban_search::config::SolverConfig;
use sokoban_search::level::Level;
use sokoban_search::solver::Solver;
use sokoban_search::LoadLevel;

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-search")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds a solution to a sokoban level (not necessarily the shortest one)")
        .arg(
            Arg::with_name("no-dead-squares")
                .long("no-dead-squares")
                .help("don't precompute squares a box can never be pushed onto"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("print only the final state and the number of moves"),
        )
        .arg(Arg::with_name("file").help("level in XSB format, read from stdin if not given"))
        .get_matches();

    let level = match matches.value_of("file") {
        Some(path) => path.load_level(),
        None => read_stdin(),
    };
    let level = level.unwrap_or_else(|err| {
        eprintln!("Failed to load level: {}", err);
        process::exit(1);
    });
    debug!("Input:\n{}", level);

    let config = SolverConfig::new(!matches.is_present("no-dead-squares"));
    let quiet = matches.is_present("quiet");

    let mut solver = Solver::new(config);
    let steps = solver.solve(&level).unwrap_or_else(|err| {
        eprintln!("Invalid level: {}", err);
        process::exit(1);
    });

    for (i, step) in steps.iter().enumerate() {
        if quiet && i + 1 < steps.len() {
            continue;
        }
        println!("Step {}: player={}", i + 1, step.player);
        println!("{}", step);
    }
    if !steps.is_empty() {
        println!("Moves: {}", steps.len() - 1);
    }

    if !quiet {
        stats_table(&solver).printstd();
    }

    if steps.is_empty() {
        eprintln!("No solution");
        process::exit(1);
    }
}

fn read_stdin() -> Result<Level, Box<dyn Error>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input.parse()?)
}

fn stats_table(solver: &Solver) -> Table {
    let stats = solver.stats();
    let rows = [
        ("Dead squares", solver.dead_squares().len()),
        ("States created", stats.total_created()),
        ("Reached duplicates", stats.total_duplicates()),
        ("Unique states", solver.state_count()),
        ("Visited", stats.total_visited()),
        ("Left in queue", solver.queue_len()),
        ("Max depth visited", stats.max_depth()),
    ];

    let mut table = Table::new();
    for &(name, value) in &rows {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&value.separated_string()),
        ]));
    }
    table
}

// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]

pub mod config;
pub mod data;
pub mod level;
pub mod parser;
pub mod solver;
pub mod square_set;

mod fs;

use std::error::Error;
use std::path::Path;

use crate::config::SolverConfig;
use crate::level::Level;
use crate::solver::{SolverErr, SolverOk};

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

impl<P: AsRef<Path>> LoadLevel for P {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let level = fs::read_file(self)?;
        let level = level.parse()?;
        Ok(level)
    }
}

pub trait Solve {
    fn solve(&self, config: SolverConfig) -> Result<SolverOk, SolverErr>;
}

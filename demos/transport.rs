/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

use num_traits::NumAssign;
use rs_transport::tpfile::{self, Instance};
use rs_transport::{report, Matrix, Method};
use std::error::Error;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::result::Result;
use std::str::FromStr;

use rustop::opts;
use time::OffsetDateTime;

/// The example with three plants and four warehouses.
fn builtin<T: From<u16> + Copy>() -> Result<Instance<T>, Box<dyn Error>> {
    let costs = [[12, 15, 18, 35], [35, 48, 52, 28], [8, 12, 20, 32]]
        .iter()
        .map(|row| row.iter().map(|&c| T::from(c)).collect())
        .collect();
    Ok(Instance {
        costs: Matrix::from_rows(costs)?,
        supply: [2500, 1800, 1200].iter().map(|&s| T::from(s)).collect(),
        demand: [1500, 1200, 1000, 800].iter().map(|&d| T::from(d)).collect(),
    })
}

/// Ask for the method on standard input.
fn ask_method() -> Result<String, Box<dyn Error>> {
    println!("\nChoose method:");
    for (k, method) in Method::ALL.iter().enumerate() {
        println!("  {}) {}", k + 1, method.name());
    }
    print!("\nEnter 1, 2, or 3: ");
    io::stdout().flush()?;

    let mut choice = String::new();
    io::stdin().lock().read_line(&mut choice)?;
    Ok(choice)
}

fn run<T>(file: Option<&str>, method: Method, quiet: bool) -> Result<(), Box<dyn Error>>
where
    T: NumAssign + PartialOrd + Copy + FromStr + Display + From<u16>,
    T::Err: Display,
{
    let instance = match file {
        Some(file) => tpfile::read_from_file::<T>(file)?,
        None => builtin()?,
    };
    let problem = instance.into_problem()?;

    let tstart = OffsetDateTime::now_utc();
    let solution = method.solve(&problem)?;
    let tend = OffsetDateTime::now_utc();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_solution(&mut out, &problem, &solution, !quiet)?;
    writeln!(out, "Steps               : {}", solution.num_steps())?;
    writeln!(out, "Time (seconds)      : {:.6}", (tend - tstart).as_seconds_f64())?;

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Compute an initial feasible solution of a transportation problem.";
        opt method:Option<String>, desc:"Method (1/nwc, 2/lcm, 3/vam); asked for if missing";
        opt floating_point:bool, desc:"Use floating point values";
        opt quiet:bool, desc:"Do not print the intermediate steps";
        param file:Option<String>, desc:"Instance file name (default: built-in example)";
    }
    .parse_or_exit();

    let choice = match args.method {
        Some(m) => m,
        None => ask_method()?,
    };
    let method: Method = match choice.parse() {
        Ok(method) => method,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    if args.floating_point {
        run::<f64>(args.file.as_deref(), method, args.quiet)
    } else {
        run::<i64>(args.file.as_deref(), method, args.quiet)
    }
}

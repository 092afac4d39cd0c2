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

use rs_transport::{report, tpfile};
use rs_transport::{DummyKind, Method};

use std::error::Error;

const TESTS: &[(&str, DummyKind, [i64; 3])] = &[
    ("tests/data/worked.tp", DummyKind::Demand, [117800, 71600, 71600]),
    ("tests/data/shortage.tp", DummyKind::Supply, [59, 61, 61]),
];

#[test]
fn test_read_and_solve() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::builder().is_test(true).try_init();

    for &(file, dummy, expected) in TESTS {
        let p = tpfile::read_from_file::<i64>(file)?.into_problem()?;
        assert_eq!(p.dummy(), dummy, "Instance: {}", file);

        for (&method, &value) in Method::ALL.iter().zip(&expected) {
            let sol = method.solve(&p)?;
            assert_eq!(sol.total_cost(), value, "Instance: {} method: {}", file, method);

            let mut out = Vec::new();
            tpfile::write_solution(&mut out, &sol)?;
            let text = String::from_utf8(out)?;
            assert_eq!(text.lines().next(), Some(format!("s {}", value).as_str()));
            assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), sol.cost.terms.len());
        }
    }

    Ok(())
}

#[test]
fn test_floating_point() -> Result<(), Box<dyn Error>> {
    let p = tpfile::read_from_file::<f64>("tests/data/fractional.tp")?.into_problem()?;
    assert_eq!(p.dummy(), DummyKind::None);
    let sol = Method::NorthWestCorner.solve(&p)?;
    assert_eq!(sol.total_cost(), 10.5);
    Ok(())
}

#[test]
fn test_floating_point_unbalanced() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::builder().is_test(true).try_init();

    let p = tpfile::read_from_file::<f64>("tests/data/unbalanced.tp")?.into_problem()?;
    assert_eq!(p.dummy(), DummyKind::Demand);
    assert!((p.demand()[2] - 0.05).abs() < 1e-9);

    for (&method, &value) in Method::ALL.iter().zip(&[1.125, 1.05, 1.05]) {
        let sol = method.solve(&p)?;
        assert!(
            (sol.total_cost() - value).abs() < 1e-9,
            "method: {} cost: {}",
            method,
            sol.total_cost()
        );
        for j in 0..2 {
            assert!((sol.allocation.col(j).sum::<f64>() - p.demand()[j]).abs() < 1e-9);
        }
        for i in 0..3 {
            assert!((sol.allocation.row(i).iter().sum::<f64>() - p.supply()[i]).abs() < 1e-9);
        }
    }
    Ok(())
}

#[test]
fn test_report() -> Result<(), Box<dyn Error>> {
    let p = tpfile::read_from_file::<i64>("tests/data/worked.tp")?.into_problem()?;
    let sol = Method::LeastCost.solve(&p)?;

    let mut out = Vec::new();
    report::write_solution(&mut out, &p, &sol, true)?;
    let text = String::from_utf8(out)?;

    assert!(text.contains("METHOD: LEAST COST METHOD (LCM)"));
    assert!(text.contains("Dummy demand added for balancing"));
    assert!(text.contains("Min cost: S3→D1 ($8), allocate 1200 units"));
    assert!(text.contains("Allocate remaining 1000 units from S2 to dummy D5*"));
    assert!(text.contains("total transportation cost = 12×300+15×1200+18×1000+28×800+8×1200=71600"));

    Ok(())
}

#[test]
fn test_missing_file() {
    assert!(tpfile::read_from_file::<i64>("tests/data/does-not-exist.tp").is_err());
}

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

use rs_transport::{least_cost, north_west_corner, vogel};
use rs_transport::{Cell, DummyKind, Line, Method, Problem, Rule, Solution};

use std::error::Error;

type Instance = (&'static [&'static [i64]], &'static [i64], &'static [i64]);

/// Instances with the expected costs of NWC, LCM and VAM.
const TESTS: &[(Instance, [i64; 3])] = &[
    (
        (
            &[&[12, 15, 18, 35], &[35, 48, 52, 28], &[8, 12, 20, 32]],
            &[2500, 1800, 1200],
            &[1500, 1200, 1000, 800],
        ),
        [117800, 71600, 71600],
    ),
    ((&[&[4, 6], &[5, 3]], &[10, 5], &[12, 8]), [59, 61, 61]),
    (
        (&[&[2, 3, 1], &[5, 4, 8], &[5, 6, 8]], &[5, 8, 7], &[4, 6, 10]),
        [111, 89, 89],
    ),
    (
        (
            &[&[19, 30, 50, 10], &[70, 30, 40, 60], &[40, 8, 70, 20]],
            &[7, 9, 18],
            &[5, 8, 7, 14],
        ),
        [1015, 814, 779],
    ),
    ((&[&[5, 1, 3]], &[10], &[2, 3, 4]), [25, 25, 25]),
    ((&[&[1, 2], &[3, 4]], &[0, 4], &[4, 0]), [12, 12, 12]),
    ((&[&[1, 2], &[3, 4]], &[5, 5], &[5, 5]), [25, 25, 25]),
];

fn problem(&(costs, supply, demand): &Instance) -> Problem<i64> {
    Problem::new(
        costs.iter().map(|row| row.to_vec()).collect(),
        supply.to_vec(),
        demand.to_vec(),
    )
    .unwrap()
}

fn worked_example() -> Problem<i64> {
    problem(&TESTS[0].0)
}

/// Check row and column sums, non-negativity and monotonicity.
fn check_feasible(p: &Problem<i64>, sol: &Solution<i64>) {
    let x = &sol.allocation;
    for i in 0..p.num_sources() {
        assert_eq!(x.row(i).iter().sum::<i64>(), p.supply()[i], "row {}", i);
    }
    for j in 0..p.num_destinations() {
        assert_eq!(x.col(j).sum::<i64>(), p.demand()[j], "column {}", j);
    }
    assert!(x.iter().all(|(_, q)| q >= 0));

    let mut supply = p.supply().to_vec();
    let mut demand = p.demand().to_vec();
    for step in &sol.steps {
        assert!(step.quantity >= 0);
        assert!(step.supply.iter().zip(&supply).all(|(&a, &b)| 0 <= a && a <= b));
        assert!(step.demand.iter().zip(&demand).all(|(&a, &b)| 0 <= a && a <= b));
        supply = step.supply.clone();
        demand = step.demand.clone();
    }
    assert!(supply.iter().chain(&demand).all(|&x| x == 0));
}

#[test]
fn test_expected_costs() -> Result<(), Box<dyn Error>> {
    for (instance, expected) in TESTS {
        let p = problem(instance);
        for (&method, &value) in Method::ALL.iter().zip(expected) {
            let sol = method.solve(&p)?;
            assert_eq!(sol.method, method);
            assert_eq!(sol.total_cost(), value, "{} on {:?}", method, instance);
            check_feasible(&p, &sol);
        }
    }
    Ok(())
}

#[test]
fn test_balance() {
    for (instance, _) in TESTS {
        let (_, supply, demand) = *instance;
        let p = problem(instance);
        let (s, d): (i64, i64) = (supply.iter().sum(), demand.iter().sum());
        assert_eq!(p.supply().iter().sum::<i64>(), p.demand().iter().sum::<i64>());
        let kind = if s > d {
            DummyKind::Demand
        } else if s < d {
            DummyKind::Supply
        } else {
            DummyKind::None
        };
        assert_eq!(p.dummy(), kind);
    }
}

#[test]
fn test_dummy_excluded() -> Result<(), Box<dyn Error>> {
    for (instance, _) in TESTS {
        let p = problem(instance);
        for method in Method::ALL.iter() {
            let sol = method.solve(&p)?;
            let total = sol.cost.terms.iter().map(|t| t.value()).sum::<i64>();
            assert_eq!(total, sol.total_cost());
            assert!(sol
                .cost
                .terms
                .iter()
                .all(|t| !p.is_dummy_source(t.cell.src) && !p.is_dummy_destination(t.cell.snk)));
        }
    }
    Ok(())
}

#[test]
fn test_deterministic() -> Result<(), Box<dyn Error>> {
    for (instance, _) in TESTS {
        let p = problem(instance);
        for method in Method::ALL.iter() {
            assert_eq!(method.solve(&p)?, method.solve(&p)?);
        }
    }
    Ok(())
}

#[test]
fn test_worked_example_first_steps() -> Result<(), Box<dyn Error>> {
    let p = worked_example();
    assert_eq!(p.dummy(), DummyKind::Demand);
    assert_eq!(p.num_destinations(), 5);
    assert_eq!(p.demand()[4], 1000);

    let nwc = north_west_corner(&p)?;
    assert_eq!(nwc.steps[0].cell, Cell::new(0, 0));
    assert_eq!(nwc.steps[0].quantity, 1500);
    assert_eq!(nwc.steps[0].rule, Rule::Corner);

    let lcm = least_cost(&p)?;
    assert_eq!(lcm.steps[0].cell, Cell::new(2, 0));
    assert_eq!(lcm.steps[0].quantity, 1200);
    assert_eq!(lcm.steps[0].rule, Rule::LeastCost { cost: 8 });

    let vam = vogel(&p)?;
    assert_eq!(vam.steps[0].cell, Cell::new(1, 4));
    assert_eq!(vam.steps[0].quantity, 1000);
    assert_eq!(
        vam.steps[0].rule,
        Rule::Penalty {
            line: Line::Row(1),
            penalty: 28
        }
    );

    Ok(())
}

#[test]
fn test_vogel_sequence() -> Result<(), Box<dyn Error>> {
    let sol = vogel(&worked_example())?;
    let steps = sol
        .steps
        .iter()
        .map(|s| match s.rule {
            Rule::Penalty { line, penalty } => (line, penalty, s.cell, s.quantity),
            _ => panic!("unexpected rule {:?}", s.rule),
        })
        .collect::<Vec<_>>();
    assert_eq!(
        steps,
        vec![
            (Line::Row(1), 28, Cell::new(1, 4), 1000),
            (Line::Row(1), 7, Cell::new(1, 3), 800),
            (Line::Row(2), 4, Cell::new(2, 0), 1200),
            (Line::Row(0), 3, Cell::new(0, 0), 300),
            (Line::Row(0), 3, Cell::new(0, 1), 1200),
            (Line::Row(0), 0, Cell::new(0, 2), 1000),
        ]
    );
    Ok(())
}

#[test]
fn test_least_cost_fills_dummy_last() -> Result<(), Box<dyn Error>> {
    let sol = least_cost(&worked_example())?;
    let cells = sol.steps.iter().map(|s| (s.cell, s.quantity)).collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            (Cell::new(2, 0), 1200),
            (Cell::new(0, 0), 300),
            (Cell::new(0, 1), 1200),
            (Cell::new(0, 2), 1000),
            (Cell::new(1, 3), 800),
            (Cell::new(1, 4), 1000),
        ]
    );
    assert_eq!(sol.steps[5].rule, Rule::DummyFill);
    Ok(())
}

#[test]
fn test_floating_point() -> Result<(), Box<dyn Error>> {
    let p = Problem::new(vec![vec![2.5, 1.0], vec![1.5, 3.0]], vec![1.5, 2.5], vec![2.0, 2.0])?;
    let sol = north_west_corner(&p)?;
    assert_eq!(sol.num_steps(), 3);
    assert_eq!(sol.total_cost(), 10.5);

    for method in Method::ALL.iter() {
        let sol = method.solve(&p)?;
        for i in 0..2 {
            assert_eq!(sol.allocation.row(i).iter().sum::<f64>(), p.supply()[i]);
        }
    }
    Ok(())
}

#[test]
fn test_shape_mismatch() {
    assert!(Problem::new(vec![vec![1, 2]], vec![1, 2], vec![1, 2]).is_err());
    assert!(Problem::<i64>::new(vec![], vec![], vec![]).is_err());
}

/// Check that an `f64` allocation meets supply and demand up to rounding.
fn check_feasible_f64(p: &Problem<f64>, sol: &Solution<f64>) {
    let x = &sol.allocation;
    for i in 0..p.num_sources() {
        let shipped = x.row(i).iter().sum::<f64>();
        assert!((shipped - p.supply()[i]).abs() < 1e-9, "row {}: {}", i, shipped);
    }
    for j in 0..p.num_destinations() {
        let shipped = x.col(j).sum::<f64>();
        assert!((shipped - p.demand()[j]).abs() < 1e-9, "column {}: {}", j, shipped);
    }
    assert!(x.iter().all(|(_, q)| q >= 0.0));
}

#[test]
fn test_floating_point_with_dummy() -> Result<(), Box<dyn Error>> {
    // 0.1 + 0.2 != 0.3, the dummy destination only absorbs the rounding error
    let p = Problem::new(vec![vec![1.0], vec![2.0]], vec![0.1, 0.2], vec![0.3])?;
    assert_eq!(p.dummy(), DummyKind::Demand);
    assert!(p.demand()[1] > 0.0 && p.demand()[1] < 1e-12);

    for method in Method::ALL.iter() {
        let sol = method.solve(&p)?;
        check_feasible_f64(&p, &sol);
        assert!((sol.total_cost() - 0.5).abs() < 1e-9, "{}: {}", method, sol.total_cost());
    }

    // same with a dummy source
    let p = Problem::new(vec![vec![1.0, 2.0]], vec![0.3], vec![0.1, 0.2])?;
    assert_eq!(p.dummy(), DummyKind::Supply);
    for method in Method::ALL.iter() {
        let sol = method.solve(&p)?;
        check_feasible_f64(&p, &sol);
        assert!((sol.total_cost() - 0.5).abs() < 1e-9, "{}: {}", method, sol.total_cost());
    }

    Ok(())
}

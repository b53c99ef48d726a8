use super::*;
use crate::helpers::models::*;
use crate::utils::GenericError;

fn create_customers(size: usize) -> Vec<Customer> {
    (0..size).map(|id| Customer { id, x: id as Float, y: 0., reward: 10 }).collect()
}

#[test]
fn can_build_problem_with_symmetric_rounded_distances() {
    let problem = create_test_problem(&[(0., 0., 0), (1., 1., 10), (3., 2., 20), (0., 0., 0)], 2, 10.);

    assert_eq!(problem.distance(0, 1), 1.41);
    assert_eq!(problem.distance(1, 0), 1.41);
    assert_eq!(problem.distance(1, 2), 2.24);
    assert_eq!(problem.distance(2, 2), 0.);
    assert_eq!(problem.distance(0, 3), 0.);
}

#[test]
fn can_identify_depots_and_customers() {
    let problem = create_line_problem(&[10, 20, 30], 1, 10.);

    assert_eq!(problem.source(), 0);
    assert_eq!(problem.sink(), 4);
    assert!(problem.is_depot(0));
    assert!(problem.is_depot(4));
    assert!(!problem.is_depot(2));
    assert_eq!(problem.customer_ids().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(problem.reward(3), 30);
    assert_eq!(problem.customer(5), None);
    assert_eq!(problem.round_trip(2), 4.);
    assert!(problem.is_reachable(3));
    assert!(!create_line_problem(&[10, 20, 30], 1, 3.).is_reachable(2));
}

#[test]
fn can_check_reachability() {
    let problem = create_star_problem(&[(1., 0., 10), (5., 0., 10)], 1, 4.);

    assert_eq!(problem.round_trip(1), 2.);
    assert!(problem.is_reachable(1));
    assert!(!problem.is_reachable(2));
}

#[test]
fn can_calculate_sequence_length() {
    let problem = create_line_problem(&[10, 20, 30], 1, 10.);

    assert_eq!(problem.sequence_length(&[0, 1, 2, 3, 4]), 4.);
    assert_eq!(problem.sequence_length(&[0, 3, 1, 4]), 8.);
    assert_eq!(problem.sequence_length(&[0]), 0.);
}

parameterized_test! {can_reject_invalid_problem, (customers, tmax, expected), {
    let result = build_problem("invalid", 1, tmax, customers);

    assert_eq!(result.err(), Some(GenericError::from(expected)));
}}

can_reject_invalid_problem! {
    case01_no_sink: (create_customers(1), 10., "expecting at least two customers (source and sink), got: 1"),
    case02_wrong_id: (
        create_customers(3).into_iter().map(|c| Customer { id: c.id * 2, ..c }).collect(),
        10.,
        "expecting customer id 1, got: 2"
    ),
    case03_negative_tmax: (create_customers(3), -1., "tmax must be a finite non-negative number, got: -1"),
    case04_infinite_tmax: (create_customers(3), Float::INFINITY, "tmax must be a finite non-negative number, got: inf"),
}

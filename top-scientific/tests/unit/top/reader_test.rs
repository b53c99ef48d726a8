use super::*;
use crate::helpers::SMALL_INSTANCE;
use top_core::utils::GenericError;

#[test]
fn can_read_small_instance() {
    let problem = SMALL_INSTANCE.to_string().read_top("small").expect("cannot read problem");

    assert_eq!(problem.id, "small");
    assert_eq!(problem.n_trucks, 2);
    assert_eq!(problem.tmax, 9.);
    assert_eq!(problem.customers().len(), 10);
    assert_eq!(problem.sink(), 9);
    assert_eq!(problem.reward(7), 40);
    assert_eq!(problem.distance(0, 2), 2.24);
    assert_eq!(problem.distance(2, 0), 2.24);
}

#[test]
fn can_read_from_buf_reader_and_skip_blank_lines() {
    let text = "n 3\nm 1\ntmax 5\n0\t0\t0\n\n1\t1\t7\n2\t0\t0\n\n";

    let problem = BufReader::new(text.as_bytes()).read_top("blank").expect("cannot read problem");

    assert_eq!(problem.customers().len(), 3);
    assert_eq!(problem.reward(1), 7);
    assert_eq!(problem.tmax, 5.);
}

parameterized_test! {can_report_malformed_input, (text, expected), {
    let result = text.to_string().read_top("malformed");

    assert_eq!(result.err(), Some(GenericError::from(expected)));
}}

can_report_malformed_input! {
    case01_empty: ("", "unexpected end of input at line 1"),
    case02_no_tmax: ("n 2\nm 1\n", "unexpected end of input at line 3"),
    case03_bad_fleet: ("n 2\nm one\ntmax 5\n", "cannot parse 'one' in line 2"),
    case04_no_tmax_value: ("n 2\nm 1\ntmax\n", "missing value at position 1 in line 3"),
    case05_bad_reward: ("n 2\nm 1\ntmax 5\n0\t0\t0\n1\t1\tabc\n", "cannot parse 'abc' in line 5"),
    case06_short_row: ("n 2\nm 1\ntmax 5\n0\t0\n", "missing value at position 2 in line 4"),
    case07_single_row: ("n 1\nm 1\ntmax 5\n0\t0\t0\n", "expecting at least two customer rows, got: 1"),
    case08_negative_tmax: (
        "n 2\nm 1\ntmax -5\n0\t0\t0\n1\t1\t0\n",
        "tmax must be a finite non-negative number, got: -5"
    ),
}

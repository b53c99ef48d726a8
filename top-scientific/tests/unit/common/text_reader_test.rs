use super::*;

parameterized_test! {can_parse_token, (line, position, expected), {
    let expected: Result<f64, &str> = expected;
    let result = parse_token::<f64>(line, position, 7);

    assert_eq!(result, expected.map_err(GenericError::from));
}}

can_parse_token! {
    case01_first: ("1.5\t2\t3", 0, Ok(1.5)),
    case02_last: ("1.5\t2\t3", 2, Ok(3.)),
    case03_spaces: ("tmax  20.5", 1, Ok(20.5)),
    case04_missing: ("1.5\t2", 2, Err("missing value at position 2 in line 7")),
    case05_invalid: ("1.5\tx\t3", 1, Err("cannot parse 'x' in line 7")),
}

#[test]
fn can_detect_unexpected_end_of_input() {
    let mut reader = BufReader::new("first\n".as_bytes());
    let mut buffer = String::new();

    assert!(read_required_line(&mut reader, &mut buffer, 1).is_ok());
    assert_eq!(buffer, "first\n");
    assert_eq!(
        read_required_line(&mut reader, &mut buffer, 2),
        Err(GenericError::from("unexpected end of input at line 2"))
    );
}

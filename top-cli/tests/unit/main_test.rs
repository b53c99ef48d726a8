use super::*;

#[test]
fn can_parse_solve_subcommand() {
    let matches = get_app()
        .try_get_matches_from(vec!["top-cli", "solve", "instance.txt", "--runs", "2"])
        .expect("cannot parse arguments");

    assert!(matches!(matches.subcommand(), Some(("solve", _))));
}

#[test]
fn can_reject_unknown_subcommand() {
    assert!(get_app().try_get_matches_from(vec!["top-cli", "plot", "instance.txt"]).is_err());
}

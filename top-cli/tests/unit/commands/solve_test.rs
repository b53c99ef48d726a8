use super::*;
use std::fs;

const SMALL_PROBLEM_PATH: &str = "../data/instances/small.txt";
const GRID_PROBLEM_PATH: &str = "../data/instances/grid.21.txt";
const CONFIG_PATH: &str = "../data/config/config.json";

fn create_dummy_buffer(_: Option<File>) -> BufWriter<Box<dyn Write>> {
    BufWriter::new(Box::new(std::io::sink()))
}

fn get_matches(args: &[&str]) -> ArgMatches {
    get_solve_app()
        .try_get_matches_from(std::iter::once("solve").chain(args.iter().copied()))
        .expect("cannot parse arguments")
}

#[test]
fn can_require_problem_path() {
    assert!(get_solve_app().try_get_matches_from(vec!["solve"]).is_err());
}

#[test]
fn can_reject_unknown_method() {
    let args = vec!["solve", SMALL_PROBLEM_PATH, "--method", "genetic"];

    assert!(get_solve_app().try_get_matches_from(args).is_err());
}

#[test]
fn can_parse_multiple_problems_and_methods() {
    let matches = get_matches(&[SMALL_PROBLEM_PATH, GRID_PROBLEM_PATH, "-m", "savings", "-m", "local-search"]);

    assert_eq!(matches.get_many::<String>(PROBLEM_ARG_NAME).map(|paths| paths.count()), Some(2));
    assert_eq!(get_methods(&matches), Ok(vec![Method::Savings, Method::LocalSearch]));
}

#[test]
fn can_use_all_methods_by_default() {
    let matches = get_matches(&[SMALL_PROBLEM_PATH]);

    assert_eq!(get_methods(&matches), Ok(Method::all()));
}

#[test]
fn can_read_problems_with_file_name_as_id() {
    let matches = get_matches(&[SMALL_PROBLEM_PATH, GRID_PROBLEM_PATH]);

    let problems = read_problems(&matches).expect("cannot read problems");

    let ids = problems.iter().map(|problem| problem.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["small.txt", "grid.21.txt"]);
}

#[test]
fn can_report_missing_problem_file() {
    let matches = get_matches(&["../data/instances/unknown.txt"]);

    let result = run_solve(&matches, create_dummy_buffer);

    assert!(result.is_err_and(|err| err.to_string().contains("cannot open problem file")));
}

#[test]
fn can_report_invalid_runs() {
    let matches = get_matches(&[SMALL_PROBLEM_PATH, "--runs", "two"]);

    assert!(run_solve(&matches, create_dummy_buffer).is_err());
}

#[test]
fn can_solve_problem_and_write_outputs() {
    let directory = tempfile::tempdir().expect("cannot create temp directory");
    let result_path = directory.path().join("report.csv");
    let result_path = result_path.to_string_lossy().to_string();
    let solutions_path = directory.path().to_string_lossy().to_string();
    let matches = get_matches(&[
        SMALL_PROBLEM_PATH,
        "--config",
        CONFIG_PATH,
        "--runs",
        "1",
        "--seed",
        "42",
        "--method",
        "savings",
        "--out-result",
        result_path.as_str(),
        "--out-solutions",
        solutions_path.as_str(),
    ]);

    run_solve(&matches, create_write_buffer).expect("cannot solve problem");

    let report = fs::read_to_string(result_path.as_str()).expect("cannot read report");
    let lines = report.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "instance,method,best_reward,robust_reward,best_stochastic_reward,robust_stochastic_reward"
    );
    assert!(lines[1].starts_with("small.txt,savings,"));

    let solution = fs::read_to_string(directory.path().join("small.txt.savings.txt")).expect("cannot read solution");
    assert!(solution.lines().last().is_some_and(|line| line.starts_with("total: routes")));
}

#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use std::io::BufReader;
use std::path::Path;
use top_cli::extensions::solve::config::{Config, read_config};
use top_cli::extensions::solve::report::{Method, ReportRow, RunSettings, solve_with_method, write_report};
use top_core::models::Problem;
use top_core::utils::GenericError;
use top_scientific::top::{TopProblem, TopSolution};

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const METHOD_ARG_NAME: &str = "method";
const RUNS_ARG_NAME: &str = "runs";
const TIME_ARG_NAME: &str = "max-time";
const CONFIG_ARG_NAME: &str = "config";
const RANDOM_SEED_NAME: &str = "seed";
const LOG_ARG_NAME: &str = "log";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_SOLUTIONS_ARG_NAME: &str = "out-solutions";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves Team Orienteering Problem instances and reports rewards of found solutions")
        .arg(
            Arg::new(PROBLEM_ARG_NAME)
                .help("Sets the problem files to use")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new(METHOD_ARG_NAME)
                .help("Specifies solution methods, all methods are used when omitted")
                .short('m')
                .long(METHOD_ARG_NAME)
                .required(false)
                .action(ArgAction::Append)
                .value_parser(["constructive", "savings", "local-search"]),
        )
        .arg(
            Arg::new(RUNS_ARG_NAME)
                .help("Specifies amount of independent runs per instance and method")
                .short('r')
                .long(RUNS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time of a single run in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_NAME)
                .help("Specifies a base seed for random generators")
                .short('s')
                .long(RANDOM_SEED_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether search progress should be logged")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for csv report output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_SOLUTIONS_ARG_NAME)
                .help("Specifies path to directory where best solutions are written")
                .long(OUT_SOLUTIONS_ARG_NAME)
                .required(false),
        )
}

pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };
    let config = match parse_int_value::<usize>(matches, RUNS_ARG_NAME, "amount of runs")? {
        Some(runs) => Config { runs: Some(runs), ..config },
        None => config,
    };

    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_NAME, "random seed")?;
    let max_time = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")?;
    let is_logging = matches.get_flag(LOG_ARG_NAME);
    let settings = RunSettings::new(&config, seed, max_time, is_logging);

    let methods = get_methods(matches)?;
    let problems = read_problems(matches)?;
    let out_solutions = matches.get_one::<String>(OUT_SOLUTIONS_ARG_NAME);

    let rows = problems.iter().try_fold(Vec::<ReportRow>::new(), |mut rows, problem| {
        methods.iter().try_for_each(|&method| {
            let result = solve_with_method(problem, method, &settings);

            if let Some(directory) = out_solutions {
                let path = Path::new(directory).join(format!("{}.{method}.txt", problem.id));
                let file = create_file(path.to_string_lossy().as_ref(), "solution")?;
                result.best.write_top(&mut BufWriter::new(file))?;
            }

            rows.push(result.row);

            Ok::<_, GenericError>(())
        })?;

        Ok::<_, GenericError>(rows)
    })?;

    let out_file = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_file = out_file.transpose()?;

    write_report(out_writer_func(out_file), rows.as_slice())
}

fn get_methods(matches: &ArgMatches) -> GenericResult<Vec<Method>> {
    match matches.get_many::<String>(METHOD_ARG_NAME) {
        Some(methods) => methods.map(|method| method.parse::<Method>()).collect(),
        None => Ok(Method::all()),
    }
}

fn read_problems(matches: &ArgMatches) -> GenericResult<Vec<Problem>> {
    matches
        .get_many::<String>(PROBLEM_ARG_NAME)
        .map(|paths| paths.collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter()
        .map(|path| -> GenericResult<Problem> {
            let id = Path::new(path).file_name().map(|name| name.to_string_lossy().to_string()).unwrap_or(path.clone());

            BufReader::new(open_file(path, "problem")?)
                .read_top(id.as_str())
                .map_err(|err| format!("cannot read problem '{path}': '{err}'").into())
        })
        .collect()
}

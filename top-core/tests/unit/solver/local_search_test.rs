use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::{FakeRandom, create_test_environment};

fn create_small_config() -> LocalSearchConfig {
    LocalSearchConfig {
        max_iterations: 100,
        short_simulation_iterations: 100,
        long_simulation_iterations: 1000,
        ..LocalSearchConfig::default()
    }
}

#[test]
fn can_improve_or_keep_greedy_solution() {
    let problem = create_star_problem(
        &[(1., 0., 10), (2., 1., 20), (0., 3., 30), (-2., 1., 15), (-1., -2., 25), (3., -3., 5), (1., 2., 40)],
        2,
        8.,
    );
    let environment = create_test_environment(3);
    let (greedy, _) = generate_greedy_solution(&problem, &SavingsHeuristic, environment.random.as_ref());

    let (best, robust) = local_search_metaheuristic(&problem, &create_small_config(), &environment);

    assert!(best.reward() >= greedy.reward());
    assert!(robust.reward() <= best.reward());
    [&best, &robust].into_iter().for_each(|solution| {
        assert!(solution.len() <= problem.n_trucks);
        assert!(solution.routes().all(|route| route.is_feasible(&problem)));
        assert_valid_solution(&problem, solution);
    });
}

#[test]
fn can_find_all_customers_on_line() {
    let problem = create_line_problem(&[10, 20, 30], 1, 4.);
    let environment = create_test_environment(0);

    let (best, _) = local_search_metaheuristic(&problem, &create_small_config(), &environment);

    assert_eq!(best.reward(), 60);
    assert_eq!(best.length(), 4.);
}

parameterized_test! {can_accept_worse_solution_with_probability, (delta, temperature, sample, expected), {
    let random = FakeRandom::new(vec![], vec![sample]);

    assert_eq!(is_accepted(delta, temperature, &random), expected);
}}

can_accept_worse_solution_with_probability! {
    case01_hot_accepts: (-10, 1000., 0.5, true),
    case02_cold_rejects: (-10, 1., 0.5, false),
    case03_boundary_rejects: (-10, 10., (-1. as Float).exp(), false),
    case04_frozen_rejects: (-10, 0., 0., false),
}

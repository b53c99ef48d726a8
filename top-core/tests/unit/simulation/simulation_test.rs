use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::create_test_random;
use crate::models::RouteId;

#[test]
fn can_return_deterministic_reward_when_budget_is_large() {
    let problem = create_line_problem(&[10, 20, 30], 1, 100.);
    let route = create_test_route(&problem, 0, &[1, 2, 3]);
    let random = create_test_random(0);

    assert_eq!(route.stochastic_reward(&problem, 1000, random.as_ref()), 60.);
}

#[test]
fn can_return_zero_for_empty_or_zero_trials() {
    let problem = create_line_problem(&[10, 0], 1, 100.);
    let random = create_test_random(0);

    let no_reward = create_test_route(&problem, 0, &[2]);
    let trivial = Route::new(RouteId(1), vec![0, 3], 3., 0);
    let route = create_test_route(&problem, 2, &[1]);

    assert_eq!(no_reward.stochastic_reward(&problem, 100, random.as_ref()), 0.);
    assert_eq!(trivial.stochastic_reward(&problem, 100, random.as_ref()), 0.);
    assert_eq!(route.stochastic_reward(&problem, 0, random.as_ref()), 0.);
}

#[test]
fn can_estimate_reward_of_tight_route() {
    let problem = create_line_problem(&[10, 20, 30], 1, 4.);
    let route = create_test_route(&problem, 0, &[1, 2, 3]);
    let random = create_test_random(0);

    let reward = route.stochastic_reward(&problem, 10_000, random.as_ref());

    assert!(reward > 0.3 * 60.);
    assert!(reward < 0.8 * 60.);
}

#[test]
fn can_keep_reward_within_bounds() {
    let random = create_test_random(1);

    (7..=12).map(|tmax| tmax as Float).for_each(|tmax| {
        let problem = create_star_problem(&[(1., 0., 10), (2., 1., 20), (0., 3., 30), (-2., 1., 15)], 1, tmax);
        let route = create_test_route(&problem, 0, &[1, 2, 3, 4]);

        let reward = route.stochastic_reward(&problem, 500, random.as_ref());

        assert!((0. ..=route.reward() as Float).contains(&reward));
    });
}

#[test]
fn can_sum_rewards_of_routes() {
    let problem = create_line_problem(&[10, 20, 30, 40], 2, 100.);
    let solution = create_test_solution(&problem, &[&[1, 2], &[3, 4]]);
    let random = create_test_random(0);

    assert_eq!(solution.stochastic_reward(&problem, 100, random.as_ref()), 100.);
}

#[test]
fn can_sample_leg_with_expected_mean() {
    let random = create_test_random(2);
    let mut rng = random.get_rng();
    let leg = LegTime::new(10.);

    let mean = (0..20_000).map(|_| leg.sample(&mut rng)).sum::<Float>() / 20_000.;

    assert!((mean - 10.).abs() < 0.05);
    assert_eq!(LegTime::new(0.).sample(&mut rng), 0.);
}

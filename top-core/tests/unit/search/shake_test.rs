use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::create_test_random;

#[test]
fn can_rebuild_discarded_route_with_new_ids() {
    let problem = create_line_problem(&[10, 20, 30], 1, 4.);
    let solution = Solution::new(vec![create_test_route(&problem, 5, &[1, 2, 3])]);
    let random = create_test_random(0);

    let result = shake(&problem, &solution, 0., 1., random.as_ref());

    assert_eq!(result.route_ids(), vec![RouteId(6)]);
    assert_eq!(result.route(RouteId(6)).map(|route| route.customers().to_vec()), Some(vec![0, 1, 2, 3, 4]));
    assert_eq!(result.reward(), 60);
    assert_valid_solution(&problem, &result);
}

#[test]
fn can_allocate_new_id_for_released_customer() {
    let problem = create_star_problem(&[(1., 0., 10), (0., 1., 20)], 2, 2.5);
    let solution = create_test_solution(&problem, &[&[1], &[2]]);
    let random = create_test_random(0);

    let result = Shake { alpha: 0.5, beta: 0.5 }.search(&problem, &solution, random.as_ref());

    assert_eq!(result.len(), 2);
    assert_eq!(result.reward(), 30);
    assert!(result.route_ids().contains(&RouteId(2)));
    assert_valid_solution(&problem, &result);
}

#[test]
fn can_keep_solution_feasible() {
    let problem = create_star_problem(
        &[(1., 0., 10), (2., 1., 20), (0., 3., 30), (-2., 1., 15), (-1., -2., 25), (3., -3., 5), (1., 2., 40)],
        2,
        8.,
    );
    let random = create_test_random(5);
    let initial = savings_heuristic(&problem, 0.5, 0.9, None, random.as_ref());

    (0..20).fold(initial, |solution, _| {
        let result = shake(&problem, &solution, 0.5, 0.3, random.as_ref());

        assert!(result.len() <= problem.n_trucks);
        assert!(result.routes().all(|route| route.is_feasible(&problem)));
        assert_valid_solution(&problem, &result);

        result
    });
}

#[test]
fn can_handle_empty_solution() {
    let problem = create_line_problem(&[10], 1, 1.);
    let random = create_test_random(0);

    let result = shake(&problem, &Solution::default(), 0.5, 0.5, random.as_ref());

    assert!(result.is_empty());
}

use super::*;
use rand::RngCore;

#[test]
fn can_reproduce_sequence_with_the_same_seed() {
    let first = DefaultRandom::new_with_seed(7);
    let second = DefaultRandom::new_with_seed(7);

    let first = (0..10).map(|_| first.uniform_int(0, 100)).collect::<Vec<_>>();
    let second = (0..10).map(|_| second.uniform_int(0, 100)).collect::<Vec<_>>();

    assert_eq!(first, second);
}

#[test]
fn can_generate_int_within_inclusive_bounds() {
    let random = DefaultRandom::new_with_seed(0);

    let values = (0..1000).map(|_| random.uniform_int(1, 3)).collect::<Vec<_>>();

    assert!(values.iter().all(|value| (1..=3).contains(value)));
    assert!(values.contains(&1));
    assert!(values.contains(&3));
    assert_eq!(random.uniform_int(5, 5), 5);
}

#[test]
fn can_generate_real_within_bounds() {
    let random = DefaultRandom::new_with_seed(0);

    assert!((0..1000).map(|_| random.uniform_real(0., 1.)).all(|value| (0. ..1.).contains(&value)));
    assert_eq!(random.uniform_real(2., 2.), 2.);
}

#[test]
fn can_handle_hit_probability_edges() {
    let random = DefaultRandom::new_with_seed(0);

    assert!((0..100).all(|_| !random.is_hit(0.)));
    assert!((0..100).all(|_| random.is_hit(1.)));
    assert!((0..100).all(|_| random.is_hit(2.)));
}

#[test]
fn can_share_state_with_rng() {
    let random = DefaultRandom::new_with_seed(3);
    let mut rng = random.get_rng();
    let reference = DefaultRandom::new_with_seed(3);
    let mut reference_rng = reference.get_rng();

    assert_eq!(rng.next_u64(), reference_rng.next_u64());
    assert_eq!(random.uniform_int(0, 1000), reference.uniform_int(0, 1000));
}

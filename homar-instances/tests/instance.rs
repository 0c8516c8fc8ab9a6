use homar_instances::{Params, Selection, TestCase, MAX_ITEM_SIZE};

fn create_test_case() -> TestCase {
    TestCase {
        capacity: 7,
        max_value: 9,
        sizes: vec![1, 3, 4, 5],
        values: vec![1, 4, 5, 9],
    }
}

#[test]
fn test_generate_is_deterministic() {
    let params = Params {
        num_items: 50,
        max_value: 100,
        capacity: 250,
    };
    let a = TestCase::generate(&[7u8; 32], &params).unwrap();
    let b = TestCase::generate(&[7u8; 32], &params).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_generate_differs_per_seed() {
    let params = Params {
        num_items: 50,
        max_value: 100,
        capacity: 250,
    };
    let a = TestCase::generate(&[1u8; 32], &params).unwrap();
    let b = TestCase::generate(&[2u8; 32], &params).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_generate_respects_ranges() {
    let params = Params {
        num_items: 500,
        max_value: 13,
        capacity: 100,
    };
    let case = TestCase::generate(&[3u8; 32], &params).unwrap();
    assert_eq!(case.num_items(), 500);
    assert_eq!(case.capacity, 100);
    assert!(case.sizes.iter().all(|&s| (1..=MAX_ITEM_SIZE).contains(&s)));
    assert!(case.values.iter().all(|&v| (1..=13).contains(&v)));
}

#[test]
fn test_generate_empty_case() {
    let params = Params {
        num_items: 0,
        max_value: 5,
        capacity: 10,
    };
    let case = TestCase::generate(&[0u8; 32], &params).unwrap();
    assert!(case.sizes.is_empty());
    assert!(case.values.is_empty());
}

#[test]
fn test_generate_rejects_zero_max_value() {
    let params = Params {
        num_items: 3,
        max_value: 0,
        capacity: 10,
    };
    assert!(TestCase::generate(&[0u8; 32], &params).is_err());
}

#[test]
fn test_verify_selection_total_value() {
    let case = create_test_case();
    let selection = Selection { items: vec![1, 2] };
    assert_eq!(case.verify_selection(&selection).unwrap(), 9);
}

#[test]
fn test_verify_empty_selection() {
    let case = create_test_case();
    let selection = Selection { items: vec![] };
    assert_eq!(case.verify_selection(&selection).unwrap(), 0);
}

#[test]
fn test_verify_rejects_duplicates() {
    let case = create_test_case();
    let selection = Selection { items: vec![1, 1] };
    assert!(case.verify_selection(&selection).is_err());
}

#[test]
fn test_verify_rejects_out_of_bounds() {
    let case = create_test_case();
    let selection = Selection { items: vec![4] };
    assert!(case.verify_selection(&selection).is_err());
}

#[test]
fn test_verify_rejects_overweight() {
    let case = create_test_case();
    let selection = Selection {
        items: vec![1, 2, 3],
    };
    assert!(case.verify_selection(&selection).is_err());
}

#[test]
fn test_verify_rejects_value_overflow() {
    let case = TestCase {
        capacity: 10,
        max_value: u64::MAX,
        sizes: vec![1, 1],
        values: vec![u64::MAX, 2],
    };
    let selection = Selection { items: vec![0, 1] };
    assert!(case.verify_selection(&selection).is_err());
}

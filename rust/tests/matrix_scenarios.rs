use sparsematrix::SparseMatrix;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_empty() {
    init_logging();
    let matrix = SparseMatrix::<i32, 2>::new(-1).unwrap();

    assert_eq!(matrix.len(), 0);
    assert_eq!(matrix.iter().next(), None);
}

#[test]
fn test_get_element() {
    init_logging();
    let mut matrix = SparseMatrix::<i32, 2>::new(-1).unwrap();

    let a = *matrix.at(0).at(0).get();
    assert_eq!(a, -1);
    assert_eq!(matrix[[0, 0]], -1);
    assert_eq!(matrix.view_at(&[0]).get(0), &-1);
    assert_eq!(matrix.len(), 0);

    matrix.at(100).at(100).set(314);
    assert_eq!(matrix[[100, 100]], 314);
    assert_eq!(matrix.len(), 1);
}

#[test]
fn test_iterator() {
    init_logging();
    let mut matrix = SparseMatrix::<i32, 2>::new(-1).unwrap();

    matrix.at(100).at(101).set(314);
    matrix.at(102).at(103).set(315);

    let mut loops = 0;
    for (path, value) in &matrix {
        match loops {
            0 => {
                assert_eq!(path, [100, 101]);
                assert_eq!(*value, 314);
            }
            1 => {
                assert_eq!(path, [102, 103]);
                assert_eq!(*value, 315);
            }
            _ => panic!("unexpected entry {:?} -> {}", path, value),
        }
        loops += 1;
    }
    assert_eq!(loops, 2);
}

#[test]
fn test_one_dimensional_matrix() {
    init_logging();
    let mut matrix = SparseMatrix::<i32, 1>::new(0).unwrap();
    matrix.at(0).set(1000);
    matrix.at(1).set(1001);
    matrix.at(2).set(0);

    assert_eq!(matrix.len(), 2);

    let occupied: Vec<_> = matrix.iter().collect();
    assert_eq!(occupied, vec![([0], &1000), ([1], &1001)]);
}

#[test]
fn test_three_dimensional_matrix() {
    init_logging();
    let mut matrix = SparseMatrix::<i32, 3>::new(-1).unwrap();

    matrix.at(100).at(101).at(102).set(314);
    matrix.at(103).at(104).at(105).set(315);

    let occupied: Vec<_> = matrix.iter().collect();
    assert_eq!(
        occupied,
        vec![([100, 101, 102], &314), ([103, 104, 105], &315)]
    );
}

#[test]
fn test_default_value() {
    init_logging();
    let mut matrix = SparseMatrix::<i32, 2>::new(-1).unwrap();

    matrix.set([100, 101], 314);
    matrix.set([102, 103], 315);
    matrix.set([104, 105], -1);

    assert_eq!(matrix[[104, 105]], -1);
    assert_eq!(matrix.len(), 2);
    assert!(matrix.check_invariants());
}

#[test]
fn test_diagonals() {
    init_logging();
    let mut matrix = SparseMatrix::<usize, 2>::new(0).unwrap();

    for i in 0..10 {
        matrix.set([i, i], i);
        matrix.set([i, 9 - i], 9 - i);
    }

    for i in 0..10 {
        assert_eq!(matrix[[i, i]], i);
        assert_eq!(matrix[[i, 9 - i]], 9 - i);
    }

    assert_eq!(matrix.len(), 18);
    assert_eq!(matrix.iter().count(), 18);
    assert!(matrix.validate().is_ok());
}

#[test]
fn test_insertion_order_per_level() {
    init_logging();
    let mut matrix = SparseMatrix::<i32, 2>::new(0).unwrap();
    matrix.set([2, 2], 1);
    matrix.set([1, 1], 2);

    let keys: Vec<_> = matrix.keys().collect();
    assert_eq!(keys, vec![[2, 2], [1, 1]]);
}

#[test]
fn test_reset_every_entry_unbinds_root() {
    init_logging();
    let mut matrix = SparseMatrix::<i32, 3>::new(0).unwrap();
    for i in 0..4 {
        for j in 0..4 {
            matrix.set([i, j, i + j], (i * 4 + j + 1) as i32);
        }
    }
    assert_eq!(matrix.len(), 16);

    let paths: Vec<_> = matrix.keys().collect();
    for (removed, path) in paths.iter().enumerate() {
        matrix.set(*path, 0);
        assert_eq!(matrix.len(), 16 - removed - 1);
        assert!(!matrix.contains(*path));
        assert!(matrix.check_invariants());
    }

    assert!(matrix.is_empty());
    assert_eq!(matrix.node_count(), 0);
    assert!(!matrix.view().is_bound());
}

#[test]
fn test_reads_are_idempotent() {
    init_logging();
    let mut matrix = SparseMatrix::<i32, 2>::new(7).unwrap();
    matrix.set([1, 2], 3);
    let before: Vec<_> = matrix.iter().map(|(p, v)| (p, *v)).collect();
    let nodes = matrix.node_count();

    for i in 0..50 {
        assert_eq!(matrix[[i, i * 2]], if i == 1 { 3 } else { 7 });
        assert_eq!(*matrix.at(i).at(i).get(), 7);
        let _ = matrix.view().at(i);
        let _ = matrix.try_get([i, 0]);
    }

    let after: Vec<_> = matrix.iter().map(|(p, v)| (p, *v)).collect();
    assert_eq!(before, after);
    assert_eq!(matrix.node_count(), nodes);
}

#[test]
fn test_string_values() {
    init_logging();
    let mut matrix: SparseMatrix<String, 2> = SparseMatrix::default();
    matrix.set([0, 1], "a".to_string());
    matrix.set([1, 0], "b".to_string());
    matrix.set([0, 1], String::new());

    assert_eq!(matrix.len(), 1);
    assert_eq!(matrix[[1, 0]], "b");
    assert_eq!(matrix[[0, 1]], "");
}

use broadside::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    // a 10x10 grid fits in 128 bits
    assert!(BitBoard::<u128, 10>::try_new().is_ok());

    // but not in 64
    let err = BitBoard::<u64, 10>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 10, capacity: 64 })));
}

#[test]
fn test_get_set_bounds() {
    let mut bb = BitBoard::<u128, 10>::new();
    assert_eq!(bb.count_ones(), 0);

    bb.set(9, 9).unwrap();
    assert!(bb.get(9, 9).unwrap());
    assert!(!bb.get(0, 0).unwrap());
    assert_eq!(
        bb.set(10, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 10, col: 0 })
    );
    assert!(bb.get(0, 10).is_err());
}

#[test]
fn test_set_row_and_clear_cells() {
    let mut bb = BitBoard::<u16, 4>::new();
    bb.set_row(2).unwrap();
    bb.set(0, 1).unwrap();
    assert_eq!(bb.count_ones(), 5);
    assert_eq!(bb.iter_clear_bits().count(), 11);
    let first: Vec<_> = bb.iter_clear_bits().take(3).collect();
    assert_eq!(first, vec![(0, 0), (0, 2), (0, 3)]);
    assert!(bb.iter_clear_bits().all(|(row, _)| row != 2));
    assert!(bb.set_row(4).is_err());

    for row in 0..4 {
        bb.set_row(row).unwrap();
    }
    assert!(bb.is_full());
    assert_eq!(bb.iter_clear_bits().next(), None);
}

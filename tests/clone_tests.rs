use seqvec::{SeqVec, SeqVecError};

fn filled(values: &[i32]) -> SeqVec<i32> {
    let mut seq = SeqVec::new();
    for &v in values {
        seq.push_back(v).unwrap();
    }
    seq
}

fn contents(seq: &SeqVec<i32>) -> Vec<i32> {
    seq.iter().copied().collect()
}

#[test]
fn test_try_clone_deep_copies() {
    let seq = filled(&[1, 2, 3]);
    let copy = seq.try_clone().unwrap();

    assert_eq!(contents(&copy), vec![1, 2, 3]);
    assert_eq!(copy.len(), 3);
}

#[test]
fn test_clone_capacity_sized_to_length() {
    let mut seq = filled(&[1, 2, 3]);
    seq.reserve(32).unwrap();
    assert!(seq.capacity() >= 32);

    let copy = seq.try_clone().unwrap();
    assert_eq!(copy.capacity(), copy.len());
}

#[test]
fn test_mutating_copy_leaves_source_untouched() {
    let seq = filled(&[1, 2, 3]);
    let mut copy = seq.clone();

    copy.push_back(4).unwrap();
    copy.erase(0).unwrap();
    *copy.at_mut(0).unwrap() = 99;
    copy.insert(1, 50).unwrap();

    assert_eq!(contents(&seq), vec![1, 2, 3]);
    assert_eq!(contents(&copy), vec![99, 50, 3, 4]);
}

#[test]
fn test_clone_of_empty() {
    let seq: SeqVec<i32> = SeqVec::new();
    let copy = seq.try_clone().unwrap();

    assert!(copy.is_empty());
    assert_eq!(copy.capacity(), 0);
}

#[test]
fn test_assign_from_grow_path() {
    let mut dst = filled(&[9]);
    let src = filled(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert!(src.len() > dst.capacity());

    dst.assign_from(&src).unwrap();

    assert_eq!(contents(&dst), contents(&src));
    assert_eq!(dst.len(), 10);
}

#[test]
fn test_assign_from_in_place_longer_destination() {
    let mut dst = filled(&[1, 2, 3, 4, 5]);
    let capacity = dst.capacity();
    let src = filled(&[7, 8]);

    dst.assign_from(&src).unwrap();

    assert_eq!(contents(&dst), vec![7, 8]);
    // In-place path: no reallocation happened.
    assert_eq!(dst.capacity(), capacity);
}

#[test]
fn test_assign_from_in_place_shorter_destination() {
    let mut dst = filled(&[1]);
    dst.reserve(8).unwrap();
    let capacity = dst.capacity();
    let src = filled(&[4, 5, 6]);

    dst.assign_from(&src).unwrap();

    assert_eq!(contents(&dst), vec![4, 5, 6]);
    assert_eq!(dst.capacity(), capacity);
}

#[test]
fn test_assign_from_empty_source() {
    let mut dst = filled(&[1, 2, 3]);
    let src = filled(&[]);

    dst.assign_from(&src).unwrap();

    assert!(dst.is_empty());
    assert_eq!(dst.front(), Err(SeqVecError::EmptyContainer));
}

#[test]
fn test_assign_retains_identity() {
    let mut dst = filled(&[1, 2]);
    let src = filled(&[3, 4]);

    let before = dst.begin();
    dst.assign_from(&src).unwrap();

    // Cursors issued before the assignment still address this instance.
    assert_eq!(dst.deref(&before), Ok(&3));
    // Source cursors still do not.
    assert_eq!(dst.deref(&src.begin()), Err(SeqVecError::InvalidCursor));
}

#[test]
fn test_assign_is_deep() {
    let mut dst: SeqVec<String> = SeqVec::new();
    let mut src = SeqVec::new();
    src.push_back("left".to_string()).unwrap();
    src.push_back("right".to_string()).unwrap();

    dst.assign_from(&src).unwrap();
    dst.at_mut(0).unwrap().push_str("-edited");

    assert_eq!(src.at(0).unwrap(), "left");
    assert_eq!(dst.at(0).unwrap(), "left-edited");
}

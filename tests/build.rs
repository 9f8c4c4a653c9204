use avl_builder::{AvlError, AvlTree, Direction, Node};
use test_case::test_case;

fn root_shape(tree: &AvlTree<i32>) -> (i32, Option<i32>, Option<i32>, i32) {
    let root = tree.root().expect("tree has a root");
    (
        *root.key(),
        root.left().map(|n| *n.key()),
        root.right().map(|n| *n.key()),
        root.height(),
    )
}

#[test_case(&[10, 20, 30] ; "right right")]
#[test_case(&[30, 20, 10] ; "left left")]
#[test_case(&[30, 10, 20] ; "left right")]
#[test_case(&[10, 30, 20] ; "right left")]
fn three_keys_settle_on_the_middle_one(keys: &[i32]) {
    let tree = AvlTree::from_keys(keys).unwrap();
    assert_eq!(root_shape(&tree), (20, Some(10), Some(30), 1));
}

#[test_case(&[1, 2, 3, 4, 5, 6, 7], 4, 2 ; "ascending run")]
#[test_case(&[7, 6, 5, 4, 3, 2, 1], 4, 2 ; "descending run")]
#[test_case(&[50, 25, 75, 10, 30, 27], 30, 2 ; "left right below root")]
#[test_case(&[50, 25, 75, 60, 80, 70], 60, 2 ; "right left at root")]
fn root_after_build(keys: &[i32], root_key: i32, root_height: i32) {
    let tree = AvlTree::from_keys(keys).unwrap();
    assert_eq!(tree.root().map(|n| *n.key()), Some(root_key));
    assert_eq!(tree.height(), Some(root_height));
    assert_eq!(tree.check(), Ok(()));
}

#[test]
fn duplicate_key_lands_in_right_subtree() {
    let tree = AvlTree::from_keys(&[20, 10, 30, 20]).unwrap();
    let root = tree.root().unwrap();
    assert_eq!(*root.key(), 20);
    let right = root.right().unwrap();
    assert_eq!(*right.key(), 30);
    assert_eq!(right.left().map(|n| *n.key()), Some(20));
    assert_eq!(tree.inorder(), vec![10, 20, 20, 30]);
    assert_eq!(tree.check(), Ok(()));
}

#[test]
fn repeated_key_stays_balanced() {
    let keys = [5; 32];
    let tree = AvlTree::from_keys(&keys).unwrap();
    assert_eq!(tree.len(), 32);
    assert_eq!(tree.inorder(), keys.to_vec());
    assert_eq!(tree.check(), Ok(()));
    assert_eq!(tree.destroy().unwrap(), 32);
}

#[test]
fn negative_and_extreme_keys() {
    let keys = [0, i32::MIN, i32::MAX, -1, 1, i32::MIN, i32::MAX];
    let tree = AvlTree::from_keys(&keys).unwrap();
    let mut sorted = keys.to_vec();
    sorted.sort();
    assert_eq!(tree.inorder(), sorted);
    assert_eq!(tree.check(), Ok(()));
}

#[test]
fn empty_sequence_yields_invalid_input() {
    let err = AvlTree::<i32>::from_keys(&[]).unwrap_err();
    assert!(matches!(err, AvlError::InvalidInput));
    assert_eq!(err.to_string(), "invalid input: key sequence is empty");
}

#[test]
fn preorder_lists_root_first_then_left_then_right() {
    let tree = AvlTree::from_keys(&[4, 2, 6, 1, 3, 5, 7]).unwrap();
    let visits = tree.preorder().unwrap();
    let keys: Vec<i32> = visits.iter().map(|v| v.key).collect();
    assert_eq!(keys, vec![4, 2, 1, 3, 6, 5, 7]);

    let three = visits.iter().find(|v| v.key == 3).unwrap();
    assert_eq!(three.parent, Some(2));
    assert_eq!(three.side, Some(Direction::Right));
    assert_eq!(visits[0].parent, None);
    assert_eq!(tree.print_preorder().unwrap(), 7);
}

#[test]
fn evaluator_agrees_with_stored_heights() {
    let tree = AvlTree::from_keys(&[8, 4, 12, 2, 6, 10, 14, 1]).unwrap();
    let root = tree.root().unwrap();
    assert_eq!(Node::evaluate_height(Some(root)), root.height());
    assert_eq!(Node::evaluate_balance(Some(root)), 1);
    assert_eq!(Node::<i32>::evaluate_height(None), 0);
}

#[test]
fn insert_after_build_keeps_invariants() {
    let mut tree = AvlTree::from_keys(&[1]).unwrap();
    for key in 2..=100 {
        tree.insert(key).unwrap();
        assert_eq!(tree.check(), Ok(()), "after inserting {key}");
    }
    assert!(tree.contains(&57));
    assert!(!tree.contains(&101));
    assert_eq!(tree.destroy().unwrap(), 100);
}

use sll::*;

fn list(values: &[i32]) -> List {
    values.iter().copied().collect()
}

fn built(first: i32, rest: &[i32]) -> List {
    let mut l = List::from_node(Node::new(first));
    for &value in rest {
        insert_at_end(&mut l, Node::new(value));
    }
    l
}

#[test]
fn splice_invert_and_slice() {
    let mut root = built(9, &[10, 12, 15]);
    let root2 = built(3, &[4, 6, 8]);
    assert_eq!(root.to_string(), "[9,10,12,15,]");
    assert_eq!(root2.to_string(), "[3,4,6,8,]");

    insert_all_at_start(&mut root, root2);
    assert_eq!(root.to_vec(), vec![3, 4, 6, 8, 9, 10, 12, 15]);

    invert(&mut root, 0).unwrap();
    assert_eq!(root.to_vec(), vec![15, 12, 10, 9, 8, 6, 4, 3]);

    let root2 = slice_at(&mut root, 4).unwrap();
    assert_eq!(root.to_vec(), vec![15, 12, 10, 9]);
    assert_eq!(root2.to_vec(), vec![8, 6, 4, 3]);

    let mut out = Vec::new();
    write_list(&mut out, &root).unwrap();
    write_list(&mut out, &root2).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[15,12,10,9,]\n[8,6,4,3,]\n");
}

#[test]
fn get_node_counts_from_head() {
    let l = list(&[9, 10, 12, 15]);
    for idx in 0..4 {
        let node = get_node(&l, idx).unwrap();
        let counted = l.iter().position(|n| std::ptr::eq(n, node));
        assert_eq!(counted, Some(idx as usize));
    }
    assert!(get_node(&l, 4).is_none());
}

#[test]
fn insert_then_get_returns_inserted_node() {
    for idx in 0..=4 {
        let mut l = list(&[9, 10, 12, 15]);
        insert_at(&mut l, Node::new(-1), idx).unwrap();
        assert_eq!(get_node(&l, idx).map(|n| n.value), Some(-1));
        assert_eq!(len(&l), 5);
    }
}

#[test]
fn remove_moves_next_element_into_place() {
    for idx in 0..3 {
        let mut l = list(&[9, 10, 12, 15]);
        let following = get_node(&l, idx + 1).unwrap().value;
        remove_at(&mut l, idx).unwrap();
        assert_eq!(len(&l), 3);
        assert_eq!(get_node(&l, idx).map(|n| n.value), Some(following));
    }
}

#[test]
fn slice_and_reattach_round_trips() {
    for idx in 0..4 {
        let mut l = list(&[9, 10, 12, 15]);
        let tail = slice_at(&mut l, idx).unwrap();
        insert_all_at_end(&mut l, tail);
        assert_eq!(l.to_vec(), vec![9, 10, 12, 15]);
    }
}

#[test]
fn section_lengths_add_up() {
    for start in 0..5 {
        for end in start..5 {
            let mut l = list(&[0, 1, 2, 3, 4]);
            let section = slice_section(&mut l, start, end).unwrap();
            let expected: Vec<i32> = (start as i32..=end as i32).collect();
            assert_eq!(section.to_vec(), expected);
            assert_eq!(len(&l), 5 - expected.len());
            let kept: Vec<i32> = (0..5).filter(|v| !expected.contains(v)).collect();
            assert_eq!(l.to_vec(), kept);
        }
    }
}

#[test]
fn popped_node_can_be_reinserted() {
    let mut l = list(&[1, 2, 3, 4]);
    let node = pop_at(&mut l, 1).unwrap();
    insert_at(&mut l, node, 3).unwrap();
    assert_eq!(l.to_vec(), vec![1, 3, 4, 2]);

    let last = pop_at_end(&mut l).unwrap();
    insert_at_start(&mut l, last);
    assert_eq!(l.to_vec(), vec![2, 1, 3, 4]);
}

#[test]
fn single_node_pop_at_end_leaves_empty_list() {
    let mut l = built(5, &[]);
    let node = pop_at_end(&mut l).unwrap();
    assert_eq!(node.value, 5);
    assert!(l.is_empty());
}

#[test]
fn searching() {
    let l = list(&[9, 10, 12, 15]);
    assert!(has_value(&l, 12));
    assert!(!has_value(&l, 99));
    assert!(has_node(&l, get_node(&l, 1).unwrap()));
}

#[test]
fn failed_operations_leave_the_list_alone() {
    let mut l = list(&[1, 2, 3]);
    assert!(insert_at(&mut l, Node::new(0), 9).is_err());
    assert!(insert_all_at(&mut l, list(&[7]), -2).is_err());
    assert!(remove_at(&mut l, 3).is_err());
    assert!(slice_at(&mut l, 3).is_err());
    assert!(slice_section(&mut l, 1, 0).is_err());
    assert!(slice_section(&mut l, 1, 5).is_err());
    assert!(pop_at(&mut l, -1).is_err());
    assert!(invert(&mut l, 3).is_err());
    assert_eq!(l.to_vec(), vec![1, 2, 3]);
}

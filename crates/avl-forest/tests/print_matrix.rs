use avl_forest::{AvlTree, Bst, RenderOptions};

#[test]
fn render_matrix() {
    let tree = Bst::from_values([4, 2, 6]);
    assert_eq!(tree.to_string(), "   ( 4 )\n   /   \\\n( 2 ) ( 6 )");

    let tree = Bst::from_values([4, 2, 6, 1, 7]);
    let expected = [
        "         ( 4 )",
        "        /     \\",
        "   ( 2 )       ( 6 )",
        "   /               \\",
        "( 1 )             ( 7 )",
    ]
    .join("\n");
    assert_eq!(tree.to_string(), expected);

    let empty: Bst<i32> = Bst::new();
    assert_eq!(empty.to_string(), "");
}

#[test]
fn render_depth_is_bounded() {
    let chain: Bst<i32> = (0..8).collect();
    let out = chain.to_string();
    assert_eq!(out.lines().count(), 9);
    assert!(out.contains("( 4 )"));
    assert!(!out.contains("( 5 )"));

    let shallow = chain.render(&RenderOptions {
        max_depth: 2,
        ..RenderOptions::default()
    });
    assert_eq!(shallow, "   ( 0 )\n       \\\n      ( 1 )");
}

#[test]
fn render_wide_values_does_not_panic() {
    let tree: AvlTree<i64> = [123_456_789, -5, 0, 99_999, i64::MIN, i64::MAX].into_iter().collect();
    let out = tree.render(&RenderOptions {
        max_depth: 5,
        value_width: 1,
    });
    assert!(out.contains("123456789"));
    assert_eq!(out.lines().count(), 5);
}

#[test]
fn dump_matrix() {
    let tree = Bst::from_values([4, 2, 6]);
    assert_eq!(tree.dump(""), "Bst\n└─ 4 [h=2]\n   ├─ 2 [h=1]\n   └─ 6 [h=1]");

    let tree = AvlTree::from_values([4, 6]);
    assert_eq!(tree.dump(""), "AvlTree\n└─ 4 [h=2]\n   ├─ ∅\n   └─ 6 [h=1]");

    let empty: AvlTree<i32> = AvlTree::new();
    assert_eq!(empty.dump(""), "AvlTree\n└─ ∅");
}

#[test]
fn debug_lists_values_in_order() {
    let tree = AvlTree::from_values([3, 1, 2]);
    assert_eq!(
        format!("{tree:?}"),
        "AvlTree { len: 3, height: 2, values: [1, 2, 3] }"
    );
}

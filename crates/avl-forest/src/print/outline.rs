use std::fmt::Display;

use crate::arena::Arena;
use crate::node::{Link, Node};

/// Indented outline of the subtree below `root`, one node per line, headed
/// by `name`. Every line starts with `tab`.
///
/// Each node prints as `value [h=height]`; an inner node lists both
/// children, left first, with `∅` standing in for an empty side. Leaves
/// list nothing.
pub fn outline<T: Display>(arena: &Arena<Node<T>>, root: Link, name: &str, tab: &str) -> String {
    let mut out = String::from(name);
    let mut stack = vec![(root, tab.to_string(), true)];

    while let Some((link, prefix, is_last)) = stack.pop() {
        out.push('\n');
        out.push_str(&prefix);
        out.push_str(if is_last { "└─ " } else { "├─ " });

        let Link::Node(id) = link else {
            out.push('∅');
            continue;
        };
        let node = &arena[id];
        out.push_str(&format!("{} [h={}]", node.value, node.height));
        if node.is_leaf() {
            continue;
        }

        let child_prefix = format!("{prefix}{}  ", if is_last { ' ' } else { '│' });
        stack.push((node.right, child_prefix.clone(), true));
        stack.push((node.left, child_prefix, false));
    }

    out
}

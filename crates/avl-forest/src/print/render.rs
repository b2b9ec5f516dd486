use std::fmt::Display;

use crate::node::NodeRef;

/// Deepest level [`render`] will draw, whatever `max_depth` asks for.
/// The bottom line is `(value_width + 3) << (MAX_RENDER_DEPTH - 1)` wide.
pub const MAX_RENDER_DEPTH: usize = 16;

/// Widest cell [`render`] will reserve per value.
pub const MAX_VALUE_WIDTH: usize = 64;

/// Layout settings for [`render`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Deepest level drawn. Default is 5, capped at [`MAX_RENDER_DEPTH`].
    pub max_depth: usize,
    /// Width each value is centred in, excluding the parentheses. Default is 3,
    /// capped at [`MAX_VALUE_WIDTH`].
    pub value_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: 5,
            value_width: 3,
        }
    }
}

fn put(line: &mut Vec<char>, at: usize, text: &str) {
    for (offset, ch) in text.chars().enumerate() {
        let i = at + offset;
        if i >= line.len() {
            line.resize(i + 1, ' ');
        }
        line[i] = ch;
    }
}

fn finish(line: Vec<char>) -> String {
    let s: String = line.into_iter().collect();
    s.trim_end().to_string()
}

/// Draws the top `min(max_depth, height, MAX_RENDER_DEPTH)` levels of the tree below `root`
/// as centred `( v )` cells joined by `/` and `\`.
///
/// Values wider than `value_width` push the rest of their line right.
pub fn render<T: Display>(root: Option<NodeRef<'_, T>>, height: u32, options: &RenderOptions) -> String {
    let depth = options.max_depth.min(height as usize).min(MAX_RENDER_DEPTH);
    if depth == 0 {
        return String::new();
    }

    let value_width = options.value_width.min(MAX_VALUE_WIDTH);
    let cell = value_width + 2;
    let width = (cell + 1) * (1 << (depth - 1)) - 1;
    let slot = |level: usize| (cell + 1) << (depth - 1 - level);
    let center = |level: usize, j: usize| j * slot(level) + (slot(level) - 1) / 2;

    let mut lines = Vec::with_capacity(depth * 2);
    let mut level = vec![root];
    for i in 0..depth {
        let mut nodes = vec![' '; width];
        for (j, node) in level.iter().enumerate() {
            if let Some(node) = node {
                let text = format!("({:^w$})", node.value(), w = value_width);
                let at = center(i, j).saturating_sub(text.chars().count() / 2);
                put(&mut nodes, at, &text);
            }
        }
        lines.push(finish(nodes));

        if i + 1 == depth {
            break;
        }

        let mut edges = vec![' '; width];
        let mut next = Vec::with_capacity(level.len() * 2);
        for (j, node) in level.iter().enumerate() {
            let (left, right) = match node {
                Some(node) => (node.left(), node.right()),
                None => (None, None),
            };
            let c = center(i, j);
            if left.is_some() {
                put(&mut edges, (c + center(i + 1, 2 * j)) / 2, "/");
            }
            if right.is_some() {
                put(&mut edges, (c + center(i + 1, 2 * j + 1) + 1) / 2, "\\");
            }
            next.push(left);
            next.push(right);
        }
        lines.push(finish(edges));
        level = next;
    }

    lines.join("\n")
}

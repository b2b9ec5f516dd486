//! Logic behind the `avl-forest` binary.
//!
//! Reads whitespace-separated integers, inserts them in order into a
//! [`Bst`] or [`AvlTree`], applies removals, and reports a traversal, the
//! height and optionally a drawing of the result.

use crate::avl::AvlTree;
use crate::bst::Bst;
use crate::error::CliError;
use crate::print::RenderOptions;
use crate::traverse::TraversalOrder;
use crate::tree::{Balancer, Tree};

pub const USAGE: &str = "usage: avl-forest [--avl | --bst] [--order <pre_order|in_order|post_order|level_order>] [--remove <value>]... [--render] [--dump]";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TreeKind {
    #[default]
    Avl,
    Bst,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub kind: TreeKind,
    pub order: TraversalOrder,
    pub removals: Vec<i64>,
    pub render: bool,
    pub dump: bool,
}

fn parse_value(s: &str) -> Result<i64, CliError> {
    s.parse().map_err(|_| CliError::InvalidValue(s.to_string()))
}

impl CliOptions {
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--avl" => options.kind = TreeKind::Avl,
                "--bst" => options.kind = TreeKind::Bst,
                "--render" => options.render = true,
                "--dump" => options.dump = true,
                "--order" => {
                    let name = args.next().ok_or(CliError::MissingArgument("--order"))?;
                    options.order = name.as_ref().parse()?;
                }
                "--remove" => {
                    let value = args.next().ok_or(CliError::MissingArgument("--remove"))?;
                    options.removals.push(parse_value(value.as_ref())?);
                }
                other => return Err(CliError::UnknownFlag(other.to_string())),
            }
        }
        Ok(options)
    }
}

pub fn parse_values(input: &str) -> Result<Vec<i64>, CliError> {
    input.split_whitespace().map(parse_value).collect()
}

fn report<B: Balancer>(
    mut tree: Tree<i64, B>,
    options: &CliOptions,
) -> Result<String, CliError> {
    for value in &options.removals {
        log::debug!("removing {value}");
        tree.remove(value)?;
    }

    let values: Vec<String> = tree.traverse(options.order).map(i64::to_string).collect();
    let mut out = format!(
        "{}: {}\nheight: {}",
        options.order,
        values.join(" "),
        tree.get_height()
    );
    if options.render && !tree.is_empty() {
        out.push('\n');
        out.push_str(&tree.render(&RenderOptions::default()));
    }
    if options.dump {
        out.push('\n');
        out.push_str(&tree.dump(""));
    }
    Ok(out)
}

/// Builds the requested tree from `input` and renders the report.
pub fn run(options: &CliOptions, input: &str) -> Result<String, CliError> {
    let values = parse_values(input)?;
    log::debug!("building {:?} from {} values", options.kind, values.len());
    match options.kind {
        TreeKind::Avl => report(AvlTree::from_values(values), options),
        TreeKind::Bst => report(Bst::from_values(values), options),
    }
}

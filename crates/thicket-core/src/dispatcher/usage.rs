//! Usage strings

use indexmap::IndexSet;
use std::sync::Arc;

use crate::command::CommandSender;
use crate::tree::CommandNode;

const ARGUMENT_SEPARATOR: &str = " ";
const USAGE_OPTIONAL_OPEN: &str = "[";
const USAGE_OPTIONAL_CLOSE: &str = "]";
const USAGE_REQUIRED_OPEN: &str = "(";
const USAGE_REQUIRED_CLOSE: &str = ")";
const USAGE_OR: &str = "|";
const USAGE_ROOT_REDIRECT: &str = "...";
const USAGE_REDIRECT: &str = "-> ";

fn redirect_usage<S: CommandSender>(root: &Arc<CommandNode<S>>, target: &Arc<CommandNode<S>>) -> String {
    if Arc::ptr_eq(root, target) {
        USAGE_ROOT_REDIRECT.to_string()
    } else {
        format!("{}{}", USAGE_REDIRECT, target.usage_text())
    }
}

fn join(prefix: &str, usage: &str) -> String {
    if prefix.is_empty() {
        usage.to_string()
    } else {
        format!("{}{}{}", prefix, ARGUMENT_SEPARATOR, usage)
    }
}

/// Every runnable path below `node`, one line each
pub(super) fn all_usage<S: CommandSender>(
    root: &Arc<CommandNode<S>>,
    node: &Arc<CommandNode<S>>,
    sender: &S,
    restricted: bool,
) -> Vec<String> {
    let mut result = Vec::new();
    collect_all_usage(root, node, sender, &mut result, "", restricted);
    result
}

fn collect_all_usage<S: CommandSender>(
    root: &Arc<CommandNode<S>>,
    node: &Arc<CommandNode<S>>,
    sender: &S,
    result: &mut Vec<String>,
    prefix: &str,
    restricted: bool,
) {
    if restricted && !node.can_use(sender) {
        return;
    }
    if node.has_command() {
        result.push(prefix.to_string());
    }
    if let Some(target) = node.redirect() {
        let redirect = redirect_usage(root, target);
        let base = if prefix.is_empty() {
            node.usage_text()
        } else {
            prefix.to_string()
        };
        result.push(join(&base, &redirect));
    } else {
        for child in node.children() {
            let prefix = join(prefix, &child.usage_text());
            collect_all_usage(root, &child, sender, result, &prefix, restricted);
        }
    }
}

/// A condensed usage line for each child of `node` the sender can use
pub(super) fn smart_usage<S: CommandSender>(
    root: &Arc<CommandNode<S>>,
    node: &Arc<CommandNode<S>>,
    sender: &S,
) -> Vec<(Arc<CommandNode<S>>, String)> {
    let optional = node.has_command();
    node.children()
        .into_iter()
        .filter_map(|child| {
            let usage = smart_usage_of(root, &child, sender, optional, false)?;
            Some((child, usage))
        })
        .collect()
}

fn smart_usage_of<S: CommandSender>(
    root: &Arc<CommandNode<S>>,
    node: &Arc<CommandNode<S>>,
    sender: &S,
    optional: bool,
    deep: bool,
) -> Option<String> {
    if !node.can_use(sender) {
        return None;
    }
    let this = if optional {
        format!("{}{}{}", USAGE_OPTIONAL_OPEN, node.usage_text(), USAGE_OPTIONAL_CLOSE)
    } else {
        node.usage_text()
    };
    if deep {
        return Some(this);
    }

    let child_optional = node.has_command();
    let (open, close) = if child_optional {
        (USAGE_OPTIONAL_OPEN, USAGE_OPTIONAL_CLOSE)
    } else {
        (USAGE_REQUIRED_OPEN, USAGE_REQUIRED_CLOSE)
    };

    if let Some(target) = node.redirect() {
        return Some(join(&this, &redirect_usage(root, target)));
    }

    let children: Vec<_> = node
        .children()
        .into_iter()
        .filter(|child| child.can_use(sender))
        .collect();
    match children.as_slice() {
        [] => {}
        [only] => {
            if let Some(usage) = smart_usage_of(root, only, sender, child_optional, child_optional) {
                return Some(join(&this, &usage));
            }
        }
        _ => {
            let child_usage: IndexSet<String> = children
                .iter()
                .filter_map(|child| smart_usage_of(root, child, sender, child_optional, true))
                .collect();
            if child_usage.len() == 1 {
                let usage = child_usage.first().map(String::as_str).unwrap_or_default();
                let usage = if child_optional {
                    format!("{}{}{}", USAGE_OPTIONAL_OPEN, usage, USAGE_OPTIONAL_CLOSE)
                } else {
                    usage.to_string()
                };
                return Some(join(&this, &usage));
            }
            if child_usage.len() > 1 {
                let alternatives: Vec<String> = children.iter().map(|child| child.usage_text()).collect();
                let usage = format!("{}{}{}", open, alternatives.join(USAGE_OR), close);
                return Some(join(&this, &usage));
            }
        }
    }
    Some(this)
}

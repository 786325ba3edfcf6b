//! 文本节点遍历模块
//!
//! 提供对 DOM 树中文本节点的收集与重写。收集严格按照文档顺序
//! （深度优先）进行，翻译管道依赖这一顺序保证。

use markup5ever_rcdom::{Handle, NodeData};

/// 深度优先收集根节点之下的所有文本节点
///
/// 返回的顺序即文档顺序；每次调用都重新遍历，不做任何缓存。
pub fn collect_text_nodes(root: &Handle) -> Vec<Handle> {
    let mut text_nodes = Vec::new();
    walk_text_nodes(root, &mut text_nodes);
    text_nodes
}

fn walk_text_nodes(node: &Handle, out: &mut Vec<Handle>) {
    if let NodeData::Text { .. } = node.data {
        out.push(node.clone());
    }

    for child_node in node.children.borrow().iter() {
        walk_text_nodes(child_node, out);
    }
}

/// 读取文本节点的内容
///
/// 非文本节点返回 `None`。
pub fn text_node_content(node: &Handle) -> Option<String> {
    match node.data {
        NodeData::Text { ref contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}

/// 重写文本节点的内容
///
/// 对非文本节点不做任何操作。
pub fn set_text_content(node: &Handle, new_text: &str) {
    if let NodeData::Text { ref contents } = node.data {
        let mut contents = contents.borrow_mut();
        contents.clear();
        contents.push_slice(new_text);
    }
}

//! # 解析器模块
//!
//! HTML 文档的解析、DOM 操作与序列化。
//!
//! # 模块组织
//!
//! - `html` - HTML 解析、文本节点遍历、序列化

pub mod html;

// Re-export commonly used items for convenience
pub use html::{
    collect_text_nodes, find_node_by_id, get_child_node_by_name, get_node_name, get_parent_node,
    html_to_dom, node_text_content, serialize_document, set_text_content,
};

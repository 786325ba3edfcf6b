//! HTML解析和处理模块
//!
//! 这个模块分为多个子模块，提供更好的组织结构和可维护性：
//!
//! - `dom`: 基础DOM操作（解析、节点查询、文本提取）
//! - `text`: 文本节点的收集与重写
//! - `serializer`: 序列化功能

pub mod dom;
pub mod serializer;
pub mod text;

// 重新导出主要的公共 API
pub use dom::{
    find_node_by_id, get_child_node_by_name, get_node_attr, get_node_name, get_parent_node,
    html_to_dom, node_text_content,
};
pub use serializer::serialize_document;
pub use text::{collect_text_nodes, set_text_content, text_node_content};

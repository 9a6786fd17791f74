//! 核心响应处理模块

use axum::response::Redirect;

/// 列表页路径
pub const FRUITS_INDEX: &str = "/fruits";

/// 写操作成功后跳回列表页（303，浏览器随后发起 GET）
pub fn redirect_to_index() -> Redirect {
    Redirect::to(FRUITS_INDEX)
}

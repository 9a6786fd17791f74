//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::app::fruits::store::StoreError;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("malformed id: {0}")]
    MalformedId(String),

    #[error("invalid form body: {0}")]
    Form(String),

    #[error("storage operation failed: {0}")]
    Storage(#[source] StoreError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MalformedId(id) => AppError::MalformedId(id),
            #[allow(unreachable_patterns)]
            other => AppError::Storage(other),
        }
    }
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::MalformedId(_) => "MALFORMED_ID",
            AppError::Form(_) => "INVALID_FORM",
            AppError::Storage(_) => "STORAGE_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedId(_) | AppError::Form(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub code: u16,
    pub timestamp: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        error!(kind = self.kind(), status = status.as_u16(), "请求失败: {}", self);

        let body = ErrorResponse {
            error: ErrorBody {
                kind: self.kind(),
                message: self.to_string(),
            },
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

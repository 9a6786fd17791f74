//! # 水果 CRUD 应用
//!
//! 服务端渲染的水果集合管理：
//! - `app`：水果资源（模型、存储、服务、处理器、页面）
//! - `core`：错误、响应与中间件
//! - `infrastructure`：数据库与日志
//! - `router`：路由表与中间件栈

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod router;

pub use app::fruits::{Fruit, FruitService, FruitStore, MemoryFruitStore};
pub use config::{Config, ConfigError};
pub use router::build_app;

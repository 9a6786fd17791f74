use std::sync::Arc;

use axum_test::TestServer;
use fruits::{build_app, FruitService, MemoryFruitStore};

pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

/// 使用内存存储的完整应用
pub fn test_server() -> (TestServer, MemoryFruitStore) {
    let store = MemoryFruitStore::new();
    let service = FruitService::new(Arc::new(store.clone()));
    let server = TestServer::new(build_app(service, STATIC_DIR)).unwrap();
    (server, store)
}

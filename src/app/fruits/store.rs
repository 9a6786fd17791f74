//! 水果存储抽象

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{Fruit, NewFruit};

/// 存储层错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("malformed fruit id: {0}")]
    MalformedId(String),

    #[cfg(feature = "database")]
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// 把路径中的原始 id 解析为存储层 id
pub fn parse_id(raw: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(raw).map_err(|_| StoreError::MalformedId(raw.to_string()))
}

/// 水果集合的存储接口
///
/// `id` 参数保持为原始字符串，格式校验由实现负责。
#[async_trait]
pub trait FruitStore: Send + Sync {
    /// 删除全部记录，返回删除条数
    async fn delete_all(&self) -> Result<u64, StoreError>;
    /// 批量插入，按输入顺序返回新记录
    async fn insert_many(&self, fruits: Vec<NewFruit>) -> Result<Vec<Fruit>, StoreError>;
    async fn insert(&self, fruit: NewFruit) -> Result<Fruit, StoreError>;
    /// 顺序由实现决定
    async fn find_all(&self) -> Result<Vec<Fruit>, StoreError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Fruit>, StoreError>;
    /// 整体替换可变字段，返回更新后的记录；不存在时返回 None
    async fn update(&self, id: &str, fruit: NewFruit) -> Result<Option<Fruit>, StoreError>;
    /// 返回被删除的记录；不存在时返回 None
    async fn delete(&self, id: &str) -> Result<Option<Fruit>, StoreError>;
}

/// 内存存储，保持插入顺序
#[derive(Clone, Default)]
pub struct MemoryFruitStore {
    fruits: Arc<RwLock<Vec<Fruit>>>,
}

impl MemoryFruitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.fruits.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.fruits.read().await.is_empty()
    }
}

#[async_trait]
impl FruitStore for MemoryFruitStore {
    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut fruits = self.fruits.write().await;
        let removed = fruits.len() as u64;
        fruits.clear();
        Ok(removed)
    }

    async fn insert_many(&self, new_fruits: Vec<NewFruit>) -> Result<Vec<Fruit>, StoreError> {
        let created: Vec<Fruit> = new_fruits
            .into_iter()
            .map(|fruit| fruit.into_fruit(Uuid::new_v4()))
            .collect();
        self.fruits.write().await.extend(created.iter().cloned());
        Ok(created)
    }

    async fn insert(&self, fruit: NewFruit) -> Result<Fruit, StoreError> {
        let fruit = fruit.into_fruit(Uuid::new_v4());
        self.fruits.write().await.push(fruit.clone());
        Ok(fruit)
    }

    async fn find_all(&self) -> Result<Vec<Fruit>, StoreError> {
        Ok(self.fruits.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Fruit>, StoreError> {
        let id = parse_id(id)?;
        let fruits = self.fruits.read().await;
        Ok(fruits.iter().find(|fruit| fruit.id == id).cloned())
    }

    async fn update(&self, id: &str, fruit: NewFruit) -> Result<Option<Fruit>, StoreError> {
        let id = parse_id(id)?;
        let mut fruits = self.fruits.write().await;
        Ok(fruits.iter_mut().find(|existing| existing.id == id).map(|existing| {
            *existing = fruit.into_fruit(id);
            existing.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<Option<Fruit>, StoreError> {
        let id = parse_id(id)?;
        let mut fruits = self.fruits.write().await;
        let position = fruits.iter().position(|fruit| fruit.id == id);
        Ok(position.map(|index| fruits.remove(index)))
    }
}

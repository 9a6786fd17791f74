//! 水果业务服务

use std::sync::Arc;
use tracing::info;

use super::model::{starter_fruits, Fruit, FruitForm};
use super::store::FruitStore;
use crate::core::error::AppError;

#[derive(Clone)]
pub struct FruitService {
    store: Arc<dyn FruitStore>,
}

impl FruitService {
    pub fn new(store: Arc<dyn FruitStore>) -> Self {
        Self { store }
    }

    /// 清空集合后写入五条初始记录
    pub async fn seed(&self) -> Result<Vec<Fruit>, AppError> {
        let removed = self.store.delete_all().await?;
        let created = self.store.insert_many(starter_fruits()).await?;
        info!(removed, created = created.len(), "水果数据已重置");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<Fruit>, AppError> {
        Ok(self.store.find_all().await?)
    }

    pub async fn create(&self, form: FruitForm) -> Result<Fruit, AppError> {
        let fruit = self.store.insert(form.into_new_fruit()).await?;
        info!(id = %fruit.id, name = %fruit.name, "已创建水果");
        Ok(fruit)
    }

    /// 不存在的 id 返回 `None`，而不是错误
    pub async fn show(&self, id: &str) -> Result<Option<Fruit>, AppError> {
        Ok(self.store.find_by_id(id).await?)
    }

    pub async fn update(&self, id: &str, form: FruitForm) -> Result<Option<Fruit>, AppError> {
        let updated = self.store.update(id, form.into_new_fruit()).await?;
        info!(id, found = updated.is_some(), "已更新水果");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<Option<Fruit>, AppError> {
        let removed = self.store.delete(id).await?;
        info!(id, found = removed.is_some(), "已删除水果");
        Ok(removed)
    }
}

//! 数据库基础设施

use async_trait::async_trait;
use sqlx::{
    postgres::{PgPool, PgPoolOptions},
    Error,
};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::app::fruits::{
    model::{Fruit, NewFruit},
    store::{parse_id, FruitStore, StoreError},
};

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    pub async fn new(database_url: &str) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await?;

        info!("已连接到数据库");
        Ok(Self { pool })
    }

    /// 建表（不存在时）
    pub async fn ensure_schema(&self) -> Result<(), Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS fruits (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                color TEXT NOT NULL,
                ready_to_eat BOOLEAN NOT NULL DEFAULT FALSE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("fruits 表已就绪");
        Ok(())
    }

    pub fn fruit_store(&self) -> PgFruitStore {
        PgFruitStore::new(self.pool.clone())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("已断开数据库连接");
    }
}

/// Postgres 上的水果存储
#[derive(Clone)]
pub struct PgFruitStore {
    pool: PgPool,
}

impl PgFruitStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FruitStore for PgFruitStore {
    async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM fruits").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn insert_many(&self, fruits: Vec<NewFruit>) -> Result<Vec<Fruit>, StoreError> {
        let mut created = Vec::with_capacity(fruits.len());
        for fruit in fruits {
            created.push(self.insert(fruit).await?);
        }
        Ok(created)
    }

    async fn insert(&self, fruit: NewFruit) -> Result<Fruit, StoreError> {
        let fruit = sqlx::query_as::<_, Fruit>(
            "INSERT INTO fruits (id, name, color, ready_to_eat) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&fruit.name)
        .bind(&fruit.color)
        .bind(fruit.ready_to_eat)
        .fetch_one(&self.pool)
        .await?;

        Ok(fruit)
    }

    async fn find_all(&self) -> Result<Vec<Fruit>, StoreError> {
        let fruits = sqlx::query_as::<_, Fruit>("SELECT * FROM fruits")
            .fetch_all(&self.pool)
            .await?;
        Ok(fruits)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Fruit>, StoreError> {
        let id = parse_id(id)?;
        let fruit = sqlx::query_as::<_, Fruit>("SELECT * FROM fruits WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(fruit)
    }

    async fn update(&self, id: &str, fruit: NewFruit) -> Result<Option<Fruit>, StoreError> {
        let id = parse_id(id)?;
        let fruit = sqlx::query_as::<_, Fruit>(
            "UPDATE fruits SET name = $1, color = $2, ready_to_eat = $3 WHERE id = $4 RETURNING *",
        )
        .bind(&fruit.name)
        .bind(&fruit.color)
        .bind(fruit.ready_to_eat)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(fruit)
    }

    async fn delete(&self, id: &str) -> Result<Option<Fruit>, StoreError> {
        let id = parse_id(id)?;
        let fruit = sqlx::query_as::<_, Fruit>("DELETE FROM fruits WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(fruit)
    }
}

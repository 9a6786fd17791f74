//! 水果数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 复选框选中时浏览器提交的值
const CHECKBOX_ON: &str = "on";

/// 已持久化的水果记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Fruit {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    #[serde(rename = "readyToEat")]
    pub ready_to_eat: bool,
}

/// 待写入的水果字段（不含 id）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFruit {
    pub name: String,
    pub color: String,
    pub ready_to_eat: bool,
}

impl NewFruit {
    pub fn new(name: impl Into<String>, color: impl Into<String>, ready_to_eat: bool) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            ready_to_eat,
        }
    }

    /// 分配 id，生成完整记录
    pub fn into_fruit(self, id: Uuid) -> Fruit {
        Fruit {
            id,
            name: self.name,
            color: self.color,
            ready_to_eat: self.ready_to_eat,
        }
    }
}

/// HTML 表单提交的原始数据
///
/// `readyToEat` 保持为字符串，只有 `"on"` 被视为 true。
#[derive(Debug, Default, Deserialize)]
pub struct FruitForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(rename = "readyToEat", default)]
    pub ready_to_eat: Option<String>,
}

impl FruitForm {
    pub fn into_new_fruit(self) -> NewFruit {
        let ready_to_eat = self.ready_to_eat.as_deref() == Some(CHECKBOX_ON);
        NewFruit {
            name: self.name,
            color: self.color,
            ready_to_eat,
        }
    }
}

/// 种子数据
pub fn starter_fruits() -> Vec<NewFruit> {
    vec![
        NewFruit::new("Orange", "orange", false),
        NewFruit::new("Grape", "purple", false),
        NewFruit::new("Banana", "orange", false),
        NewFruit::new("Strawberry", "red", false),
        NewFruit::new("Coconut", "brown", false),
    ]
}

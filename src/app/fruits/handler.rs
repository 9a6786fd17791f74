//! 水果处理器
//!
//! 每个函数只做三件事：解析请求，调用 [`FruitService`]，渲染页面或跳转。

use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{Html, Json, Redirect},
    Form,
};

use super::{model::Fruit, model::FruitForm, service::FruitService, views};
use crate::core::{error::AppError, response::redirect_to_index};

#[derive(Clone)]
pub struct AppState {
    pub fruit_service: FruitService,
}

fn parse_form(form: Result<Form<FruitForm>, FormRejection>) -> Result<FruitForm, AppError> {
    form.map(|Form(form)| form)
        .map_err(|rejection| AppError::Form(rejection.body_text()))
}

pub async fn seed(State(state): State<AppState>) -> Result<Json<Vec<Fruit>>, AppError> {
    let fruits = state.fruit_service.seed().await?;
    Ok(Json(fruits))
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let fruits = state.fruit_service.list().await?;
    Ok(views::index(&fruits))
}

pub async fn new_form() -> Html<String> {
    views::new_form()
}

pub async fn create(
    State(state): State<AppState>,
    form: Result<Form<FruitForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    state.fruit_service.create(parse_form(form)?).await?;
    Ok(redirect_to_index())
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let fruit = state.fruit_service.show(&id).await?;
    Ok(views::show(fruit.as_ref()))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let fruit = state.fruit_service.show(&id).await?;
    Ok(views::edit_form(fruit.as_ref()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Form<FruitForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    state.fruit_service.update(&id, parse_form(form)?).await?;
    Ok(redirect_to_index())
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    state.fruit_service.delete(&id).await?;
    Ok(redirect_to_index())
}

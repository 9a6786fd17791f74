//! 水果页面渲染
//!
//! 页面直接由 `format!` 拼出，记录中的文本一律经过 HTML 转义。

use axum::response::Html;

use super::model::Fruit;

const NOT_FOUND: &str = r#"<p class="empty">No fruit found.</p>
<a href="/fruits">Back to all fruits</a>"#;

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <link rel="stylesheet" href="/styles.css">
</head>
<body>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    ))
}

/// 新建与编辑共用的表单字段
fn form_fields(fruit: Option<&Fruit>) -> String {
    let name = fruit.map(|f| escape(&f.name)).unwrap_or_default();
    let color = fruit.map(|f| escape(&f.color)).unwrap_or_default();
    let checked = if fruit.map(|f| f.ready_to_eat).unwrap_or(false) {
        " checked"
    } else {
        ""
    };

    format!(
        r#"<label>Name <input type="text" name="name" value="{name}"></label>
<label>Color <input type="text" name="color" value="{color}"></label>
<label>Ready to eat <input type="checkbox" name="readyToEat"{checked}></label>"#
    )
}

pub fn index(fruits: &[Fruit]) -> Html<String> {
    let items: String = fruits
        .iter()
        .map(|fruit| {
            format!(
                r#"<li><a href="/fruits/{}">{}</a></li>"#,
                fruit.id,
                escape(&fruit.name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"<a href="/fruits/new">Create a new fruit</a>
<ul class="fruits">
{items}
</ul>"#
    );
    layout("Fruits", &body)
}

pub fn show(fruit: Option<&Fruit>) -> Html<String> {
    let Some(fruit) = fruit else {
        return layout("Fruit", NOT_FOUND);
    };

    let readiness = if fruit.ready_to_eat {
        "It is ready to eat"
    } else {
        "It is not ready to eat"
    };
    let body = format!(
        r#"<p>The {name} is {color}.</p>
<p>{readiness}</p>
<a href="/fruits/{id}/edit">Edit</a>
<form action="/fruits/{id}?_method=DELETE" method="POST">
    <input type="hidden" name="_method" value="DELETE">
    <input type="submit" value="Delete {name}">
</form>
<a href="/fruits">Back to all fruits</a>"#,
        id = fruit.id,
        name = escape(&fruit.name),
        color = escape(&fruit.color),
    );
    layout(&fruit.name, &body)
}

pub fn new_form() -> Html<String> {
    let body = format!(
        r#"<form action="/fruits" method="POST">
{fields}
<input type="submit" value="Create Fruit">
</form>
<a href="/fruits">Back to all fruits</a>"#,
        fields = form_fields(None),
    );
    layout("Create a New Fruit", &body)
}

pub fn edit_form(fruit: Option<&Fruit>) -> Html<String> {
    let Some(fruit) = fruit else {
        return layout("Edit Fruit", NOT_FOUND);
    };

    let body = format!(
        r#"<form action="/fruits/{id}?_method=PUT" method="POST">
<input type="hidden" name="_method" value="PUT">
{fields}
<input type="submit" value="Update Fruit">
</form>
<a href="/fruits/{id}">Cancel</a>"#,
        id = fruit.id,
        fields = form_fields(Some(fruit)),
    );
    layout(&format!("Edit {}", fruit.name), &body)
}

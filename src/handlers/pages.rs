use axum::response::Html;

static INDEX_HTML: &str = include_str!("../web/index.html");
static ADMIN_HTML: &str = include_str!("../web/admin.html");

pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn admin_page() -> Html<&'static str> {
    Html(ADMIN_HTML)
}

use axum::response::Html;

/// GET /
/// Serves the static diagnosis form. The page collects the equipment fields,
/// symptom checkboxes and description, posts them to /api/v1/diagnosis and
/// renders the returned text or error inline.
pub async fn form_page() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

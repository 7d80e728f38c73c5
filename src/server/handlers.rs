use super::AppState;
use crate::charts::{ChartError, Figure, Selection};
use crate::data::FilterOption;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

#[derive(Debug, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub title: String,
    pub items: Vec<FilterOption>,
    pub sexes: Vec<FilterOption>,
    pub ages: Vec<FilterOption>,
    pub years: Vec<FilterOption>,
    pub initial: Selection,
}

/// `GET /api/figure` parameters; `years` is comma separated.
#[derive(Debug, Deserialize)]
pub struct FigureQuery {
    pub item: String,
    pub sex: String,
    pub age: String,
    #[serde(default)]
    pub years: Option<String>,
}

impl From<FigureQuery> for Selection {
    fn from(q: FigureQuery) -> Self {
        let years = q
            .years
            .as_deref()
            .map(Selection::parse_years)
            .unwrap_or_default();
        Selection::new(q.item, q.sex, q.age, years)
    }
}

pub struct ApiError(ChartError);

impl From<ChartError> for ApiError {
    fn from(err: ChartError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("chart update failed: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn options(State(state): State<AppState>) -> Json<OptionsResponse> {
    let options = state.dataset.options();
    Json(OptionsResponse {
        title: state.title.to_string(),
        items: options.items.clone(),
        sexes: options.sexes.clone(),
        ages: options.ages.clone(),
        years: options.years.clone(),
        initial: state.initial.as_ref().clone(),
    })
}

pub async fn figure_query(
    State(state): State<AppState>,
    Query(query): Query<FigureQuery>,
) -> Result<Json<Figure>, ApiError> {
    render(&state, &query.into())
}

pub async fn figure_body(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Result<Json<Figure>, ApiError> {
    render(&state, &selection)
}

fn render(state: &AppState, selection: &Selection) -> Result<Json<Figure>, ApiError> {
    let figure = state.updater.update(&state.dataset, selection)?;
    Ok(Json(figure))
}

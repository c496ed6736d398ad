use super::api::{ApiError, ApiSuccess};
use super::page;
use crate::domain::models::{CreateMapRequest, GeneratedMap};
use crate::domain::ports::MapService;
use crate::inbound::AppState;

use treasure_core::{ConfigurationError, MapBuilderConfig, MapRequest, Shortfall, draw_list};

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The response body data field for successful map creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateMapResponseData {
    id: String,
    rows: u32,
    cols: u32,
    cells: Vec<Vec<String>>,
    list: String,
    shortfall: Shortfall,
}

impl From<&GeneratedMap> for CreateMapResponseData {
    fn from(generated: &GeneratedMap) -> Self {
        let grid = generated.grid();

        Self {
            id: generated.id().to_string(),
            rows: grid.rows(),
            cols: grid.cols(),
            cells: grid.to_rows(),
            list: draw_list(&grid),
            shortfall: generated.map().shortfall(),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub(super) enum ParseCreateMapHttpRequestError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("{field} must be a whole number, got \"{value}\"")]
    NotANumber { field: &'static str, value: String },
}

/// The body of a map creation request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateMapHttpRequestBody {
    rows: i64,
    cols: i64,
    chests: i64,
    hints: i64,
    search_again: i64,
    #[serde(default)]
    novelty: Option<i64>,
}

impl CreateMapHttpRequestBody {
    /// Converts the HTTP request body into a domain request.
    fn try_into_domain(self) -> Result<CreateMapRequest, ParseCreateMapHttpRequestError> {
        let request = MapRequest {
            rows: self.rows,
            cols: self.cols,
            chests: self.chests,
            hints: self.hints,
            search_again: self.search_again,
            novelty: self.novelty,
        };

        Ok(MapBuilderConfig::try_from(request)?.into())
    }
}

/// Create a new map.
///
/// # Responses
///
/// - 201 Created: the map was successfully generated.
/// - 422 Unprocessable entity: The map creation request had invalid parameters.
pub(super) async fn create_map_handler<MS: MapService>(
    State(state): State<AppState<MS>>,
    Json(body): Json<CreateMapHttpRequestBody>,
) -> Result<ApiSuccess<CreateMapResponseData>, ApiError> {
    let domain_req = body.try_into_domain()?;
    state
        .map_service
        .create_map(&domain_req)
        .await
        .map_err(ApiError::from)
        .map(|ref map| ApiSuccess::new(StatusCode::CREATED, map.into()))
}

/// Query string of the browser page. Fields arrive as text since empty form
/// inputs are sent as `field=`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MapPageQuery {
    rows: Option<String>,
    cols: Option<String>,
    chests: Option<String>,
    hints: Option<String>,
    search_again: Option<String>,
    novelty: Option<String>,
}

impl MapPageQuery {
    fn parse_field(
        field: &'static str,
        value: Option<&String>,
    ) -> Result<Option<i64>, ParseCreateMapHttpRequestError> {
        match value.map(|value| value.trim()) {
            None | Some("") => Ok(None),
            Some(value) => value.parse::<i64>().map(Some).map_err(|_| {
                ParseCreateMapHttpRequestError::NotANumber {
                    field,
                    value: value.to_string(),
                }
            }),
        }
    }

    /// The fields as typed, blank when absent.
    pub(super) fn raw_fields(&self) -> [&str; 6] {
        [
            &self.rows,
            &self.cols,
            &self.chests,
            &self.hints,
            &self.search_again,
            &self.novelty,
        ]
        .map(|field| field.as_deref().unwrap_or_default())
    }

    /// Missing fields fall back to the defaults of [MapRequest].
    fn to_map_request(&self) -> Result<MapRequest, ParseCreateMapHttpRequestError> {
        let defaults = MapRequest::default();

        Ok(MapRequest {
            rows: Self::parse_field("rows", self.rows.as_ref())?.unwrap_or(defaults.rows),
            cols: Self::parse_field("cols", self.cols.as_ref())?.unwrap_or(defaults.cols),
            chests: Self::parse_field("chests", self.chests.as_ref())?
                .unwrap_or(defaults.chests),
            hints: Self::parse_field("hints", self.hints.as_ref())?.unwrap_or(defaults.hints),
            search_again: Self::parse_field("search_again", self.search_again.as_ref())?
                .unwrap_or(defaults.search_again),
            novelty: Self::parse_field("novelty", self.novelty.as_ref())?,
        })
    }
}

/// Render the browser page with a freshly generated map.
///
/// # Responses
///
/// - 200 OK: the page with the grid view and the field list.
/// - 422 Unprocessable entity: the page with the form and the validation message.
pub(super) async fn map_page_handler<MS: MapService>(
    State(state): State<AppState<MS>>,
    Query(query): Query<MapPageQuery>,
) -> (StatusCode, Html<String>) {
    let request = match query.to_map_request() {
        Ok(request) => request,
        Err(err) => {
            let form = page::FormValues::from_query(&query);
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(page::render(&form, Err(&err.to_string()))),
            );
        }
    };

    let form = page::FormValues::from_request(&request);

    let config = match MapBuilderConfig::try_from(request) {
        Ok(config) => config,
        Err(err) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(page::render(&form, Err(&err.to_string()))),
            );
        }
    };

    match state
        .map_service
        .create_map(&CreateMapRequest::new(config))
        .await
    {
        Ok(generated) => (StatusCode::OK, Html(page::render(&form, Ok(&generated)))),
        Err(err) => {
            tracing::error!("{:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(page::render(&form, Err("Internal server error"))),
            )
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::domain::service::Service;
    use crate::outbound::metrics::CountingMetrics;

    use std::sync::Arc;

    use axum::response::IntoResponse;
    use treasure_core::Descriptions;

    fn state() -> State<AppState<Service<CountingMetrics>>> {
        let service = Service::new(Descriptions::fallback(), CountingMetrics::default());

        State(AppState {
            map_service: Arc::new(service),
        })
    }

    fn body(rows: i64, cols: i64, chests: i64) -> CreateMapHttpRequestBody {
        CreateMapHttpRequestBody {
            rows,
            cols,
            chests,
            hints: 0,
            search_again: 0,
            novelty: None,
        }
    }

    async fn json_of(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_map_handler() {
        let response = create_map_handler(state(), Json(body(3, 3, 1)))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);

        let json = json_of(response).await;
        let data = &json["data"];

        assert_eq!(json["status_code"], 201);
        assert_eq!(data["rows"], 3);
        assert_eq!(data["cols"], 3);
        assert_eq!(data["cells"].as_array().unwrap().len(), 3);
        assert_eq!(data["list"].as_str().unwrap().lines().count(), 9);
        assert_eq!(data["shortfall"]["chests"], 0);

        let chests = data["cells"]
            .as_array()
            .unwrap()
            .iter()
            .flat_map(|row| row.as_array().unwrap())
            .filter(|cell| cell.as_str().unwrap().starts_with("Treasure chest ("))
            .count();
        assert_eq!(chests, 1);
    }

    #[tokio::test]
    async fn test_create_map_handler_reports_shortfall() {
        let response = create_map_handler(state(), Json(body(3, 3, 14)))
            .await
            .unwrap()
            .into_response();

        let json = json_of(response).await;

        assert_eq!(json["data"]["shortfall"]["chests"], 5);
    }

    #[tokio::test]
    async fn test_create_map_handler_rejects_invalid_config() {
        let result = create_map_handler(state(), Json(body(0, 3, 1))).await;

        let error = result.unwrap_err();
        assert!(matches!(error, ApiError::UnprocessableEntity(_)));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = json_of(response).await;
        assert_eq!(
            json["data"]["message"],
            "rows must be greater than zero, got 0"
        );
    }

    #[tokio::test]
    async fn test_create_map_handler_rejects_oversized_grid() {
        let error = create_map_handler(state(), Json(body(100_000, 100_000, 1)))
            .await
            .unwrap_err();

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = json_of(response).await;
        assert!(
            json["data"]["message"]
                .as_str()
                .unwrap()
                .starts_with("a grid of 100000 rows and 100000 columns is too large")
        );
    }

    #[tokio::test]
    async fn test_map_page_handler_rejects_oversized_grid() {
        let query = MapPageQuery {
            rows: Some("100000".to_string()),
            cols: Some("100000".to_string()),
            ..MapPageQuery::default()
        };

        let (status, Html(html)) = map_page_handler(state(), Query(query)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(html.contains("is too large"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_page_query_defaults_and_blanks() {
        let query = MapPageQuery {
            rows: Some("4".to_string()),
            novelty: Some(" ".to_string()),
            ..MapPageQuery::default()
        };

        let request = query.to_map_request().unwrap();

        assert_eq!(request.rows, 4);
        assert_eq!(request.cols, MapRequest::default().cols);
        assert_eq!(request.novelty, None);
    }

    #[test]
    fn test_page_query_rejects_text() {
        let query = MapPageQuery {
            hints: Some("lots".to_string()),
            ..MapPageQuery::default()
        };

        assert!(matches!(
            query.to_map_request(),
            Err(ParseCreateMapHttpRequestError::NotANumber { field: "hints", .. })
        ));
    }

    #[tokio::test]
    async fn test_map_page_handler() {
        let query = MapPageQuery {
            rows: Some("2".to_string()),
            cols: Some("3".to_string()),
            ..MapPageQuery::default()
        };

        let (status, Html(html)) = map_page_handler(state(), Query(query)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<svg"));
        assert!(html.contains("C2: "));
        assert_eq!(html.matches("<title").count(), 6 + 1);
    }

    #[tokio::test]
    async fn test_map_page_handler_rejects_negative_counts() {
        let query = MapPageQuery {
            chests: Some("-1".to_string()),
            ..MapPageQuery::default()
        };

        let (status, Html(html)) = map_page_handler(state(), Query(query)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(html.contains("chest count cannot be negative, got -1"));
        assert!(!html.contains("<svg"));
    }
}

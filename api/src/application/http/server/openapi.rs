use utoipa::OpenApi;

use super::config::{__path_get_config, get_config};
use crate::application::http::{
    analysis::router::AnalysisApiDoc,
    functions::router::FunctionsApiDoc,
    health::{__path_live, live},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LabelScan API",
        description = "Ingredient label analysis: health scoring, allergens and diet checks"
    ),
    paths(get_config, live),
    nest(
        (path = "/analysis", api = AnalysisApiDoc),
        (path = "/functions/v1", api = FunctionsApiDoc),
    )
)]
pub struct ApiDoc;

//! Calculator dispatch and JSON job files.
//!
//! A job file holds one request or an array of requests, each tagged with the
//! calculator that should evaluate it:
//!
//! ```json
//! [
//!   { "calculator": "carton_box", "length": 500, "width": 300, "height": 200,
//!     "grammage": 0.84, "costing_rate": 2.7, "selling_rate": 3.4, "quantity": 100 },
//!   { "calculator": "sample_board", "board_length_mm": 2400, "board_width_mm": 1322,
//!     "price_per_board": 5.95, "product_length_mm": 375, "product_width_mm": 310,
//!     "order_quantity": 144 }
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::PlantConfig;
use crate::error::{QuoteError, Result};
use crate::model::{
    BoxSpec, ExternalNestingResult, ExternalNestingSpec, FitmentResult, FitmentSpec,
    NestingResult, NestingSpec, PriceResult, ProductKind, SampleBoardResult, SampleBoardSpec,
};
use crate::pricing::{optimize_sample_board_with, price_box_with};
use crate::sizing::{fit_and_size_nesting, size_nesting_carton, size_nesting_from_external};

/// Input for one calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum QuoteRequest {
    CartonBox(BoxSpec),
    PizzaBox(BoxSpec),
    LayerPad(BoxSpec),
    NestingCarton(NestingSpec),
    NestingFromExternal(ExternalNestingSpec),
    SampleBoard(SampleBoardSpec),
    Fitment(FitmentSpec),
}

impl QuoteRequest {
    /// Name of the calculator, as written in job files.
    pub fn calculator(&self) -> &'static str {
        match self {
            QuoteRequest::CartonBox(_) => "carton_box",
            QuoteRequest::PizzaBox(_) => "pizza_box",
            QuoteRequest::LayerPad(_) => "layer_pad",
            QuoteRequest::NestingCarton(_) => "nesting_carton",
            QuoteRequest::NestingFromExternal(_) => "nesting_from_external",
            QuoteRequest::SampleBoard(_) => "sample_board",
            QuoteRequest::Fitment(_) => "fitment",
        }
    }
}

/// A box price with its formulas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    #[serde(flatten)]
    pub result: PriceResult,
    /// Selling price formula.
    pub formula: String,
    /// Cost price formula.
    pub cost_formula: String,
}

impl From<PriceResult> for PriceQuote {
    fn from(result: PriceResult) -> Self {
        Self {
            formula: result.formula_trace(),
            cost_formula: result.factors.cost_trace(),
            result,
        }
    }
}

/// A fitment with its nesting formulas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitmentQuote {
    #[serde(flatten)]
    pub result: FitmentResult,
    /// Long nesting breakdown.
    pub long_formula: String,
    /// Short nesting note.
    pub short_formula: String,
}

impl From<FitmentResult> for FitmentQuote {
    fn from(result: FitmentResult) -> Self {
        Self {
            long_formula: result.long_trace(),
            short_formula: result.short_trace(),
            result,
        }
    }
}

/// Output of one calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteResponse {
    Price(PriceQuote),
    NestingCarton(NestingResult),
    NestingFromExternal(ExternalNestingResult),
    SampleBoard(SampleBoardResult),
    Fitment(FitmentQuote),
}

/// Evaluate a request with the calculator it names.
pub fn run_quote(request: &QuoteRequest, config: &PlantConfig) -> Result<QuoteResponse> {
    debug!(calculator = request.calculator(), "running quote");

    let response = match request {
        QuoteRequest::CartonBox(spec) => {
            QuoteResponse::Price(price_box_with(config, spec, ProductKind::CartonBox)?.into())
        }
        QuoteRequest::PizzaBox(spec) => {
            QuoteResponse::Price(price_box_with(config, spec, ProductKind::PizzaBox)?.into())
        }
        QuoteRequest::LayerPad(spec) => {
            QuoteResponse::Price(price_box_with(config, spec, ProductKind::LayerPad)?.into())
        }
        QuoteRequest::NestingCarton(spec) => {
            QuoteResponse::NestingCarton(size_nesting_carton(spec)?)
        }
        QuoteRequest::NestingFromExternal(spec) => {
            QuoteResponse::NestingFromExternal(size_nesting_from_external(spec)?)
        }
        QuoteRequest::SampleBoard(spec) => {
            QuoteResponse::SampleBoard(optimize_sample_board_with(config, spec)?)
        }
        QuoteRequest::Fitment(spec) => QuoteResponse::Fitment(fit_and_size_nesting(spec)?.into()),
    };

    Ok(response)
}

/// Failure of one request in a job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobError {
    /// Numeric error code.
    pub code: i32,
    /// Error message.
    pub message: String,
}

impl From<&QuoteError> for JobError {
    fn from(err: &QuoteError) -> Self {
        Self {
            code: err.code_value(),
            message: err.to_string(),
        }
    }
}

/// Result of one request in a job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobOutcome {
    /// Position of the request in the job file.
    pub index: usize,
    /// Calculator the request named.
    pub calculator: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<QuoteResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JobError>,
}

impl JobOutcome {
    /// Whether the request produced a response.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JobFile {
    Many(Vec<QuoteRequest>),
    One(QuoteRequest),
}

/// Parse job requests from JSON text.
pub fn parse_job(content: &str) -> Result<Vec<QuoteRequest>> {
    let requests = match serde_json::from_str::<JobFile>(content) {
        Ok(JobFile::Many(requests)) => requests,
        Ok(JobFile::One(request)) => vec![request],
        // Untagged errors say nothing useful; parse again for the real cause.
        Err(_) => serde_json::from_str::<Vec<QuoteRequest>>(content)?,
    };
    Ok(requests)
}

/// Read job requests from a JSON file.
pub fn parse_job_file(path: &Path) -> Result<Vec<QuoteRequest>> {
    if !path.exists() {
        return Err(QuoteError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(QuoteError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_job(&content)
}

/// Evaluate every request of a job. A failing request does not stop the rest.
pub fn run_job(requests: &[QuoteRequest], config: &PlantConfig) -> Vec<JobOutcome> {
    requests
        .iter()
        .enumerate()
        .map(|(index, request)| {
            let calculator = request.calculator();
            match run_quote(request, config) {
                Ok(response) => JobOutcome {
                    index,
                    calculator,
                    response: Some(response),
                    error: None,
                },
                Err(err) => {
                    warn!("Request {} ({}): {}", index, calculator, err);
                    JobOutcome {
                        index,
                        calculator,
                        response: None,
                        error: Some(JobError::from(&err)),
                    }
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dimensions;
    use pretty_assertions::assert_eq;

    const CARTON_JSON: &str = r#"{
        "calculator": "carton_box",
        "length": 500, "width": 300, "height": 200,
        "grammage": 0.84, "costing_rate": 2.7, "selling_rate": 3.4,
        "quantity": 100
    }"#;

    #[test]
    fn test_parse_single_request() {
        let requests = parse_job(CARTON_JSON).unwrap();
        assert_eq!(
            requests,
            vec![QuoteRequest::CartonBox(
                BoxSpec::new(500.0, 300.0, 200.0, 0.84)
                    .with_rates(2.7, 3.4)
                    .with_quantity(100)
            )]
        );
    }

    #[test]
    fn test_parse_nested_dimensions() {
        let json = r#"[{
            "calculator": "fitment",
            "product": { "length": 300, "width": 200, "height": 100 },
            "carton_external": { "length": 620, "width": 420, "height": 320 },
            "nesting_thickness_mm": 3,
            "quantity_per_box": 12,
            "product_weight_kg": 1.5
        }]"#;
        let requests = parse_job(json).unwrap();
        match &requests[0] {
            QuoteRequest::Fitment(spec) => {
                assert_eq!(spec.product, Dimensions::new(300.0, 200.0, 100.0));
                assert!(!spec.bubble_wrap);
                assert_eq!(spec.allowance_mm, 0.0);
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_unknown_calculator() {
        let err = parse_job(r#"[{"calculator": "bottle_crate"}]"#).unwrap_err();
        assert!(matches!(err, QuoteError::Json(_)));
        assert_eq!(err.code_value(), -3);
    }

    #[test]
    fn test_run_quote_dispatches_by_kind() {
        let spec = BoxSpec::new(300.0, 300.0, 0.0, 0.84).with_rates(2.7, 3.4);
        let response = run_quote(&QuoteRequest::PizzaBox(spec), &PlantConfig::default()).unwrap();
        match response {
            QuoteResponse::Price(quote) => {
                assert_eq!(quote.result.kind, ProductKind::PizzaBox);
                assert_eq!(quote.formula, "0.32 x 0.325 x 0.84 x 3.4 x (1 + 0.00)");
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn test_run_job_isolates_failures() {
        let good = BoxSpec::new(500.0, 300.0, 200.0, 0.84).with_rates(2.7, 3.4);
        let too_wide = BoxSpec::new(500.0, 2300.0, 200.0, 0.84).with_rates(2.7, 3.4);
        let requests = vec![
            QuoteRequest::CartonBox(good.clone()),
            QuoteRequest::CartonBox(too_wide),
            QuoteRequest::LayerPad(good),
        ];
        let outcomes = run_job(&requests, &PlantConfig::default());
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_ok());
        assert!(!outcomes[1].is_ok());
        assert_eq!(outcomes[1].error.as_ref().map(|e| e.code), Some(200));
        assert!(outcomes[2].is_ok());
        assert_eq!(outcomes[2].calculator, "layer_pad");
    }

    #[test]
    fn test_response_json_carries_formula() {
        let response = run_quote(
            &parse_job(CARTON_JSON).unwrap()[0],
            &PlantConfig::default(),
        )
        .unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json["price"]["formula"],
            "1.63 x 0.5125 x 0.84 x 3.4 x (1 + 0.00)"
        );
        assert_eq!(json["price"]["kind"], "carton_box");
        assert_eq!(json["price"]["layout"]["pieces_per_roll"], 4);
    }
}

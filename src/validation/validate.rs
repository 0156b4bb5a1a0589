//! Input validation for the calculators.

use crate::config::PlantConfig;
use crate::error::{QuoteError, Result};
use crate::job::{run_quote, QuoteRequest, QuoteResponse};
use crate::model::{
    BoxSpec, Dimensions, ExternalNestingSpec, FitmentSpec, NestingSpec, ProductKind,
    SampleBoardSpec,
};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Require a finite value greater than zero.
pub fn require_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(QuoteError::invalid(field, "a positive number", value))
    }
}

/// Require a finite value of zero or more.
pub fn require_non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(QuoteError::invalid(field, "a non-negative number", value))
    }
}

/// Require a finite value.
pub fn require_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(QuoteError::invalid(field, "a finite number", value))
    }
}

/// Require a count of at least one.
pub fn require_count(field: &str, value: u32) -> Result<()> {
    if value >= 1 {
        Ok(())
    } else {
        Err(QuoteError::invalid(field, "at least 1", value))
    }
}

fn dimension_issues(prefix: &str, dims: &Dimensions, issues: &mut Vec<QuoteError>) {
    for (axis, value) in [
        ("length", dims.length),
        ("width", dims.width),
        ("height", dims.height),
    ] {
        if let Err(e) = require_positive(&format!("{}.{}", prefix, axis), value) {
            issues.push(e);
        }
    }
}

fn first_issue(issues: Vec<QuoteError>) -> Result<()> {
    match issues.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Every problem with a box spec.
pub fn box_spec_issues(spec: &BoxSpec, kind: ProductKind) -> Vec<QuoteError> {
    let height = if kind.uses_height() {
        require_positive("height", spec.height)
    } else {
        require_non_negative("height", spec.height)
    };
    [
        require_positive("length", spec.length),
        require_positive("width", spec.width),
        height,
        require_positive("grammage", spec.grammage),
        require_positive("costing_rate", spec.costing_rate),
        require_positive("selling_rate", spec.selling_rate),
        require_count("quantity", spec.quantity),
        require_finite("adjustment_percent", spec.adjustment_percent),
    ]
    .into_iter()
    .filter_map(|r| r.err())
    .collect()
}

/// Check a box spec, failing on the first problem.
pub fn check_box_spec(spec: &BoxSpec, kind: ProductKind) -> Result<()> {
    first_issue(box_spec_issues(spec, kind))
}

/// Every problem with a nesting carton spec.
pub fn nesting_spec_issues(spec: &NestingSpec) -> Vec<QuoteError> {
    let mut issues = Vec::new();
    dimension_issues("product", &spec.product, &mut issues);
    issues.extend(
        [
            require_non_negative("slot_thickness_mm", spec.slot_thickness_mm),
            require_non_negative("allowance_mm", spec.allowance_mm),
            require_count("qty_along_length", spec.qty_along_length),
            require_count("qty_along_width", spec.qty_along_width),
            require_count("qty_along_height", spec.qty_along_height),
            require_non_negative("layer_pad_thickness_mm", spec.layer_pad_thickness_mm),
        ]
        .into_iter()
        .filter_map(|r| r.err()),
    );
    issues
}

/// Check a nesting carton spec, failing on the first problem.
pub fn check_nesting_spec(spec: &NestingSpec) -> Result<()> {
    first_issue(nesting_spec_issues(spec))
}

/// Every problem with an inverse nesting spec.
pub fn external_nesting_spec_issues(spec: &ExternalNestingSpec) -> Vec<QuoteError> {
    let mut issues = Vec::new();
    dimension_issues("external", &spec.external, &mut issues);
    dimension_issues("product", &spec.product, &mut issues);
    if let Err(e) = require_non_negative("layer_pad_thickness_mm", spec.layer_pad_thickness_mm) {
        issues.push(e);
    }
    issues
}

/// Check an inverse nesting spec, failing on the first problem.
pub fn check_external_nesting_spec(spec: &ExternalNestingSpec) -> Result<()> {
    first_issue(external_nesting_spec_issues(spec))
}

/// Every problem with a sample board spec.
pub fn sample_board_spec_issues(spec: &SampleBoardSpec) -> Vec<QuoteError> {
    [
        require_positive("board_length_mm", spec.board_length_mm),
        require_positive("board_width_mm", spec.board_width_mm),
        require_positive("price_per_board", spec.price_per_board),
        require_positive("product_length_mm", spec.product_length_mm),
        require_positive("product_width_mm", spec.product_width_mm),
        require_count("order_quantity", spec.order_quantity),
        require_non_negative("job_setup_cost", spec.job_setup_cost),
        require_finite("margin_percent", spec.margin_percent),
    ]
    .into_iter()
    .filter_map(|r| r.err())
    .collect()
}

/// Check a sample board spec, failing on the first problem.
pub fn check_sample_board_spec(spec: &SampleBoardSpec) -> Result<()> {
    first_issue(sample_board_spec_issues(spec))
}

/// Every problem with a fitment spec.
pub fn fitment_spec_issues(spec: &FitmentSpec) -> Vec<QuoteError> {
    let mut issues = Vec::new();
    dimension_issues("product", &spec.product, &mut issues);
    dimension_issues("carton_external", &spec.carton_external, &mut issues);
    issues.extend(
        [
            require_non_negative("nesting_thickness_mm", spec.nesting_thickness_mm),
            require_non_negative("allowance_mm", spec.allowance_mm),
            require_non_negative("product_weight_kg", spec.product_weight_kg),
        ]
        .into_iter()
        .filter_map(|r| r.err()),
    );
    issues
}

/// Check a fitment spec, failing on the first problem.
pub fn check_fitment_spec(spec: &FitmentSpec) -> Result<()> {
    first_issue(fitment_spec_issues(spec))
}

fn request_issues(request: &QuoteRequest) -> Vec<QuoteError> {
    match request {
        QuoteRequest::CartonBox(spec) => box_spec_issues(spec, ProductKind::CartonBox),
        QuoteRequest::PizzaBox(spec) => box_spec_issues(spec, ProductKind::PizzaBox),
        QuoteRequest::LayerPad(spec) => box_spec_issues(spec, ProductKind::LayerPad),
        QuoteRequest::NestingCarton(spec) => nesting_spec_issues(spec),
        QuoteRequest::NestingFromExternal(spec) => external_nesting_spec_issues(spec),
        QuoteRequest::SampleBoard(spec) => sample_board_spec_issues(spec),
        QuoteRequest::Fitment(spec) => fitment_spec_issues(spec),
    }
}

/// Check a request's inputs without evaluating it.
///
/// Every bad field is reported, along with warnings about inputs that are
/// valid but probably unintended.
pub fn check_request(request: &QuoteRequest) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let calculator = request.calculator();

    let issues = request_issues(request);
    if !issues.is_empty() {
        for issue in issues {
            result.add_error(format!("{}: {}", calculator, issue));
        }
        return result;
    }

    match request {
        QuoteRequest::CartonBox(spec)
        | QuoteRequest::PizzaBox(spec)
        | QuoteRequest::LayerPad(spec) => {
            if spec.selling_rate < spec.costing_rate {
                result.add_warning(format!(
                    "{}: selling rate {} is below costing rate {}",
                    calculator, spec.selling_rate, spec.costing_rate
                ));
            }
            if spec.adjustment_percent <= -100.0 {
                result.add_warning(format!(
                    "{}: adjustment {}% leaves no selling price",
                    calculator, spec.adjustment_percent
                ));
            }
        }
        QuoteRequest::SampleBoard(spec) if spec.margin_percent < 0.0 => {
            result.add_warning(format!(
                "{}: negative margin {}%",
                calculator, spec.margin_percent
            ));
        }
        _ => {}
    }

    result
}

/// Validate a request, collecting every problem rather than stopping at the first.
///
/// If the inputs are acceptable the request is evaluated, so domain failures
/// such as an over-wide piece are reported too.
pub fn validate_request(request: &QuoteRequest, config: &PlantConfig) -> ValidationResult {
    let mut result = check_request(request);
    if !result.passed {
        return result;
    }

    match run_quote(request, config) {
        Ok(response) => result.merge(response_warnings(request, &response)),
        Err(e) => result.add_error(format!("{}: {}", request.calculator(), e)),
    }

    result
}

/// Warnings about a result that is valid but probably not what was wanted.
pub fn response_warnings(request: &QuoteRequest, response: &QuoteResponse) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let calculator = request.calculator();

    match (request, response) {
        (QuoteRequest::NestingFromExternal(_), QuoteResponse::NestingFromExternal(nesting)) => {
            if nesting.balance_length_mm < 0.0 {
                result.add_warning(format!(
                    "{}: product length {} exceeds internal length {} with slots",
                    calculator, nesting.adjusted_product.length, nesting.internal.length
                ));
            }
            if nesting.balance_width_mm < 0.0 {
                result.add_warning(format!(
                    "{}: product width {} exceeds internal width {} with slots",
                    calculator, nesting.adjusted_product.width, nesting.internal.width
                ));
            }
        }
        (QuoteRequest::Fitment(spec), QuoteResponse::Fitment(fitment)) => {
            let fitment = &fitment.result;
            if fitment.total_fit == 0 {
                result.add_warning(format!("{}: no unit fits the carton", calculator));
            } else if fitment.total_fit < spec.quantity_per_box {
                result.add_warning(format!(
                    "{}: carton holds {} units, {} requested",
                    calculator, fitment.total_fit, spec.quantity_per_box
                ));
            }
            if fitment.fit_height > 0 && fitment.nesting_height_per_layer_mm <= 0.0 {
                result.add_warning(format!(
                    "{}: nesting height per layer {:.1} mm leaves no room for the product",
                    calculator, fitment.nesting_height_per_layer_mm
                ));
            }
            if fitment.balance_length_mm < spec.allowance_mm {
                result.add_warning(format!(
                    "{}: nesting balance {:.1} mm is below allowance {} mm",
                    calculator, fitment.balance_length_mm, spec.allowance_mm
                ));
            }
        }
        _ => {}
    }

    result
}

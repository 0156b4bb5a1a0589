//! Integration tests for the carton calculators.
//!
//! These run the calculators through the public API the way the CLI and job
//! files do: worked examples from the quoting desk, job files on disk and the
//! aggregate validator.

use carton_quote::{
    fit_and_size_nesting, layout_roll, optimize_sample_board, parse_job_file, price_box, run_job,
    size_nesting_carton, size_nesting_from_external, validate_request, BoxSpec, Dimensions,
    ExternalNestingSpec, FitmentSpec, NestingSpec, PlantConfig, ProductKind, QuoteError,
    QuoteRequest, QuoteResponse, SampleBoardSpec, SheetSize,
};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::NamedTempFile;

// ==================== Helpers ====================

fn write_job(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn carton_spec() -> BoxSpec {
    BoxSpec::new(500.0, 300.0, 200.0, 0.84)
        .with_rates(2.7, 3.4)
        .with_quantity(100)
}

// ==================== Worked examples ====================

#[test]
fn test_carton_box_example() {
    let result = price_box(&carton_spec(), ProductKind::CartonBox).unwrap();

    assert_eq!(result.layout.raw_piece_width_mm, 504.0);
    assert_eq!(result.layout.pieces_per_roll, 4);
    assert_eq!(result.layout.used_width_mm, 2016.0);
    assert_eq!(result.layout.trim_allowance_mm, 28.0);
    assert_eq!(result.layout.roll_width_mm, 2050.0);
    assert_eq!(result.factors.effective_width_m, 0.5125);
    assert_eq!(result.factors.paper_length_m, 1.63);
    assert_eq!(result.cost_price, dec!(1.89));
    assert_eq!(result.selling_price, dec!(2.39));
    assert_eq!(result.total_price, dec!(238.58));
    assert_snapshot!(result.formula_trace(), @"1.63 x 0.5125 x 0.84 x 3.4 x (1 + 0.00)");
}

#[test]
fn test_pizza_box_example() {
    let spec = BoxSpec::new(300.0, 300.0, 0.0, 0.84)
        .with_rates(2.7, 3.4)
        .with_quantity(100);
    let result = price_box(&spec, ProductKind::PizzaBox).unwrap();

    assert_eq!(result.layout.raw_piece_width_mm, 320.0);
    assert_eq!(result.layout.pieces_per_roll, 6);
    assert_eq!(result.layout.used_width_mm, 1920.0);
    assert_eq!(result.layout.roll_width_mm, 1950.0);
    assert_eq!(result.layout.effective_width_per_piece_mm, 325.0);
}

#[test]
fn test_sample_board_example() {
    let spec = SampleBoardSpec {
        board_length_mm: 2400.0,
        board_width_mm: 1322.0,
        price_per_board: 5.95,
        product_length_mm: 375.0,
        product_width_mm: 310.0,
        order_quantity: 144,
        test_board_quantity: 2,
        job_setup_cost: 60.0,
        margin_percent: 0.0,
    };
    let result = optimize_sample_board(&spec).unwrap();

    assert_eq!(
        (result.ups_length, result.ups_width, result.total_ups),
        (6, 4, 24)
    );
    assert_eq!(result.boards_needed, 6);
    assert_eq!(result.total_boards, 8);
}

#[test]
fn test_roll_overflow_is_an_error() {
    let err = layout_roll(2500.0, 0.84).unwrap_err();
    assert!(matches!(err, QuoteError::PieceExceedsRollWidth { .. }));
    assert_eq!(
        err.to_string(),
        "Piece width 2500 mm is too wide for any standard roll (max 2200 mm)"
    );
}

#[test]
fn test_nesting_round_trip_through_external_size() {
    // Design a carton, then size inserts for the carton that came out.
    let designed = size_nesting_carton(&NestingSpec {
        product: Dimensions::new(400.0, 250.0, 60.0),
        bubble_wrap: false,
        slot_thickness_mm: 3.0,
        allowance_mm: 20.0,
        qty_along_length: 1,
        qty_along_width: 1,
        qty_along_height: 1,
        layer_pad_thickness_mm: 3.0,
        layer_pad_count: 2,
    })
    .unwrap();
    assert_eq!(designed.external, Dimensions::new(456.0, 306.0, 86.0));

    let inserts = size_nesting_from_external(&ExternalNestingSpec {
        external: designed.external,
        layer_pad_thickness_mm: 3.0,
        layer_pad_count: 2,
        product: Dimensions::new(400.0, 250.0, 60.0),
        bubble_wrap: false,
    })
    .unwrap();
    assert_eq!(inserts.internal, designed.internal);
    assert_eq!(inserts.long_insert, designed.long_insert);
    assert_eq!(inserts.short_insert, designed.short_insert);
}

#[test]
fn test_fitment_example() {
    let result = fit_and_size_nesting(&FitmentSpec {
        product: Dimensions::new(800.0, 204.0, 10.0),
        bubble_wrap: true,
        carton_external: Dimensions::new(600.0, 500.0, 300.0),
        nesting_thickness_mm: 3.0,
        allowance_mm: 30.0,
        quantity_per_box: 10,
        product_weight_kg: 1.0,
    })
    .unwrap();

    assert_eq!(result.internal, Dimensions::new(590.0, 490.0, 280.0));
    // 810 mm of wrapped product cannot lie along a 590 mm carton
    assert_eq!(
        (result.fit_length, result.fit_width, result.fit_height),
        (0, 2, 14)
    );
    assert_eq!(result.total_fit, 0);
    assert_eq!(result.layer_pad_quantity, 15);
    assert_eq!(result.layer_pad, SheetSize::new(590.0, 490.0));
    assert_eq!(result.long_nesting.length, 590.0);
    assert_snapshot!(result.long_trace(), @"-113.0 + 3 + 810 + 3 + -113.0 = 590.0");
}

#[test]
fn test_calculators_are_pure() {
    let requests = vec![
        QuoteRequest::CartonBox(carton_spec()),
        QuoteRequest::LayerPad(carton_spec()),
    ];
    let config = PlantConfig::default();
    assert_eq!(run_job(&requests, &config), run_job(&requests, &config));
}

// ==================== Job files ====================

const JOB: &str = r#"[
    {
        "calculator": "carton_box",
        "length": 500, "width": 300, "height": 200,
        "grammage": 0.84, "costing_rate": 2.7, "selling_rate": 3.4,
        "quantity": 100
    },
    {
        "calculator": "pizza_box",
        "length": 300, "width": 2300,
        "grammage": 0.84, "costing_rate": 2.7, "selling_rate": 3.4,
        "quantity": 50
    },
    {
        "calculator": "sample_board",
        "board_length_mm": 2400, "board_width_mm": 1322, "price_per_board": 5.95,
        "product_length_mm": 375, "product_width_mm": 310,
        "order_quantity": 144, "test_board_quantity": 2, "job_setup_cost": 60
    },
    {
        "calculator": "nesting_from_external",
        "external": { "length": 600, "width": 500, "height": 215 },
        "layer_pad_thickness_mm": 3, "layer_pad_count": 3,
        "product": { "length": 800, "width": 204, "height": 10 }
    }
]"#;

#[test]
fn test_job_file_runs_every_request() {
    let file = write_job(JOB);
    let requests = parse_job_file(file.path()).unwrap();
    assert_eq!(requests.len(), 4);

    let outcomes = run_job(&requests, &PlantConfig::default());
    let calculators: Vec<&str> = outcomes.iter().map(|o| o.calculator).collect();
    assert_eq!(
        calculators,
        vec![
            "carton_box",
            "pizza_box",
            "sample_board",
            "nesting_from_external"
        ]
    );

    assert!(outcomes[0].is_ok());
    let error = outcomes[1].error.as_ref().unwrap();
    assert_eq!(error.code, 200);

    match outcomes[2].response.as_ref().unwrap() {
        QuoteResponse::SampleBoard(result) => {
            assert_eq!(result.boards_needed, 6);
            assert_eq!(result.cost_per_piece, dec!(0.75));
        }
        other => panic!("unexpected response {:?}", other),
    }

    match outcomes[3].response.as_ref().unwrap() {
        QuoteResponse::NestingFromExternal(result) => {
            assert_eq!(result.long_insert, SheetSize::new(590.0, 186.0));
            assert_eq!(result.short_insert, SheetSize::new(490.0, 186.0));
        }
        other => panic!("unexpected response {:?}", other),
    }
}

#[test]
fn test_job_outcomes_serialize() {
    let file = write_job(JOB);
    let requests = parse_job_file(file.path()).unwrap();
    let outcomes = run_job(&requests, &PlantConfig::default());
    let json = serde_json::to_value(&outcomes).unwrap();

    assert_eq!(json[0]["response"]["price"]["selling_price"], "2.39");
    assert!(json[0].get("error").is_none());
    assert_eq!(json[1]["error"]["code"], 200);
    assert!(json[1].get("response").is_none());
}

#[test]
fn test_job_reports_count_overflow() {
    let file = write_job(
        r#"[
        {
            "calculator": "sample_board",
            "board_length_mm": 2400, "board_width_mm": 1322, "price_per_board": 5.95,
            "product_length_mm": 0.01, "product_width_mm": 0.01,
            "order_quantity": 144
        },
        {
            "calculator": "nesting_carton",
            "product": { "length": 400, "width": 250, "height": 60 },
            "slot_thickness_mm": 3, "allowance_mm": 20,
            "qty_along_length": 100000, "qty_along_width": 100000, "qty_along_height": 1,
            "layer_pad_thickness_mm": 3, "layer_pad_count": 2
        }
    ]"#,
    );
    let requests = parse_job_file(file.path()).unwrap();
    let outcomes = run_job(&requests, &PlantConfig::default());
    let codes: Vec<Option<i32>> = outcomes
        .iter()
        .map(|o| o.error.as_ref().map(|e| e.code))
        .collect();
    assert_eq!(codes, vec![Some(203), Some(203)]);
}

#[test]
fn test_job_file_missing() {
    let err = parse_job_file(std::path::Path::new("no/such/job.json")).unwrap_err();
    assert!(matches!(err, QuoteError::FileNotFound { .. }));
    assert_eq!(err.code_value(), -1);
}

#[test]
fn test_job_file_empty() {
    let file = write_job("  \n");
    let err = parse_job_file(file.path()).unwrap_err();
    assert!(matches!(err, QuoteError::EmptyFile { .. }));
}

#[test]
fn test_job_file_malformed() {
    let file = write_job(r#"[{"calculator": "carton_box", "length": "long"}]"#);
    let err = parse_job_file(file.path()).unwrap_err();
    assert!(matches!(err, QuoteError::Json(_)));
}

// ==================== Configuration ====================

#[test]
fn test_config_file_sets_precision() {
    let file = write_job(r#"{ "money_places": 4 }"#);
    let config = PlantConfig::from_file(file.path()).unwrap();

    let requests = vec![QuoteRequest::CartonBox(carton_spec())];
    let outcomes = run_job(&requests, &config);
    match outcomes[0].response.as_ref().unwrap() {
        QuoteResponse::Price(quote) => assert_eq!(quote.result.cost_price, dec!(1.8946)),
        other => panic!("unexpected response {:?}", other),
    }
}

#[test]
fn test_config_file_rejects_bad_roll() {
    let file = write_job(r#"{ "max_roll_width_mm": -1 }"#);
    assert!(matches!(
        PlantConfig::from_file(file.path()),
        Err(QuoteError::InvalidInput { .. })
    ));
}

// ==================== Validation ====================

#[test]
fn test_validation_collects_all_errors() {
    let spec = BoxSpec::new(-1.0, 0.0, 200.0, 0.84)
        .with_rates(2.7, 3.4)
        .with_quantity(10);
    let result = validate_request(&QuoteRequest::CartonBox(spec), &PlantConfig::default());
    assert!(!result.passed);
    assert_eq!(result.errors.len(), 2);
    assert!(result.errors[0].starts_with("carton_box: Invalid value for 'length'"));
}

#[test]
fn test_validation_warns_on_short_carton() {
    let spec = FitmentSpec {
        product: Dimensions::new(300.0, 200.0, 100.0),
        bubble_wrap: false,
        carton_external: Dimensions::new(620.0, 420.0, 320.0),
        nesting_thickness_mm: 3.0,
        allowance_mm: 200.0,
        quantity_per_box: 20,
        product_weight_kg: 1.5,
    };
    let result = validate_request(&QuoteRequest::Fitment(spec), &PlantConfig::default());
    assert!(result.passed);
    assert_eq!(
        result.warnings,
        vec![
            "fitment: carton holds 12 units, 20 requested".to_string(),
            "fitment: nesting balance 152.0 mm is below allowance 200 mm".to_string(),
        ]
    );
}

#[test]
fn test_validation_warns_on_oversized_product() {
    let spec = ExternalNestingSpec {
        external: Dimensions::new(600.0, 500.0, 215.0),
        layer_pad_thickness_mm: 3.0,
        layer_pad_count: 3,
        product: Dimensions::new(800.0, 204.0, 10.0),
        bubble_wrap: false,
    };
    let result = validate_request(
        &QuoteRequest::NestingFromExternal(spec),
        &PlantConfig::default(),
    );
    assert!(result.passed);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("product length 800"));
}

#[test]
fn test_validation_reports_board_capacity() {
    let spec = SampleBoardSpec {
        board_length_mm: 1000.0,
        board_width_mm: 700.0,
        price_per_board: 5.0,
        product_length_mm: 1200.0,
        product_width_mm: 300.0,
        order_quantity: 10,
        test_board_quantity: 0,
        job_setup_cost: 0.0,
        margin_percent: 0.0,
    };
    let result = validate_request(&QuoteRequest::SampleBoard(spec), &PlantConfig::default());
    assert!(!result.passed);
    assert!(result.errors[0].contains("exceeds board capacity"));
}

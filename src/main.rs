//! carton-quote - CLI for the carton pricing and sizing calculators.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use carton_quote::{
    check_request, parse_job_file, response_warnings, run_job, run_quote, validate_request,
    BoxSpec, Dimensions, ExternalNestingSpec, FitmentSpec, NestingSpec, PlantConfig,
    QuoteRequest, QuoteResponse, SampleBoardSpec,
};

/// Price and size corrugated cartons, pizza boxes, layer pads and nesting.
#[derive(Parser, Debug)]
#[command(name = "carton-quote")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Plant configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Decimal places for money, overriding the configuration
    #[arg(short, long, global = true)]
    precision: Option<u32>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a regular slotted carton box
    CartonBox(BoxArgs),
    /// Price a pizza box
    PizzaBox(BoxArgs),
    /// Price a layer pad
    LayerPad(BoxArgs),
    /// Design a carton around nested units
    NestingCarton(NestingArgs),
    /// Size nesting inserts for an existing carton
    NestingFromExternal(ExternalNestingArgs),
    /// Count sample boards and price the job
    SampleBoard(SampleBoardArgs),
    /// Fit units into a carton and size nesting and layer pads
    Fitment(FitmentArgs),
    /// Run every request of a JSON job file
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct BoxArgs {
    /// Length (mm)
    #[arg(long, default_value_t = 500.0)]
    length: f64,
    /// Width (mm)
    #[arg(long, default_value_t = 300.0)]
    width: f64,
    /// Height (mm), carton boxes only
    #[arg(long, default_value_t = 200.0)]
    height: f64,
    /// Board grammage
    #[arg(long, default_value_t = 0.84)]
    grammage: f64,
    /// Costing rate per ton
    #[arg(long, default_value_t = 2.7)]
    costing_rate: f64,
    /// Selling rate per ton
    #[arg(long, default_value_t = 3.4)]
    selling_rate: f64,
    /// Quantity
    #[arg(long, default_value_t = 100)]
    quantity: u32,
    /// Selling price adjustment (%)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    adjustment: f64,
}

impl From<BoxArgs> for BoxSpec {
    fn from(args: BoxArgs) -> Self {
        BoxSpec::new(args.length, args.width, args.height, args.grammage)
            .with_rates(args.costing_rate, args.selling_rate)
            .with_quantity(args.quantity)
            .with_adjustment(args.adjustment)
    }
}

#[derive(Args, Debug)]
struct ProductArgs {
    /// Product length (mm)
    #[arg(long, default_value_t = 800.0)]
    product_length: f64,
    /// Product width (mm)
    #[arg(long, default_value_t = 204.0)]
    product_width: f64,
    /// Product height (mm)
    #[arg(long, default_value_t = 10.0)]
    product_height: f64,
    /// Add 10 mm of bubble wrap on each axis
    #[arg(long)]
    bubble_wrap: bool,
}

impl ProductArgs {
    fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.product_length, self.product_width, self.product_height)
    }
}

#[derive(Args, Debug)]
struct NestingArgs {
    #[command(flatten)]
    product: ProductArgs,
    /// Nesting slot thickness (mm)
    #[arg(long, default_value_t = 3.0)]
    thickness: f64,
    /// Allowance at each end (mm)
    #[arg(long, default_value_t = 40.0)]
    allowance: f64,
    /// Units along the length
    #[arg(long, default_value_t = 1)]
    qty_length: u32,
    /// Units along the width
    #[arg(long, default_value_t = 1)]
    qty_width: u32,
    /// Units along the height
    #[arg(long, default_value_t = 10)]
    qty_height: u32,
    /// Layer pad thickness (mm)
    #[arg(long, default_value_t = 3.0)]
    pad_thickness: f64,
    /// Number of layer pads
    #[arg(long, default_value_t = 2)]
    pad_count: u32,
}

#[derive(Args, Debug)]
struct ExternalNestingArgs {
    /// External carton length (mm)
    #[arg(long, default_value_t = 600.0)]
    external_length: f64,
    /// External carton width (mm)
    #[arg(long, default_value_t = 500.0)]
    external_width: f64,
    /// External carton height (mm)
    #[arg(long, default_value_t = 215.0)]
    external_height: f64,
    /// Layer pad thickness (mm)
    #[arg(long, default_value_t = 3.0)]
    pad_thickness: f64,
    /// Number of layer pads
    #[arg(long, default_value_t = 3)]
    pad_count: u32,
    #[command(flatten)]
    product: ProductArgs,
}

#[derive(Args, Debug)]
struct SampleBoardArgs {
    /// Board length (mm)
    #[arg(long, default_value_t = 2400.0)]
    board_length: f64,
    /// Board width (mm)
    #[arg(long, default_value_t = 1322.0)]
    board_width: f64,
    /// Price per board
    #[arg(long, default_value_t = 5.95)]
    price_per_board: f64,
    /// Product length (mm)
    #[arg(long, default_value_t = 375.0)]
    product_length: f64,
    /// Product width (mm)
    #[arg(long, default_value_t = 310.0)]
    product_width: f64,
    /// Pieces ordered
    #[arg(long, default_value_t = 144)]
    order_quantity: u32,
    /// Boards used for testing
    #[arg(long, default_value_t = 2)]
    test_boards: u32,
    /// Job setup cost
    #[arg(long, default_value_t = 60.0)]
    setup_cost: f64,
    /// Margin (%)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    margin: f64,
}

#[derive(Args, Debug)]
struct FitmentArgs {
    #[command(flatten)]
    product: ProductArgs,
    /// External carton length (mm)
    #[arg(long, default_value_t = 600.0)]
    external_length: f64,
    /// External carton width (mm)
    #[arg(long, default_value_t = 500.0)]
    external_width: f64,
    /// External carton height (mm)
    #[arg(long, default_value_t = 300.0)]
    external_height: f64,
    /// Nesting thickness (mm)
    #[arg(long, default_value_t = 3.0)]
    thickness: f64,
    /// Minimum balance beside the product (mm)
    #[arg(long, default_value_t = 30.0)]
    allowance: f64,
    /// Units wanted per carton
    #[arg(long, default_value_t = 10)]
    quantity_per_box: u32,
    /// Weight of one unit (kg)
    #[arg(long, default_value_t = 1.0)]
    weight: f64,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Input job file (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the results (JSON), stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Validate only, don't evaluate
    #[arg(long)]
    validate: bool,
}

impl Command {
    fn into_request(self) -> Option<QuoteRequest> {
        let request = match self {
            Command::CartonBox(args) => QuoteRequest::CartonBox(args.into()),
            Command::PizzaBox(args) => QuoteRequest::PizzaBox(args.into()),
            Command::LayerPad(args) => QuoteRequest::LayerPad(args.into()),
            Command::NestingCarton(args) => QuoteRequest::NestingCarton(NestingSpec {
                product: args.product.dimensions(),
                bubble_wrap: args.product.bubble_wrap,
                slot_thickness_mm: args.thickness,
                allowance_mm: args.allowance,
                qty_along_length: args.qty_length,
                qty_along_width: args.qty_width,
                qty_along_height: args.qty_height,
                layer_pad_thickness_mm: args.pad_thickness,
                layer_pad_count: args.pad_count,
            }),
            Command::NestingFromExternal(args) => {
                QuoteRequest::NestingFromExternal(ExternalNestingSpec {
                    external: Dimensions::new(
                        args.external_length,
                        args.external_width,
                        args.external_height,
                    ),
                    layer_pad_thickness_mm: args.pad_thickness,
                    layer_pad_count: args.pad_count,
                    product: args.product.dimensions(),
                    bubble_wrap: args.product.bubble_wrap,
                })
            }
            Command::SampleBoard(args) => QuoteRequest::SampleBoard(SampleBoardSpec {
                board_length_mm: args.board_length,
                board_width_mm: args.board_width,
                price_per_board: args.price_per_board,
                product_length_mm: args.product_length,
                product_width_mm: args.product_width,
                order_quantity: args.order_quantity,
                test_board_quantity: args.test_boards,
                job_setup_cost: args.setup_cost,
                margin_percent: args.margin,
            }),
            Command::Fitment(args) => QuoteRequest::Fitment(FitmentSpec {
                product: args.product.dimensions(),
                bubble_wrap: args.product.bubble_wrap,
                carton_external: Dimensions::new(
                    args.external_length,
                    args.external_width,
                    args.external_height,
                ),
                nesting_thickness_mm: args.thickness,
                allowance_mm: args.allowance,
                quantity_per_box: args.quantity_per_box,
                product_weight_kg: args.weight,
            }),
            Command::Batch(_) => return None,
        };
        Some(request)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => PlantConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PlantConfig::default(),
    };
    if let Some(places) = cli.precision {
        config.money_places = places;
        config.check()?;
    }

    let request = match cli.command {
        Command::Batch(args) => return run_batch(&args, &config),
        command => command.into_request(),
    };
    let Some(request) = request else {
        anyhow::bail!("No calculator selected");
    };

    for warning in &check_request(&request).warnings {
        warn!("{}", warning);
    }

    let response = run_quote(&request, &config)
        .with_context(|| format!("Failed to run {}", request.calculator()))?;

    for warning in &response_warnings(&request, &response).warnings {
        warn!("{}", warning);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_response(&response);
    }

    Ok(())
}

fn run_batch(args: &BatchArgs, config: &PlantConfig) -> Result<()> {
    info!("Processing: {}", args.input.display());

    let requests = parse_job_file(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    info!("Parsed {} request(s)", requests.len());

    if args.validate {
        let mut failed = 0;
        for (index, request) in requests.iter().enumerate() {
            let validation = validate_request(request, config);
            for warning in &validation.warnings {
                warn!("Request {}: {}", index, warning);
            }
            for err in &validation.errors {
                error!("Request {}: {}", index, err);
            }
            if !validation.passed {
                failed += 1;
            }
        }
        if failed > 0 {
            anyhow::bail!("Validation failed for {} request(s)", failed);
        }
        info!("Validation passed");
        return Ok(());
    }

    let outcomes = run_job(&requests, config);
    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    let json = serde_json::to_string_pretty(&outcomes)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => println!("{}", json),
    }

    if failed > 0 {
        warn!("{} of {} request(s) failed", failed, outcomes.len());
    }

    Ok(())
}

fn print_response(response: &QuoteResponse) {
    match response {
        QuoteResponse::Price(quote) => {
            let result = &quote.result;
            println!("Product: {}", result.kind);
            println!("Cost per Piece: {}", result.cost_price);
            println!("Selling Price per Piece: {}", result.selling_price);
            println!("Total Price: {}", result.total_price);
            println!("Formula: {} = {}", quote.formula, result.selling_price);
            println!("Paper Length: {:.3} m", result.factors.paper_length_m);
            println!("Paper Actual Width: {:.4} m", result.factors.effective_width_m);
            println!(
                "UPS: {} on a {} mm roll ({} mm spare)",
                result.layout.pieces_per_roll,
                result.layout.roll_width_mm,
                result.layout.waste_mm()
            );
        }
        QuoteResponse::NestingCarton(result) => {
            println!("Internal Size: {}", result.internal);
            println!("External Size: {}", result.external);
            println!("Nesting Long: {}", result.long_insert);
            println!("Nesting Short: {}", result.short_insert);
            println!("Units per Carton: {}", result.units_per_carton);
        }
        QuoteResponse::NestingFromExternal(result) => {
            println!("Internal Carton Size: {}", result.internal);
            println!("Adjusted Product Size: {}", result.adjusted_product);
            println!("Layer Pad Deduction: {} mm", result.layer_pad_deduction_mm);
            println!("Nesting Long: {}", result.long_insert);
            println!("Nesting Short: {}", result.short_insert);
        }
        QuoteResponse::SampleBoard(result) => {
            println!(
                "UPS (L x W): {} x {} = {} pcs/board",
                result.ups_length, result.ups_width, result.total_ups
            );
            println!(
                "Boards Needed: {} + {} (test) = {} boards",
                result.boards_needed,
                result.total_boards - result.boards_needed,
                result.total_boards
            );
            println!("Total Cost: {}", result.total_cost);
            println!("Board Cost per Piece: {}", result.material_cost_per_piece);
            println!("Cost per Piece (before margin): {}", result.cost_per_piece);
            println!("Final Unit Price (with margin): {}", result.final_unit_price);
        }
        QuoteResponse::Fitment(quote) => {
            let result = &quote.result;
            println!("Nesting Long: {}", result.long_nesting);
            println!("Formula: {}", quote.long_formula);
            println!("Nesting Short: {}", result.short_nesting);
            println!("Formula: {}", quote.short_formula);
            println!(
                "Layer Pad: {} (qty {})",
                result.layer_pad, result.layer_pad_quantity
            );
            println!(
                "Nesting Height per Layer: {:.2} mm",
                result.nesting_height_per_layer_mm
            );
            println!("Internal Carton Size: {}", result.internal);
            println!(
                "Units that fit (L x W x H): {} x {} x {} = {}",
                result.fit_length, result.fit_width, result.fit_height, result.total_fit
            );
            println!("Total Carton Weight: {:.2} kg", result.total_carton_weight_kg);
        }
    }
}

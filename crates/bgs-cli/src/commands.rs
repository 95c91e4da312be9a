use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use bgs_brand::analyze_brand_colors;
use bgs_catalog::descriptor_for;
use bgs_cli::report::{
    brand_from_args, catalog_rows, classify_row, current_background, custom_background,
    search_rows,
};
use bgs_cli::settings::{OutputFormat, Settings, load_settings};
use bgs_model::{BackgroundDescriptor, BrandColors, SelectorMode};
use bgs_selector::{Command as SelectorCommand, Event, MemoryStore, SelectorController};
use bgs_validate::{ValidationContext, validate};
use serde::Serialize;
use tracing::{debug, info_span};

use crate::cli::{ApplyArgs, CatalogArgs, Cli, Command, SearchArgs, ValidateArgs};
use crate::summary::{
    print_analysis, print_applied, print_catalog, print_classify, print_validation,
    print_variations,
};

/// Run the parsed command and return the process exit code.
pub fn run(cli: &Cli) -> Result<i32> {
    let settings = load_settings(cli.config.as_deref())?;
    let json = cli.json || settings.output.format == OutputFormat::Json;
    match &cli.command {
        Command::Classify { colors } => run_classify(colors, json),
        Command::Search(args) => run_search(&settings, args, json),
        Command::Validate(args) => run_validate(&settings, args, json),
        Command::Analyze { primary, secondary } => {
            run_analyze(primary, secondary.as_deref(), json)
        }
        Command::Apply(args) => run_apply(&settings, args, json),
        Command::Catalog(args) => run_catalog(&settings, args, json),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}

fn run_classify(colors: &[String], json: bool) -> Result<i32> {
    let rows: Vec<_> = colors.iter().map(|c| classify_row(c)).collect();
    if json {
        print_json(&rows)?;
    } else {
        print_classify(&rows);
    }
    Ok(0)
}

/// Brand colors from the flags. Brand mode without flags starts from the
/// starter palette, as the picker does.
fn brand_for_mode(
    mode: SelectorMode,
    primary: Option<&str>,
    secondary: Option<&str>,
) -> Option<BrandColors> {
    let brand = brand_from_args(primary, secondary);
    if mode == SelectorMode::Brand && brand.is_none() {
        debug!("no brand colors given, using starter palette");
        return Some(BrandColors::starter());
    }
    brand
}

fn run_search(settings: &Settings, args: &SearchArgs, json: bool) -> Result<i32> {
    let catalog = settings.load_catalog()?;
    let mode = SelectorMode::from(args.mode);
    let span = info_span!("search", mode = %mode, base_color = %args.base_color);
    let _guard = span.enter();

    let brand = brand_for_mode(
        mode,
        args.brand.primary.as_deref(),
        args.brand.secondary.as_deref(),
    );
    let rows = search_rows(&catalog, mode, brand.as_ref(), args.base_color);
    if json {
        print_json(&rows)?;
    } else {
        print_variations(&rows, mode == SelectorMode::Brand);
    }
    Ok(0)
}

fn run_validate(settings: &Settings, args: &ValidateArgs, json: bool) -> Result<i32> {
    let background = match (&args.token, &args.variation) {
        (Some(token), _) => custom_background(token, args.base_color, args.accent_color),
        (None, Some(id)) => {
            let catalog = settings.load_catalog()?;
            let variation = catalog
                .get(id)
                .with_context(|| format!("unknown background variation: {id}"))?;
            descriptor_for(variation)
        }
        (None, None) => anyhow::bail!("either VARIATION_ID or --token is required"),
    };
    let brand = brand_from_args(args.brand.primary.as_deref(), args.brand.secondary.as_deref());
    let context = ValidationContext {
        mode: args.mode.map(SelectorMode::from),
        performance_requirements: None,
    };
    let result = validate(&background, brand.as_ref(), &context);

    if json {
        print_json(&result)?;
    } else {
        print_validation(&background, &result);
    }
    Ok(if result.is_valid { 0 } else { 1 })
}

fn run_analyze(primary: &str, secondary: Option<&str>, json: bool) -> Result<i32> {
    let mut colors = BrandColors::new(primary);
    colors.secondary = secondary.map(str::to_string);
    let analysis = analyze_brand_colors(&colors);
    if json {
        print_json(&analysis)?;
    } else {
        print_analysis(&colors, &analysis);
    }
    Ok(0)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApplyOutput<'a> {
    id: &'a str,
    applied: bool,
    applied_at: Option<String>,
    error: Option<String>,
    problems: Vec<String>,
    background: &'a BackgroundDescriptor,
    options: usize,
}

fn run_apply(settings: &Settings, args: &ApplyArgs, json: bool) -> Result<i32> {
    let catalog = Arc::new(settings.load_catalog()?);
    let mode = SelectorMode::from(args.mode);
    let mut controller = SelectorController::new(
        catalog,
        MemoryStore::new(),
        current_background(args.base_color),
    )
    .with_config(settings.selector);

    let start = Instant::now();
    controller.handle_at(SelectorCommand::SetMode(mode), start)?;
    let brand = brand_from_args(args.brand.primary.as_deref(), args.brand.secondary.as_deref());
    if let Some(brand) = brand {
        controller.handle_at(SelectorCommand::SetBrandColors(Some(brand)), start)?;
    }
    controller.poll_search(start + controller.config().debounce_for(mode));
    controller.handle(SelectorCommand::SelectVariation(args.variation.clone()))?;

    let problems: Vec<String> = controller
        .selection_problems()
        .iter()
        .map(ToString::to_string)
        .collect();
    let outcome = controller.handle(SelectorCommand::Apply);
    let (applied_at, error) = match &outcome {
        Ok(Event::Applied { at }) => (Some(at.to_rfc3339()), None),
        Ok(_) => (None, None),
        Err(error) => (None, Some(error.to_string())),
    };

    let output = ApplyOutput {
        id: &args.variation,
        applied: applied_at.is_some(),
        applied_at,
        error,
        problems,
        background: controller.current(),
        options: controller.options().len(),
    };
    if json {
        print_json(&output)?;
    } else {
        print_applied(
            output.id,
            output.applied_at.as_deref(),
            output.error.as_deref(),
            &output.problems,
            output.background,
        );
    }
    Ok(if output.applied { 0 } else { 1 })
}

fn run_catalog(settings: &Settings, args: &CatalogArgs, json: bool) -> Result<i32> {
    let catalog = settings.load_catalog()?;
    let rows = catalog_rows(&catalog, args.base_color, args.category);
    if json {
        print_json(&rows)?;
    } else {
        print_catalog(&rows, catalog.version(), &catalog.stats());
    }
    Ok(0)
}

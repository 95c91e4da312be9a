use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bgs_brand::BrandColorAnalysis;
use bgs_catalog::CatalogStats;
use bgs_cli::report::{ClassifyRow, VariationRow};
use bgs_model::{
    BackgroundDescriptor, BrandColors, IssueLevel, Severity, ValidationResult, WcagLevel,
};

pub fn print_classify(rows: &[ClassifyRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Family"),
        header_cell("Hue"),
        header_cell("Sat"),
        header_cell("Light"),
        header_cell("Brand color"),
    ]);
    apply_table_style(&mut table);
    for column in 2..=4 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for row in rows {
        let hsl_cells: Vec<Cell> = match row.hsl {
            Some([h, s, l]) => vec![
                Cell::new(format!("{h:.0}")),
                Cell::new(format!("{s:.2}")),
                Cell::new(format!("{l:.2}")),
            ],
            None => vec![dim_cell("-"), dim_cell("-"), dim_cell("-")],
        };
        let mut cells = vec![
            Cell::new(&row.input),
            Cell::new(row.family).add_attribute(Attribute::Bold),
        ];
        cells.extend(hsl_cells);
        cells.push(match &row.brand_problem {
            None => Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold),
            Some(problem) => Cell::new(problem).fg(Color::Yellow),
        });
        table.add_row(cells);
    }
    println!("{table}");
}

pub fn print_variations(rows: &[VariationRow], show_score: bool) {
    if rows.is_empty() {
        println!("No compatible backgrounds.");
        return;
    }
    let mut table = Table::new();
    let mut header = vec![
        header_cell("#"),
        header_cell("Id"),
        header_cell("Label"),
        header_cell("Family"),
        header_cell("Category"),
    ];
    if show_score {
        header.push(header_cell("Score"));
    }
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    if show_score {
        align_column(&mut table, 5, CellAlignment::Right);
    }
    for row in rows {
        let mut cells = vec![
            dim_cell(row.rank),
            Cell::new(&row.id).fg(Color::Blue),
            Cell::new(&row.label),
            Cell::new(row.base_color),
            category_cell(row),
        ];
        if show_score {
            cells.push(match row.brand_score {
                Some(score) => Cell::new(score).add_attribute(Attribute::Bold),
                None => dim_cell("-"),
            });
        }
        table.add_row(cells);
    }
    println!("{table}");
}

pub fn print_catalog(rows: &[VariationRow], version: Option<&str>, stats: &CatalogStats) {
    println!(
        "Catalog {}: {} entries ({} legacy, {} technical, {} professional, {} friendly)",
        version.unwrap_or("(unversioned)"),
        stats.total,
        stats.legacy,
        stats.technical,
        stats.professional,
        stats.friendly,
    );
    print_variations(rows, false);
}

pub fn print_validation(background: &BackgroundDescriptor, result: &ValidationResult) {
    println!("Background: {}", background.primary);
    let verdict = if result.is_valid {
        Cell::new("valid").fg(Color::Green)
    } else {
        Cell::new("invalid").fg(Color::Red)
    };

    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Result")]);
    apply_table_style(&mut table);
    let a = &result.accessibility;
    let p = &result.performance;
    let b = &result.brand_alignment;
    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new(result.score).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Verdict"), verdict]);
    table.add_row(vec![
        Cell::new("Contrast"),
        Cell::new(format!("{:.1} ({})", a.contrast_ratio, a.wcag_level)).fg(wcag_color(a.wcag_level)),
    ]);
    table.add_row(vec![Cell::new("Color-blind safe"), yes_no_cell(a.color_blind_safe)]);
    table.add_row(vec![Cell::new("Readability"), Cell::new(a.readability_score)]);
    table.add_row(vec![
        Cell::new("Complexity"),
        Cell::new(format!("{} (cost {})", p.complexity, p.render_cost)),
    ]);
    table.add_row(vec![
        Cell::new("Brand alignment"),
        Cell::new(format!(
            "{} (harmony {}, consistency {})",
            b.alignment_score, b.color_harmony, b.consistency_score
        )),
    ]);
    println!("{table}");

    if result.errors.is_empty() && result.warnings.is_empty() && result.suggestions.is_empty() {
        return;
    }
    let mut issues = Table::new();
    issues.set_header(vec![
        header_cell("Level"),
        header_cell("Id"),
        header_cell("Message"),
        header_cell("Fix"),
    ]);
    apply_table_style(&mut issues);
    for error in &result.errors {
        issues.add_row(vec![
            Cell::new("ERROR").fg(Color::Red).add_attribute(Attribute::Bold),
            Cell::new(&error.id),
            Cell::new(&error.message),
            Cell::new(&error.fix),
        ]);
    }
    for warning in &result.warnings {
        issues.add_row(vec![
            severity_cell(warning.severity),
            Cell::new(&warning.id),
            Cell::new(&warning.message),
            optional_cell(warning.fix.as_deref()),
        ]);
    }
    for suggestion in &result.suggestions {
        issues.add_row(vec![
            Cell::new("HINT").fg(Color::Cyan),
            Cell::new(&suggestion.id),
            Cell::new(&suggestion.message),
            optional_cell(suggestion.action.as_deref()),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{issues}");

    for issue in &a.issues {
        let tag = match issue.severity {
            IssueLevel::Error => "error",
            IssueLevel::Warning => "warning",
        };
        println!("- accessibility {tag}: {}", issue.message);
    }
}

pub fn print_analysis(colors: &BrandColors, analysis: &BrandColorAnalysis) {
    println!(
        "Brand: {}{}",
        colors.primary,
        colors
            .secondary()
            .map(|s| format!(" / {s}"))
            .unwrap_or_default()
    );
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Valid"), yes_no_cell(analysis.is_valid)]);
    table.add_row(vec![
        Cell::new("Family"),
        Cell::new(analysis.base_color_family).add_attribute(Attribute::Bold),
    ]);
    let harmonics: Vec<String> = analysis.harmonic_colors.iter().map(ToString::to_string).collect();
    table.add_row(vec![Cell::new("Harmonious"), Cell::new(harmonics.join(", "))]);
    table.add_row(vec![
        Cell::new("Compatibility"),
        Cell::new(analysis.compatibility_score).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    for warning in &analysis.warnings {
        println!("warning: {warning}");
    }
    for suggestion in &analysis.suggestions {
        println!("suggestion: {suggestion}");
    }

    let mut swatches = Table::new();
    swatches.set_header(vec![header_cell("Hex"), header_cell("Name"), header_cell("Source")]);
    apply_table_style(&mut swatches);
    for color in &analysis.suggested_colors {
        swatches.add_row(vec![
            Cell::new(&color.hex),
            Cell::new(&color.name),
            dim_cell(color.category),
        ]);
    }
    println!();
    println!("Suggested colors:");
    println!("{swatches}");
}

pub fn print_applied(
    id: &str,
    applied_at: Option<&str>,
    error: Option<&str>,
    problems: &[String],
    current: &BackgroundDescriptor,
) {
    match (applied_at, error) {
        (Some(at), _) => println!("Applied {id} at {at}"),
        (None, Some(error)) => eprintln!("error: could not apply {id}: {error}"),
        (None, None) => eprintln!("error: could not apply {id}"),
    }
    for problem in problems {
        eprintln!("- {problem}");
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Region"), header_cell("Token")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("primary"), Cell::new(&current.primary)]);
    table.add_row(vec![Cell::new("secondary"), Cell::new(&current.secondary)]);
    table.add_row(vec![Cell::new("neutral"), Cell::new(&current.neutral)]);
    table.add_row(vec![Cell::new("divider"), Cell::new(&current.divider)]);
    table.add_row(vec![Cell::new("accent"), Cell::new(&current.accent_token)]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn category_cell(row: &VariationRow) -> Cell {
    match row.category {
        Some(category) => Cell::new(category),
        None => dim_cell(row.kind),
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::High => Cell::new("HIGH")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Medium => Cell::new("MEDIUM").fg(Color::Yellow),
        Severity::Low => Cell::new("LOW").fg(Color::DarkGrey),
    }
}

fn wcag_color(level: WcagLevel) -> Color {
    match level {
        WcagLevel::Aaa => Color::Green,
        WcagLevel::Aa => Color::Yellow,
        WcagLevel::Fail => Color::Red,
    }
}

fn yes_no_cell(value: bool) -> Cell {
    if value {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no").fg(Color::Red)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use pinsight::api::AnalysisResult;
use pinsight::candidates::Candidate;
use pinsight::frequency::FrequencyTable;
use pinsight::geometry::NormalizedPoint;
use pinsight::model::PositionAnalysis;
use pinsight::ranking::RankingStrategy;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, from: usize, to: usize) {
    for i in from..=to {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn format_score(strategy: RankingStrategy, score: f64) -> String {
    match strategy {
        RankingStrategy::Spatial => format!("{:.3e}", score),
        RankingStrategy::FrequencyFiltered => format!("{:.0}", score),
        RankingStrategy::Composite => format!("{:.4}", score),
    }
}

/// Normalized tap position and the three likeliest digits per tap.
pub fn print_position_report(positions: &[PositionAnalysis], normalized: &[NormalizedPoint]) {
    if positions.is_empty() {
        println!("\n(no tap positions to report)");
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Tap").add_attribute(Attribute::Bold),
        Cell::new("X"),
        Cell::new("Y"),
        Cell::new("1st").fg(Color::Green),
        Cell::new("2nd"),
        Cell::new("3rd"),
    ]);
    align_right(&mut table, 1, 2);

    for (pos, pt) in positions.iter().zip(normalized) {
        let mut row = vec![
            Cell::new(pos.position + 1).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.3}", pt.x)),
            Cell::new(format!("{:.3}", pt.y)),
        ];
        for (i, dp) in pos.likelihood.top(3).iter().enumerate() {
            let cell = Cell::new(format!("{} ({:.1}%)", dp.digit, dp.p * 100.0));
            row.push(if i == 0 { cell.fg(Color::Green) } else { cell });
        }
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn print_ranking(strategy: RankingStrategy, ranking: &[Candidate]) {
    println!("\n{} ranking:", strategy.title());
    if ranking.is_empty() {
        println!("  (no candidates)");
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("PIN").add_attribute(Attribute::Bold),
        Cell::new(strategy.score_label()).fg(Color::Cyan),
    ]);
    align_right(&mut table, 2, 2);

    for (rank, c) in ranking.iter().enumerate() {
        let pin = Cell::new(c.pin.to_string()).set_alignment(CellAlignment::Center);
        table.add_row(vec![
            Cell::new(rank + 1),
            if rank == 0 {
                pin.add_attribute(Attribute::Bold).fg(Color::Green)
            } else {
                pin
            },
            Cell::new(format_score(strategy, c.score)),
        ]);
    }
    println!("{}", table);
}

pub fn print_weight_note(spatial_weight: f64) {
    println!(
        "\nComposite blend: {:.0}% spatial / {:.0}% frequency",
        spatial_weight * 100.0,
        (1.0 - spatial_weight) * 100.0
    );
}

/// One row per blend weight: the composite winner and how it compares.
pub fn print_sweep(results: &[AnalysisResult]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Weight").add_attribute(Attribute::Bold),
        Cell::new("Composite #1").fg(Color::Cyan),
        Cell::new("Blend"),
        Cell::new("Composite #2"),
        Cell::new("= Spatial #1"),
    ]);
    align_right(&mut table, 0, 0);
    align_right(&mut table, 2, 2);

    for r in results {
        let first = r.composite.first();
        let second = r.composite.get(1);
        let spatial_top = r.top(RankingStrategy::Spatial);
        let agrees = match (first, spatial_top) {
            (Some(a), Some(b)) => a.pin == b.pin,
            _ => false,
        };

        table.add_row(vec![
            Cell::new(format!("{:.2}", r.spatial_weight)),
            Cell::new(first.map(|c| c.pin.to_string()).unwrap_or_else(|| "-".into()))
                .fg(Color::Cyan),
            Cell::new(first.map(|c| format!("{:.4}", c.score)).unwrap_or_default()),
            Cell::new(second.map(|c| c.pin.to_string()).unwrap_or_else(|| "-".into())),
            if agrees {
                Cell::new("yes").fg(Color::Green)
            } else {
                Cell::new("no")
            },
        ]);
    }
    println!("\n{}", table);
}

pub fn print_frequency_summary(source: &str, table: &FrequencyTable, top: usize) {
    let mut summary = new_table();
    summary.add_row(vec![
        Cell::new("Source").add_attribute(Attribute::Bold),
        Cell::new(source),
    ]);
    summary.add_row(vec![Cell::new("PINs"), Cell::new(table.len())]);
    summary.add_row(vec![Cell::new("Total count"), Cell::new(table.total())]);
    summary.add_row(vec![
        Cell::new("Max count").fg(Color::Green),
        Cell::new(table.max_count()),
    ]);
    summary.add_row(vec![
        Cell::new("Min count").fg(Color::Red),
        Cell::new(table.min_count()),
    ]);
    println!("\n{}", summary);

    if top == 0 {
        return;
    }

    let mut common = new_table();
    common.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("PIN").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Share"),
    ]);
    align_right(&mut common, 2, 3);

    let total = table.total().max(1) as f64;
    for (rank, c) in table.most_common(top).iter().enumerate() {
        common.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(c.pin.to_string()),
            Cell::new(format!("{:.0}", c.score)),
            Cell::new(format!("{:.3}%", c.score / total * 100.0)),
        ]);
    }
    println!("{}", common);
}

//! Build a [`Figure`] from a table.
//!
//! Workflow: validate -> correlations + histograms -> per-cell content.
//! Every statistic is computed before the first cell is assembled, and all
//! validation errors surface before any statistic runs.

use log::{debug, trace, warn};

use crate::domain::{MatrixConfig, NumericTable, RawColumn};
use crate::error::MatrixError;
use crate::layout::{AxisRange, CellRect, FontScale, TickPlacement, cell_rects};
use crate::math::{
    CorrelationMatrix, HISTOGRAM_BINS, Histogram, LINE_SAMPLES, density_histogram, fit_line, round2,
};

use super::{
    Cell, CellContent, CellGrid, CellKind, CellStyle, Coefficient, Figure, NameLabel, Scatter,
};

/// Validate raw columns and build the matrix.
pub fn render(
    columns: &[RawColumn],
    config: &MatrixConfig,
) -> Result<(Figure, CellGrid), MatrixError> {
    config.validate()?;
    let table = NumericTable::validate(columns)?;
    render_table(&table, config)
}

/// Like [`render`], with the method given by name and the size as `(width, height)` inches.
///
/// The method and size are checked before the table is looked at.
pub fn render_with(
    columns: &[RawColumn],
    method: &str,
    figure_size: (f64, f64),
) -> Result<(Figure, CellGrid), MatrixError> {
    let config = MatrixConfig::new(method, figure_size)?;
    render(columns, &config)
}

/// Build the matrix from an already validated table.
pub fn render_table(
    table: &NumericTable,
    config: &MatrixConfig,
) -> Result<(Figure, CellGrid), MatrixError> {
    config.validate()?;
    let n = table.width();
    debug!(
        "rendering {n}x{n} association matrix: rows={}, method={}",
        table.rows(),
        config.method
    );

    let correlations = CorrelationMatrix::compute(table, config.method);
    let histograms: Vec<Histogram> = table
        .columns()
        .iter()
        .map(|c| density_histogram(c.values(), HISTOGRAM_BINS))
        .collect();
    let rects = cell_rects(&config.figure_size, n);

    let mut cells = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let rect = rects[i * n + j];
            let content = match CellKind::of(i, j) {
                CellKind::Diagonal => diagonal_content(table, i, &histograms[i], &rect),
                CellKind::Lower => CellContent::Scatter(scatter_content(table, i, j, &rect)),
                CellKind::Upper => {
                    CellContent::Coefficient(coefficient_content(&correlations, i, j, &rect))
                }
            };
            let (x_range, y_range) = match &content {
                CellContent::Histogram { histogram, .. } => histogram_ranges(histogram),
                _ => pair_ranges(table, i, j),
            };
            trace!("cell ({i}, {j}) {:?}", CellKind::of(i, j));

            cells.push(Cell {
                row: i,
                col: j,
                rect,
                x_range,
                y_range,
                ticks: TickPlacement::for_cell(i, j, n),
                content,
                style: CellStyle::default(),
            });
        }
    }

    let figure = Figure {
        size: config.figure_size,
        columns: table.names().into_iter().map(str::to_string).collect(),
        correlations,
        cells,
    };
    debug!("association matrix ready: {} cells", figure.cells.len());

    Ok((figure, CellGrid::new(n)))
}

fn diagonal_content(
    table: &NumericTable,
    i: usize,
    histogram: &Histogram,
    rect: &CellRect,
) -> CellContent {
    CellContent::Histogram {
        histogram: histogram.clone(),
        label: NameLabel {
            text: table.column(i).name().to_string(),
            font_px: FontScale::for_label(rect.extent()).size_for(1.0),
        },
    }
}

/// Column `j` on x, column `i` on y.
fn scatter_content(table: &NumericTable, i: usize, j: usize, rect: &CellRect) -> Scatter {
    let xs = table.column(j).values();
    let ys = table.column(i).values();
    let points: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();

    let fit = fit_line(xs, ys);
    let line = match fit {
        Some(fit) => {
            let (x_min, x_max) = min_max(xs);
            fit.sample(x_min, x_max, LINE_SAMPLES)
        }
        None => {
            warn!(
                "no trend line for '{}' vs '{}': least squares fit failed",
                table.column(j).name(),
                table.column(i).name()
            );
            Vec::new()
        }
    };

    Scatter {
        points,
        marker_px: (rect.extent() / 100.0).sqrt().max(1.0),
        fit,
        line,
    }
}

fn coefficient_content(
    correlations: &CorrelationMatrix,
    i: usize,
    j: usize,
    rect: &CellRect,
) -> Coefficient {
    let value = round2(correlations.get(i, j));
    Coefficient {
        value,
        font_px: FontScale::for_coefficient(rect.extent()).size_for(value),
    }
}

/// Column `j` on x, column `i` on y; upper cells keep the ranges of an invisible scatter.
fn pair_ranges(table: &NumericTable, i: usize, j: usize) -> (AxisRange, AxisRange) {
    (
        AxisRange::from_values(table.column(j).values().iter().copied()),
        AxisRange::from_values(table.column(i).values().iter().copied()),
    )
}

fn histogram_ranges(histogram: &Histogram) -> (AxisRange, AxisRange) {
    let (lo, hi) = histogram.range();
    let x = AxisRange::from_values([lo, hi]);
    let top = histogram.max_density();
    let y = AxisRange {
        min: 0.0,
        max: if top > 0.0 { top * 1.05 } else { 1.0 },
    };
    (x, y)
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CorrelationMethod;
    use crate::error::InvalidInput;

    fn table() -> NumericTable {
        NumericTable::from_columns(vec![
            ("a", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
            ("b", vec![2.0, 4.0, 6.0, 8.0, 10.0]),
            ("c", vec![5.0, 3.0, 4.0, 1.0, 2.0]),
        ])
        .unwrap()
    }

    #[test]
    fn cell_counts_by_kind() {
        let (figure, grid) = render_table(&table(), &MatrixConfig::default()).unwrap();
        assert_eq!(grid.len(), 9);
        assert_eq!(figure.cells().len(), 9);
        assert_eq!(figure.cells_of(CellKind::Diagonal).count(), 3);
        assert_eq!(figure.cells_of(CellKind::Lower).count(), 3);
        assert_eq!(figure.cells_of(CellKind::Upper).count(), 3);
        assert!(figure.cells_of(CellKind::Diagonal).all(|c| c.histogram().is_some()));
        assert!(figure.cells_of(CellKind::Lower).all(|c| c.scatter().is_some()));
        assert!(figure.cells_of(CellKind::Upper).all(|c| c.coefficient().is_some()));
    }

    #[test]
    fn lower_cell_plots_column_j_against_column_i() {
        let (figure, grid) = render_table(&table(), &MatrixConfig::default()).unwrap();
        let h = grid.get(1, 0).unwrap();
        let scatter = figure[h].scatter().unwrap();
        assert_eq!(scatter.points[0], (1.0, 2.0));
        let fit = scatter.fit.unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-10);
        assert_eq!(scatter.line.len(), LINE_SAMPLES);
        assert_eq!(scatter.line[0].0, 1.0);
        assert_eq!(scatter.line[LINE_SAMPLES - 1].0, 5.0);
    }

    #[test]
    fn upper_cell_mirrors_lower_ranges() {
        let (figure, _) = render_table(&table(), &MatrixConfig::default()).unwrap();
        let upper = figure.cell(0, 2).unwrap();
        let lower = figure.cell(2, 0).unwrap();
        assert_eq!(upper.x_range, lower.y_range);
        assert_eq!(upper.y_range, lower.x_range);
    }

    #[test]
    fn coefficients_are_rounded_and_sized() {
        let (figure, _) = render_table(&table(), &MatrixConfig::default()).unwrap();
        let perfect = figure.cell(0, 1).unwrap().coefficient().unwrap();
        assert_eq!(perfect.value, 1.0);

        let other = figure.cell(0, 2).unwrap().coefficient().unwrap();
        assert_eq!(other.value, round2(figure.correlations().get(0, 2)));
        assert!(perfect.font_px > other.font_px);
    }

    #[test]
    fn spearman_config_changes_method() {
        let config = MatrixConfig::default().with_method(CorrelationMethod::Spearman);
        let (figure, _) = render_table(&table(), &config).unwrap();
        assert_eq!(figure.method(), CorrelationMethod::Spearman);
        // c ranks: [5,3,4,1,2] vs a ranks 1..5
        let r = figure.cell(0, 2).unwrap().coefficient().unwrap().value;
        assert_eq!(r, -0.8);
    }

    #[test]
    fn invalid_method_fails_before_table_validation() {
        let err = render_with(&[], "kendall", (15.0, 15.0)).unwrap_err();
        assert_eq!(
            err,
            MatrixError::InvalidInput(InvalidInput::UnknownMethod("kendall".to_string()))
        );
    }

    #[test]
    fn invalid_figure_size_is_rejected() {
        let config = MatrixConfig {
            figure_size: crate::domain::FigureSize {
                width: 0.0,
                height: 3.0,
            },
            ..MatrixConfig::default()
        };
        assert!(render_table(&table(), &config).unwrap_err().is_invalid_input());
    }
}

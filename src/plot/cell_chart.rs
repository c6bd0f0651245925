//! Per-cell Plotters rendering.
//!
//! Each cell gets its own sub-area of the root, carved out from the cell's
//! layout rectangle (scaled if the root is not the figure's native size).
//! Label areas are only allocated on the sides where the cell shows ticks.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::error::MatrixError;
use crate::layout::{XTicks, YTicks};
use crate::matrix::{Cell, CellContent, Figure};

/// Tick label font bounds, in pixels.
const TICK_FONT_MIN: f64 = 8.0;
const TICK_FONT_MAX: f64 = 14.0;

/// Relative position of the diagonal column-name label inside its cell.
const NAME_LABEL_POS: (f64, f64) = (0.5, 0.75);

impl Figure {
    /// Draw every cell onto `root`.
    ///
    /// `root` may be any size; cell rectangles are scaled from the figure's
    /// native pixel size to the area's size.
    pub fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), MatrixError> {
        root.fill(&WHITE)?;

        let (native_w, native_h) = self.size.pixels();
        let (w, h) = root.dim_in_pixel();
        let scale = (w as f64 / native_w as f64, h as f64 / native_h as f64);

        for cell in &self.cells {
            draw_cell(root, cell, scale)?;
        }

        root.present()?;
        Ok(())
    }

    /// Render the whole figure as an SVG document.
    pub fn to_svg(&self) -> Result<String, MatrixError> {
        let mut out = String::new();
        {
            let root = SVGBackend::with_string(&mut out, self.size.pixels()).into_drawing_area();
            self.draw(&root)?;
        }
        Ok(out)
    }
}

/// Draw a single cell onto its slice of `root`.
pub fn draw_cell<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    cell: &Cell,
    scale: (f64, f64),
) -> Result<(), MatrixError> {
    let r = &cell.rect;
    let left = (r.x * scale.0).round() as i32;
    let top = (r.y * scale.1).round() as i32;
    let width = ((r.width * scale.0).round() as u32).max(1);
    let height = ((r.height * scale.1).round() as u32).max(1);
    let area = root.clone().shrink((left, top), (width, height));
    area.fill(&cell.style.background)?;

    let extent = (f64::from(width) + f64::from(height)) / 2.0;
    let tick_px = (extent / 40.0).clamp(TICK_FONT_MIN, TICK_FONT_MAX);
    let label_area = (tick_px * 2.5).round() as u32;

    let mut builder = ChartBuilder::on(&area);
    builder.margin(2);
    match cell.ticks.x {
        XTicks::Top => {
            builder.set_label_area_size(LabelAreaPosition::Top, label_area);
        }
        XTicks::Bottom => {
            builder.set_label_area_size(LabelAreaPosition::Bottom, label_area);
        }
        XTicks::Hidden => {}
    }
    match cell.ticks.y {
        YTicks::Left => {
            builder.set_label_area_size(LabelAreaPosition::Left, label_area * 2);
        }
        YTicks::Right => {
            builder.set_label_area_size(LabelAreaPosition::Right, label_area * 2);
        }
        YTicks::Hidden => {}
    }

    let x = cell.x_range;
    let y = cell.y_range;
    let mut chart = builder.build_cartesian_2d(x.as_range(), y.as_range())?;

    // Key points need a finite span; ranges wider than f64::MAX go without ticks.
    let has_mesh = !cell.ticks.is_hidden() && x.span().is_finite() && y.span().is_finite();
    if has_mesh {
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(4)
            .y_labels(4)
            .x_label_formatter(&|v| fmt_tick(*v))
            .y_label_formatter(&|v| fmt_tick(*v))
            .label_style(font(tick_px).color(&cell.style.text))
            .axis_style(cell.style.frame)
            .draw()?;
    }

    let style = cell.style;
    match &cell.content {
        CellContent::Histogram { histogram, label } => {
            chart.draw_series(
                histogram
                    .bars()
                    .map(|(l, r, h)| Rectangle::new([(l, 0.0), (r, h)], style.series.filled())),
            )?;
            chart.draw_series(histogram.bars().map(|(l, r, h)| {
                Rectangle::new([(l, 0.0), (r, h)], style.background.stroke_width(1))
            }))?;

            let (tx, ty) = NAME_LABEL_POS;

            // Boxed label: estimate the text extent as a fraction of the plot for the backdrop.
            let (plot_w, plot_h) = chart.plotting_area().dim_in_pixel();
            let text_w = label.text.chars().count() as f64 * label.font_px * 0.6 + label.font_px;
            let text_h = label.font_px * 2.0;
            let half_w = text_w / 2.0 / f64::from(plot_w.max(1));
            let half_h = text_h / 2.0 / f64::from(plot_h.max(1));
            let lo = (x.at(tx - half_w), y.at(ty - half_h));
            let hi = (x.at(tx + half_w), y.at(ty + half_h));
            chart.draw_series(std::iter::once(Rectangle::new([lo, hi], WHITE.mix(0.5).filled())))?;
            chart.draw_series(std::iter::once(Text::new(
                label.text.clone(),
                (x.at(tx), y.at(ty)),
                centered(font(label.font_px).color(&style.text)),
            )))?;
        }
        CellContent::Scatter(scatter) => {
            let radius = scatter.marker_px.round().max(1.0) as i32;
            chart.draw_series(
                scatter
                    .points
                    .iter()
                    .map(|&p| Circle::new(p, radius, style.series.filled())),
            )?;
            if !scatter.line.is_empty() {
                chart.draw_series(LineSeries::new(scatter.line.iter().copied(), &style.line))?;
            }
        }
        CellContent::Coefficient(coef) => {
            let center = (x.at(0.5), y.at(0.5));
            chart.draw_series(std::iter::once(Text::new(
                coef.label(),
                center,
                centered(font(coef.font_px).color(&style.text)),
            )))?;
        }
    }

    // Cell frame around the plotting area.
    chart.draw_series(std::iter::once(Rectangle::new(
        [(x.min, y.min), (x.max, y.max)],
        style.frame.stroke_width(1),
    )))?;

    Ok(())
}

fn font(px: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, px, FontStyle::Normal)
}

fn centered(style: TextStyle<'_>) -> TextStyle<'_> {
    style.pos(Pos::new(HPos::Center, VPos::Center))
}

fn fmt_tick(v: f64) -> String {
    let a = v.abs();
    if a != 0.0 && !(1e-2..1e4).contains(&a) {
        format!("{v:.1e}")
    } else if a >= 100.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

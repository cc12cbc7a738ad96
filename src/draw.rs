use drawille::Canvas;
use drawille::PixelColor;
use tracing::warn;

/// One labeled line series, indexed by time step.
#[derive(Clone, Debug)]
pub struct Series<'a> {
    /// Name shown in the legend.
    pub label: &'a str,
    /// Color of the polyline.
    pub color: PixelColor,
    /// Time step of the first value.
    ///
    /// Prediction and observation sequences start at step 1, trajectory and
    /// estimate sequences at step 0.
    pub start: usize,
    /// The values, one per time step.
    pub values: &'a [f64],
}

impl Series<'_> {
    fn last_step(&self) -> usize {
        self.start + self.values.len().saturating_sub(1)
    }
}

/// Terminal chart that renders series against a shared time axis.
///
/// Purely a display concern: it consumes value slices and never touches
/// generator or filter state.
#[derive(Clone, Debug)]
pub struct Chart {
    /// Canvas width in braille pixels.
    pub width: u32,
    /// Canvas height in braille pixels.
    pub height: u32,
}

impl Default for Chart {
    fn default() -> Self {
        Self {
            width: 160,
            height: 48,
        }
    }
}

impl Chart {
    /// Renders the series as colored polylines and returns the frame
    /// followed by a legend line.
    pub fn render(&self, series: &[Series]) -> String {
        let finite = |x: &&f64| x.is_finite();
        let min = series
            .iter()
            .flat_map(|s| s.values.iter().filter(finite))
            .fold(f64::INFINITY, |a, &b| a.min(b));
        let max = series
            .iter()
            .flat_map(|s| s.values.iter().filter(finite))
            .fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let last_step = series.iter().map(Series::last_step).max().unwrap_or(0);

        if min > max {
            warn!("nothing to draw");
            return String::new();
        }

        let span = if max > min { max - min } else { 1.0 };
        let u_from_step = |step: usize| -> u32 {
            if last_step == 0 {
                return 0;
            }
            (step as f64 / last_step as f64 * f64::from(self.width - 1)).round() as u32
        };
        let v_from_value = |x: f64| -> u32 {
            ((max - x) / span * f64::from(self.height - 1)).round() as u32
        };

        let mut canvas = Canvas::new(self.width, self.height);
        for s in series {
            for (i, pair) in s.values.windows(2).enumerate() {
                if !pair[0].is_finite() || !pair[1].is_finite() {
                    continue;
                }
                canvas.line_colored(
                    u_from_step(s.start + i),
                    v_from_value(pair[0]),
                    u_from_step(s.start + i + 1),
                    v_from_value(pair[1]),
                    s.color,
                );
            }
            if s.values.len() == 1 && s.values[0].is_finite() {
                canvas.line_colored(
                    u_from_step(s.start),
                    v_from_value(s.values[0]),
                    u_from_step(s.start),
                    v_from_value(s.values[0]),
                    s.color,
                );
            }
        }

        let labels: Vec<&str> = series.iter().map(|s| s.label).collect();
        format!("{}\nseries: {}", canvas.frame(), labels.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_frame_with_a_legend() {
        let chart = Chart::default();
        let truth = [160.0, 161.0, 162.0];
        let estimates = [160.0, 160.3, 160.9];
        let frame = chart.render(&[
            Series {
                label: "truth",
                color: PixelColor::Blue,
                start: 0,
                values: &truth,
            },
            Series {
                label: "estimated",
                color: PixelColor::Green,
                start: 0,
                values: &estimates,
            },
        ]);
        assert!(frame.contains("series: truth, estimated"));
        assert!(frame.lines().count() > 1);
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(Chart::default().render(&[]), "");
    }

    #[test]
    fn flat_series_does_not_divide_by_zero() {
        let values = [5.0, 5.0, 5.0];
        let frame = Chart::default().render(&[Series {
            label: "flat",
            color: PixelColor::Red,
            start: 0,
            values: &values,
        }]);
        assert!(frame.contains("series: flat"));
    }
}

/// Where a trigger element sits relative to its scroll window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Trigger still above the start point (`position > start`).
    Before,
    /// Between the break points, inclusive, at the given scroll percent.
    Active(i64),
    /// Anywhere else outside the window.
    After,
}

/// The pair of break points one transform animates between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWindow {
    start: f64,
    stop: f64,
    percent_unit: f64,
}

impl ScrollWindow {
    pub fn new(start: f64, stop: f64) -> Self {
        Self {
            start,
            stop,
            percent_unit: (stop - start).abs() / 100.0,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Scroll pixels per percent of progress.
    pub fn percent_unit(&self) -> f64 {
        self.percent_unit
    }

    /// Both break points coincide, so there is nothing to interpolate.
    pub fn is_degenerate(&self) -> bool {
        self.percent_unit == 0.0
    }

    /// Progress of a trigger at `position`: `(start - position) / percent_unit`
    /// in whole percents, rounded half up and not clamped. The unit is
    /// unsigned, so an inverted window (`start < stop`) yields negative
    /// percents between its points.
    pub fn scroll_percent(&self, position: f64) -> i64 {
        if self.is_degenerate() {
            return 0;
        }
        js_round((self.start - position) / self.percent_unit)
    }

    /// Active anywhere between the two points, inclusive, whichever is
    /// larger. Outside them, a position above the start point is
    /// [`Phase::Before`] and everything else is [`Phase::After`].
    pub fn classify(&self, position: f64) -> Phase {
        let (low, high) = if self.start <= self.stop {
            (self.start, self.stop)
        } else {
            (self.stop, self.start)
        };
        if (low..=high).contains(&position) {
            Phase::Active(self.scroll_percent(position))
        } else if position > self.start {
            Phase::Before
        } else {
            Phase::After
        }
    }
}

/// Round to the nearest integer with halves going towards positive infinity.
fn js_round(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_window_phases() {
        let window = ScrollWindow::new(500.0, 0.0);
        assert_eq!(window.percent_unit(), 5.0);
        assert_eq!(window.classify(600.0), Phase::Before);
        assert_eq!(window.classify(500.0), Phase::Active(0));
        assert_eq!(window.classify(250.0), Phase::Active(50));
        assert_eq!(window.classify(0.0), Phase::Active(100));
        assert_eq!(window.classify(-1.0), Phase::After);
    }

    #[test]
    fn inverted_window_keeps_the_start_minus_position_formula() {
        let window = ScrollWindow::new(0.0, 500.0);
        assert_eq!(window.percent_unit(), 5.0);
        assert_eq!(window.classify(0.0), Phase::Active(0));
        assert_eq!(window.classify(250.0), Phase::Active(-50));
        assert_eq!(window.classify(500.0), Phase::Active(-100));
        // Outside the window only `position > start` counts as before.
        assert_eq!(window.classify(600.0), Phase::Before);
        assert_eq!(window.classify(-10.0), Phase::After);
    }

    #[test]
    fn rounding_goes_half_up() {
        let window = ScrollWindow::new(100.0, 0.0);
        assert_eq!(window.scroll_percent(97.5), 3);
        assert_eq!(window.scroll_percent(98.5), 2);
        assert_eq!(window.scroll_percent(100.5), 0);
        assert_eq!(window.scroll_percent(101.5), -1);
    }

    #[test]
    fn scroll_percent_extrapolates() {
        let window = ScrollWindow::new(500.0, 0.0);
        assert_eq!(window.scroll_percent(750.0), -50);
        assert_eq!(window.scroll_percent(-500.0), 200);
    }

    #[test]
    fn degenerate_window() {
        let window = ScrollWindow::new(300.0, 300.0);
        assert!(window.is_degenerate());
        assert_eq!(window.classify(300.0), Phase::Active(0));
        assert_eq!(window.classify(301.0), Phase::Before);
        assert_eq!(window.classify(299.0), Phase::After);
    }
}

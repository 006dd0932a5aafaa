use hindsight_core::{ChartPoint, ChartSink};

/// Fixed-height ASCII line chart printed to stdout after every change.
pub struct TerminalChart {
    points: Vec<ChartPoint>,
    height: usize,
}

impl TerminalChart {
    pub fn new(height: usize) -> Self {
        Self {
            points: Vec::new(),
            height: height.clamp(3, 40),
        }
    }

    fn render(&self) {
        if self.points.is_empty() {
            return;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in &self.points {
            min = min.min(point.value);
            max = max.max(point.value);
        }
        let spread = max - min;

        let rows = self.height;
        let cols = self.points.len();
        let mut grid = vec![vec![' '; cols]; rows];
        for (col, point) in self.points.iter().enumerate() {
            let norm = if spread > 0.0 {
                (point.value - min) / spread
            } else {
                0.5
            };
            let row = ((1.0 - norm) * (rows - 1) as f64).round() as usize;
            grid[row.min(rows - 1)][col] = '*';
        }

        println!();
        for (row, cells) in grid.iter().enumerate() {
            let label = if row == 0 {
                format!("{max:>10.2}")
            } else if row == rows - 1 {
                format!("{min:>10.2}")
            } else {
                " ".repeat(10)
            };
            let line: String = cells.iter().collect();
            println!("{label} |{line}");
        }
        println!("{} +{}", " ".repeat(10), "-".repeat(cols));

        if let (Some(first), Some(last)) = (self.points.first(), self.points.last()) {
            println!("{} {} .. {}", " ".repeat(10), first.label, last.label);
        }
        println!();
    }
}

impl ChartSink for TerminalChart {
    fn seed(&mut self, points: &[ChartPoint]) {
        self.points = points.to_vec();
        self.render();
    }

    fn append(&mut self, point: &ChartPoint) {
        self.points.push(point.clone());
        self.render();
    }

    fn clear(&mut self) {
        self.points.clear();
    }
}

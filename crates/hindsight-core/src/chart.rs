use serde::Serialize;

/// One labeled value on the visual series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Chart effect emitted by a game transition. Transitions return these as
/// data; the caller decides when and where to apply them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartCommand {
    /// Replace the visual series with these points, oldest first.
    Seed(Vec<ChartPoint>),
    /// Add one point at the right edge.
    Append(ChartPoint),
    /// Empty the visual series.
    Clear,
}

/// Receiver for the visual series.
pub trait ChartSink {
    fn seed(&mut self, points: &[ChartPoint]);
    fn append(&mut self, point: &ChartPoint);
    fn clear(&mut self);
}

/// Apply one command to a sink.
pub fn apply(sink: &mut dyn ChartSink, command: &ChartCommand) {
    match command {
        ChartCommand::Seed(points) => sink.seed(points),
        ChartCommand::Append(point) => sink.append(point),
        ChartCommand::Clear => sink.clear(),
    }
}

/// Sink that discards everything, for headless use.
#[derive(Debug, Default)]
pub struct NullChartSink;

impl ChartSink for NullChartSink {
    fn seed(&mut self, _points: &[ChartPoint]) {}
    fn append(&mut self, _point: &ChartPoint) {}
    fn clear(&mut self) {}
}

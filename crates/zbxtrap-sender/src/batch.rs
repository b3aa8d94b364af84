use zbxtrap_proto::{DataPoint, TrapperResult};

use crate::error::Result;
use crate::sender::Sender;

/// Append-only, ordered collection of data points sent as one envelope.
///
/// Insertion order is preserved into the serialized `data` array.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    points: Vec<DataPoint>,
}

impl Batch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one data point.
    pub fn push(&mut self, point: DataPoint) -> &mut Self {
        self.points.push(point);
        self
    }

    /// Append every data point from an iterator.
    pub fn extend(&mut self, points: impl IntoIterator<Item = DataPoint>) -> &mut Self {
        self.points.extend(points);
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Borrow the accumulated points.
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Consume the batch and return the accumulated points.
    pub fn into_points(self) -> Vec<DataPoint> {
        self.points
    }

    /// Send the whole batch in one envelope.
    pub fn send_with(&self, sender: &Sender) -> Result<TrapperResult> {
        sender.send(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut batch = Batch::new();
        batch
            .push(DataPoint::with_clock("h1", "k.z", "1", 1))
            .push(DataPoint::with_clock("h1", "k.a", "2", 2));
        batch.extend([DataPoint::with_clock("h2", "k.m", "3", 3)]);

        let keys: Vec<&str> = batch.points().iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["k.z", "k.a", "k.m"]);
        assert_eq!(batch.len(), 3);
    }

    #[test]
    fn starts_empty() {
        let batch = Batch::new();
        assert!(batch.is_empty());
        assert!(batch.into_points().is_empty());
    }
}

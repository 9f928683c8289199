use serde::Serialize;

use crate::models::EnergyPoint;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveStats {
    pub peak: u8,
    pub minimum: u8,
    pub mean: f64,
}

impl CurveStats {
    /// `None` for an empty table.
    pub fn from_points(points: &[EnergyPoint]) -> Option<Self> {
        let peak = points.iter().map(|p| p.energy).max()?;
        let minimum = points.iter().map(|p| p.energy).min()?;
        let total: u32 = points.iter().map(|p| p.energy as u32).sum();
        Some(Self {
            peak,
            minimum,
            mean: total as f64 / points.len() as f64,
        })
    }

    /// Mean rounded to one decimal, the way it is displayed.
    pub fn mean_rounded(&self) -> f64 {
        (self.mean * 10.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn point(energy: u8) -> EnergyPoint {
        EnergyPoint {
            hour: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            energy,
            mood: "",
            status: "",
        }
    }

    #[test]
    fn empty_table_has_no_stats() {
        assert_eq!(CurveStats::from_points(&[]), None);
    }

    #[test]
    fn peak_minimum_and_mean() {
        let stats = CurveStats::from_points(&[point(10), point(95), point(5), point(30)]).unwrap();
        assert_eq!(stats.peak, 95);
        assert_eq!(stats.minimum, 5);
        assert_eq!(stats.mean, 35.0);
    }

    #[test]
    fn mean_rounds_to_one_decimal() {
        let stats = CurveStats::from_points(&[point(10), point(20), point(20)]).unwrap();
        assert_eq!(stats.mean_rounded(), 16.7);
    }
}

use chrono::NaiveTime;

use crate::curve::{narrative, slider, two_shot};
use crate::models::{CoffeeCount, CurveStats, EnergyPoint, HourFormat, Preset, Verdict};

/// A preset paired with its input. Everything the dashboard shows is
/// derived from here, fresh on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub preset: Preset,
    /// Ignored by the two-shot preset.
    pub coffees: CoffeeCount,
}

impl Scenario {
    pub fn new(preset: Preset, coffees: CoffeeCount) -> Self {
        Self { preset, coffees }
    }

    /// Coffees actually drunk in this scenario.
    pub fn coffee_total(&self) -> u8 {
        match self.preset {
            Preset::Slider => self.coffees.get(),
            Preset::TwoShot => two_shot::EVENTS.len() as u8,
        }
    }

    pub fn points(&self) -> Vec<EnergyPoint> {
        match self.preset {
            Preset::Slider => slider::generate(self.coffees),
            Preset::TwoShot => two_shot::generate(),
        }
    }

    pub fn coffee_hours(&self) -> Vec<NaiveTime> {
        match self.preset {
            Preset::Slider => slider::coffee_hours_for_count(self.coffees),
            Preset::TwoShot => two_shot::coffee_hours(),
        }
    }

    pub fn verdict(&self, points: &[EnergyPoint], format: HourFormat) -> Verdict {
        match self.preset {
            Preset::Slider => narrative::slider_verdict(self.coffees),
            Preset::TwoShot => narrative::two_shot_verdict(points, format),
        }
    }

    /// Top of the chart's y axis.
    pub fn axis_ceiling(&self) -> f64 {
        match self.preset {
            Preset::Slider => 110.0,
            Preset::TwoShot => 100.0,
        }
    }

    pub fn title(&self) -> String {
        match self.preset {
            Preset::Slider => format!(
                "{}  ·  {} coffee{}",
                self.preset.display_name(),
                self.coffees,
                if self.coffees.get() == 1 { "" } else { "s" }
            ),
            Preset::TwoShot => format!("{}  ·  07:30 & 14:00", self.preset.display_name()),
        }
    }

    /// Generate the table once and derive everything a view needs from it.
    pub fn render(&self, format: HourFormat) -> Option<Snapshot> {
        let points = self.points();
        let stats = CurveStats::from_points(&points)?;
        let verdict = self.verdict(&points, format);
        Some(Snapshot {
            scenario: *self,
            format,
            coffee_hours: self.coffee_hours(),
            points,
            stats,
            verdict,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub scenario: Scenario,
    /// Hour labels in every view of this snapshot, insights included.
    pub format: HourFormat,
    pub points: Vec<EnergyPoint>,
    pub coffee_hours: Vec<NaiveTime>,
    pub stats: CurveStats,
    pub verdict: Verdict,
}

impl Snapshot {
    /// Rows whose hour is a coffee moment.
    pub fn coffee_points(&self) -> Vec<&EnergyPoint> {
        self.points
            .iter()
            .filter(|p| self.coffee_hours.contains(&p.hour))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_snapshot() {
        let snap = Scenario::new(Preset::Slider, CoffeeCount::clamped(2))
            .render(HourFormat::Clock)
            .unwrap();
        assert_eq!(snap.points.len(), 17);
        assert_eq!(snap.stats.peak, 95);
        assert_eq!(snap.stats.minimum, 5);
        assert_eq!(snap.coffee_points().len(), 2);
        assert_eq!(snap.coffee_points()[0].energy, 95);
        assert_eq!(snap.coffee_points()[1].energy, 90);
    }

    #[test]
    fn two_shot_ignores_the_slider() {
        let a = Scenario::new(Preset::TwoShot, CoffeeCount::clamped(0));
        let b = Scenario::new(Preset::TwoShot, CoffeeCount::clamped(5));
        assert_eq!(a.points(), b.points());
        assert_eq!(a.coffee_total(), 2);
        assert_eq!(a.axis_ceiling(), 100.0);
        assert_eq!(a.coffee_hours().len(), 2);
    }

    #[test]
    fn titles() {
        let one = Scenario::new(Preset::Slider, CoffeeCount::clamped(1));
        assert_eq!(one.title(), "Coffee Addiction Curve  ·  1 coffee");
        let two_shot = Scenario::new(Preset::TwoShot, CoffeeCount::default());
        assert!(two_shot.title().ends_with("07:30 & 14:00"));
    }
}

use chrono::NaiveTime;

use crate::models::{clock, CoffeeCount, EnergyPoint};

pub const RESTING_MOOD: &str = "😴";
pub const RESTING_STATUS: &str = "Low";

/// Natural energy at each full hour from 6h to 22h, no coffee.
const BASELINE: [(NaiveTime, u8); 17] = [
    (clock(6, 0), 10),
    (clock(7, 0), 20),
    (clock(8, 0), 30),
    (clock(9, 0), 35),
    (clock(10, 0), 30),
    (clock(11, 0), 28),
    (clock(12, 0), 26),
    (clock(13, 0), 22),
    (clock(14, 0), 20),
    (clock(15, 0), 18),
    (clock(16, 0), 16),
    (clock(17, 0), 14),
    (clock(18, 0), 12),
    (clock(19, 0), 10),
    (clock(20, 0), 8),
    (clock(21, 0), 6),
    (clock(22, 0), 5),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    AtLeast(u8),
    Exactly(u8),
}

impl Threshold {
    pub fn fires(&self, count: CoffeeCount) -> bool {
        match *self {
            Threshold::AtLeast(n) => count.get() >= n,
            Threshold::Exactly(n) => count.get() == n,
        }
    }
}

/// Values that replace the baseline once `threshold` is met.
#[derive(Debug, Clone, Copy)]
pub struct Boost {
    pub threshold: Threshold,
    /// First overridden index; `values` cover consecutive rows from here.
    pub start: usize,
    pub values: &'static [u8],
    /// Row that carries the mood glyph and status.
    pub marker: usize,
    pub mood: &'static str,
    pub status: &'static str,
}

impl Boost {
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.values.len()
    }
}

/// Ordered by threshold; applied in this order.
pub const BOOSTS: [Boost; 5] = [
    Boost {
        threshold: Threshold::AtLeast(1),
        start: 2,
        values: &[85, 95, 80],
        marker: 3,
        mood: "🚀",
        status: "1st Coffee Boost",
    },
    Boost {
        threshold: Threshold::AtLeast(2),
        start: 8,
        values: &[60, 90, 85],
        marker: 9,
        mood: "😎",
        status: "2nd Coffee Boost",
    },
    Boost {
        threshold: Threshold::AtLeast(3),
        start: 12,
        values: &[92],
        marker: 12,
        mood: "💥",
        status: "3rd Coffee Boost",
    },
    Boost {
        threshold: Threshold::AtLeast(4),
        start: 14,
        values: &[95],
        marker: 14,
        mood: "🔥",
        status: "Overcaffeinated",
    },
    // Only at exactly five, unlike the others.
    Boost {
        threshold: Threshold::Exactly(5),
        start: 15,
        values: &[98],
        marker: 15,
        mood: "⚡",
        status: "MAX POWER",
    },
];

pub fn hours() -> Vec<NaiveTime> {
    BASELINE.iter().map(|&(h, _)| h).collect()
}

pub fn baseline() -> Vec<EnergyPoint> {
    BASELINE
        .iter()
        .map(|&(hour, energy)| EnergyPoint {
            hour,
            energy,
            mood: RESTING_MOOD,
            status: RESTING_STATUS,
        })
        .collect()
}

/// Build the 17-row energy table for `count` coffees.
pub fn generate(count: CoffeeCount) -> Vec<EnergyPoint> {
    log::debug!("Generating slider curve for {} coffees", count);
    let mut points = baseline();

    for boost in BOOSTS.iter().filter(|b| b.threshold.fires(count)) {
        for (idx, value) in boost.indices().zip(boost.values) {
            points[idx].energy = *value;
        }
        points[boost.marker].mood = boost.mood;
        points[boost.marker].status = boost.status;
    }

    points
}

/// Hours of the rows each fired boost annotates, in threshold order.
pub fn coffee_hours_for_count(count: CoffeeCount) -> Vec<NaiveTime> {
    BOOSTS
        .iter()
        .filter(|b| b.threshold.fires(count))
        .filter_map(|b| BASELINE.get(b.marker).map(|&(hour, _)| hour))
        .collect()
}

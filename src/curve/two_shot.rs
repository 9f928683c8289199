use chrono::{Duration, NaiveTime};

use crate::models::{clock, EnergyPoint};

/// Energy every half hour from 6:00 to 22:00 with coffees at 7:30 and 14:00.
/// The afternoon coffee hits a more tolerant body and peaks lower.
const ENERGY: [u8; 33] = [
    12, 15, 20, 25, 45, 70, 85, 82, 78, 72, 68, 65, 60, 55, 48, 42, 38, 50, 62, 68, 70, 67, 63,
    58, 52, 45, 38, 32, 28, 24, 20, 17, 15,
];

const START: NaiveTime = clock(6, 0);

pub const COFFEE_MOOD: &str = "☕";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoffeeEvent {
    pub index: usize,
    pub status: &'static str,
    pub caption: &'static str,
}

pub const EVENTS: [CoffeeEvent; 2] = [
    CoffeeEvent {
        index: 3,
        status: "Morning Coffee",
        caption: "Morning",
    },
    CoffeeEvent {
        index: 16,
        status: "Afternoon Coffee",
        caption: "Afternoon",
    },
];

pub fn hours() -> Vec<NaiveTime> {
    (0..ENERGY.len() as i64)
        .map(|i| START + Duration::minutes(30 * i))
        .collect()
}

/// The fixed two-coffee day. Always the same 33 rows.
pub fn generate() -> Vec<EnergyPoint> {
    log::debug!("Generating two-shot curve");
    let mut points: Vec<EnergyPoint> = hours()
        .into_iter()
        .zip(ENERGY)
        .map(|(hour, energy)| EnergyPoint {
            hour,
            energy,
            mood: "",
            status: "",
        })
        .collect();

    for event in &EVENTS {
        points[event.index].mood = COFFEE_MOOD;
        points[event.index].status = event.status;
    }

    points
}

pub fn coffee_hours() -> Vec<NaiveTime> {
    let hours = hours();
    EVENTS.iter().map(|e| hours[e.index]).collect()
}

/// Rows from `event` up to the next event (or the end of the day). Empty when
/// `points` is too short to reach the event.
pub fn window<'a>(points: &'a [EnergyPoint], event: &CoffeeEvent) -> &'a [EnergyPoint] {
    let end = EVENTS
        .iter()
        .map(|e| e.index)
        .filter(|&i| i > event.index)
        .min()
        .unwrap_or(points.len())
        .min(points.len());
    points.get(event.index..end).unwrap_or_default()
}

/// Highest row after `event`, before the next one.
pub fn peak_after<'a>(points: &'a [EnergyPoint], event: &CoffeeEvent) -> Option<&'a EnergyPoint> {
    window(points, event)
        .iter()
        .fold(None, |best: Option<&EnergyPoint>, p| match best {
            Some(b) if b.energy >= p.energy => Some(b),
            _ => Some(p),
        })
}

/// Energy gained over the coffee-time level, row by row, until the peak.
pub fn ramp(points: &[EnergyPoint], event: &CoffeeEvent) -> Vec<i16> {
    let rows = window(points, event);
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    let mut gains = Vec::new();
    let mut last = first.energy;
    for p in rows.iter().skip(1) {
        if p.energy < last {
            break;
        }
        gains.push(p.energy as i16 - first.energy as i16);
        last = p.energy;
    }
    gains
}

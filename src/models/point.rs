use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize, Serializer};

/// One row of an energy table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnergyPoint {
    #[serde(serialize_with = "serialize_hour")]
    pub hour: NaiveTime,
    /// 0-100
    pub energy: u8,
    /// Empty when the row carries no annotation.
    pub mood: &'static str,
    pub status: &'static str,
}

impl EnergyPoint {
    pub fn label(&self, format: HourFormat) -> String {
        format.label(self.hour)
    }

    pub fn is_annotated(&self) -> bool {
        !self.mood.is_empty()
    }
}

/// Time of day from constant table hours. Only call it in `const` items so a
/// bad hour fails the build instead of surfacing at runtime.
pub const fn clock(h: u32, m: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(h, m, 0) {
        Some(t) => t,
        None => panic!("table hour out of range"),
    }
}

fn serialize_hour<S: Serializer>(hour: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&HourFormat::Clock.label(*hour))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourFormat {
    /// `08:00`, `07:30`
    #[default]
    Clock,
    /// `8h`, `7h30`
    Compact,
}

impl HourFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            HourFormat::Clock => "clock",
            HourFormat::Compact => "compact",
        }
    }

    pub fn label(&self, hour: NaiveTime) -> String {
        match self {
            HourFormat::Clock => hour.format("%H:%M").to_string(),
            HourFormat::Compact => match hour.minute() {
                0 => format!("{}h", hour.hour()),
                m => format!("{}h{:02}", hour.hour(), m),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn at(h: u32, m: u32) -> NaiveTime {
        clock(h, m)
    }

    #[test]
    fn hour_labels() {
        assert_eq!(HourFormat::Clock.label(at(8, 0)), "08:00");
        assert_eq!(HourFormat::Clock.label(at(14, 30)), "14:30");
        assert_eq!(HourFormat::Compact.label(at(6, 0)), "6h");
        assert_eq!(HourFormat::Compact.label(at(7, 30)), "7h30");
    }

    #[test]
    fn serializes_hour_as_clock_label() {
        let point = EnergyPoint {
            hour: at(9, 0),
            energy: 95,
            mood: "🚀",
            status: "1st Coffee Boost",
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["hour"], "09:00");
        assert_eq!(json["energy"], 95);
        assert_eq!(json["mood"], "🚀");
        assert_eq!(json["status"], "1st Coffee Boost");
    }
}

use crate::curve::two_shot;
use crate::models::{CoffeeCount, EnergyPoint, HourFormat, Severity, Verdict};

pub fn slider_verdict(count: CoffeeCount) -> Verdict {
    let (severity, headline) = match count.get() {
        0 => (Severity::Error, "No coffee: ZOMBIE mode."),
        1 => (Severity::Warning, "One coffee: bare survival."),
        2 => (Severity::Success, "Two coffees: peak performance."),
        3 => (
            Severity::Info,
            "Three coffees: very energetic... bordering on jittery.",
        ),
        _ => (Severity::Error, "Too much coffee: heart goes brrrrrrr."),
    };
    Verdict {
        severity,
        headline,
        insights: Vec::new(),
    }
}

pub fn two_shot_verdict(points: &[EnergyPoint], format: HourFormat) -> Verdict {
    let mut insights = Vec::new();
    for event in &two_shot::EVENTS {
        let Some(coffee) = points.get(event.index) else {
            continue;
        };
        if let Some(peak) = two_shot::peak_after(points, event) {
            let gain = two_shot::ramp(points, event).last().copied().unwrap_or(0);
            insights.push(format!(
                "{} coffee at {}: peaks at {}% by {} (+{})",
                event.caption,
                coffee.label(format),
                peak.energy,
                peak.label(format),
                gain,
            ));
        }
    }
    Verdict {
        severity: Severity::Success,
        headline: "Two-coffee strategy: a strong morning peak and a gentler afternoon one.",
        insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_verdicts_by_count() {
        let severities: Vec<Severity> = CoffeeCount::all()
            .map(|c| slider_verdict(c).severity)
            .collect();
        assert_eq!(
            severities,
            vec![
                Severity::Error,
                Severity::Warning,
                Severity::Success,
                Severity::Info,
                Severity::Error,
                Severity::Error,
            ]
        );
        assert!(slider_verdict(CoffeeCount::clamped(0)).headline.contains("ZOMBIE"));
        assert!(slider_verdict(CoffeeCount::clamped(5)).insights.is_empty());
    }

    #[test]
    fn two_shot_insights_name_both_peaks() {
        let verdict = two_shot_verdict(&two_shot::generate(), HourFormat::Clock);
        assert_eq!(verdict.severity, Severity::Success);
        assert_eq!(
            verdict.insights,
            vec![
                "Morning coffee at 07:30: peaks at 85% by 09:00 (+60)".to_string(),
                "Afternoon coffee at 14:00: peaks at 70% by 16:00 (+32)".to_string(),
            ]
        );
    }
}

//! # Date formatting
//!
//! Absolute and relative publication labels, fixed to Brazilian Portuguese.
//! Everything here is pure: the caller supplies "now".

use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat, Timelike, Utc};

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// `"16 de junho às 09:00h"`, using the wall time of the instant's own offset.
pub fn format(instant: DateTime<FixedOffset>) -> String {
    format!(
        "{} de {} às {:02}:{:02}h",
        instant.day(),
        MONTHS_PT_BR[instant.month0() as usize],
        instant.hour(),
        instant.minute(),
    )
}

/// UTC timestamp with millisecond precision, for machine-readable attributes.
pub fn iso(instant: DateTime<FixedOffset>) -> String {
    instant
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `"há 3 dias"` for past instants, `"em 3 dias"` for future ones.
pub fn relative(instant: DateTime<FixedOffset>, now: DateTime<Utc>) -> String {
    let instant = instant.with_timezone(&Utc);
    let future = instant > now;
    let (earlier, later) = if future { (now, instant) } else { (instant, now) };

    let words = Distance::between(earlier, later).to_pt_br();
    if future {
        format!("em {words}")
    } else {
        format!("há {words}")
    }
}

/// Coarse bucket for the gap between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    LessThanAMinute,
    Minutes(i64),
    AboutHours(i64),
    Days(i64),
    AboutMonths(i64),
    Months(i64),
    AboutYears(i64),
    OverYears(i64),
    AlmostYears(i64),
}

impl Distance {
    /// `earlier` must not be after `later`.
    pub fn between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> Self {
        let seconds = (later - earlier).num_seconds();
        let minutes = round_div(seconds, 60);

        if minutes < 2 {
            return if minutes == 0 {
                Self::LessThanAMinute
            } else {
                Self::Minutes(1)
            };
        }
        if minutes < 45 {
            return Self::Minutes(minutes);
        }
        if minutes < 90 {
            return Self::AboutHours(1);
        }
        if minutes < MINUTES_IN_DAY {
            return Self::AboutHours(round_div(minutes, 60));
        }
        if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
            return Self::Days(1);
        }
        if minutes < MINUTES_IN_MONTH {
            return Self::Days(round_div(minutes, MINUTES_IN_DAY));
        }
        if minutes < MINUTES_IN_TWO_MONTHS {
            return Self::AboutMonths(round_div(minutes, MINUTES_IN_MONTH));
        }

        let months = calendar_months(earlier, later);
        if months < 12 {
            return Self::Months(round_div(minutes, MINUTES_IN_MONTH));
        }

        let years = months / 12;
        match months % 12 {
            0..=2 => Self::AboutYears(years),
            3..=8 => Self::OverYears(years),
            _ => Self::AlmostYears(years + 1),
        }
    }

    pub fn to_pt_br(self) -> String {
        match self {
            Self::LessThanAMinute => "menos de um minuto".to_string(),
            Self::Minutes(n) => counted(n, "minuto", "minutos"),
            Self::AboutHours(n) => format!("cerca de {}", counted(n, "hora", "horas")),
            Self::Days(n) => counted(n, "dia", "dias"),
            Self::AboutMonths(n) => format!("cerca de {}", counted(n, "mês", "meses")),
            Self::Months(n) => counted(n, "mês", "meses"),
            Self::AboutYears(n) => format!("cerca de {}", counted(n, "ano", "anos")),
            Self::OverYears(n) => format!("mais de {}", counted(n, "ano", "anos")),
            Self::AlmostYears(n) => format!("quase {}", counted(n, "ano", "anos")),
        }
    }
}

fn counted(n: i64, one: &str, many: &str) -> String {
    if n == 1 {
        format!("1 {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Half-up integer division for non-negative operands.
fn round_div(value: i64, by: i64) -> i64 {
    (value + by / 2) / by
}

/// Whole calendar months from `earlier` to `later`; a trailing partial month does not count.
fn calendar_months(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month()) - i64::from(earlier.month());
    if months > 0 && (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }
    months
}

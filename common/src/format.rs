//! Display formatters for durations, dates, relative times and large counts.

use chrono::{Datelike, Local, TimeZone, Timelike};

use crate::config::{MonthOrigin, UtilsConfig};

const SECOND_MS: f64 = 1000.0;
const MINUTE_MS: f64 = SECOND_MS * 60.0;
const HOUR_MS: f64 = MINUTE_MS * 60.0;

const JUST_NOW: &str = "刚刚";

/// Render a number the way JavaScript's `String(n)` does: integral values
/// without a fractional part, shortest round-trip digits otherwise, exponent
/// form below 1e-6 and from 1e21 up.
pub fn js_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let s = format!("{:e}", n);
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        };
    }
    format!("{}", n)
}

/// Two-decimal rendering matching `Number.prototype.toFixed(2)`: exact
/// binary ties round away from zero instead of to even.
pub fn to_fixed_2(x: f64) -> String {
    let eighths = x * 8.0;
    if eighths.is_finite() && eighths.fract() == 0.0 && (eighths as i64) % 2 != 0 {
        let cents = x * 100.0;
        let rounded = if cents >= 0.0 { cents + 0.5 } else { cents - 0.5 };
        return format!("{:.2}", rounded / 100.0);
    }
    format!("{:.2}", x)
}

/// Milliseconds as `m:ss`. Minutes are not padded, both parts truncate.
pub fn format_time(ms: f64) -> String {
    let seconds_total = ms / 1000.0;
    let minute = (seconds_total / 60.0).floor();
    let second = (seconds_total - minute * 60.0).floor();
    if second > 9.0 {
        format!("{}:{}", js_number(minute), js_number(second))
    } else {
        format!("{}:0{}", js_number(minute), js_number(second))
    }
}

const COUNT_UNITS: [(i32, &str); 7] = [
    (4, "万"),
    (6, "百万"),
    (7, "千万"),
    (8, "亿"),
    (9, "十亿"),
    (10, "百亿"),
    (11, "千亿"),
];

/// Compact a count with Chinese magnitude suffixes. Each unit covers
/// `[10^k, 10^next)`; below 10^4 and from 10^12 up the plain number is used.
pub fn format_count(n: f64) -> String {
    if n < 1e4 {
        return js_number(n);
    }
    for (i, (exp, suffix)) in COUNT_UNITS.iter().enumerate() {
        let upper = match COUNT_UNITS.get(i + 1) {
            Some((next, _)) => 10f64.powi(*next),
            None => 1e12,
        };
        if n < upper {
            return format!("{}{}", to_fixed_2(n / 10f64.powi(*exp)), suffix);
        }
    }
    js_number(n)
}

/// Calendar fields of an instant in a time zone, month zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    pub year: i32,
    pub month0: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CalendarFields {
    /// `None` when the instant is outside the representable range.
    pub fn at<Tz: TimeZone>(ms: f64, tz: &Tz) -> Option<Self> {
        if !ms.is_finite() {
            return None;
        }
        let dt = tz.timestamp_millis_opt(ms.trunc() as i64).earliest()?;
        Some(Self {
            year: dt.year(),
            month0: dt.month0(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
        })
    }
}

fn render_date(fields: Option<CalendarFields>, origin: MonthOrigin) -> String {
    match fields {
        Some(f) => format!("{}-{}-{}", f.year, origin.display_month(f.month0), f.day),
        None => "NaN-NaN-NaN".to_string(),
    }
}

fn render_day(fields: Option<CalendarFields>, origin: MonthOrigin) -> String {
    match fields {
        Some(f) => format!(
            "{}-{}-{} {}:{}",
            f.year,
            origin.display_month(f.month0),
            f.day,
            f.hour,
            f.minute
        ),
        None => "NaN-NaN-NaN NaN:NaN".to_string(),
    }
}

/// `year-month-day` in `tz`.
pub fn format_date_in<Tz: TimeZone>(ms: f64, tz: &Tz, origin: MonthOrigin) -> String {
    render_date(CalendarFields::at(ms, tz), origin)
}

/// `year-month-day hour:minute` in `tz`.
pub fn format_day_in<Tz: TimeZone>(ms: f64, tz: &Tz, origin: MonthOrigin) -> String {
    render_day(CalendarFields::at(ms, tz), origin)
}

pub fn format_date(ms: f64) -> String {
    format_date_in(ms, &Local, crate::config::current().month_origin)
}

pub fn format_day(ms: f64) -> String {
    format_day_in(ms, &Local, crate::config::current().month_origin)
}

/// Relative-time units, largest first, paired with their suffix.
pub fn relative_units(hours_per_day: u32) -> [(f64, &'static str); 6] {
    let day = HOUR_MS * f64::from(hours_per_day);
    let month = day * 30.0;
    let year = month * 12.0;
    [
        (year, "年以前"),
        (month, "个月以前"),
        (day, "天以前"),
        (HOUR_MS, "小时以前"),
        (MINUTE_MS, "分钟以前"),
        (SECOND_MS, "秒钟以前"),
    ]
}

/// "N units ago" for `ms` as seen from `now_ms`. Future instants are
/// rendered absolutely with `format_day_in`.
pub fn format_relative<Tz: TimeZone>(
    now_ms: f64,
    ms: f64,
    tz: &Tz,
    config: &UtilsConfig,
) -> String {
    let delta = now_ms - ms;
    if delta < 0.0 {
        return format_day_in(ms, tz, config.month_origin);
    }
    for (unit, suffix) in relative_units(config.hours_per_day) {
        if delta >= unit {
            return format!("{}{}", js_number((delta / unit).round()), suffix);
        }
    }
    JUST_NOW.to_string()
}

/// Relative time against the current wall clock in the local time zone.
pub fn format_date_to_before(ms: f64) -> String {
    let now = chrono::Utc::now().timestamp_millis() as f64;
    format_relative(now, ms, &Local, &crate::config::current())
}

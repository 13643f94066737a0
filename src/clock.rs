//! Clock & Greeting

use chrono::Timelike;

#[derive(Debug, Clone, PartialEq)]
pub struct ClockReading {
    /// `HH:MM:SS`
    pub time: String,
    /// Greeting with trailing "！"
    pub greeting: String,
}

impl ClockReading {
    pub fn at<T: Timelike>(t: &T) -> Self {
        Self {
            time: format_time(t.hour(), t.minute(), t.second()),
            greeting: format!("{}！", greeting(t.hour())),
        }
    }

    /// Reading for the browser's local time
    pub fn now() -> Self {
        Self::at(&chrono::Local::now())
    }
}

pub fn format_time(hour: u32, minute: u32, second: u32) -> String {
    format!("{:02}:{:02}:{:02}", hour, minute, second)
}

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        5..=11 => "早上好",
        12..=17 => "下午好",
        _ => "晚上好",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_format_time_pads() {
        assert_eq!(format_time(7, 5, 9), "07:05:09");
        assert_eq!(format_time(23, 59, 59), "23:59:59");
    }

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting(4), "晚上好");
        assert_eq!(greeting(5), "早上好");
        assert_eq!(greeting(11), "早上好");
        assert_eq!(greeting(12), "下午好");
        assert_eq!(greeting(17), "下午好");
        assert_eq!(greeting(18), "晚上好");
        assert_eq!(greeting(0), "晚上好");
    }

    #[test]
    fn test_reading_at() {
        let t = NaiveTime::from_hms_opt(13, 4, 0).unwrap();
        let reading = ClockReading::at(&t);
        assert_eq!(reading.time, "13:04:00");
        assert_eq!(reading.greeting, "下午好！");
    }
}

//! Import session state

use chrono::{DateTime, Local};

/// Timestamp format used in session playlist names, e.g. `20240309_14h05`
pub const SESSION_STAMP_FORMAT: &str = "%Y%m%d_%Hh%M";

/// One run of the host's import process
///
/// Created when the import begins and passed by reference to every
/// event handled during that run.
#[derive(Debug, Clone)]
pub struct ImportSession {
    started_at: DateTime<Local>,
    stamp: String,
}

impl ImportSession {
    /// Start a session now
    pub fn begin() -> Self {
        Self::starting_at(Local::now())
    }

    /// Start a session at a given time
    pub fn starting_at(started_at: DateTime<Local>) -> Self {
        let stamp = started_at.format(SESSION_STAMP_FORMAT).to_string();
        Self { started_at, stamp }
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    /// Session timestamp as rendered into file names
    pub fn stamp(&self) -> &str {
        &self.stamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stamp_format() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 59).single().unwrap();
        let session = ImportSession::starting_at(at);
        assert_eq!(session.stamp(), "20240309_14h05");
        assert_eq!(session.started_at(), at);
    }

    #[test]
    fn test_begin_stamp_shape() {
        let session = ImportSession::begin();
        let stamp = session.stamp();
        let (date, time) = stamp.split_once('_').unwrap();
        let (hours, minutes) = time.split_once('h').unwrap();

        assert_eq!(date.len(), 8);
        assert_eq!(hours.len(), 2);
        assert_eq!(minutes.len(), 2);
        for part in [date, hours, minutes] {
            assert!(part.chars().all(|c| c.is_ascii_digit()), "bad stamp {}", stamp);
        }
        assert_eq!(stamp, session.started_at().format(SESSION_STAMP_FORMAT).to_string());
    }
}

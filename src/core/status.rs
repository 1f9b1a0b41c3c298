use crate::domain::model::{Certification, CertificationStatus, StatusSource};
use chrono::{NaiveDate, NaiveDateTime};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Default window, in days, for the "expiring soon" bucket.
pub const DEFAULT_EXPIRING_SOON_DAYS: i64 = 30;

/// Whole days left until `expires_on` (taken at midnight), rounded up.
/// Negative once the date has passed.
pub fn days_remaining(now: NaiveDateTime, expires_on: NaiveDate) -> i64 {
    let expiration = expires_on.and_time(chrono::NaiveTime::MIN);
    let seconds = (expiration - now).num_seconds();
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    if seconds.rem_euclid(SECONDS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}

/// `days_remaining` evaluated at the start of `today`.
pub fn days_remaining_on(today: NaiveDate, expires_on: NaiveDate) -> i64 {
    days_remaining(today.and_time(chrono::NaiveTime::MIN), expires_on)
}

/// Bucket recomputed from the remaining days.
pub fn derive_status(days_remaining: i64, expiring_soon_days: i64) -> CertificationStatus {
    if days_remaining <= 0 {
        CertificationStatus::Expired
    } else if days_remaining <= expiring_soon_days {
        CertificationStatus::ExpiringSoon
    } else {
        CertificationStatus::Active
    }
}

/// Badge text for a status bucket.
pub fn status_label(status: CertificationStatus, days_remaining: i64) -> String {
    match status {
        CertificationStatus::Active => "Valide".to_string(),
        CertificationStatus::Expired => "Expirée".to_string(),
        CertificationStatus::ExpiringSoon => format!("Expire dans {} jours", days_remaining),
    }
}

/// Both status computations for one certification. The stored and derived
/// buckets may disagree; `displayed` is the one selected by `StatusSource`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub days_remaining: i64,
    pub stored: CertificationStatus,
    pub derived: CertificationStatus,
    pub displayed: CertificationStatus,
    pub label: String,
}

impl Classification {
    pub fn disagrees(&self) -> bool {
        self.stored != self.derived
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StatusClassifier {
    pub today: NaiveDate,
    pub expiring_soon_days: i64,
    pub source: StatusSource,
}

impl StatusClassifier {
    pub fn new(today: NaiveDate, expiring_soon_days: i64, source: StatusSource) -> Self {
        Self {
            today,
            expiring_soon_days,
            source,
        }
    }

    pub fn classify(&self, certification: &Certification) -> Classification {
        let days = days_remaining_on(self.today, certification.expires_at);
        let derived = derive_status(days, self.expiring_soon_days);
        let displayed = match self.source {
            StatusSource::Stored => certification.status,
            StatusSource::Derived => derived,
        };
        if certification.status != derived {
            tracing::debug!(
                "Certification {} stored as {} but {} days remain ({})",
                certification.id,
                certification.status,
                days,
                derived
            );
        }
        Classification {
            days_remaining: days,
            stored: certification.status,
            derived,
            displayed,
            label: status_label(displayed, days),
        }
    }
}

//! Document numbering
//!
//! Issues the eligibility/referral document numbers that precede
//! adjudication: an SEP (Surat Eligibilitas Peserta) for government cases
//! and a GL (guarantee letter) for everything else. Numbers are
//! simulation-grade: time-derived, collision-resistant within a day for a
//! single facility, with no cross-process uniqueness guarantee.
//!
//! The clock is injected so the adjudication engine proper stays pure and
//! the formats are testable without mocking time.

use chrono::{DateTime, Utc};

use crate::scheme::Scheme;

/// Fixed facility-scheme prefix for SEP numbers
pub const SEP_FACILITY_PREFIX: &str = "1301R001";

/// Fixed prefix for guarantee-letter numbers
pub const GL_PREFIX: &str = "GL";

/// Source of the current instant for document numbering
pub trait DocumentClock {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl DocumentClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Issues scheme-specific document numbers
#[derive(Debug, Clone)]
pub struct DocumentNumberGenerator<C: DocumentClock> {
    clock: C,
}

impl Default for DocumentNumberGenerator<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: DocumentClock> DocumentNumberGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Issues the next document number for a scheme
    ///
    /// Government cases get an SEP; company and private cases get a GL.
    pub fn next(&self, scheme: Scheme) -> String {
        match scheme {
            Scheme::Government => self.sep_number(),
            Scheme::Company | Scheme::Private => self.gl_number(),
        }
    }

    /// SEP format: facility prefix + MMDDYY + "V" + 5-digit disambiguator
    fn sep_number(&self) -> String {
        let now = self.clock.now();
        format!(
            "{}{}V{:05}",
            SEP_FACILITY_PREFIX,
            now.format("%m%d%y"),
            disambiguator(&now),
        )
    }

    /// GL format: prefix + "/" + year + "/" + 5-digit disambiguator
    fn gl_number(&self) -> String {
        let now = self.clock.now();
        format!("{}/{}/{:05}", GL_PREFIX, now.format("%Y"), disambiguator(&now))
    }
}

/// Derives a 5-digit suffix from the instant's second within its day
///
/// Seconds-of-day tops out at 86399, so the suffix never repeats inside
/// one day. Two calls in the same second collide; the simulation
/// tolerates that.
fn disambiguator(now: &DateTime<Utc>) -> u32 {
    now.timestamp().rem_euclid(86_400) as u32
}

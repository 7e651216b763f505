use std::fmt::{Debug, Formatter};
use std::time::{Duration, SystemTime};

/// An absolute instant, stored as milliseconds since the unix epoch.
///
/// Attribute props carry instants for highlight and disable ranges; the
/// picker only ever needs millisecond precision and a total order, so this
/// stays a plain signed counter.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DateTime(i64);

const NANOS_PER_MILLI: u128 = 1_000_000;

impl DateTime {
    /// Create new DateTime represents now
    pub fn now() -> Self {
        // current time always fits the i64 millisecond range so unwrap here.
        Self::from_system(SystemTime::now()).unwrap()
    }

    /// Creates new DateTime representing the same instant as the
    /// [`SystemTime`].
    ///
    /// Precision below one millisecond is discarded; instants before the
    /// epoch round away from it. If the instant cannot be represented with
    /// this type, this function will return `None`.
    pub fn from_system(system: SystemTime) -> Option<Self> {
        let millis = match system.duration_since(SystemTime::UNIX_EPOCH) {
            Ok(duration) => {
                // the time is at or after the epoch
                i64::try_from(duration.as_nanos() / NANOS_PER_MILLI).ok()?
            }
            Err(e) => {
                // the time is before the epoch, use div_ceil
                let nanos_until_epoch = e.duration().as_nanos();
                let millis_until_epoch =
                    i64::try_from(nanos_until_epoch.div_ceil(NANOS_PER_MILLI)).ok()?;
                -millis_until_epoch
            }
        };
        Some(DateTime(millis))
    }

    pub const fn from_unix_milliseconds(millis: i64) -> DateTime {
        DateTime(millis)
    }

    pub const fn as_unix_milliseconds(&self) -> i64 {
        self.0
    }

    /// Get the SystemTime that represents the same instant as this
    /// `DateTime`
    ///
    /// If the instant cannot be represented with `SystemTime`, this will
    /// return `None`.
    pub fn to_system_time(&self) -> Option<SystemTime> {
        if self.0 < 0 {
            let until_epoch = Duration::from_millis(self.0.unsigned_abs());
            SystemTime::UNIX_EPOCH.checked_sub(until_epoch)
        } else {
            let since_epoch = Duration::from_millis(self.0 as u64);
            SystemTime::UNIX_EPOCH.checked_add(since_epoch)
        }
    }
}

impl Debug for DateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DateTime").field(&self.0).finish()
    }
}

/// Compares two optional instants.
///
/// Two absent dates are equal; an absent and a present date are not; two
/// present dates are equal iff they are the same instant.
pub fn dates_are_equal(a: Option<DateTime>, b: Option<DateTime>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
macro_rules! time {
    ($($tt: tt)*) => {
        SystemTime::from(::time::macros::datetime!($($tt)*))
    };
}

#[test]
fn test_system_round_trip() {
    let system = time!(2024-03-05 12:30:00 UTC);
    let date = DateTime::from_system(system).unwrap();
    assert_eq!(date.as_unix_milliseconds(), 1709641800000);
    assert_eq!(date.to_system_time().unwrap(), system);

    let epoch = DateTime::from_system(SystemTime::UNIX_EPOCH).unwrap();
    assert_eq!(epoch.as_unix_milliseconds(), 0);
}

#[test]
fn test_before_epoch_rounds_away() {
    // half a millisecond before the epoch is a full millisecond before
    let date = DateTime::from_system(time!(1969-12-31 23:59:59.9995 UTC)).unwrap();
    assert_eq!(date.as_unix_milliseconds(), -1);

    let date = DateTime::from_system(time!(1969-12-31 23:59:59 UTC)).unwrap();
    assert_eq!(date.as_unix_milliseconds(), -1_000);
    assert_eq!(
        date.to_system_time().unwrap(),
        time!(1969-12-31 23:59:59 UTC)
    );
}

#[test]
fn test_sub_millisecond_precision_is_discarded() {
    let a = DateTime::from_system(time!(2024-03-05 12:30:00.0001 UTC)).unwrap();
    let b = DateTime::from_system(time!(2024-03-05 12:30:00.0009 UTC)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_optional_equality() {
    let a = DateTime::from_unix_milliseconds(1709641800000);
    let b = DateTime::from_unix_milliseconds(1709641800001);
    assert!(dates_are_equal(None, None));
    assert!(!dates_are_equal(Some(a), None));
    assert!(!dates_are_equal(None, Some(a)));
    assert!(dates_are_equal(Some(a), Some(a)));
    assert!(!dates_are_equal(Some(a), Some(b)));
}

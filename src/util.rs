use crate::Log;
use std::fmt::{Display, Formatter};

/// Fold one hash into an accumulated seed.
///
/// The mixing constant and shifts keep unequal child orders from cancelling out, so the
/// fold distinguishes `a op b` from `b op a`.
pub(crate) fn hash_combine(seed: &mut u64, hash: u64) {
    *seed ^= hash
        .wrapping_add(0x9e3779b97f4a7c15)
        .wrapping_add(*seed << 6)
        .wrapping_add(*seed >> 2);
}

impl<T> Log<T> {
    /// The label attached to the setting, absent when reporting is off.
    pub fn label(&self) -> Option<&T> {
        match self {
            Log::None => None,
            Log::Failures(label) | Log::Outcomes(label) | Log::Trace(label) => Some(label),
        }
    }

    /// Verbosity rank of the setting, growing with the amount reported.
    pub fn level(&self) -> u8 {
        match self {
            Log::None => 0,
            Log::Failures(_) => 1,
            Log::Outcomes(_) => 2,
            Log::Trace(_) => 3,
        }
    }

    /// Whether a message gated at `floor` should be printed under this setting.
    pub fn admits<U>(&self, floor: &Log<U>) -> bool {
        self.level() >= floor.level()
    }
}

impl<T: Display> Display for Log<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{}", label),
            None => Ok(()),
        }
    }
}

use core::cmp::Ordering;
use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};

/// An entry managed by a `PriorityQueue`.
///
/// `value` is never inspected by the queue. `priority` decides extraction order;
/// the greatest priority comes out first. The position is owned by the queue:
/// it is `Some(index)` while the item is live in a queue and `None` once the
/// item has been extracted (or before it has ever been inserted).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item<T> {
    pub value: T,
    #[serde(serialize_with = "serialize_priority")]
    pub priority: f64,
    #[serde(skip)]
    pub(crate) position: Option<usize>,
}

impl<T> Item<T> {
    pub fn new(value: T, priority: f64) -> Self {
        Self {
            value,
            priority,
            position: None,
        }
    }

    /// The item's current index in its queue's backing array.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, f64) {
        (self.value, self.priority)
    }

    /// Compares priorities using IEEE-754 total ordering, so NaN has a fixed place.
    pub(crate) fn cmp_priority(&self, other: &Self) -> Ordering {
        self.priority.total_cmp(&other.priority)
    }
}

/// JSON has no representation for NaN or the infinities, so refuse them
/// rather than let them come out as `null`.
fn serialize_priority<S: Serializer>(priority: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !priority.is_finite() {
        return Err(S::Error::custom(format!("priority {} is not a finite number", priority)));
    }
    serializer.serialize_f64(*priority)
}

//! # Vicinity: window filtering and proximity ranking
//!
//! Given a [`DateWindow`], this module answers two questions about a [`CatalogObject`]:
//!
//! 1. **Does it qualify?** – [`is_approaching_within_window`] is true iff at least one of
//!    its approach records has a timestamp inside the window.
//! 2. **How close does it come?** – [`VicinityRanker`] orders objects by their
//!    *qualifying minimum*, the smallest miss distance among the in-window records.
//!
//! ## Ordering rules
//! -----------------
//! Comparing `a` and `b` with [`VicinityRanker::compare`]:
//!
//! * both have a qualifying minimum → the smaller miss distance sorts first,
//! * only one has a qualifying minimum → that object sorts first,
//! * neither has one → the objects compare as equal.
//!
//! Miss distances are finite by construction (see [`MissDistance`]), which makes this a
//! total preorder: reflexive, antisymmetric and transitive. A stable sort driven by it is
//! therefore deterministic.
//!
//! Records outside the window never influence the ranking of an object that qualifies.
//!
//! ## See also
//! ------------
//! * [`crate::approach::selector::select_closest`] – Sort + truncate built on the ranker.
pub mod date_window;

use std::cmp::Ordering;

pub use date_window::DateWindow;

use crate::neo::{ApproachRecord, CatalogObject, MissDistance};

/// Approach records of `object` whose timestamp lies in `window`.
pub fn qualifying_approaches<'a>(
    object: &'a CatalogObject,
    window: &DateWindow,
) -> impl Iterator<Item = &'a ApproachRecord> + 'a {
    let window = *window;
    object
        .approaches
        .iter()
        .filter(move |approach| window.contains(approach.epoch_millis))
}

/// Window filter predicate.
///
/// Return
/// ------
/// * `true` iff `object` has at least one approach record inside `window`
pub fn is_approaching_within_window(object: &CatalogObject, window: &DateWindow) -> bool {
    qualifying_approaches(object, window).next().is_some()
}

/// Sort key consistent with [`VicinityRanker::compare`].
///
/// Qualifying objects order by distance and all come before objects without a
/// qualifying approach, which are all equal to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VicinityKey {
    Qualifying(MissDistance),
    Missing,
}

/// Total order over catalog objects by their closest approach inside a fixed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VicinityRanker {
    window: DateWindow,
}

impl VicinityRanker {
    pub fn new(window: DateWindow) -> Self {
        VicinityRanker { window }
    }

    pub fn window(&self) -> &DateWindow {
        &self.window
    }

    /// In-window approach record with the smallest miss distance.
    ///
    /// When several records share the minimum, the first one in catalog order is returned.
    pub fn closest_qualifying_approach<'a>(
        &self,
        object: &'a CatalogObject,
    ) -> Option<&'a ApproachRecord> {
        qualifying_approaches(object, &self.window).fold(None, |best, approach| match best {
            Some(current) if current.miss_distance <= approach.miss_distance => Some(current),
            _ => Some(approach),
        })
    }

    /// Sort key: smallest in-window miss distance, `None` when no record qualifies
    pub fn qualifying_minimum(&self, object: &CatalogObject) -> Option<MissDistance> {
        qualifying_approaches(object, &self.window)
            .map(|approach| approach.miss_distance)
            .min()
    }

    /// Key extractor for `sort_by_key` style utilities
    pub fn sort_key(&self, object: &CatalogObject) -> VicinityKey {
        self.qualifying_minimum(object)
            .map_or(VicinityKey::Missing, VicinityKey::Qualifying)
    }

    /// Compare two objects by proximity, closest first.
    ///
    /// Arguments
    /// -----------------
    /// * `a`, `b`: the objects to order.
    ///
    /// Return
    /// ----------
    /// * [`Ordering::Less`] if `a` comes closer to Earth than `b` inside the window,
    ///   or if only `a` has a qualifying approach.
    /// * [`Ordering::Equal`] for equal qualifying minima, or when neither qualifies.
    /// * [`Ordering::Greater`] otherwise.
    pub fn compare(&self, a: &CatalogObject, b: &CatalogObject) -> Ordering {
        match (self.qualifying_minimum(a), self.qualifying_minimum(b)) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

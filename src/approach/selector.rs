use tracing::debug;

use crate::{neo::CatalogObject, vicinity::VicinityRanker};

/// Sort `objects` closest first and keep the first `limit` of them.
///
/// The sort is stable: objects the ranker considers equal keep their relative input order.
/// Each object's qualifying minimum is computed once, through [`VicinityRanker::sort_key`].
///
/// Arguments
/// -----------------
/// * `objects`: the candidates, usually the output of the window filter.
/// * `ranker`: the proximity order to sort with.
/// * `limit`: maximum number of objects returned, `0` yields an empty vector.
///
/// Return
/// ----------
/// * At most `limit` objects, non-decreasing in qualifying minimum miss distance.
pub fn select_closest(
    mut objects: Vec<CatalogObject>,
    ranker: &VicinityRanker,
    limit: usize,
) -> Vec<CatalogObject> {
    if limit == 0 {
        return Vec::new();
    }

    objects.sort_by_cached_key(|neo| ranker.sort_key(neo));
    objects.truncate(limit);

    debug!(selected = objects.len(), limit, "Closest approaches selected");
    objects
}

//! Page-number windowing for pagination controls.
//!
//! [`page_markers`] decides which page buttons a control shows. Small result
//! sets list every page; larger ones keep the first and last page, the
//! current page, and collapse the rest into [`PageMarker::Ellipsis`].

use quotes_api::types::PaginationInfo;

/// Maximum number of markers shown before the control starts collapsing.
pub const DEFAULT_MAX_VISIBLE: i64 = 7;

/// Pages shown at the edge nearest the current page when collapsed.
const EDGE_WINDOW: i64 = 5;
/// Current pages up to this value use the near-start window.
const NEAR_START_LIMIT: i64 = 4;
/// Current pages within this distance of the last page use the near-end window.
const NEAR_END_DISTANCE: i64 = 3;
/// Neighbours shown on each side of the current page in the middle window.
const NEIGHBOR_RADIUS: i64 = 1;

/// One slot of a pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageMarker {
    Page(i64),
    Ellipsis,
}

impl PageMarker {
    pub fn page(&self) -> Option<i64> {
        match self {
            PageMarker::Page(p) => Some(*p),
            PageMarker::Ellipsis => None,
        }
    }
}

/// Computes the markers for a control showing `current_page` of `total_pages`.
///
/// The near-start, near-end and middle windows are tested in that order and
/// use fixed thresholds. `max_visible` only decides whether collapsing
/// happens at all. Collapsing also needs more pages than the edge window
/// holds, so tiny `max_visible` values never produce pages past the end.
pub fn page_markers(current_page: i64, total_pages: i64, max_visible: i64) -> Vec<PageMarker> {
    if total_pages <= 0 {
        return Vec::new();
    }

    if total_pages <= max_visible.max(EDGE_WINDOW + 1) {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    let mut markers = Vec::with_capacity(DEFAULT_MAX_VISIBLE as usize);
    if current_page <= NEAR_START_LIMIT {
        markers.extend((1..=EDGE_WINDOW).map(PageMarker::Page));
        markers.push(PageMarker::Ellipsis);
        markers.push(PageMarker::Page(total_pages));
    } else if current_page >= total_pages - NEAR_END_DISTANCE {
        markers.push(PageMarker::Page(1));
        markers.push(PageMarker::Ellipsis);
        markers.extend((total_pages - EDGE_WINDOW + 1..=total_pages).map(PageMarker::Page));
    } else {
        markers.push(PageMarker::Page(1));
        markers.push(PageMarker::Ellipsis);
        markers.extend(
            (current_page - NEIGHBOR_RADIUS..=current_page + NEIGHBOR_RADIUS).map(PageMarker::Page),
        );
        markers.push(PageMarker::Ellipsis);
        markers.push(PageMarker::Page(total_pages));
    }
    markers
}

/// [`page_markers`] for the page described by `info`, with the default width.
pub fn markers_for(info: &PaginationInfo) -> Vec<PageMarker> {
    page_markers(info.page, info.total_pages, DEFAULT_MAX_VISIBLE)
}

/// Whether a pagination control should be drawn at all.
pub fn should_render(info: &PaginationInfo) -> bool {
    info.total_pages > 1
}

/// Returns the page to switch to, or `None` when the request is a no-op.
///
/// A request is accepted only when it differs from the current page and
/// lies within `1..=total_pages`.
pub fn accept_page_change(requested: i64, info: &PaginationInfo) -> Option<i64> {
    if requested != info.page && (1..=info.total_pages).contains(&requested) {
        Some(requested)
    } else {
        None
    }
}

/// Calls `on_change` once with the requested page if it is accepted.
/// Returns whether the callback fired.
pub fn dispatch_page_change<F>(requested: i64, info: &PaginationInfo, on_change: F) -> bool
where
    F: FnOnce(i64),
{
    match accept_page_change(requested, info) {
        Some(page) => {
            on_change(page);
            true
        }
        None => {
            tracing::debug!(
                "Ignoring page request {} (current {}, total {})",
                requested,
                info.page,
                info.total_pages
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    fn info(page: i64, total_pages: i64) -> PaginationInfo {
        PaginationInfo {
            page,
            limit: 10,
            total: total_pages * 10,
            total_pages,
        }
    }

    fn pages(range: std::ops::RangeInclusive<i64>) -> Vec<PageMarker> {
        range.map(Page).collect()
    }

    #[test]
    fn no_pages_is_empty() {
        assert!(page_markers(1, 0, 7).is_empty());
        assert!(page_markers(1, -3, 7).is_empty());
        assert!(page_markers(5, 0, 1).is_empty());
    }

    #[test]
    fn small_totals_list_every_page() {
        for total in 1..=7 {
            for current in 1..=total {
                assert_eq!(page_markers(current, total, 7), pages(1..=total));
            }
        }
        assert_eq!(page_markers(3, 5, 7), pages(1..=5));
    }

    #[test]
    fn near_start_window() {
        let want = vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)];
        assert_eq!(page_markers(1, 10, 7), want);
        assert_eq!(page_markers(4, 10, 7), want);
    }

    #[test]
    fn near_end_window() {
        let want = vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)];
        assert_eq!(page_markers(10, 10, 7), want);
        assert_eq!(page_markers(7, 10, 7), want);
    }

    #[test]
    fn middle_window() {
        assert_eq!(
            page_markers(5, 10, 7),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_markers(50, 100, 7),
            vec![Page(1), Ellipsis, Page(49), Page(50), Page(51), Ellipsis, Page(100)]
        );
    }

    #[test]
    fn near_start_wins_when_thresholds_overlap() {
        // With 7 pages, page 4 is both <= 4 and >= total - 3.
        assert_eq!(
            page_markers(4, 7, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(7)]
        );
        assert_eq!(
            page_markers(5, 7, 1),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
        assert_eq!(
            page_markers(5, 8, 7),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Page(7), Page(8)]
        );
    }

    #[test]
    fn out_of_range_current_page_stays_in_bounds() {
        assert_eq!(page_markers(0, 10, 7), page_markers(1, 10, 7));
        assert_eq!(page_markers(-5, 10, 7), page_markers(1, 10, 7));
        assert_eq!(page_markers(99, 10, 7), page_markers(10, 10, 7));
        for current in -2..=13 {
            for marker in page_markers(current, 10, 7) {
                if let Some(p) = marker.page() {
                    assert!((1..=10).contains(&p), "page {} out of range", p);
                }
            }
        }
    }

    #[test]
    fn tiny_max_visible_never_overruns() {
        for total in 1..=6 {
            assert_eq!(page_markers(1, total, 1), pages(1..=total));
        }
        assert_eq!(
            page_markers(1, 7, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(7)]
        );
    }

    #[test]
    fn wide_max_visible_lists_everything() {
        assert_eq!(page_markers(5, 10, 10), pages(1..=10));
        assert_eq!(page_markers(5, 11, 10).len(), 7);
    }

    #[test]
    fn markers_are_idempotent() {
        assert_eq!(page_markers(5, 10, 7), page_markers(5, 10, 7));
        assert_eq!(markers_for(&info(2, 3)), markers_for(&info(2, 3)));
    }

    #[test]
    fn render_suppressed_for_single_page() {
        assert!(!should_render(&info(1, 0)));
        assert!(!should_render(&info(1, 1)));
        assert!(should_render(&info(1, 2)));
    }

    #[test]
    fn current_page_request_is_noop() {
        assert_eq!(accept_page_change(3, &info(3, 10)), None);
    }

    #[test]
    fn out_of_range_requests_are_noops() {
        let state = info(3, 10);
        assert_eq!(accept_page_change(0, &state), None);
        assert_eq!(accept_page_change(11, &state), None);
        assert_eq!(accept_page_change(-1, &state), None);
    }

    #[test]
    fn dispatch_fires_once_for_valid_page() {
        let state = info(3, 10);
        let mut calls = Vec::new();
        assert!(dispatch_page_change(7, &state, |p| calls.push(p)));
        assert!(!dispatch_page_change(3, &state, |p| calls.push(p)));
        assert!(!dispatch_page_change(0, &state, |p| calls.push(p)));
        assert!(!dispatch_page_change(11, &state, |p| calls.push(p)));
        assert_eq!(calls, vec![7]);
    }
}

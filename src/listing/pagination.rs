//! Page-number compression for the pagination control.
//!
//! Page numbers here are 1-based, as displayed. Callers translate to the
//! 0-based query page.

/// Above this many pages the control starts compressing with ellipses.
const MAX_VISIBLE_PAGES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: u32, current: bool },
    /// Non-interactive gap marker.
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Target of "Previous"; `None` disables it.
    pub previous: Option<u32>,
    /// Target of "Next"; `None` disables it.
    pub next: Option<u32>,
    pub items: Vec<PageItem>,
}

/// Build the control for `current` of `total` pages, or `None` when there is
/// at most one page. An out-of-range `current` is clamped.
pub fn paginate(current: u32, total: u32) -> Option<Pagination> {
    if total <= 1 {
        return None;
    }
    let current = current.clamp(1, total);

    Some(Pagination {
        previous: (current > 1).then(|| current - 1),
        next: (current < total).then(|| current + 1),
        items: page_numbers(current, total)
            .into_iter()
            .map(|slot| match slot {
                Some(number) => PageItem::Page {
                    number,
                    current: number == current,
                },
                None => PageItem::Ellipsis,
            })
            .collect(),
    })
}

fn page_numbers(current: u32, total: u32) -> Vec<Option<u32>> {
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(Some).collect();
    }

    let mut pages = Vec::with_capacity(7);
    if current <= 3 {
        pages.extend((1..=4).map(Some));
        pages.push(None);
        pages.push(Some(total));
    } else if current >= total - 2 {
        pages.push(Some(1));
        pages.push(None);
        pages.extend((total - 3..=total).map(Some));
    } else {
        pages.push(Some(1));
        pages.push(None);
        pages.extend((current - 1..=current + 1).map(Some));
        pages.push(None);
        pages.push(Some(total));
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(pagination: &Pagination) -> Vec<String> {
        pagination
            .items
            .iter()
            .map(|item| match item {
                PageItem::Page { number, .. } => number.to_string(),
                PageItem::Ellipsis => "...".to_string(),
            })
            .collect()
    }

    #[test]
    fn nothing_renders_for_a_single_page() {
        assert_eq!(paginate(1, 1), None);
        assert_eq!(paginate(1, 0), None);
    }

    #[test]
    fn small_totals_show_every_page() {
        let pagination = paginate(1, 5).unwrap();
        assert_eq!(labels(&pagination), ["1", "2", "3", "4", "5"]);
        assert_eq!(pagination.previous, None);
        assert_eq!(pagination.next, Some(2));
    }

    #[test]
    fn start_window() {
        assert_eq!(labels(&paginate(1, 10).unwrap()), ["1", "2", "3", "4", "...", "10"]);
        assert_eq!(labels(&paginate(3, 10).unwrap()), ["1", "2", "3", "4", "...", "10"]);
    }

    #[test]
    fn middle_window() {
        assert_eq!(
            labels(&paginate(5, 10).unwrap()),
            ["1", "...", "4", "5", "6", "...", "10"]
        );
    }

    #[test]
    fn end_window() {
        assert_eq!(labels(&paginate(8, 10).unwrap()), ["1", "...", "7", "8", "9", "10"]);
        let last = paginate(10, 10).unwrap();
        assert_eq!(last.next, None);
        assert_eq!(last.previous, Some(9));
    }

    #[test]
    fn previous_and_next_step_by_one_inside_bounds() {
        for total in 2..=12 {
            for current in 1..=total {
                let pagination = paginate(current, total).unwrap();
                assert_eq!(pagination.previous, (current > 1).then(|| current - 1));
                assert_eq!(pagination.next, (current < total).then(|| current + 1));
            }
        }
    }

    #[test]
    fn large_totals_always_show_first_and_last_with_gaps_marked() {
        for total in 6..=30 {
            for current in 1..=total {
                let items = paginate(current, total).unwrap().items;
                assert_eq!(items.first(), Some(&PageItem::Page { number: 1, current: current == 1 }));
                assert_eq!(
                    items.last(),
                    Some(&PageItem::Page { number: total, current: current == total })
                );

                // Every jump between shown numbers is bridged by an ellipsis.
                let mut previous: Option<u32> = None;
                let mut gap = false;
                for item in &items {
                    match item {
                        PageItem::Page { number, .. } => {
                            if let Some(prev) = previous {
                                assert_eq!(number - prev > 1, gap, "total {total} current {current}");
                            }
                            previous = Some(*number);
                            gap = false;
                        }
                        PageItem::Ellipsis => gap = true,
                    }
                }

                assert!(items.contains(&PageItem::Page { number: current, current: true }));
            }
        }
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        let pagination = paginate(40, 6).unwrap();
        assert_eq!(pagination.next, None);
        assert!(pagination
            .items
            .contains(&PageItem::Page { number: 6, current: true }));
    }
}

//! Page math for the catalog grid.
//!
//! A zero-item result still reports one page so the view can render
//! "page 1 of 1" instead of an empty pager.

/// Maximum number of plain page buttons before the pager switches to the
/// windowed layout with ellipses.
pub const PLAIN_PAGER_LIMIT: usize = 7;

/// One entry in the rendered pager strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Ceiling division, floored at one page.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    item_count.div_ceil(page_size).max(1)
}

/// Clamps a requested page into `[1, total]`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// The slice of `items` shown on `page` (1-based, assumed already clamped).
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = (page.max(1) - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(items.len());
    if start >= items.len() {
        return &[];
    }
    &items[start..end]
}

/// Windowed pager strip: all pages up to [`PLAIN_PAGER_LIMIT`]; otherwise
/// first five + last near the start, first + last five near the end, and
/// first + current±1 + last in the middle, with ellipses between runs.
pub fn page_numbers(total: usize, current: usize) -> Vec<PageItem> {
    let current = clamp_page(current, total);
    let mut pages = Vec::new();

    if total <= PLAIN_PAGER_LIMIT {
        pages.extend((1..=total).map(PageItem::Page));
    } else if current <= 4 {
        pages.extend((1..=5).map(PageItem::Page));
        pages.push(PageItem::Ellipsis);
        pages.push(PageItem::Page(total));
    } else if current >= total - 3 {
        pages.push(PageItem::Page(1));
        pages.push(PageItem::Ellipsis);
        pages.extend((total - 4..=total).map(PageItem::Page));
    } else {
        pages.push(PageItem::Page(1));
        pages.push(PageItem::Ellipsis);
        pages.extend((current - 1..=current + 1).map(PageItem::Page));
        pages.push(PageItem::Ellipsis);
        pages.push(PageItem::Page(total));
    }

    pages
}

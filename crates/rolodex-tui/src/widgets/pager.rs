//! Horizontal page selector shown under the directory list.

use ratatui::text::{Line, Span};

use crate::theme::Theme;

/// Most page numbers shown before the bar collapses into a window.
const MAX_NUMBERS: usize = 9;

/// Renders `‹ 1 2 [3] 4 ›` with the current page highlighted.
///
/// Long ranges keep the first and last page and a window around the
/// current one, with `…` for the gaps. Nothing is drawn for zero pages.
pub fn render_pager(page: usize, total_pages: usize, theme: &Theme) -> Line<'static> {
    if total_pages == 0 {
        return Line::default();
    }

    let mut spans = Vec::with_capacity(total_pages.min(MAX_NUMBERS) * 2 + 4);
    let arrow = |enabled: bool| if enabled { theme.text() } else { theme.muted() };

    spans.push(Span::styled("‹ ", arrow(page > 1)));

    for (i, slot) in page_slots(page, total_pages).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", theme.key_hint()));
        }
        match slot {
            Some(n) if n == page => {
                spans.push(Span::styled(format!("[{n}]"), theme.page_active()));
            }
            Some(n) => spans.push(Span::styled(n.to_string(), theme.text())),
            None => spans.push(Span::styled("…", theme.muted())),
        }
    }

    spans.push(Span::styled(" ›", arrow(page < total_pages)));
    Line::from(spans)
}

/// Page numbers to show; `None` marks an elided gap.
fn page_slots(page: usize, total_pages: usize) -> Vec<Option<usize>> {
    if total_pages <= MAX_NUMBERS {
        return (1..=total_pages).map(Some).collect();
    }

    let lo = page.saturating_sub(2).max(2);
    let hi = (page + 2).min(total_pages - 1);

    let mut slots = vec![Some(1)];
    if lo > 2 {
        slots.push(None);
    }
    slots.extend((lo..=hi).map(Some));
    if hi < total_pages - 1 {
        slots.push(None);
    }
    slots.push(Some(total_pages));
    slots
}

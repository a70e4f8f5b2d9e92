use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// One slot in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(i64),
    Ellipsis,
}

/// Compute the page-number window for a pager.
///
/// Six or fewer pages render in full. Near the start the strip shows the
/// first four pages, an ellipsis, and the last page; near the end the
/// mirror image. Everywhere else: first page, ellipsis, a three-page
/// window around the current page, ellipsis, last page.
pub fn page_window(current: i64, last: i64) -> Vec<PageItem> {
    use PageItem::*;

    if last <= 1 {
        return vec![Page(1)];
    }
    if last <= 6 {
        return (1..=last).map(Page).collect();
    }

    let current = current.clamp(1, last);

    if current <= 3 {
        let mut items: Vec<PageItem> = (1..=4).map(Page).collect();
        items.push(Ellipsis);
        items.push(Page(last));
        return items;
    }

    if current >= last - 2 {
        let mut items = vec![Page(1), Ellipsis];
        items.extend((last - 3..=last).map(Page));
        return items;
    }

    vec![
        Page(1),
        Ellipsis,
        Page(current - 1),
        Page(current),
        Page(current + 1),
        Ellipsis,
        Page(last),
    ]
}

/// Pagination footer: previous/next, a windowed page-number strip, and an
/// optional range label ("21 to 30 of 47") supplied by the caller.
#[component]
pub fn Pagination(
    current_page: i64,
    last_page: i64,
    #[props(default)] range_label: String,
    on_page: EventHandler<i64>,
) -> Element {
    let window = page_window(current_page, last_page);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            if !range_label.is_empty() {
                span { class: "pagination-range", "{range_label}" }
            }
            div { class: "pagination-pages",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: current_page <= 1,
                    onclick: move |_| on_page.call(current_page - 1),
                    "\u{2039}"
                }
                for (idx, item) in window.into_iter().enumerate() {
                    {match item {
                        PageItem::Page(page) => rsx! {
                            Button {
                                key: "{idx}",
                                variant: if page == current_page { ButtonVariant::Primary } else { ButtonVariant::Outline },
                                onclick: move |_| {
                                    if page != current_page {
                                        on_page.call(page);
                                    }
                                },
                                "{page}"
                            }
                        },
                        PageItem::Ellipsis => rsx! {
                            span { key: "{idx}", class: "pagination-ellipsis", "\u{2026}" }
                        },
                    }}
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: current_page >= last_page,
                    onclick: move |_| on_page.call(current_page + 1),
                    "\u{203A}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn near_start_shows_first_four_then_last() {
        assert_eq!(
            page_window(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn near_end_shows_first_then_last_four() {
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_window(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn middle_shows_sliding_three_page_window() {
        assert_eq!(
            page_window(5, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn few_pages_render_without_ellipsis() {
        assert_eq!(
            page_window(2, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
        assert_eq!(page_window(1, 1), vec![Page(1)]);
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(
            page_window(99, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_window(0, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }
}

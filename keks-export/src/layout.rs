//! Placement of shopping-list lines onto fixed-size pages.

use serde::Serialize;

/// Points per millimetre.
const MM: f64 = 72.0 / 25.4;

/// Page geometry, in points, with the origin at the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width: f64,
    pub height: f64,
    /// Distance of the first line from the top edge and of all text from the left edge.
    pub margin: f64,
    /// Vertical space taken by the title on the first page.
    pub title_gap: f64,
    pub line_height: f64,
    /// A new page starts once the next line would sit below this height.
    pub bottom: f64,
}

impl PageLayout {
    /// A4 portrait with the default spacing.
    pub fn a4() -> Self {
        Self {
            width: 210.0 * MM,
            height: 297.0 * MM,
            margin: 50.0,
            title_gap: 30.0,
            line_height: 20.0,
            bottom: 50.0,
        }
    }

    fn top(&self) -> f64 {
        self.height - self.margin
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::a4()
    }
}

/// A line of text at a fixed position on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLine {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// One page of a [`Document`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// 1-based page number
    pub number: usize,
    pub lines: Vec<PlacedLine>,
}

impl Page {
    fn new(number: usize) -> Self {
        Self {
            number,
            lines: Vec::new(),
        }
    }
}

/// A paginated document ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub pages: Vec<Page>,
}

impl Document {
    /// Number of body lines across all pages, excluding the title.
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|page| page.lines.len()).sum::<usize>() - 1
    }
}

/// Lay out `title` and `lines` on pages of the given layout.
///
/// The title only appears on the first page. Each line is placed at the
/// current height, which then drops by one line; a new page begins once it
/// falls below `layout.bottom`. A document never ends with an empty page.
pub fn paginate<I, S>(title: &str, lines: I, layout: &PageLayout) -> Document
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut pages = Vec::new();
    let mut page = Page::new(1);
    let mut y = layout.top();

    page.lines.push(PlacedLine {
        x: layout.margin,
        y,
        text: title.to_string(),
    });
    y -= layout.title_gap;

    for text in lines {
        page.lines.push(PlacedLine {
            x: layout.margin,
            y,
            text: text.into(),
        });
        y -= layout.line_height;

        if y < layout.bottom {
            let next = Page::new(page.number + 1);
            pages.push(std::mem::replace(&mut page, next));
            y = layout.top();
        }
    }

    if !page.lines.is_empty() {
        pages.push(page);
    }

    Document {
        title: title.to_string(),
        width: layout.width,
        height: layout.height,
        pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("- {}.0 gram Zutat {}", i, i)).collect()
    }

    #[test]
    fn test_title_only() {
        let doc = paginate("Einkaufsliste", Vec::<String>::new(), &PageLayout::a4());
        assert_eq!(doc.pages.len(), 1);
        assert_eq!(doc.pages[0].lines.len(), 1);
        assert_eq!(doc.line_count(), 0);
    }

    #[test]
    fn test_first_line_positions() {
        let layout = PageLayout::a4();
        let doc = paginate("Einkaufsliste", lines(2), &layout);
        let page = &doc.pages[0];

        assert_eq!(page.lines[0].y, layout.height - layout.margin);
        assert!((page.lines[0].y - page.lines[1].y - 30.0).abs() < 1e-9);
        assert!((page.lines[1].y - page.lines[2].y - 20.0).abs() < 1e-9);
        assert!(page.lines.iter().all(|line| line.x == 50.0));
    }

    #[test]
    fn test_a4_page_capacity() {
        let doc = paginate("Einkaufsliste", lines(36), &PageLayout::a4());
        assert_eq!(doc.pages.len(), 1);
        assert_eq!(doc.pages[0].lines.len(), 37);

        let doc = paginate("Einkaufsliste", lines(37), &PageLayout::a4());
        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.pages[1].lines.len(), 1);
        assert_eq!(doc.pages[1].lines[0].text, "- 37.0 gram Zutat 37");
    }

    #[test]
    fn test_later_pages_hold_more_lines() {
        let doc = paginate("Einkaufsliste", lines(36 + 38 + 1), &PageLayout::a4());
        let sizes: Vec<usize> = doc.pages.iter().map(|page| page.lines.len()).collect();
        assert_eq!(sizes, vec![37, 38, 1]);
        assert_eq!(doc.line_count(), 75);
    }

    #[test]
    fn test_no_trailing_empty_page() {
        let doc = paginate("Einkaufsliste", lines(36 + 38), &PageLayout::a4());
        assert_eq!(doc.pages.len(), 2);
        assert!(doc.pages.iter().all(|page| !page.lines.is_empty()));
    }

    #[test]
    fn test_page_numbers() {
        let doc = paginate("Einkaufsliste", lines(100), &PageLayout::a4());
        let numbers: Vec<usize> = doc.pages.iter().map(|page| page.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_custom_layout() {
        let layout = PageLayout {
            width: 100.0,
            height: 100.0,
            margin: 10.0,
            title_gap: 10.0,
            line_height: 10.0,
            bottom: 10.0,
        };
        // y: title 90, lines 80..10 on page one, then 90.. on page two
        let doc = paginate("T", lines(10), &layout);
        let sizes: Vec<usize> = doc.pages.iter().map(|page| page.lines.len()).collect();
        assert_eq!(sizes, vec![9, 2]);
    }
}

//! Transient overlays bound to a region: name labels and craft popups.

use serde::Serialize;
use std::fmt::Write;

/// Where a label sits relative to its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPlacement {
    /// Above the region's anchor point.
    Top,
}

/// Text label attached to a region (a tooltip in mapping-library terms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    /// Label text.
    pub text: String,
    /// Placement relative to the region.
    pub placement: LabelPlacement,
    /// Permanent labels stay visible until explicitly removed.
    pub permanent: bool,
}

impl Label {
    /// A permanent label anchored above the region.
    pub fn top(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placement: LabelPlacement::Top,
            permanent: true,
        }
    }
}

/// Dismissible box listing a region's crafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Popup {
    /// Region name, shown as the heading.
    pub title: String,
    /// Craft description, or the fallback text.
    pub crafts: String,
}

impl Popup {
    /// Creates a popup.
    pub fn new(title: impl Into<String>, crafts: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            crafts: crafts.into(),
        }
    }

    /// Renders the popup body as an HTML fragment with escaped content.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<h3>{}</h3><p>Traditional Crafts: {}</p>",
            escape_html(&self.title),
            escape_html(&self.crafts)
        );
        out
    }
}

/// Escapes the characters that are significant in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_html() {
        let popup = Popup::new("Kerala", "Kathakali Masks, Aranmula Kannadi, Coir Products");
        assert_eq!(
            popup.to_html(),
            "<h3>Kerala</h3><p>Traditional Crafts: Kathakali Masks, Aranmula Kannadi, Coir Products</p>"
        );
    }

    #[test]
    fn test_popup_html_escapes_content() {
        let popup = Popup::new("<script>", "Tom & \"Jerry\"");
        let html = popup.to_html();
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_label_top_is_permanent() {
        let label = Label::top("Goa");
        assert_eq!(label.placement, LabelPlacement::Top);
        assert!(label.permanent);
    }
}

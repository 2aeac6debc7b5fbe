//! HTML markup for mounting the slider into a document.
//!
//! Every sub-element carries a `data-element` attribute naming its
//! [`Region`], so a host can index the mounted tree without relying on
//! element order.

use crate::region::Region;

/// Class of the root element.
pub const ROOT_CLASS: &str = "range-slider";
/// Modifier class present on the root while a thumb is captured.
pub const DRAGGING_CLASS: &str = "range-slider_dragging";
/// Attribute naming each region.
pub const REGION_ATTRIBUTE: &str = "data-element";

/// Renders the slider markup with the given label texts.
///
/// Label texts are escaped; they come from a user-supplied formatter.
pub fn template(from_label: &str, to_label: &str) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(&format!(r#"<div class="{ROOT_CLASS}">"#));
    push_label(&mut html, Region::From, from_label);
    open_region(&mut html, "div", Region::Inner);
    for region in [Region::Progress, Region::ThumbLeft, Region::ThumbRight] {
        open_region(&mut html, "span", region);
        html.push_str("</span>");
    }
    html.push_str("</div>");
    push_label(&mut html, Region::To, to_label);
    html.push_str("</div>");
    html
}

fn open_region(html: &mut String, tag: &str, region: Region) {
    html.push_str(&format!(
        r#"<{tag} {REGION_ATTRIBUTE}="{}""#,
        region.data_name()
    ));
    if let Some(class) = region.class_name() {
        html.push_str(&format!(r#" class="{class}""#));
    }
    html.push('>');
}

fn push_label(html: &mut String, region: Region, text: &str) {
    open_region(html, "span", region);
    html.push_str(&escape_html(text));
    html.push_str("</span>");
}

/// Escapes text for use as HTML element content or attribute value.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

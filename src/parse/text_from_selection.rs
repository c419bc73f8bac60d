use scraper::{node::Node, ElementRef, Html, Selector};

use super::{remove_excess_whitespace, Error};

/// Collects the text below `element`, turning every `<br>` into a newline.
pub fn block_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() == "br" => out.push('\n'),
            _ => {}
        }
    }
    out
}

/// Like [`block_text`], but with whitespace runs collapsed inside each line
/// and blank lines dropped.
pub fn tidy_text(element: ElementRef<'_>) -> String {
    block_text(element)
        .lines()
        .map(|line| remove_excess_whitespace(line.trim()).into_owned())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trimmed text of every element matched by `selector` below `element`, in
/// document order.
pub fn text_blocks(selector: &Selector, element: ElementRef<'_>) -> Vec<String> {
    element
        .select(selector)
        .map(|el| block_text(el).trim().to_owned())
        .collect()
}

/// Trimmed text of every element nested anywhere below `element`, in document
/// order. Nested elements repeat the text of their ancestors.
pub fn descendant_blocks(element: ElementRef<'_>) -> Vec<String> {
    element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .map(|el| block_text(el).trim().to_owned())
        .collect()
}

/// First match of `selector` below `element`.
pub fn select_one<'a>(
    selector: &Selector,
    element: ElementRef<'a>,
    parent_label: &str,
    child_label: &str,
) -> Result<ElementRef<'a>, Error> {
    element.select(selector).next().ok_or_else(|| {
        Error::HtmlParse(format!(
            "Every {parent_label} element should have a {child_label}."
        ))
    })
}

/// First element matched by `selector` whose text contains `needle`, ignoring case.
pub fn select_containing<'a>(
    selector: &Selector,
    html: &'a Html,
    needle: &str,
) -> Result<ElementRef<'a>, Error> {
    let needle = needle.to_lowercase();
    html.select(selector)
        .find(|el| block_text(*el).to_lowercase().contains(&needle))
        .ok_or_else(|| Error::HtmlParse(format!("No element mentions \"{needle}\".")))
}

/// Tidied text of the first match of `selector` below `element`.
pub fn text_from_selection(
    selector: &Selector,
    element: ElementRef<'_>,
    parent_label: &str,
    child_label: &str,
) -> Result<String, Error> {
    let child = select_one(selector, element, parent_label, child_label)?;
    let text = tidy_text(child);
    if text.is_empty() {
        // capitalize the first letter of the label
        let mut child_label = child_label.to_string();
        child_label[..1].make_ascii_uppercase();
        return Err(Error::TextNodeParse(format!(
            "{child_label} element should have text inside."
        )));
    }
    Ok(text)
}

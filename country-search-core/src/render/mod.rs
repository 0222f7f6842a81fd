//! Rendering of search results into the list and detail containers

pub mod markup;
mod style;

use std::sync::Arc;

use country_search_provider::CountryRecord;

use crate::traits::Container;

pub use markup::{Element, Node, Tag};
pub use style::{style_for, ElementKind};

/// Attribute holding the country name on list entries.
pub const ENTRY_NAME_ATTR: &str = "data-name";

/// Placeholder shown when a country has no capital.
pub const MISSING_CAPITAL: &str = "-";

/// Identifier of the list entry at `index`.
pub fn entry_id(index: usize) -> String {
    format!("country-{index}")
}

/// Writes search results into the two page containers.
///
/// After any render at most one of the containers has content.
#[derive(Clone)]
pub struct Renderer {
    list: Arc<dyn Container>,
    detail: Arc<dyn Container>,
}

impl Renderer {
    pub fn new(list: Arc<dyn Container>, detail: Arc<dyn Container>) -> Self {
        Self { list, detail }
    }

    /// Render a result set.
    ///
    /// No results clears both containers, one result shows the detail
    /// panel, anything more shows the clickable list.
    pub fn render_list(&self, results: &[CountryRecord]) {
        self.list.set_style(style_for(ElementKind::ListContainer));

        match results {
            [] => {
                self.list.clear();
                self.detail.clear();
            }
            [record] => {
                self.list.clear();
                self.detail.replace(vec![detail_panel(record)]);
            }
            _ => {
                let entries = results
                    .iter()
                    .enumerate()
                    .map(|(index, record)| list_entry(index, record))
                    .collect();
                self.list.replace(entries);
                self.detail.clear();
            }
        }
    }
}

fn flag(record: &CountryRecord) -> Element {
    Element::styled(Tag::Img)
        .with_attr("src", record.flag_image_url.as_str())
        .with_attr("alt", format!("{} flag", record.common_name))
}

/// `<li>` with flag and name, tagged for click dispatch.
pub fn list_entry(index: usize, record: &CountryRecord) -> Element {
    Element::styled(Tag::Li)
        .with_attr("id", entry_id(index))
        .with_attr(ENTRY_NAME_ATTR, record.common_name.as_str())
        .with_child(flag(record))
        .with_child(Element::styled(Tag::P).with_text(record.common_name.as_str()))
}

fn labelled_row(label: &str, value: String) -> Element {
    Element::styled(Tag::Li)
        .with_child(Element::styled(Tag::Span).with_text(label))
        .with_child(Element::styled(Tag::P).with_text(value))
}

/// Detail panel: heading row, then capital, population and languages.
pub fn detail_panel(record: &CountryRecord) -> Element {
    let heading = Element::styled(Tag::Li)
        .with_child(flag(record))
        .with_child(Element::styled(Tag::H4).with_text(record.common_name.as_str()));

    let capital = record
        .primary_capital()
        .filter(|capital| !capital.is_empty())
        .unwrap_or(MISSING_CAPITAL)
        .to_string();
    let languages = record.language_names().collect::<Vec<_>>().join(", ");

    Element::styled(Tag::Ul)
        .with_child(heading)
        .with_child(labelled_row("Capital:", capital))
        .with_child(labelled_row("Population:", record.population.to_string()))
        .with_child(labelled_row("Languages:", languages))
}

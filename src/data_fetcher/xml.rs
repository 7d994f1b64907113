//! Lightweight element tree for GameDay documents.
//!
//! GameDay files carry almost all of their data in attributes, so the tree
//! keeps element names, attributes and children and drops text content.

use crate::error::AppError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Parses a document and returns its root element.
    pub fn parse(xml: &str) -> Result<XmlNode, AppError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let node = Self::from_start(&start)?;
                    attach(&mut stack, &mut root, node);
                }
                Event::End(_) => {
                    if let Some(node) = stack.pop() {
                        attach(&mut stack, &mut root, node);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(AppError::xml_structure(format!(
                "document ended inside <{}>",
                open.name
            )));
        }

        root.ok_or_else(|| AppError::xml_structure("document has no root element"))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<XmlNode, AppError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = BTreeMap::new();

        for attribute in start.attributes() {
            let attribute = attribute.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute
                .unescape_value()
                .map_err(quick_xml::Error::from)?
                .into_owned();
            attributes.insert(key, value);
        }

        Ok(XmlNode {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    /// First direct child with the given element name.
    pub fn find(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All direct children with the given element name, in document order.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Like [`find`](Self::find) but a missing child is an error.
    pub fn require(&self, name: &str) -> Result<&XmlNode, AppError> {
        self.find(name).ok_or_else(|| {
            AppError::xml_structure(format!("<{}> has no <{}> element", self.name, name))
        })
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attribute value or an empty string.
    pub fn attr_or_default(&self, name: &str) -> String {
        self.attr(name).unwrap_or_default().to_string()
    }

    /// Attribute parsed into `T`. Missing, blank and unparsable values are `None`.
    pub fn parse_attr<T: FromStr>(&self, name: &str) -> Option<T> {
        self.attr(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .and_then(|value| value.parse().ok())
    }

    /// Numeric attribute with zero for missing or unparsable values.
    pub fn count(&self, name: &str) -> u32 {
        self.parse_attr(name).unwrap_or(0)
    }

    pub fn require_attr(&self, name: &str) -> Result<&str, AppError> {
        self.attr(name).ok_or_else(|| {
            AppError::xml_structure(format!("<{}> is missing attribute '{}'", self.name, name))
        })
    }

    /// GameDay flags are written as `Y`/`N` or `true`/`false`.
    pub fn flag(&self, name: &str) -> bool {
        matches!(
            self.attr(name).map(str::trim),
            Some("Y") | Some("y") | Some("true") | Some("T") | Some("1")
        )
    }
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_elements_and_attributes() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<scoreboard>
  <go_game>
    <game id="2015_04_05_slnmlb_chnmlb_1" status="FINAL"/>
    <team name="Cubs" code="chn"><gameteam R="0" H="7" E="1"/></team>
    <team name="Cardinals" code="sln"><gameteam R="3" H="9" E="0"/></team>
  </go_game>
</scoreboard>"#;

        let root = XmlNode::parse(xml).unwrap();
        assert_eq!(root.name, "scoreboard");

        let game = root.find("go_game").unwrap();
        assert_eq!(
            game.find("game").unwrap().attr("id"),
            Some("2015_04_05_slnmlb_chnmlb_1")
        );

        let teams: Vec<_> = game.find_all("team").collect();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].attr("name"), Some("Cubs"));
        assert_eq!(teams[1].find("gameteam").unwrap().count("R"), 3);
    }

    #[test]
    fn test_attribute_entities_are_unescaped() {
        let root = XmlNode::parse(r#"<action des="Pitching Change: A &amp; B"/>"#).unwrap();
        assert_eq!(root.attr("des"), Some("Pitching Change: A & B"));
    }

    #[test]
    fn test_parse_attr_handles_blank_and_invalid_values() {
        let root = XmlNode::parse(r#"<batter ab="4" h="" avg=".250" so="-"/>"#).unwrap();
        assert_eq!(root.parse_attr::<u32>("ab"), Some(4));
        assert_eq!(root.parse_attr::<u32>("h"), None);
        assert_eq!(root.parse_attr::<u32>("so"), None);
        assert_eq!(root.parse_attr::<u32>("missing"), None);
        assert_eq!(root.count("so"), 0);
        assert_eq!(root.attr_or_default("avg"), ".250");
        assert_eq!(root.attr_or_default("missing"), "");
    }

    #[test]
    fn test_flags() {
        let root = XmlNode::parse(r#"<inning top_inning="Y" win="true" loss="N"/>"#).unwrap();
        assert!(root.flag("top_inning"));
        assert!(root.flag("win"));
        assert!(!root.flag("loss"));
        assert!(!root.flag("missing"));
    }

    #[test]
    fn test_require_reports_missing_pieces() {
        let root = XmlNode::parse("<game/>").unwrap();
        let err = root.require("team").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected GameDay XML structure: <game> has no <team> element"
        );
        assert!(matches!(
            root.require_attr("id"),
            Err(AppError::XmlStructure(_))
        ));
    }

    #[test]
    fn test_empty_document_is_an_error() {
        assert!(matches!(
            XmlNode::parse(""),
            Err(AppError::XmlStructure(_))
        ));
        assert!(matches!(
            XmlNode::parse(r#"<?xml version="1.0"?>"#),
            Err(AppError::XmlStructure(_))
        ));
    }

    #[test]
    fn test_mismatched_tags_are_rejected() {
        assert!(XmlNode::parse("<game><team></game>").is_err());
    }

    #[test]
    fn test_unterminated_document_is_rejected() {
        assert!(XmlNode::parse("<game><team/>").is_err());
    }
}

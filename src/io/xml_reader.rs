//! Pull-based reader handing out one owned `<ClinVarSet>` subtree at a time.

use super::readers::open_input_reader;
use crate::{core::element::Element, error::ClinvarError, utils::util::Result};
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};
use std::{
    io::{BufRead, BufReader, Read},
    path::Path,
};

pub const CLINVAR_SET_TAG: &str = "ClinVarSet";

pub struct ClinVarSetReader<R: BufRead> {
    reader: Reader<R>,
    event_buf: Vec<u8>,
    element_buf: Vec<u8>,
}

impl ClinVarSetReader<BufReader<Box<dyn Read>>> {
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::new(open_input_reader(path)?))
    }
}

impl<R: BufRead> ClinVarSetReader<R> {
    pub fn new(reader: R) -> Self {
        let mut xml_reader = Reader::from_reader(reader);
        // Leaf text (comments, names) must be kept verbatim
        xml_reader.config_mut().trim_text(false);
        Self {
            reader: xml_reader,
            event_buf: Vec::new(),
            element_buf: Vec::new(),
        }
    }

    pub fn next_set(&mut self) -> Result<Option<Element>> {
        loop {
            self.event_buf.clear();
            match self.reader.read_event_into(&mut self.event_buf)? {
                Event::Start(ref e) if e.name().as_ref() == CLINVAR_SET_TAG.as_bytes() => {
                    let root = element_from_start(e)?;
                    let clinvar_set = self.read_subtree(root)?;
                    return Ok(Some(clinvar_set));
                }
                Event::Empty(ref e) if e.name().as_ref() == CLINVAR_SET_TAG.as_bytes() => {
                    return Ok(Some(element_from_start(e)?));
                }
                Event::Eof => return Ok(None),
                _ => {}
            }
        }
    }

    pub fn sets(self) -> ClinVarSets<R> {
        ClinVarSets { reader: self }
    }

    /// Builds the subtree below an already consumed start tag, returning once
    /// its matching end tag has been read.
    fn read_subtree(&mut self, root: Element) -> Result<Element> {
        let mut stack = vec![root];
        loop {
            self.element_buf.clear();
            match self.reader.read_event_into(&mut self.element_buf)? {
                Event::Start(ref e) => stack.push(element_from_start(e)?),
                Event::Empty(ref e) => {
                    let child = element_from_start(e)?;
                    if let Some(parent) = stack.last_mut() {
                        parent.push_child(child);
                    }
                }
                Event::Text(ref t) => {
                    if let Some(current) = stack.last_mut() {
                        current.push_text(&t.unescape()?);
                    }
                }
                Event::CData(ref c) => {
                    if let Some(current) = stack.last_mut() {
                        current.push_text(std::str::from_utf8(c)?);
                    }
                }
                Event::End(_) => {
                    let Some(finished) = stack.pop() else {
                        return Err(crate::clinvar_error!(
                            "Unbalanced end tag inside <{}>",
                            CLINVAR_SET_TAG
                        ));
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.push_child(finished),
                        None => return Ok(finished),
                    }
                }
                Event::Eof => {
                    return Err(ClinvarError::UnexpectedXmlEof {
                        tag: CLINVAR_SET_TAG.to_string(),
                    })
                }
                _ => {}
            }
        }
    }
}

pub struct ClinVarSets<R: BufRead> {
    reader: ClinVarSetReader<R>,
}

impl<R: BufRead> Iterator for ClinVarSets<R> {
    type Item = Result<Element>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.next_set() {
            Ok(Some(clinvar_set)) => Some(Ok(clinvar_set)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

fn element_from_start(e: &BytesStart) -> Result<Element> {
    let qname = e.name();
    let mut element = Element::new(std::str::from_utf8(qname.as_ref())?);
    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        element = element.with_attribute(key, value.into_owned());
    }
    Ok(element)
}

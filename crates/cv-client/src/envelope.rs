//! SOAP 1.1 envelope encoding and response decoding.
//!
//! Parameter trees are `serde_json::Value`s:
//! - object keys become child elements
//! - keys starting with `@` become attributes
//! - the `_` key becomes text content
//! - arrays become repeated elements with the same name
//! - `null` becomes `xsi:nil="true"`
//!
//! Responses decode the other way round, without the `@` marker: attributes
//! and child elements both become keys, repeated siblings become arrays and
//! text-only elements become strings. That leaves the vendor's one-or-many
//! ambiguity intact; [`crate::one_or_many`] resolves it at the call sites.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::error::{Error, ErrorKind, Result};
use crate::fault::SoapFault;
use crate::security::xml;
use crate::CVENT_NAMESPACE;

const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// Content of the `<MethodResponse>` element.
    Response(Value),
    /// A `<soap:Fault>`.
    Fault(SoapFault),
}

/// `SOAPAction` header value for a method.
pub fn soap_action(method: &str) -> String {
    format!("{}/{}", CVENT_NAMESPACE, method)
}

/// Build the request envelope for `method`.
///
/// `params` must be an object (or `null` for no parameters).
pub fn encode(method: &str, params: &Value, session: Option<&str>) -> Result<String> {
    check_name(method)?;

    let mut body = String::new();
    match params {
        Value::Null => {}
        Value::Object(map) => write_children(&mut body, map)?,
        other => {
            return Err(Error::new(ErrorKind::Serialization(format!(
                "parameters for {} must be an object, got {}",
                method,
                type_name(other)
            ))))
        }
    }

    let header = session
        .map(|value| {
            format!(
                r#"
  <soap:Header>
    <CventSessionHeader xmlns="{ns}">
      <CventSessionValue>{value}</CventSessionValue>
    </CventSessionHeader>
  </soap:Header>"#,
                ns = CVENT_NAMESPACE,
                value = xml::escape(value),
            )
        })
        .unwrap_or_default();

    Ok(format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="{soap}" xmlns:xsi="{xsi}" xmlns:xsd="{xsd}">{header}
  <soap:Body>
    <{method} xmlns="{ns}">{body}</{method}>
  </soap:Body>
</soap:Envelope>"#,
        soap = SOAP_ENV_NS,
        xsi = XSI_NS,
        xsd = XSD_NS,
        header = header,
        method = method,
        ns = CVENT_NAMESPACE,
        body = body,
    ))
}

fn write_children(out: &mut String, map: &Map<String, Value>) -> Result<()> {
    for (name, value) in map {
        if name.starts_with('@') || name == "_" {
            continue;
        }
        write_element(out, name, value)?;
    }
    Ok(())
}

fn write_element(out: &mut String, name: &str, value: &Value) -> Result<()> {
    check_name(name)?;

    match value {
        Value::Null => out.push_str(&format!(r#"<{} xsi:nil="true"/>"#, name)),
        Value::Array(items) => {
            for item in items {
                write_element(out, name, item)?;
            }
        }
        Value::Object(map) => {
            out.push('<');
            out.push_str(name);
            for (key, attr) in map {
                if let Some(attr_name) = key.strip_prefix('@') {
                    check_name(attr_name)?;
                    let attr_value = scalar(attr).ok_or_else(|| {
                        Error::new(ErrorKind::Serialization(format!(
                            "attribute {} on {} must be a scalar",
                            attr_name, name
                        )))
                    })?;
                    out.push_str(&format!(r#" {}="{}""#, attr_name, xml::escape(&attr_value)));
                }
            }
            out.push('>');
            if let Some(text) = map.get("_").and_then(scalar) {
                out.push_str(&xml::escape(&text));
            }
            write_children(out, map)?;
            out.push_str(&format!("</{}>", name));
        }
        scalar_value => {
            let text = scalar(scalar_value).unwrap_or_default();
            out.push_str(&format!("<{name}>{}</{name}>", xml::escape(&text)));
        }
    }
    Ok(())
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn check_name(name: &str) -> Result<()> {
    if xml::is_safe_name(name) {
        Ok(())
    } else {
        Err(Error::new(ErrorKind::Serialization(format!(
            "invalid element name: {:?}",
            name
        ))))
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A parsed XML element.
#[derive(Debug, Default)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
    nil: bool,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let mut element = Element {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            ..Default::default()
        };

        for attr in start.attributes() {
            let attr = attr?;
            let key = attr.key;
            if key.as_ref().starts_with(b"xmlns") {
                continue;
            }

            let local = String::from_utf8_lossy(key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();

            if key.prefix().is_some() {
                // xsi:nil is the only namespaced attribute that carries data.
                if local == "nil" && value == "true" {
                    element.nil = true;
                }
                continue;
            }
            element.attributes.push((local, value));
        }

        Ok(element)
    }

    fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    fn into_value(self) -> Value {
        if self.nil {
            return Value::Null;
        }
        if self.attributes.is_empty() && self.children.is_empty() {
            return Value::String(self.text);
        }

        let mut map = Map::new();
        for (name, value) in self.attributes {
            insert_repeated(&mut map, name, Value::String(value));
        }
        for child in self.children {
            let name = child.name.clone();
            insert_repeated(&mut map, name, child.into_value());
        }
        if !self.text.is_empty() {
            map.insert("_".to_string(), Value::String(self.text));
        }
        Value::Object(map)
    }
}

fn insert_repeated(map: &mut Map<String, Value>, name: String, value: Value) {
    match map.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(name, value);
        }
    }
}

fn parse_document(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(Element::from_start(&start)?),
            Event::Empty(start) => {
                let element = Element::from_start(&start)?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    Error::new(ErrorKind::Xml("unbalanced closing tag".to_string()))
                })?;
                attach(&mut stack, &mut root, element);
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(Error::new(ErrorKind::Xml(
            "document ended inside an element".to_string(),
        )));
    }
    root.ok_or_else(|| Error::new(ErrorKind::Xml("empty document".to_string())))
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

/// Decode a response envelope.
///
/// Returns the content of the first element in `soap:Body`, or the fault
/// when that element is a `soap:Fault`.
pub fn decode(xml: &str) -> Result<Decoded> {
    let document = parse_document(xml)?;
    if document.name != "Envelope" {
        return Err(Error::new(ErrorKind::InvalidResponse(format!(
            "expected a SOAP Envelope, found <{}>",
            document.name
        ))));
    }

    let body = document
        .children
        .into_iter()
        .find(|c| c.name == "Body")
        .ok_or_else(|| Error::new(ErrorKind::InvalidResponse("missing soap:Body".to_string())))?;

    let payload = body
        .children
        .into_iter()
        .next()
        .ok_or_else(|| Error::new(ErrorKind::InvalidResponse("empty soap:Body".to_string())))?;

    if payload.name == "Fault" {
        let code = payload
            .child("faultcode")
            .map(|c| c.text.clone())
            .unwrap_or_default();
        let message = payload
            .child("faultstring")
            .map(|c| c.text.clone())
            .unwrap_or_else(|| "Unknown error".to_string());
        return Ok(Decoded::Fault(SoapFault::new(code, message)));
    }

    Ok(Decoded::Response(match payload.into_value() {
        Value::String(s) if s.is_empty() => Value::Object(Map::new()),
        Value::Null => Value::Object(Map::new()),
        value => value,
    }))
}

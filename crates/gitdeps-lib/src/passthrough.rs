use crate::config::PassthroughConfig;
use crate::xml::Element;
use serde_json::{Map, Value};

/// Renders a whole document as `{ <root name>: <root node> }`.
pub fn document_to_json(root: &Element, keys: &PassthroughConfig) -> Value {
    let mut document = Map::new();
    document.insert(root.name.clone(), element_to_json(root, keys));
    Value::Object(document)
}

/// Renders one element in attribute-bag form.
///
/// Leaf elements without attributes collapse to their text. Everything else
/// becomes an object with attributes under `attribute_key`, text under
/// `text_key` and one array per child name.
pub fn element_to_json(element: &Element, keys: &PassthroughConfig) -> Value {
    if element.attributes.is_empty() && element.children.is_empty() {
        return Value::String(element.text.clone().unwrap_or_default());
    }

    let mut node = Map::new();

    if !element.attributes.is_empty() {
        let attributes = element
            .attributes
            .iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();
        node.insert(keys.attribute_key.clone(), Value::Object(attributes));
    }

    if let Some(text) = &element.text {
        node.insert(keys.text_key.clone(), Value::String(text.clone()));
    }

    for child in &element.children {
        let rendered = element_to_json(child, keys);
        match node
            .entry(child.name.clone())
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            Value::Array(siblings) => siblings.push(rendered),
            // A child sharing a name with the attribute or text key.
            other => *other = Value::Array(vec![other.take(), rendered]),
        }
    }

    Value::Object(node)
}

// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative view descriptions for the external renderer.

use huddle_lens::StoreError;
use serde::Serialize;
use tracing::error;

/// Failure while deriving a view from state.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ViewError {
    /// A lens or reducer could not project the state.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// A player refers to a palette entry that does not exist.
    #[error("color index {index} is outside the palette of {len} colors")]
    UnknownColor {
        /// Offending index.
        index: usize,
        /// Palette size.
        len: usize,
    },
}

/// Looks up palette entry `index`.
pub fn palette_color(colors: &[String], index: usize) -> Result<&str, ViewError> {
    colors
        .get(index)
        .map(String::as_str)
        .ok_or(ViewError::UnknownColor {
            index,
            len: colors.len(),
        })
}

/// A node of the view tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum View {
    /// Element with attributes and children.
    Element {
        /// Tag name.
        tag: &'static str,
        /// Attributes, in insertion order.
        attrs: Vec<(&'static str, String)>,
        /// Child nodes.
        children: Vec<View>,
    },
    /// Text content.
    Text {
        /// The text.
        text: String,
    },
}

impl View {
    /// An element with no attributes or children.
    #[must_use]
    pub fn el(tag: &'static str) -> Self {
        Self::Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// A `div` holding `children`.
    #[must_use]
    pub fn div(children: impl IntoIterator<Item = Self>) -> Self {
        Self::el("div").children(children)
    }

    /// Adds an attribute. No effect on text nodes.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.push((name, value.into()));
        }
        self
    }

    /// Adds `class`.
    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Adds the `disabled` attribute when `disabled` holds.
    #[must_use]
    pub fn disabled_if(self, disabled: bool) -> Self {
        if disabled {
            self.attr("disabled", "true")
        } else {
            self
        }
    }

    /// Appends a child. No effect on text nodes.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    /// Appends several children.
    #[must_use]
    pub fn children(mut self, more: impl IntoIterator<Item = Self>) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.extend(more);
        }
        self
    }

    /// Tag name, `None` for text.
    #[must_use]
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Element { tag, .. } => Some(*tag),
            Self::Text { .. } => None,
        }
    }

    /// Value of attribute `name`.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            Self::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str()),
            Self::Text { .. } => None,
        }
    }

    /// Depth-first iterator over this node and its descendants.
    pub fn walk(&self) -> impl Iterator<Item = &Self> + '_ {
        let mut stack = vec![self];
        core::iter::from_fn(move || {
            let node = stack.pop()?;
            if let Self::Element { children, .. } = node {
                stack.extend(children.iter().rev());
            }
            Some(node)
        })
    }

    /// Every text node's content, in document order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.walk()
            .filter_map(|n| match n {
                Self::Text { text } => Some(text.as_str()),
                Self::Element { .. } => None,
            })
            .collect()
    }

    /// Returns `true` if some text node contains `needle`.
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// Elements whose class list contains `class`.
    pub fn find_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.walk().filter(move |n| {
            n.get_attr("class")
                .is_some_and(|c| c.split_whitespace().any(|c| c == class))
        })
    }
}

/// Renders `result`, or an inline error naming `component` in its place.
///
/// The error is logged; nothing outside the returned subtree is affected.
pub fn fallback(component: &'static str, result: Result<View, ViewError>) -> View {
    match result {
        Ok(view) => view,
        Err(err) => {
            error!(component, error = %err, "view replaced by fallback");
            View::div([View::text(format!("Error in {component}: {err}"))]).class("error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_nest_and_walk_in_document_order() {
        let view = View::div([
            View::el("span").class("a").child(View::text("one")),
            View::el("button").disabled_if(true).child(View::text("two")),
        ]);
        assert_eq!(view.texts(), ["one", "two"]);
        assert_eq!(view.find_class("a").count(), 1);
        let button = view.walk().find(|n| n.tag() == Some("button")).unwrap();
        assert_eq!(button.get_attr("disabled"), Some("true"));
    }

    #[test]
    fn fallback_names_the_component() {
        let view = fallback(
            "field",
            Err(ViewError::UnknownColor { index: 9, len: 7 }),
        );
        assert_eq!(
            view.texts(),
            ["Error in field: color index 9 is outside the palette of 7 colors"]
        );
        assert_eq!(view.get_attr("class"), Some("error"));
    }

    #[test]
    fn serializes_with_a_type_tag() {
        let json = serde_json::to_value(View::el("p").child(View::text("hi"))).unwrap();
        assert_eq!(json["type"], "element");
        assert_eq!(json["children"][0]["text"], "hi");
    }
}

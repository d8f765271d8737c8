// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::{Element, NSChoice};

use crate::util::ParseError;

pub trait ElementExt {
    fn expect_is<'a>(
        &self,
        name: impl AsRef<str>,
        ns: impl Into<NSChoice<'a>>,
    ) -> Result<(), ParseError>;

    /// Returns the trimmed text content of the element or `None` if it is blank.
    fn non_empty_text(&self) -> Option<String>;

    /// Returns the trimmed text of the first direct child named `name` in the element's
    /// namespace, skipping blank values.
    fn child_text(&self, name: &str) -> Option<String>;
}

impl ElementExt for Element {
    fn expect_is<'a>(
        &self,
        name: impl AsRef<str>,
        ns: impl Into<NSChoice<'a>>,
    ) -> Result<(), ParseError> {
        let ns = ns.into();
        if !self.is(name.as_ref(), ns) {
            return Err(ParseError::Generic {
                msg: format!(
                    "Expected element with name {} and namespace {}. Got {} and {} instead.",
                    name.as_ref(),
                    ns_choice_to_string(ns),
                    self.name(),
                    self.ns()
                ),
            });
        }
        Ok(())
    }

    fn non_empty_text(&self) -> Option<String> {
        let text = self.text();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    fn child_text(&self, name: &str) -> Option<String> {
        self.get_child(name, self.ns().as_str())
            .and_then(ElementExt::non_empty_text)
    }
}

fn ns_choice_to_string(ns: NSChoice) -> String {
    match ns {
        NSChoice::None => "<none>".to_string(),
        NSChoice::OneOf(ns) => ns.to_string(),
        NSChoice::AnyOf(ns_list) => ns_list.join(" or "),
        NSChoice::Any => "<any>".to_string(),
    }
}

//! Queries over the rendered elements, named after their DOM testing
//! counterparts

use super::ContactFormView;
use crate::state::FieldName;

/// Test id carried by every validation error element
pub const ERROR_TEST_ID: &str = "error";

/// Test id of the summary element for `field`
pub fn display_test_id(field: FieldName) -> &'static str {
    match field {
        FieldName::FirstName => "firstnameDisplay",
        FieldName::LastName => "lastnameDisplay",
        FieldName::Email => "emailDisplay",
        FieldName::Message => "messageDisplay",
    }
}

/// Semantic role of a rendered element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Heading,
    Textbox,
    Button,
    Text,
}

/// Flattened element used by the query helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element<'a> {
    pub role: Role,
    pub text: &'a str,
    pub test_id: Option<&'a str>,
}

impl ContactFormView {
    /// All elements in render order
    pub fn elements(&self) -> Vec<Element<'_>> {
        let mut elements = vec![Element {
            role: Role::Heading,
            text: &self.heading,
            test_id: None,
        }];

        elements.extend(self.inputs.iter().map(|input| Element {
            role: Role::Textbox,
            text: &input.value,
            test_id: None,
        }));

        elements.push(Element {
            role: Role::Button,
            text: self.submit.label,
            test_id: None,
        });

        elements.extend(self.errors.iter().map(|error| Element {
            role: Role::Text,
            text: error,
            test_id: Some(ERROR_TEST_ID),
        }));

        if let Some(summary) = &self.summary {
            elements.push(Element {
                role: Role::Heading,
                text: summary.heading,
                test_id: None,
            });
            elements.extend(summary.lines.iter().map(|line| Element {
                role: Role::Text,
                text: &line.text,
                test_id: Some(display_test_id(line.field)),
            }));
        }

        elements
    }

    /// Input whose label is exactly `label`
    pub fn get_by_label_text(&self, label: &str) -> Option<&super::InputView> {
        self.inputs.iter().find(|input| input.label == label)
    }

    pub fn get_all_by_role(&self, role: Role) -> Vec<Element<'_>> {
        self.elements()
            .into_iter()
            .filter(|el| el.role == role)
            .collect()
    }

    /// The single element with `role`, or `None` if there are zero or several
    pub fn get_by_role(&self, role: Role) -> Option<Element<'_>> {
        single(self.get_all_by_role(role))
    }

    /// The single element whose text is exactly `text`
    pub fn get_by_text(&self, text: &str) -> Option<Element<'_>> {
        single(
            self.elements()
                .into_iter()
                .filter(|el| el.text == text)
                .collect(),
        )
    }

    /// Elements whose text contains `needle`, ignoring ASCII case
    pub fn find_all_by_text_ci(&self, needle: &str) -> Vec<Element<'_>> {
        let needle = needle.to_ascii_lowercase();
        self.elements()
            .into_iter()
            .filter(|el| el.text.to_ascii_lowercase().contains(&needle))
            .collect()
    }

    pub fn find_all_by_test_id(&self, test_id: &str) -> Vec<Element<'_>> {
        self.elements()
            .into_iter()
            .filter(|el| el.test_id == Some(test_id))
            .collect()
    }

    /// First element tagged `test_id`, if any
    pub fn query_by_test_id(&self, test_id: &str) -> Option<Element<'_>> {
        self.find_all_by_test_id(test_id).into_iter().next()
    }

    /// The single element tagged `test_id`
    pub fn get_by_test_id(&self, test_id: &str) -> Option<Element<'_>> {
        single(self.find_all_by_test_id(test_id))
    }
}

fn single<T>(mut items: Vec<T>) -> Option<T> {
    if items.len() == 1 {
        items.pop()
    } else {
        None
    }
}

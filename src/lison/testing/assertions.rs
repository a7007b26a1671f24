//! Fluent assertion API for lison objects

use super::matchers::TextMatch;
use crate::lison::ast::{Object, ObjectKind};
use crate::lison::formats::render;

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for an object
pub fn assert_object(object: &Object) -> ObjectAssertion<'_> {
    ObjectAssertion {
        object,
        context: "root".to_string(),
    }
}

/// Short description of an object for failure messages
fn describe(object: &Object) -> String {
    let text = render(object);
    let text = text.trim_end();
    let display_text = if text.chars().count() > 50 {
        format!("{}...", text.chars().take(50).collect::<String>())
    } else {
        text.to_string()
    };
    format!("{} `{}`", object.kind(), display_text)
}

// ============================================================================
// Object Assertions
// ============================================================================

pub struct ObjectAssertion<'a> {
    object: &'a Object,
    context: String,
}

impl<'a> ObjectAssertion<'a> {
    /// Assert the variant of this object
    pub fn kind(self, expected: ObjectKind) -> Self {
        assert_eq!(
            self.object.kind(),
            expected,
            "{}: Expected {}, found {}",
            self.context,
            expected,
            describe(self.object)
        );
        self
    }

    /// Assert this object is the error sentinel
    pub fn is_error(self) -> Self {
        self.kind(ObjectKind::Error)
    }

    /// Assert this object is anything but the error sentinel
    pub fn is_well_formed(self) -> Self {
        assert!(
            !self.object.is_error(),
            "{}: Expected a well-formed object, found the error sentinel",
            self.context
        );
        self
    }

    pub fn literal(self, expected: &str) -> Self {
        self.literal_matches(TextMatch::Exact(expected.to_string()))
    }

    pub fn literal_matches(self, matcher: TextMatch) -> Self {
        match self.object.as_literal() {
            Some(text) => matcher.assert(text, &self.context),
            None => panic!(
                "{}: Expected literal {}, found {}",
                self.context,
                matcher,
                describe(self.object)
            ),
        }
        self
    }

    pub fn integer(self, expected: i64) -> Self {
        match self.object.as_integer() {
            Some(actual) => assert_eq!(
                actual, expected,
                "{}: Expected integer {}, found {}",
                self.context, expected, actual
            ),
            None => panic!(
                "{}: Expected integer {}, found {}",
                self.context,
                expected,
                describe(self.object)
            ),
        }
        self
    }

    /// Exact comparison; the parser reads floats back bit-for-bit
    pub fn float(self, expected: f64) -> Self {
        match self.object.as_float() {
            Some(actual) => assert_eq!(
                actual, expected,
                "{}: Expected float {}, found {}",
                self.context, expected, actual
            ),
            None => panic!(
                "{}: Expected float {}, found {}",
                self.context,
                expected,
                describe(self.object)
            ),
        }
        self
    }

    pub fn keyword(self, expected: &str) -> Self {
        self.keyword_matches(TextMatch::Exact(expected.to_string()))
    }

    /// Match the keyword name, given without its leading `:`
    pub fn keyword_matches(self, matcher: TextMatch) -> Self {
        match self.object.as_keyword() {
            Some(name) => matcher.assert(name, &self.context),
            None => panic!(
                "{}: Expected keyword {}, found {}",
                self.context,
                matcher,
                describe(self.object)
            ),
        }
        self
    }

    /// Assert this object is a list and return list-specific assertions
    pub fn list(self) -> ListAssertion<'a> {
        let object = self.object;
        match object.as_children() {
            Some(children) => ListAssertion {
                children,
                context: self.context,
            },
            None => panic!(
                "{}: Expected list, found {}",
                self.context,
                describe(object)
            ),
        }
    }
}

// ============================================================================
// List Assertions
// ============================================================================

pub struct ListAssertion<'a> {
    children: &'a [Object],
    context: String,
}

impl<'a> ListAssertion<'a> {
    /// Assert the number of children
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_children(self.children)
        );
        self
    }

    pub fn empty(self) -> Self {
        self.child_count(0)
    }

    /// Assert on a specific child by index
    pub fn child<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ObjectAssertion<'a>) -> R,
    {
        assert!(
            index < self.children.len(),
            "{}: Child index {} out of bounds (list has {} children)",
            self.context,
            index,
            self.children.len()
        );

        let children = self.children;
        assertion(ObjectAssertion {
            object: &children[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }
}

fn summarize_children(children: &[Object]) -> String {
    children
        .iter()
        .map(|child| child.kind().name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Object {
        Object::from(vec![
            Object::integer(1),
            Object::literal("two words"),
            Object::from(vec![Object::keyword("three"), Object::float(4.5)]),
        ])
    }

    #[test]
    fn test_fluent_chain() {
        assert_object(&sample())
            .is_well_formed()
            .list()
            .child_count(3)
            .child(0, |c| c.integer(1))
            .child(1, |c| c.literal_matches(TextMatch::StartsWith("two".into())))
            .child(2, |c| {
                c.list()
                    .child(0, |k| k.keyword_matches(TextMatch::Contains("hre".into())))
                    .child(1, |f| f.float(4.5))
            });
    }

    #[test]
    fn test_error_assertion() {
        assert_object(&Object::error()).is_error();
        assert_object(&Object::list()).list().empty();
    }

    #[test]
    #[should_panic(expected = "root[2][1]: Expected integer 4, found float `4.5`")]
    fn test_failure_reports_path() {
        assert_object(&sample())
            .list()
            .child(2, |c| c.list().child(1, |f| f.integer(4)));
    }

    #[test]
    #[should_panic(expected = "root: Expected 2 children, found 3: [integer, literal, list]")]
    fn test_child_count_failure() {
        assert_object(&sample()).list().child_count(2);
    }

    #[test]
    #[should_panic(expected = "root[0]: Expected keyword equal to 'one', found integer `1`")]
    fn test_keyword_on_wrong_kind() {
        assert_object(&sample()).list().child(0, |c| c.keyword("one"));
    }
}

//! Path accumulation while walking two value trees.
//!
//! A [`Scope`] is a stack frame that borrows its parent, so sibling branches
//! never share a mutable path buffer. The owned [`ChangePath`] is only
//! materialized when a change is actually emitted.

use crate::{ChangePath, PathSegment, Value};

#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    Field(&'a str),
    Item(Option<&'a Value>),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Scope<'a> {
    parent: Option<&'a Scope<'a>>,
    segment: Option<Segment<'a>>,
}

impl<'a> Scope<'a> {
    pub(crate) fn root() -> Self {
        Self {
            parent: None,
            segment: None,
        }
    }

    pub(crate) fn field<'b>(&'b self, name: &'b str) -> Scope<'b> {
        Scope {
            parent: Some(self),
            segment: Some(Segment::Field(name)),
        }
    }

    pub(crate) fn item<'b>(&'b self, key: Option<&'b Value>) -> Scope<'b> {
        Scope {
            parent: Some(self),
            segment: Some(Segment::Item(key)),
        }
    }

    pub(crate) fn to_path(&self) -> ChangePath {
        let mut segments = Vec::new();
        let mut frame = Some(self);
        while let Some(scope) = frame {
            match scope.segment {
                Some(Segment::Field(name)) => segments.push(PathSegment::field(name)),
                Some(Segment::Item(key)) => {
                    segments.push(PathSegment::Item(key.cloned().unwrap_or_default()))
                }
                None => {}
            }
            frame = scope.parent;
        }
        segments.reverse();
        ChangePath::new(segments)
    }
}

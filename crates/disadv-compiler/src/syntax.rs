//! EDIFACT syntax definitions and segment assembly
//!
//! This module owns the service string advice (UNA) and the default
//! separators used when writing DISADV segments, plus a small builder
//! that assembles one segment line at a time.

/// Default EDIFACT separators (advertised by the UNA segment)
pub const DEFAULT_COMPONENT_SEPARATOR: char = ':';
pub const DEFAULT_ELEMENT_SEPARATOR: char = '+';
pub const DEFAULT_DECIMAL_POINT: char = '.';
pub const DEFAULT_RELEASE_CHARACTER: char = '?';
pub const DEFAULT_SEGMENT_TERMINATOR: char = '\'';

/// Separators used when writing EDIFACT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    /// Component separator (default ':')
    pub component: char,
    /// Element separator (default '+')
    pub element: char,
    /// Decimal point (default '.')
    pub decimal: char,
    /// Release character (default '?')
    pub release: char,
    /// Segment terminator (default '\'')
    pub segment: char,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            component: DEFAULT_COMPONENT_SEPARATOR,
            element: DEFAULT_ELEMENT_SEPARATOR,
            decimal: DEFAULT_DECIMAL_POINT,
            release: DEFAULT_RELEASE_CHARACTER,
            segment: DEFAULT_SEGMENT_TERMINATOR,
        }
    }
}

impl Separators {
    /// Render the UNA service string advice for these separators.
    ///
    /// UNA format: `UNA:+.? '`
    /// Positions:  `012345678` (separators at 3,4,5,6,8; position 7 is a
    /// reserved space)
    pub fn service_string_advice(&self) -> String {
        let mut una = String::with_capacity(9);
        una.push_str("UNA");
        una.push(self.component);
        una.push(self.element);
        una.push(self.decimal);
        una.push(self.release);
        una.push(' ');
        una.push(self.segment);
        una
    }
}

/// Builder for a single EDIFACT segment line.
///
/// Field values are written verbatim: separators occurring inside values
/// are not escaped with the release character. That mirrors the upstream
/// behavior this compiler replicates.
#[derive(Debug)]
pub struct SegmentBuilder {
    buf: String,
    separators: Separators,
}

impl SegmentBuilder {
    /// Start a segment with the given tag and default separators
    pub fn new(tag: &str) -> Self {
        Self::with_separators(tag, Separators::default())
    }

    /// Start a segment with the given tag and explicit separators
    pub fn with_separators(tag: &str, separators: Separators) -> Self {
        Self {
            buf: tag.to_string(),
            separators,
        }
    }

    /// Append a simple element: `+<value>`
    #[must_use]
    pub fn element(mut self, value: &str) -> Self {
        self.buf.push(self.separators.element);
        self.buf.push_str(value);
        self
    }

    /// Append a composite element: `+<c1>:<c2>:...`
    #[must_use]
    pub fn composite<'a, I>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.buf.push(self.separators.element);
        let mut first = true;
        for component in components {
            if !first {
                self.buf.push(self.separators.component);
            }
            self.buf.push_str(component);
            first = false;
        }
        self
    }

    /// Terminate the segment and return the finished line
    #[must_use]
    pub fn finish(mut self) -> String {
        self.buf.push(self.separators.segment);
        self.buf
    }
}

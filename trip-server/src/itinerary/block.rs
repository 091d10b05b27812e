//! The parsed unit of itinerary display.

/// One classified, renderable unit derived from a single line of
/// itinerary text.
///
/// Blocks carry no identity beyond their position in the parse result;
/// order matches the original line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItineraryBlock {
    /// A heading line marking the start of a day, e.g. `**Day 1**`.
    /// The text has the bold marker pairs stripped.
    DayHeader(String),

    /// One bullet-list entry, e.g. `- Visit the museum`.
    /// The text has the leading dash removed and is trimmed.
    ActivityItem(String),

    /// A plain prose line, kept exactly as it appeared.
    Paragraph(String),

    /// An empty or whitespace-only line; an explicit paragraph separator.
    Blank,
}

impl ItineraryBlock {
    /// The text payload, if this block carries one.
    pub fn text(&self) -> Option<&str> {
        match self {
            ItineraryBlock::DayHeader(t)
            | ItineraryBlock::ActivityItem(t)
            | ItineraryBlock::Paragraph(t) => Some(t),
            ItineraryBlock::Blank => None,
        }
    }

    /// Whether this block is a day header.
    pub fn is_day_header(&self) -> bool {
        matches!(self, ItineraryBlock::DayHeader(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_payload() {
        assert_eq!(
            ItineraryBlock::DayHeader("Day 1".into()).text(),
            Some("Day 1")
        );
        assert_eq!(
            ItineraryBlock::ActivityItem("Hike".into()).text(),
            Some("Hike")
        );
        assert_eq!(
            ItineraryBlock::Paragraph("Free time".into()).text(),
            Some("Free time")
        );
        assert_eq!(ItineraryBlock::Blank.text(), None);
    }

    #[test]
    fn day_header_predicate() {
        assert!(ItineraryBlock::DayHeader(String::new()).is_day_header());
        assert!(!ItineraryBlock::Blank.is_day_header());
        assert!(!ItineraryBlock::Paragraph("**not a header".into()).is_day_header());
    }
}

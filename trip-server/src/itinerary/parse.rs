//! Line classification for itinerary text.
//!
//! Classification inspects the trimmed line; the emitted text follows each
//! rule's own extraction, which is not always the trimmed form. Precedence
//! is fixed: day header, then activity item, then blank, then paragraph.

use super::block::ItineraryBlock;

/// The bold marker pair that delimits a day header line.
const DAY_MARKER: &str = "**";

/// Parse a raw itinerary text blob into an ordered block sequence.
///
/// Splits on line boundaries (`str::lines`, so a trailing newline does not
/// produce a final empty line) and classifies each line independently.
/// Total: every line maps to exactly one block, in the original order.
///
/// # Examples
///
/// ```
/// use trip_server::itinerary::{ItineraryBlock, parse_itinerary};
///
/// let blocks = parse_itinerary("**Day 1**\n- Hike");
/// assert_eq!(
///     blocks,
///     vec![
///         ItineraryBlock::DayHeader("Day 1".to_string()),
///         ItineraryBlock::ActivityItem("Hike".to_string()),
///     ]
/// );
/// ```
pub fn parse_itinerary(text: &str) -> Vec<ItineraryBlock> {
    text.lines().map(classify_line).collect()
}

/// Classify a single line. First match wins.
fn classify_line(line: &str) -> ItineraryBlock {
    let trimmed = line.trim();

    // Day header: delimited by a marker pair on both ends. The length check
    // keeps a bare "**" (where the prefix and suffix are the same two
    // characters) from counting as an empty header.
    if trimmed.len() >= 2 * DAY_MARKER.len()
        && trimmed.starts_with(DAY_MARKER)
        && trimmed.ends_with(DAY_MARKER)
    {
        return ItineraryBlock::DayHeader(line.replace(DAY_MARKER, ""));
    }

    // Activity item: only a dash in leading position counts; "co-op" is prose.
    if trimmed.starts_with('-') {
        return ItineraryBlock::ActivityItem(line.replacen('-', "", 1).trim().to_string());
    }

    if trimmed.is_empty() {
        return ItineraryBlock::Blank;
    }

    ItineraryBlock::Paragraph(line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ItineraryBlock::*;

    #[test]
    fn day_header_line() {
        assert_eq!(
            classify_line("**Day 1: Arrival**"),
            DayHeader("Day 1: Arrival".into())
        );
    }

    #[test]
    fn day_header_with_surrounding_whitespace() {
        // Classification trims, extraction does not.
        assert_eq!(classify_line("  **Day 2**  "), DayHeader("  Day 2  ".into()));
    }

    #[test]
    fn markers_only_line_is_empty_header() {
        assert_eq!(classify_line("****"), DayHeader("".into()));
    }

    #[test]
    fn bare_marker_pair_is_not_a_header() {
        // "**" starts and ends with the marker pair, but those are the same
        // two characters; it falls through to prose.
        assert_eq!(classify_line("**"), Paragraph("**".into()));
        assert_eq!(classify_line("***"), Paragraph("***".into()));
    }

    #[test]
    fn mid_line_markers_are_prose() {
        assert_eq!(
            classify_line("see the **old town** today"),
            Paragraph("see the **old town** today".into())
        );
        assert_eq!(
            classify_line("**Day 3: half bold"),
            Paragraph("**Day 3: half bold".into())
        );
    }

    #[test]
    fn activity_line() {
        assert_eq!(
            classify_line("- Visit the museum"),
            ActivityItem("Visit the museum".into())
        );
    }

    #[test]
    fn activity_line_without_space_after_dash() {
        assert_eq!(classify_line("-Lunch"), ActivityItem("Lunch".into()));
    }

    #[test]
    fn indented_activity_line() {
        assert_eq!(
            classify_line("   - Evening stroll"),
            ActivityItem("Evening stroll".into())
        );
    }

    #[test]
    fn non_leading_dash_is_prose() {
        assert_eq!(
            classify_line("A well-known spot"),
            Paragraph("A well-known spot".into())
        );
    }

    #[test]
    fn blank_lines() {
        assert_eq!(classify_line(""), Blank);
        assert_eq!(classify_line("   "), Blank);
        assert_eq!(classify_line("\t"), Blank);
    }

    #[test]
    fn paragraph_keeps_original_whitespace() {
        assert_eq!(
            classify_line("  Free afternoon  "),
            Paragraph("  Free afternoon  ".into())
        );
    }

    #[test]
    fn end_to_end_scenario() {
        let text = "**Day 1**\n- Breakfast at cafe\nFree afternoon to explore\n\n**Day 2**\n- Museum tour";
        let blocks = parse_itinerary(text);

        assert_eq!(
            blocks,
            vec![
                DayHeader("Day 1".into()),
                ActivityItem("Breakfast at cafe".into()),
                Paragraph("Free afternoon to explore".into()),
                Blank,
                DayHeader("Day 2".into()),
                ActivityItem("Museum tour".into()),
            ]
        );
    }

    #[test]
    fn trailing_newline_does_not_add_a_block() {
        assert_eq!(parse_itinerary("**Day 1**\n").len(), 1);
        // An interior blank line before the trailing newline still counts.
        assert_eq!(
            parse_itinerary("**Day 1**\n\n"),
            vec![DayHeader("Day 1".into()), Blank]
        );
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert!(parse_itinerary("").is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let blocks = parse_itinerary("**Day 1**\r\n- Hike\r\n");
        assert_eq!(
            blocks,
            vec![DayHeader("Day 1".into()), ActivityItem("Hike".into())]
        );
    }
}

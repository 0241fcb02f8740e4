//! # Menu Choices

/// Text shown before each selection prompt.
pub const MENU: &str = "Arena Memory Allocator Menu\n\
Below are a number of options for allocating your memory\n\
(1) Memory Allocation\n\
(2) Memory Flush / Deletion\n\
(3) Show Current Contents\n\
(4) Show Data Usage\n\
(q) Quit\n";

/// Separator framing each command's output.
pub const SEPARATOR: &str = "----------------------------";

/// A parsed menu selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    /// (1) Store a value.
    Allocate,
    /// (2) Reset the arena.
    Flush,
    /// (3) Hex dump of the live region.
    ShowContents,
    /// (4) Used / remaining bytes.
    ShowUsage,
    /// (q) Leave the loop.
    Quit,
    /// Anything else.
    Invalid,
}

impl MenuChoice {
    /// Parses one input line, ignoring surrounding whitespace.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "1" => Self::Allocate,
            "2" => Self::Flush,
            "3" => Self::ShowContents,
            "4" => Self::ShowUsage,
            "q" | "Q" => Self::Quit,
            _ => Self::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("1\n"), MenuChoice::Allocate);
        assert_eq!(MenuChoice::parse(" 2 "), MenuChoice::Flush);
        assert_eq!(MenuChoice::parse("3"), MenuChoice::ShowContents);
        assert_eq!(MenuChoice::parse("4\r\n"), MenuChoice::ShowUsage);
        assert_eq!(MenuChoice::parse("Q"), MenuChoice::Quit);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(MenuChoice::parse("5"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("12"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("quit"), MenuChoice::Invalid);
    }
}

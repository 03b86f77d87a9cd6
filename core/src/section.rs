use strum_macros::{Display, EnumString};

/// One top-level content panel of the portfolio. Exactly one section is
/// visible at a time; declaration order is the sidebar order and the order
/// the digit shortcuts map onto.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SectionId {
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

/// The fixed number of digit shortcuts reserved for sections. Digits beyond
/// the declared section count resolve to nothing and are ignored.
pub const DIGIT_SHORTCUTS: u32 = 7;

impl SectionId {
    /// All sections in declaration order.
    pub const DECLARED: [SectionId; 5] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }

    /// Position within the declared order.
    pub fn index(self) -> usize {
        Self::DECLARED
            .iter()
            .position(|candidate| *candidate == self)
            .unwrap_or(0)
    }

    /// Map digit keys `1..=7` to the first seven declared sections.
    /// Out-of-range digits yield `None`.
    pub fn from_digit(digit: u32) -> Option<Self> {
        if !(1..=DIGIT_SHORTCUTS).contains(&digit) {
            return None;
        }
        Self::DECLARED.get(digit as usize - 1).copied()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::SectionId;

    #[test]
    fn digit_mapping_follows_declaration_order() {
        assert_eq!(SectionId::from_digit(1), Some(SectionId::About));
        assert_eq!(SectionId::from_digit(3), Some(SectionId::Projects));
        assert_eq!(SectionId::from_digit(5), Some(SectionId::Contact));
    }

    #[test]
    fn out_of_range_digits_resolve_to_nothing() {
        assert_eq!(SectionId::from_digit(0), None);
        assert_eq!(SectionId::from_digit(6), None);
        assert_eq!(SectionId::from_digit(7), None);
        assert_eq!(SectionId::from_digit(9), None);
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(SectionId::from_str("projects"), Ok(SectionId::Projects));
        assert_eq!(SectionId::from_str("About"), Ok(SectionId::About));
        assert!(SectionId::from_str("blog").is_err());
    }
}

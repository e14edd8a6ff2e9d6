//! Menu entries and parsing of the numeric choice typed by the user.

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1 - sum of price × quantity over all orders
    TotalSales,
    /// 2 - order count for each customer
    OrdersPerCustomer,
    /// 3 - average price × quantity per order
    AverageOrderValue,
    /// 4 - category with the most orders
    MostPopularCategory,
    /// 5 - product count for each category
    ProductsPerCategory,
    /// 6 - raise smartphone prices by 10%
    UpdateSmartphonePrices,
    /// 7 - leave the menu, asking whether to keep changes
    Exit,
}

impl MenuChoice {
    /// Every entry in display order.
    pub const ALL: [Self; 7] = [
        Self::TotalSales,
        Self::OrdersPerCustomer,
        Self::AverageOrderValue,
        Self::MostPopularCategory,
        Self::ProductsPerCategory,
        Self::UpdateSmartphonePrices,
        Self::Exit,
    ];

    /// Number the user types to select this entry.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::TotalSales => 1,
            Self::OrdersPerCustomer => 2,
            Self::AverageOrderValue => 3,
            Self::MostPopularCategory => 4,
            Self::ProductsPerCategory => 5,
            Self::UpdateSmartphonePrices => 6,
            Self::Exit => 7,
        }
    }

    /// Text shown next to the number.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TotalSales => "Total sales",
            Self::OrdersPerCustomer => "Orders per customer",
            Self::AverageOrderValue => "Average order value",
            Self::MostPopularCategory => "Most popular category",
            Self::ProductsPerCategory => "Products per category",
            Self::UpdateSmartphonePrices => "Update smartphone prices (+10%)",
            Self::Exit => "Exit",
        }
    }

    /// Parses a line of user input. Surrounding whitespace is ignored; anything other
    /// than a listed number yields `None`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let number: u8 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|choice| choice.number() == number)
    }
}

/// Whether an answer to the save prompt means "commit".
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_number() {
        for (index, choice) in MenuChoice::ALL.into_iter().enumerate() {
            assert_eq!(MenuChoice::parse(&(index + 1).to_string()), Some(choice));
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(MenuChoice::parse(" 7\n"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("\t1 "), Some(MenuChoice::TotalSales));
    }

    #[test]
    fn test_parse_rejects_unknown_input() {
        for input in ["", "0", "8", "-1", "one", "1.0", "256"] {
            assert_eq!(MenuChoice::parse(input), None, "input {input:?}");
        }
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative(" YES\n"));
        assert!(is_affirmative("y"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("yess"));
    }
}

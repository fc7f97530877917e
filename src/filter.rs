// Derived-view selection and sort orders

use std::fmt;
use std::str::FromStr;

/// Which slice of the collection a view shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewFilter {
    #[default]
    All,
    /// Not yet completed
    Pending,
    Completed,
    /// Open tasks whose due date has passed
    Overdue,
}

/// In-place orderings for the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first by creation time
    Date,
    /// High before medium before low; equal ranks keep their order
    Priority,
    /// Soonest due first; tasks without a due date sort last
    DueDate,
    /// Case-insensitive by task text
    Alphabetical,
}

impl fmt::Display for ViewFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewFilter::All => write!(f, "all"),
            ViewFilter::Pending => write!(f, "pending"),
            ViewFilter::Completed => write!(f, "completed"),
            ViewFilter::Overdue => write!(f, "overdue"),
        }
    }
}

impl FromStr for ViewFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(ViewFilter::All),
            "pending" => Ok(ViewFilter::Pending),
            "completed" => Ok(ViewFilter::Completed),
            "overdue" => Ok(ViewFilter::Overdue),
            other => Err(format!(
                "unknown filter: {other} (expected all, pending, completed or overdue)"
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Date => write!(f, "date"),
            SortKey::Priority => write!(f, "priority"),
            SortKey::DueDate => write!(f, "due-date"),
            SortKey::Alphabetical => write!(f, "alphabetical"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "priority" => Ok(SortKey::Priority),
            "due-date" | "duedate" => Ok(SortKey::DueDate),
            "alphabetical" => Ok(SortKey::Alphabetical),
            other => Err(format!(
                "unknown sort key: {other} (expected date, priority, due-date or alphabetical)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_filter_parse() {
        assert_eq!("all".parse::<ViewFilter>().unwrap(), ViewFilter::All);
        assert_eq!("Overdue".parse::<ViewFilter>().unwrap(), ViewFilter::Overdue);
        assert!("done".parse::<ViewFilter>().is_err());
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("priority".parse::<SortKey>().unwrap(), SortKey::Priority);
        assert_eq!("due-date".parse::<SortKey>().unwrap(), SortKey::DueDate);
        assert_eq!("dueDate".parse::<SortKey>().unwrap(), SortKey::DueDate);
        assert!("size".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for filter in [
            ViewFilter::All,
            ViewFilter::Pending,
            ViewFilter::Completed,
            ViewFilter::Overdue,
        ] {
            assert_eq!(filter.to_string().parse::<ViewFilter>().unwrap(), filter);
        }
        for key in [
            SortKey::Date,
            SortKey::Priority,
            SortKey::DueDate,
            SortKey::Alphabetical,
        ] {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
    }
}

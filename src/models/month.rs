//! Month choices offered by the expense form
//!
//! Months are stored as free text; these names are only the choices the
//! form cycles through.

use chrono::{Datelike, Local};

/// Month names in calendar order
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of the current local month
pub fn current_month() -> &'static str {
    MONTHS[Local::now().month0() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_month_is_a_choice() {
        assert!(MONTHS.contains(&current_month()));
    }
}

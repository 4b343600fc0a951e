/// List helpers shared by the catalog pages (sorting, header indicators).
use std::cmp::Ordering;

/// Trait for row types that support column sorting
pub trait Sortable {
    /// Compares two rows by the given column field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list in place by the given field
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS class for a column's sort indicator span
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: String,
        count: i64,
    }

    impl Row {
        fn new(name: &str, count: i64) -> Self {
            Self {
                name: name.to_string(),
                count,
            }
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "count" => self.count.cmp(&other.count),
                _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            }
        }
    }

    #[test]
    fn test_sort_list_ascending_and_descending() {
        let mut rows = vec![Row::new("banana", 2), Row::new("Apple", 9), Row::new("cherry", 5)];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0].name, "Apple");
        assert_eq!(rows[2].name, "cherry");

        sort_list(&mut rows, "count", false);
        assert_eq!(rows[0].count, 9);
        assert_eq!(rows[2].count, 2);
    }

    #[test]
    fn test_sort_indicator_marks_the_active_column() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "count", true), " ⇅");
    }

    #[test]
    fn test_sort_class_marks_the_active_column() {
        assert_eq!(
            get_sort_class("name", "name"),
            "table__sort-indicator table__sort-indicator--active"
        );
        assert_eq!(get_sort_class("name", "count"), "table__sort-indicator");
    }
}

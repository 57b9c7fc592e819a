use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn runs(text: &str) -> impl Iterator<Item = Run<'_>> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let numeric = first.is_ascii_digit();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != numeric)
            .map_or(rest.len(), |(idx, _)| idx);
        let (head, tail) = rest.split_at(end);
        rest = tail;
        Some(if numeric {
            Run::Digits(head)
        } else {
            Run::Text(head)
        })
    })
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn compare_run(a: Run<'_>, b: Run<'_>) -> Ordering {
    match (a, b) {
        (Run::Digits(a), Run::Digits(b)) => compare_digits(a, b),
        (Run::Text(a), Run::Text(b)) => compare_text(a, b),
        (Run::Digits(_), Run::Text(_)) => Ordering::Less,
        (Run::Text(_), Run::Digits(_)) => Ordering::Greater,
    }
}

/// Natural string order: digit runs compare by value, text runs without case.
/// Names equal under those rules fall back to plain comparison, so the order
/// is total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = runs(a);
    let mut right = runs(b);
    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) => match compare_run(l, r) {
                Ordering::Equal => {}
                other => return other,
            },
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return a.cmp(b),
        }
    }
}

/// Stable natural-order sort by the string `key` yields.
pub fn natural_sort_by_key<T>(items: &mut [T], key: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| natural_cmp(key(a), key(b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut out = names.iter().map(ToString::to_string).collect::<Vec<_>>();
        natural_sort_by_key(&mut out, String::as_str);
        out
    }

    #[test]
    fn numeric_runs_compare_by_value() {
        assert_eq!(
            sorted(&["Elm 10", "Elm 9", "Elm 1", "Elm 100"]),
            vec!["Elm 1", "Elm 9", "Elm 10", "Elm 100"]
        );
    }

    #[test]
    fn text_runs_ignore_case() {
        assert_eq!(
            sorted(&["banana", "Apple", "cherry"]),
            vec!["Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn leading_zeros_tie_break_on_plain_order() {
        assert_eq!(natural_cmp("v007", "v7"), "v007".cmp("v7"));
        assert_ne!(natural_cmp("v007", "v7"), Ordering::Equal);
    }

    #[test]
    fn digits_order_before_text_and_prefix_orders_first() {
        assert_eq!(natural_cmp("2fast", "fast"), Ordering::Less);
        assert_eq!(natural_cmp("Elm", "Elm Conf"), Ordering::Less);
    }

    #[test]
    fn long_numbers_do_not_overflow() {
        assert_eq!(
            natural_cmp("x99999999999999999999999", "x100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn sort_is_idempotent() {
        let once = sorted(&["a10", "A2", "a2", "b", "a1b", "a1a", ""]);
        let refs = once.iter().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(sorted(&refs), once);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut items = vec![("same", 1), ("other", 2), ("same", 3), ("same", 4)];
        natural_sort_by_key(&mut items, |item| item.0);
        assert_eq!(
            items,
            vec![("other", 2), ("same", 1), ("same", 3), ("same", 4)]
        );
    }
}

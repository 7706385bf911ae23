//! Поиск и сортировка строк таблицы без обращения к DOM.
//!
//! DOM-обвязка живёт в [`crate::shared::table_utils`]; здесь только чистые
//! функции над текстом ячеек, чтобы их можно было тестировать нативно.

use crate::shared::number_parse::parse_float_prefix;
use std::cmp::Ordering;

/// Case-insensitive substring match. An empty term matches every row.
pub fn row_matches(row_text: &str, term: &str) -> bool {
    row_text.to_lowercase().contains(&term.to_lowercase())
}

/// Сравнение двух ячеек.
///
/// Если обе ячейки начинаются с числа, сравниваются числа; иначе строки без
/// учёта регистра (при равенстве с учётом).
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    let a = a.trim();
    let b = b.trim();

    if let (Some(x), Some(y)) = (parse_float_prefix(a), parse_float_prefix(b)) {
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }

    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Индексы строк в порядке возрастания по колонке. Сортировка стабильная.
///
/// На смешанных колонках [`compare_cells`] не задаёт полного порядка
/// (`"0.5" < ".9" < "/" < "0.5"`), а `slice::sort_by` на таком компараторе
/// может паниковать. Сортировка слиянием ниже не паникует ни на каком.
pub fn sorted_order<T: AsRef<str>>(column: &[T]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..column.len()).collect();
    let mut buffer = order.clone();
    let len = order.len();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(column, &order[start..mid], &order[mid..end], &mut buffer[start..end]);
            start = end;
        }
        std::mem::swap(&mut order, &mut buffer);
        width *= 2;
    }
    order
}

fn merge<T: AsRef<str>>(column: &[T], left: &[usize], right: &[usize], out: &mut [usize]) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        // Take from the left run unless the right one is strictly smaller.
        let take_left = match (left.get(i), right.get(j)) {
            (Some(&l), Some(&r)) => {
                compare_cells(column[r].as_ref(), column[l].as_ref()) != Ordering::Less
            }
            (Some(_), None) => true,
            _ => false,
        };
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted<'a>(column: &[&'a str]) -> Vec<&'a str> {
        sorted_order(column).into_iter().map(|i| column[i]).collect()
    }

    fn visible(texts: &[&str], term: &str) -> Vec<bool> {
        texts.iter().map(|t| row_matches(t, term)).collect()
    }

    #[test]
    fn test_empty_term_shows_all_rows() {
        let texts = ["Mesa 10", "Silla 2", "Lámpara 33"];
        assert_eq!(visible(&texts, ""), vec![true, true, true]);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_idempotent() {
        let texts = ["Mesa roble", "SILLA pino", "Mesa pino"];
        let first = visible(&texts, "PINO");
        assert_eq!(first, vec![false, true, true]);
        assert_eq!(visible(&texts, "PINO"), first);
        assert_eq!(visible(&texts, "mesa"), vec![true, false, true]);
    }

    #[test]
    fn test_numeric_column_sorts_numerically() {
        assert_eq!(sorted_order(&["10", "2", "33"]), vec![1, 0, 2]);
        assert_eq!(sorted(&["10", "2", "33"]), vec!["2", "10", "33"]);
    }

    #[test]
    fn test_mixed_column_falls_back_to_text() {
        assert_eq!(sorted(&["b", "10", "a"]), vec!["10", "a", "b"]);
    }

    #[test]
    fn test_text_compare_ignores_case_and_whitespace() {
        assert_eq!(compare_cells("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_cells("  2 ", "10"), Ordering::Less);
        assert_eq!(compare_cells("1.50", "1.5"), Ordering::Equal);
    }

    #[test]
    fn test_sort_is_stable_and_treats_missing_cells_as_empty() {
        // Rows x, y (no cell), z, w.
        let column = ["5", "", "5", "1"];
        assert_eq!(sorted_order(&column), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_sorting_twice_keeps_ascending_order() {
        let once = sorted(&["3", "1", "2"]);
        assert_eq!(sorted(&once), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_inconsistent_mixed_column_still_sorts() {
        assert_eq!(compare_cells("0.5", ".9"), Ordering::Less);
        assert_eq!(compare_cells(".9", "/"), Ordering::Less);
        assert_eq!(compare_cells("/", "0.5"), Ordering::Less);

        let pool = ["+3", "-5", ",", "0.5", ".9", "/", "-", "abc", "12", "Zeta", ""];
        for len in [31, 100, 257, 1000] {
            let column: Vec<&str> = (0..len).map(|i| pool[(i * 7 + i / 3) % pool.len()]).collect();
            let mut order = sorted_order(&column);
            assert_eq!(order.len(), len);
            order.sort_unstable();
            assert_eq!(order, (0..len).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_sorted_order_small_inputs() {
        assert!(sorted_order::<&str>(&[]).is_empty());
        assert_eq!(sorted_order(&["x"]), vec![0]);
    }
}

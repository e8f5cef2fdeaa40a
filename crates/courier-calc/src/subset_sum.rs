//! 最大子集和搜尋

use rust_decimal::Decimal;

/// 帶原始索引的重量項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedItem {
    /// 原始包裹索引
    pub index: usize,
    pub weight: Decimal,
}

impl WeightedItem {
    pub fn new(index: usize, weight: Decimal) -> Self {
        Self { index, weight }
    }
}

/// 項目重量總和（僅用於總和不超過目標的選取結果）
pub(crate) fn subset_weight(items: &[WeightedItem]) -> Decimal {
    items.iter().map(|item| item.weight).sum()
}

/// 找出總和不超過 `target` 的最大子集
///
/// 依項目順序做深度優先窮舉，部分和超過目標即剪枝。只有嚴格更大的總和才會取代目前最佳解，
/// 因此同總和時以最先找到的組合（索引較小者優先）為準。
///
/// 以游標與堆疊迭代實作，不使用遞迴。最壞情況為指數時間，適用於數十個以內的項目。
/// 部分和溢位視同超過目標。
pub fn max_subset_sum(items: &[WeightedItem], target: Decimal) -> Vec<WeightedItem> {
    let mut best_sum = Decimal::ZERO;
    let mut best: Vec<usize> = Vec::new();

    // 目前組合（存放 items 內的位置）
    let mut chosen: Vec<usize> = Vec::with_capacity(items.len());
    let mut sum = Decimal::ZERO;
    let mut cursor = 0;

    loop {
        if let Some(item) = items.get(cursor) {
            let fits = sum.checked_add(item.weight).filter(|c| *c <= target);
            if let Some(candidate) = fits {
                chosen.push(cursor);
                sum = candidate;
                if sum > best_sum {
                    best_sum = sum;
                    best.clone_from(&chosen);
                }
            }
            cursor += 1;
            continue;
        }

        // 回溯：移除最後一個項目，改試下一個位置
        match chosen.pop() {
            Some(last) => {
                if let Some(item) = items.get(last) {
                    sum -= item.weight;
                }
                cursor = last + 1;
            }
            None => break,
        }
    }

    best.into_iter().filter_map(|pos| items.get(pos).copied()).collect()
}

/// 貪婪近似：由重到輕依序放入，放得下就取
///
/// 結果依原始順序回傳。所有未選項目都已嘗試過，因此結果仍是極大（無法再加入任何項目）。
pub fn greedy_subset_sum(items: &[WeightedItem], target: Decimal) -> Vec<WeightedItem> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    // 穩定排序：同重量保持原始順序
    order.sort_by(|&a, &b| items[b].weight.cmp(&items[a].weight));

    let mut sum = Decimal::ZERO;
    let mut picked = vec![false; items.len()];
    for pos in order {
        if let Some(candidate) = sum.checked_add(items[pos].weight).filter(|c| *c <= target) {
            sum = candidate;
            picked[pos] = true;
        }
    }

    items
        .iter()
        .zip(picked)
        .filter_map(|(item, keep)| keep.then_some(*item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn items(weights: &[i64]) -> Vec<WeightedItem> {
        weights
            .iter()
            .enumerate()
            .map(|(index, &w)| WeightedItem::new(index, Decimal::from(w)))
            .collect()
    }

    fn indices(items: &[WeightedItem]) -> Vec<usize> {
        items.iter().map(|item| item.index).collect()
    }

    #[test]
    fn test_documented_example() {
        let result = max_subset_sum(&items(&[50, 75, 185, 110, 155]), Decimal::from(200));

        // {75, 110} 與 {185} 同為 185，先找到的 {75, 110} 勝出
        assert_eq!(indices(&result), vec![1, 3]);
        assert_eq!(subset_weight(&result), Decimal::from(185));
    }

    #[test]
    fn test_exact_fit() {
        let result = max_subset_sum(&items(&[30, 40, 60, 70]), Decimal::from(100));

        assert_eq!(subset_weight(&result), Decimal::from(100));
        assert_eq!(indices(&result), vec![0, 3]);
    }

    #[test]
    fn test_keeps_original_indices() {
        let residual = vec![
            WeightedItem::new(0, Decimal::from(50)),
            WeightedItem::new(2, Decimal::from(175)),
            WeightedItem::new(4, Decimal::from(155)),
        ];

        let result = max_subset_sum(&residual, Decimal::from(200));
        assert_eq!(indices(&result), vec![2]);
    }

    #[test]
    fn test_nothing_fits() {
        let result = max_subset_sum(&items(&[250, 300]), Decimal::from(200));
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(max_subset_sum(&[], Decimal::from(200)).is_empty());
        assert!(greedy_subset_sum(&[], Decimal::from(200)).is_empty());
    }

    #[test]
    fn test_overflowing_sum_does_not_fit() {
        let heavy = Decimal::from_str("50000000000000000000000000000").unwrap();
        let input = vec![WeightedItem::new(0, heavy), WeightedItem::new(1, heavy)];

        assert_eq!(indices(&max_subset_sum(&input, Decimal::MAX)), vec![0]);
        assert_eq!(indices(&greedy_subset_sum(&input, Decimal::MAX)), vec![0]);
    }

    #[test]
    fn test_greedy_heaviest_first() {
        let result = greedy_subset_sum(&items(&[50, 75, 185, 110, 155]), Decimal::from(200));

        // 185 先放入，剩餘 15 放不下其他項目
        assert_eq!(indices(&result), vec![2]);
    }

    #[test]
    fn test_greedy_fills_remaining_capacity() {
        let result = greedy_subset_sum(&items(&[10, 90, 60, 30]), Decimal::from(100));

        // 90 → 10；結果依原始順序
        assert_eq!(indices(&result), vec![0, 1]);
        assert_eq!(subset_weight(&result), Decimal::from(100));
    }
}

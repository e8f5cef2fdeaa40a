//! 包裹分組（依載重上限組成配送批次）

use courier_core::{Delivery, DeliveryError, Package, PlanningConfig};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::subset_sum::{greedy_subset_sum, max_subset_sum, subset_weight, WeightedItem};

/// 分組結果：總重 → 該總重下的各組（依找到順序）
#[derive(Debug, Clone, Default)]
pub struct CapacityGroups {
    by_sum: BTreeMap<Decimal, Vec<Vec<WeightedItem>>>,

    /// 是否有任何一輪使用了貪婪近似
    pub approximate: bool,
}

impl CapacityGroups {
    fn record(&mut self, group: Vec<WeightedItem>) {
        self.by_sum
            .entry(subset_weight(&group))
            .or_default()
            .push(group);
    }

    /// 取得某總重下的所有組
    pub fn get(&self, sum: Decimal) -> Option<&[Vec<WeightedItem>]> {
        self.by_sum.get(&sum).map(Vec::as_slice)
    }

    /// 所有組（依總重遞增，同總重依找到順序）
    pub fn groups(&self) -> impl Iterator<Item = &Vec<WeightedItem>> {
        self.by_sum.values().flatten()
    }

    /// 組數
    pub fn len(&self) -> usize {
        self.by_sum.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_sum.is_empty()
    }
}

/// 反覆取出最大子集和，直到所有項目都分配完畢
///
/// 每一輪只在尚未分組的項目中搜尋，剩餘項目嚴格遞減，最多 `items.len()` 輪。
/// 剩餘項目數超過 `exhaustive_limit` 時改用貪婪近似。
///
/// 呼叫前須確保每個項目重量都不超過 `max_weight`。
pub fn group_to_capacity(
    items: &[WeightedItem],
    max_weight: Decimal,
    exhaustive_limit: usize,
) -> CapacityGroups {
    let mut groups = CapacityGroups::default();
    let mut remaining: Vec<WeightedItem> = items.to_vec();

    while !remaining.is_empty() {
        let selected = if remaining.len() > exhaustive_limit {
            if !groups.approximate {
                tracing::warn!(
                    "剩餘包裹 {} 筆，超過窮舉上限 {}，改用貪婪近似分組",
                    remaining.len(),
                    exhaustive_limit
                );
            }
            groups.approximate = true;
            greedy_subset_sum(&remaining, max_weight)
        } else {
            max_subset_sum(&remaining, max_weight)
        };

        // 找不到正重量子集時，剩下的只有零重量項目，合成一組
        let selected = if selected.is_empty() {
            std::mem::take(&mut remaining)
        } else {
            remaining.retain(|item| !selected.iter().any(|s| s.index == item.index));
            selected
        };

        tracing::debug!(
            "分組: {:?}（總重 {}）",
            selected.iter().map(|item| item.index).collect::<Vec<_>>(),
            subset_weight(&selected)
        );
        groups.record(selected);
    }

    groups
}

/// 分組引擎
pub struct GroupingEngine;

impl GroupingEngine {
    /// 將包裹組成配送批次，依優先順序回傳
    ///
    /// 排序：總重遞減；總重相同時，批次內最遠距離遞減。
    pub fn plan(
        packages: &[Package],
        max_weight: Decimal,
        config: &PlanningConfig,
    ) -> courier_core::Result<(Vec<Delivery>, bool)> {
        if packages.is_empty() {
            return Err(DeliveryError::IncompleteSetup);
        }

        if let Some(pkg) = packages.iter().find(|pkg| pkg.weight > max_weight) {
            return Err(DeliveryError::PackageOverweight {
                package: pkg.name.clone(),
                weight: pkg.weight,
                max_weight,
            });
        }

        let items: Vec<WeightedItem> = packages
            .iter()
            .enumerate()
            .map(|(index, pkg)| WeightedItem::new(index, pkg.weight))
            .collect();

        let groups = group_to_capacity(&items, max_weight, config.exhaustive_search_limit);

        let mut deliveries = groups
            .groups()
            .map(|group| {
                let members = group
                    .iter()
                    .filter_map(|item| packages.get(item.index).cloned())
                    .collect();
                Delivery::from_packages(members, &config.delivery_id_separator)
            })
            .collect::<courier_core::Result<Vec<Delivery>>>()?;

        // 穩定排序，同總重同距離時保留找到順序
        deliveries.sort_by(|a, b| {
            b.sum_weight
                .cmp(&a.sum_weight)
                .then_with(|| b.max_distance.cmp(&a.max_distance))
        });

        tracing::debug!("配送批次數量: {}", deliveries.len());
        Ok((deliveries, groups.approximate))
    }
}

/// 規劃配送批次
pub fn plan_delivery(
    packages: &[Package],
    max_weight: Decimal,
    config: &PlanningConfig,
) -> courier_core::Result<Vec<Delivery>> {
    GroupingEngine::plan(packages, max_weight, config).map(|(deliveries, _)| deliveries)
}

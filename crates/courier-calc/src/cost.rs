//! 配送費用計算

use courier_core::{
    CostEstimate, CostSetup, DeliveryError, DiscountCatalog, Package, PlanningConfig,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::discount::DiscountResolver;

/// 單一包裹的費用明細（皆為整數，無條件捨去）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// 原始費用
    pub original: Decimal,

    /// 折扣後費用
    pub discounted: Decimal,

    /// 折扣金額
    pub discount_value: Decimal,
}

/// 費用計算器
///
/// 費用 = 基本費用 + 距離 × 距離費率 + 重量 × 重量費率，再扣除折扣。
#[derive(Debug, Clone)]
pub struct CostCalculator {
    base_delivery_cost: Decimal,
    distance_rate: Decimal,
    weight_rate: Decimal,
    resolver: DiscountResolver,
}

impl CostCalculator {
    /// 創建新的費用計算器（使用預設費率）
    pub fn new(base_delivery_cost: Decimal, catalog: DiscountCatalog) -> Self {
        Self::with_config(base_delivery_cost, catalog, &PlanningConfig::default())
    }

    /// 依配置創建費用計算器
    pub fn with_config(
        base_delivery_cost: Decimal,
        catalog: DiscountCatalog,
        config: &PlanningConfig,
    ) -> Self {
        Self {
            base_delivery_cost,
            distance_rate: config.distance_rate,
            weight_rate: config.weight_rate,
            resolver: DiscountResolver::new(catalog),
        }
    }

    /// 計算單一包裹費用
    ///
    /// 折扣金額取整後不超過原始費用，確保折扣後費用 = 原始費用 - 折扣金額，且不為負。
    pub fn cost(&self, package: &Package) -> courier_core::Result<CostBreakdown> {
        let delivery_cost = self.delivery_cost(package)?;

        let resolved = self.resolver.resolve(&package.discount_code, &package.name)?;
        let discount_amount = match resolved {
            Some(record) => DiscountResolver::discount_amount(
                record,
                package.distance,
                package.weight,
                delivery_cost,
            ),
            None => Decimal::ZERO,
        };

        let original = delivery_cost.floor();
        let discount_value = discount_amount.floor().min(original).max(Decimal::ZERO);

        Ok(CostBreakdown {
            original,
            discounted: original - discount_value,
            discount_value,
        })
    }

    /// 計算多個包裹的折扣後總費用
    pub fn total_cost(&self, packages: &[Package]) -> courier_core::Result<Decimal> {
        packages.iter().try_fold(Decimal::ZERO, |total, pkg| {
            let discounted = self.cost(pkg)?.discounted;
            total
                .checked_add(discounted)
                .ok_or_else(|| DeliveryError::overflow("總費用"))
        })
    }

    /// 總費用模式：逐一計價
    pub fn estimate(&self, packages: &[Package]) -> courier_core::Result<Vec<CostEstimate>> {
        packages
            .iter()
            .map(|pkg| {
                let breakdown = self.cost(pkg)?;
                Ok(CostEstimate {
                    name: pkg.name.clone(),
                    discount: breakdown.discount_value,
                    cost: breakdown.discounted,
                })
            })
            .collect()
    }

    /// 未折扣的配送費用（未取整）
    fn delivery_cost(&self, package: &Package) -> courier_core::Result<Decimal> {
        let distance_charge = package.distance.checked_mul(self.distance_rate);
        let weight_charge = package.weight.checked_mul(self.weight_rate);

        distance_charge
            .zip(weight_charge)
            .and_then(|(d, w)| self.base_delivery_cost.checked_add(d)?.checked_add(w))
            .ok_or_else(|| DeliveryError::overflow(format!("包裹 {} 配送費用", package.name)))
    }

    pub fn base_delivery_cost(&self) -> Decimal {
        self.base_delivery_cost
    }

    /// 取得折扣解析器引用
    pub fn resolver(&self) -> &DiscountResolver {
        &self.resolver
    }
}

/// 總費用模式入口
pub fn estimate_costs(
    setup: &CostSetup,
    catalog: DiscountCatalog,
    config: &PlanningConfig,
) -> courier_core::Result<Vec<CostEstimate>> {
    setup.validate()?;
    config.validate()?;

    tracing::info!("開始計價：包裹 {} 筆", setup.packages.len());
    let calculator = CostCalculator::with_config(setup.base_delivery_cost, catalog, config);
    calculator.estimate(&setup.packages)
}

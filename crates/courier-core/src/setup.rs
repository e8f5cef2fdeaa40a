//! 配送設定模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{DeliveryError, Package, Result};

/// 總費用模式的設定（不含車隊）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSetup {
    /// 基本配送費用
    pub base_delivery_cost: Decimal,

    pub packages: Vec<Package>,
}

impl CostSetup {
    pub fn new(base_delivery_cost: Decimal, packages: Vec<Package>) -> Self {
        Self {
            base_delivery_cost,
            packages,
        }
    }

    /// 驗證基本費用與包裹資料
    pub fn validate(&self) -> Result<()> {
        if self.base_delivery_cost < Decimal::ZERO {
            return Err(DeliveryError::Validation(
                "基本配送費用不可為負數".to_string(),
            ));
        }
        validate_packages(&self.packages)
    }
}

/// 配送時間模式的完整設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setup {
    /// 基本配送費用
    pub base_delivery_cost: Decimal,

    /// 車輛數量
    pub vehicle_count: usize,

    /// 最高車速
    pub max_speed: Decimal,

    /// 單車最大載重
    pub max_carriable_weight: Decimal,

    pub packages: Vec<Package>,
}

impl Setup {
    /// 創建新的設定
    pub fn new(
        base_delivery_cost: Decimal,
        packages: Vec<Package>,
        vehicle_count: usize,
        max_speed: Decimal,
        max_carriable_weight: Decimal,
    ) -> Self {
        Self {
            base_delivery_cost,
            vehicle_count,
            max_speed,
            max_carriable_weight,
            packages,
        }
    }

    /// 驗證設定
    ///
    /// 車輛或包裹為零不在此檢查，規劃時才以 `IncompleteSetup` 回報。
    pub fn validate(&self) -> Result<()> {
        if self.base_delivery_cost < Decimal::ZERO {
            return Err(DeliveryError::Validation(
                "基本配送費用不可為負數".to_string(),
            ));
        }
        if self.max_speed <= Decimal::ZERO {
            return Err(DeliveryError::Validation("車速必須大於 0".to_string()));
        }
        if self.max_carriable_weight < Decimal::ZERO {
            return Err(DeliveryError::Validation("最大載重不可為負數".to_string()));
        }
        validate_packages(&self.packages)
    }

    /// 依名稱查找包裹
    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|pkg| pkg.name == name)
    }
}

fn validate_packages(packages: &[Package]) -> Result<()> {
    let mut names = HashSet::new();

    for pkg in packages {
        if pkg.name.is_empty() {
            return Err(DeliveryError::Validation("包裹名稱不可為空".to_string()));
        }
        if pkg.weight < Decimal::ZERO || pkg.distance < Decimal::ZERO {
            return Err(DeliveryError::Validation(format!(
                "包裹 {} 的重量與距離不可為負數",
                pkg.name
            )));
        }
        if pkg.discount_code.is_empty() {
            return Err(DeliveryError::Validation(format!(
                "包裹 {} 缺少折扣碼（無折扣請填 NA）",
                pkg.name
            )));
        }
        if !names.insert(pkg.name.as_str()) {
            return Err(DeliveryError::Validation(format!(
                "包裹名稱重複: {}",
                pkg.name
            )));
        }
    }

    Ok(())
}

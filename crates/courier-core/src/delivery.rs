//! 配送批次模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{DeliveryError, Package, Result};

/// 配送批次（同一趟車載運的一組包裹）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    /// 批次ID（包裹名稱以分隔符串接）
    pub id: String,

    /// 總重量
    pub sum_weight: Decimal,

    /// 批次內最遠距離
    pub max_distance: Decimal,

    /// 包裹（依原始輸入順序）
    pub packages: Vec<Package>,
}

impl Delivery {
    /// 由包裹清單組成配送批次
    ///
    /// 總重溢位時回傳 `Calculation` 錯誤。
    pub fn from_packages(packages: Vec<Package>, separator: &str) -> Result<Self> {
        let id = packages
            .iter()
            .map(|pkg| pkg.name.as_str())
            .collect::<Vec<_>>()
            .join(separator);
        let sum_weight = packages
            .iter()
            .try_fold(Decimal::ZERO, |sum, pkg| sum.checked_add(pkg.weight))
            .ok_or_else(|| DeliveryError::overflow(format!("批次 {id} 總重")))?;
        let max_distance = packages
            .iter()
            .map(|pkg| pkg.distance)
            .max()
            .unwrap_or(Decimal::ZERO);

        Ok(Self {
            id,
            sum_weight,
            max_distance,
            packages,
        })
    }

    /// 包裹數量
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
